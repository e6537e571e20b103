use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "ecocity", version, about = "EcoCity community server")]
pub struct Args {
    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    pub db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    pub enable_cors: bool,
}
