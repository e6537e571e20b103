use clap::Parser;

mod cfg;
mod cli;
mod gateways;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = cli::Args::parse();
    let cfg = cfg::Cfg::from_env_or_default();

    let db_url = args.db_url.unwrap_or_else(|| cfg.db_url.clone());
    log::info!("Connecting to SQLite database '{db_url}'");
    let connections =
        ecocity_db_sqlite::Connections::init(&db_url, cfg.db_connection_pool_size)?;
    ecocity_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);

    let geo_gw = gateways::geocoding_gateway(&cfg);
    let notify_gw = gateways::notification_gateway(&cfg);

    ecocity_webserver::run(
        connections,
        args.enable_cors,
        ecocity_webserver::Cfg {
            public_url: cfg.public_url,
        },
        Box::new(geo_gw),
        Box::new(notify_gw),
    )
    .await;

    Ok(())
}
