use std::env;

const DEFAULT_DB_URL: &str = "ecocity.db";
const DB_CONNECTION_POOL_SIZE: u32 = 10;
const DEFAULT_PUBLIC_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct Cfg {
    pub db_url: String,
    pub db_connection_pool_size: u32,
    /// Base URL used in e-mail confirmation and password reset links.
    pub public_url: String,
    pub opencage_api_key: Option<String>,
    pub mail_gateway_sender_address: Option<String>,
}

impl Cfg {
    pub fn from_env_or_default() -> Self {
        let mut cfg = Self::default();
        if let Ok(db_url) = env::var("DATABASE_URL") {
            cfg.db_url = db_url;
        }
        if let Ok(size) = env::var("DATABASE_CONNECTION_POOL_SIZE") {
            match size.parse() {
                Ok(size) => {
                    cfg.db_connection_pool_size = size;
                }
                Err(_) => {
                    log::warn!("Invalid DATABASE_CONNECTION_POOL_SIZE '{size}'");
                }
            }
        }
        if let Ok(url) = env::var("PUBLIC_URL") {
            cfg.public_url = url;
        }
        match env::var("OPENCAGE_API_KEY") {
            Ok(key) => {
                cfg.opencage_api_key = Some(key);
            }
            Err(_) => {
                log::warn!("No OpenCage API key found");
            }
        }
        if let Ok(addr) = env::var("MAIL_GATEWAY_SENDER_ADDRESS") {
            cfg.mail_gateway_sender_address = Some(addr);
        }
        cfg
    }
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            db_url: DEFAULT_DB_URL.to_string(),
            db_connection_pool_size: DB_CONNECTION_POOL_SIZE,
            public_url: DEFAULT_PUBLIC_URL.to_string(),
            opencage_api_key: None,
            mail_gateway_sender_address: None,
        }
    }
}
