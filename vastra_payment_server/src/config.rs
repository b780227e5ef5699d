use std::env;

use log::*;
use razorpay_tools::RazorpayConfig;

const DEFAULT_VPG_HOST: &str = "127.0.0.1";
const DEFAULT_VPG_PORT: u16 = 8360;
const DEFAULT_VPG_DATABASE_URL: &str = "sqlite://data/vastra_store.db";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Razorpay gateway configuration, including the shared secret used for payment signature verification.
    pub razorpay: RazorpayConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_VPG_HOST.to_string(),
            port: DEFAULT_VPG_PORT,
            database_url: DEFAULT_VPG_DATABASE_URL.to_string(),
            razorpay: RazorpayConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("VPG_HOST").ok().unwrap_or_else(|| DEFAULT_VPG_HOST.into());
        let port = env::var("VPG_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for VPG_PORT. {e} Using the default, {DEFAULT_VPG_PORT}, instead."
                    );
                    DEFAULT_VPG_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_VPG_PORT);
        let database_url = env::var("VPG_DATABASE_URL").ok().unwrap_or_else(|| {
            warn!(
                "🪛️ VPG_DATABASE_URL is not set. Using the default, {DEFAULT_VPG_DATABASE_URL}. Make sure the data \
                 directory exists."
            );
            DEFAULT_VPG_DATABASE_URL.to_string()
        });
        let razorpay = RazorpayConfig::new_from_env_or_default();
        Self { host, port, database_url, razorpay }
    }
}
