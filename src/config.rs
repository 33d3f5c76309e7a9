use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[clap(name = "school-connect", about = "REST backend connecting schools, volunteers and students")]
pub struct Config {
    #[clap(long, env, default_value = "127.0.0.1")]
    pub host: String,

    #[clap(long, env, default_value_t = 5000)]
    pub port: u16,

    /// SQLite file path, or `:memory:`.
    #[clap(long, env, default_value = "school_connect.db")]
    pub database_url: String,

    #[clap(long, env, default_value_t = 8)]
    pub db_pool_size: u32,

    #[clap(long, env, default_value = "info")]
    pub log_level: String,

    /// Built single-page client to serve alongside the API.
    #[clap(long, env)]
    pub static_dir: Option<PathBuf>,
}

impl Config {
    /// Reads `.env` if present, then flags and environment.
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        Config::parse()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
