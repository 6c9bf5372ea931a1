use clap::{Parser, ValueEnum};
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

use crate::errors::AppError;
use crate::http::DEFAULT_MAX_BODY_BYTES;
use crate::store::STORAGE_PATH;

#[derive(Parser, Debug, Clone)]
#[command(name = "rusty-phonebook", version, about = "Phonebook REST service")]
pub struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, env = "HOST", default_value_t = String::from("127.0.0.1"))]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// JSON file mirroring the contact list
    #[arg(long, env = "CONTACTS_FILE", default_value = STORAGE_PATH)]
    pub data_file: PathBuf,

    /// Start with an empty list instead of importing the contacts file
    #[arg(long, env = "SKIP_IMPORT", default_value_t = false)]
    pub skip_import: bool,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Maximum accepted request body size in bytes
    #[arg(long, env = "MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Cli {
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| AppError::Config(format!("cannot resolve host '{}': {}", self.host, e)))?
            .next()
            .ok_or_else(|| AppError::Config(format!("no address found for host '{}'", self.host)))
    }
}
