use crate::logging::consts::DEFAULT_LOG_FILTER;
use clap::Parser;
use std::net::SocketAddr;
#[cfg(test)]
pub mod tests;

#[derive(Debug, Parser)]
#[command(about = "Computes the bounding box and centroid of geographical points.")]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    /// Origins allowed to call the API from a browser.
    #[arg(long, value_delimiter = ',')]
    #[arg(default_values = ["http://127.0.0.1:3000", "http://localhost:3000"])]
    pub allowed_origins: Vec<String>,
    #[arg(long)]
    #[arg(default_value_t = 1_000_000)]
    pub max_body_bytes: usize,
    /// Used when `RUST_LOG` is not set.
    #[arg(long)]
    #[arg(default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}
