//! Command-line and environment configuration for the server.

use std::net::SocketAddr;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use slotbook_engine::validator::{MAX_DURATION_MINUTES, MIN_DURATION_MINUTES};
use slotbook_engine::WindowLimits;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "slotbook",
    version,
    about = "Book, query and release appointment windows over HTTP"
)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Shortest bookable appointment, in minutes
    #[arg(long, env = "SLOTBOOK_MIN_DURATION_MINUTES", default_value_t = MIN_DURATION_MINUTES)]
    pub min_duration_minutes: i64,

    /// Longest bookable appointment, in minutes (420 reproduces the legacy 7-hour ceiling)
    #[arg(long, env = "SLOTBOOK_MAX_DURATION_MINUTES", default_value_t = MAX_DURATION_MINUTES)]
    pub max_duration_minutes: i64,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address: {}:{}", self.host, self.port))
    }

    pub fn limits(&self) -> anyhow::Result<WindowLimits> {
        Ok(WindowLimits::new(
            self.min_duration_minutes,
            self.max_duration_minutes,
        )?)
    }
}

/// Install the global `tracing` subscriber. The level comes from `RUST_LOG`,
/// defaulting to `info`.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);

    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
