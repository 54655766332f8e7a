//! Logger module
//!
//! Provides logging utilities for the HTTP server including:
//! - Server lifecycle logging
//! - The per-request append-only log file
//! - Error and warning logging

mod format;
pub mod writer;

pub use format::RequestLogEntry;

use crate::config::Config;
use std::net::SocketAddr;

/// Initialize the request log writer with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(&config.logging.request_log_file)
}

/// Append one line to the request log.
///
/// Falls back to stdout when the writer was never initialized (unit tests).
pub fn log_request(entry: &RequestLogEntry) {
    match writer::get() {
        Some(w) => w.append(&entry.format()),
        None => println!("{}", entry.format()),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("CRUD server started successfully");
    println!("Listening on: http://{addr}");
    println!("Request log: {}", config.logging.request_log_file);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
