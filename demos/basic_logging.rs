//! Sends one message per level, then a captured error.
//!
//! LOG_API_URL="https://logging.example.com/logs" LOG_API_KEY="your-api-key" \
//!     cargo run --example basic_logging

use remote_log_sender::init::init_diagnostics;
use remote_log_sender::{send_critical, send_error, send_info, send_warning, CapturedError};

fn main() {
    if let Err(e) = init_diagnostics() {
        eprintln!("diagnostics unavailable: {}", e);
    }

    send_info("Starting price update pipeline");
    send_warning("Fallback to cached catalog because live source was slow");
    send_error("Failed to update price for SKU-12345");

    if let Err(e) = "twelve".parse::<u32>() {
        send_error(CapturedError::new(&e));
    }

    send_critical("Terminating pipeline after repeated failures");
}
