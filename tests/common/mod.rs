//! Integration test common infrastructure.
//!
//! Provides a recording server-effect hook and tracing setup shared by the
//! integration tests.

pub mod server;

#[allow(unused_imports)]
pub use server::RecordingServer;

use std::sync::Once;

use ircd_core::Reply;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once per test binary.
///
/// Filter with `RUST_LOG`, e.g. `RUST_LOG=ircd_core=trace`.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Drain every reply queued so far, rendered to wire form.
#[allow(dead_code)]
pub fn drain(rx: &mut mpsc::UnboundedReceiver<Reply>) -> Vec<String> {
    let mut lines = Vec::new();
    while let Ok(reply) = rx.try_recv() {
        lines.push(reply.to_string());
    }
    lines
}
