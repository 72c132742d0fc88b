//! tracing setup shared by i-gore binaries.
//!
//! `RUST_LOG` wins when set; otherwise `default_directive` (e.g. `"warn"`)
//! is used. Output goes to stderr so it never mixes with anything a tool
//! prints on stdout.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
