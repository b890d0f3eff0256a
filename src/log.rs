// src/log.rs
use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr subscriber. `RUST_LOG` wins over `verbosity` when set.
/// Safe to call more than once; later calls are ignored.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,{}={level}", env!("CARGO_CRATE_NAME"))));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::uptime())
        .with_target(false)
        .try_init();
}
