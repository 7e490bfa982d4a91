use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::environment::Environment;

/// Install the global `tracing` subscriber, writing to standard error.
///
/// The filter comes from `RUST_LOG` and defaults to `info`; ANSI colors
/// follow the terminal state of stderr unless forced either way.
pub fn setup_stderr_logging(env: &impl Environment, colors: Option<bool>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_ansi(colors.unwrap_or_else(|| env.atty_stderr()))
                .with_writer(std::io::stderr),
        )
        .init();
}
