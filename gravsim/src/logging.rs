//! Global logging system.

use std::{env, panic};

use backtrace::Backtrace;
use tracing::error;
use tracing_subscriber::{
    fmt::{self, time::uptime},
    prelude::*,
    EnvFilter,
    Registry,
};

/// Crate at info, everything else at warn.
const DEFAULT_FILTER: &str = "warn,gravsim=info";

/// Install a stdout `tracing` subscriber. `RUST_LOG` is appended to the default filter.
pub fn init_logging() {
    let format = fmt::format().compact().with_timer(uptime()).with_line_number(true);

    let mut filter = DEFAULT_FILTER.to_owned();
    if let Ok(env_filter) = env::var(EnvFilter::DEFAULT_ENV) {
        filter.push(',');
        filter.push_str(&env_filter);
    }

    let subscriber = Registry::default()
        .with(EnvFilter::new(filter))
        .with(fmt::layer().event_format(format));
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("unable to install log subscriber: {}", e);
        return;
    }

    // panics go through the subscriber
    panic::set_hook(Box::new(|info| {
        error!("{}", info);
        if env::var("RUST_BACKTRACE").map(|val| val == "1").unwrap_or(false) {
            error!("{:?}", Backtrace::new());
        }
    }));
}
