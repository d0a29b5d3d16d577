use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the process-wide subscriber. `RUST_LOG` drives filtering (default
/// `info`); `LOG_FORMAT=json` switches to one JSON object per line.
pub fn init_logger(component: &str) {
    let json_output = std::env::var("LOG_FORMAT")
        .map(|value| value.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,reqwest=warn"));

    let result = if json_output {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_current_span(true).with_target(false))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .try_init()
    };

    match result {
        Ok(()) => tracing::info!(component, json_output, "logger initialized"),
        Err(error) => eprintln!("logger already initialized: {error}"),
    }
}
