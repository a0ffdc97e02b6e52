use std::io;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for diagnostic output on stderr.
///
/// `directives` (from `--log` or `TWIG_LOG`) wins over `RUST_LOG`. `verbose` defaults the filter to `debug`.
/// Safe to call multiple times; only the first call has an effect.
pub fn init_tracing(directives: Option<&str>, verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = match directives {
            Some(directives) => EnvFilter::new(directives),
            None if verbose => EnvFilter::new("debug"),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(io::stderr),
            )
            .with(filter)
            .init();
    });
}
