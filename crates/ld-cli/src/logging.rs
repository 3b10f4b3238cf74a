//! Log output setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "ld_cli=debug,ld_core=debug,ld_looker=debug,ld_report=debug";

/// Install a stderr subscriber. `RUST_LOG` wins over `--verbose`. Records
/// emitted through the `log` facade are captured as well.
pub(crate) fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { VERBOSE_FILTER } else { "warn" })
    });

    // A second init (tests) is harmless.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
