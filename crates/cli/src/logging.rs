use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "PHOTO_STAMP_LOG";

static INIT: OnceLock<()> = OnceLock::new();

/// Installs the stderr subscriber, filtered by `PHOTO_STAMP_LOG` (default
/// `warn`). Stdout is left to the command's own output.
///
/// Safe to call more than once; only the first call has an effect.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
