use anyhow::Result;
use tracing_subscriber::EnvFilter;
use tudu::commands::Cli;
use tudu::libs::messages::macros::is_debug_mode;

fn main() -> Result<()> {
    // In debug mode all msg_* output goes through tracing instead of the
    // console, so a subscriber has to be installed first.
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();
    }

    Cli::menu()
}
