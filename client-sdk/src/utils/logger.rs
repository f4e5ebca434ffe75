use std::sync::OnceLock;

use env_logger::Env;

static LOGGER: OnceLock<()> = OnceLock::new();

/// Installs the global logger once; repeated calls are no-ops so every test
/// can call this without coordinating.
pub fn init_logger() {
    LOGGER.get_or_init(|| {
        env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    });
}
