//! Log output for binaries and examples embedding this crate.

use tracing::Level;

/// Installs a fmt subscriber at `INFO`. Safe to call more than once; only the
/// first call has an effect.
pub fn init() {
    init_with_level(Level::INFO);
}

pub fn init_with_level(level: Level) {
    if tracing_subscriber::fmt().with_max_level(level).with_target(false).try_init().is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
