use simplelog::*;
use std::fs::File;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

/// Logging flags for granular control
static LOG_KEYS: AtomicBool = AtomicBool::new(false);
static LOG_MOVEMENT: AtomicBool = AtomicBool::new(false);

/// Initialize logging to the given file. The terminal belongs to the editor,
/// so nothing is ever logged to stdout or stderr.
pub fn init(path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;

    WriteLogger::init(LevelFilter::Debug, Config::default(), file)
        .map_err(std::io::Error::other)?;

    Ok(())
}

/// Configure which categories to log
pub fn configure(keys: bool, movement: bool) {
    LOG_KEYS.store(keys, Ordering::Relaxed);
    LOG_MOVEMENT.store(movement, Ordering::Relaxed);
}

/// Check if key logging is enabled
pub fn log_keys() -> bool {
    LOG_KEYS.load(Ordering::Relaxed)
}

/// Check if movement logging is enabled
pub fn log_movement() -> bool {
    LOG_MOVEMENT.load(Ordering::Relaxed)
}
