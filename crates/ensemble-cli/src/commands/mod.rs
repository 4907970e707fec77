pub mod config;
pub mod demo;
pub mod members;
pub mod play;
pub mod show;
pub mod validate;

pub use demo::run_demo;
pub use members::list_members;
pub use play::play_song;
pub use show::show_band;
pub use validate::validate_band;

use anyhow::Result;
use std::path::PathBuf;

/// Resolve a band file argument: taken as given if it exists, otherwise
/// looked up in the configured data directory.
pub fn resolve_band_path(path: PathBuf) -> Result<PathBuf> {
    if path.exists() {
        return Ok(path);
    }
    let config = crate::config::Config::load()?;
    let candidate = config.data_dir.join(&path);
    if candidate.exists() {
        log::debug!("resolved {} in {}", path.display(), config.data_dir.display());
        return Ok(candidate);
    }
    // Hand the original path on; loading will report the miss.
    Ok(path)
}
