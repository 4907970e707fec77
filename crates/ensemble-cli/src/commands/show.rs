use anyhow::Result;
use std::path::Path;

use ensemble_core::{dates, store};

/// Print a band's one-line form and its career dates.
pub fn show_band(path: &Path) -> Result<()> {
    let band = store::load_band(path)?;

    println!("{band}");
    println!();
    println!("  started: {}", dates::format_date(band.start()));
    println!("  ended:   {}", dates::format_date(band.end()));
    println!("  members: {}", band.members().len());

    Ok(())
}
