use anyhow::Result;
use std::path::Path;

use ensemble_core::{dates, store, Band};

/// Report whether a band's dates fall inside the valid career window.
///
/// The band name was already validated when the file was decoded; a file
/// with a bad name never gets this far.
pub fn validate_band(path: &Path) -> Result<()> {
    let band = store::load_band(path)?;

    println!("Band: {}\n", band.name());

    let start_ok = Band::is_date_valid(band.start());
    println!(
        "  start {}: {}",
        dates::format_date(band.start()),
        verdict(start_ok)
    );

    let end_ok = Band::is_date_valid(band.end());
    println!(
        "  end   {}: {}",
        dates::format_date(band.end()),
        verdict(end_ok)
    );

    if !start_ok || !end_ok {
        println!(
            "\nValid dates run from {} through today.",
            dates::format_date(dates::earliest_start())
        );
    }

    Ok(())
}

fn verdict(ok: bool) -> &'static str {
    if ok {
        "✓ valid"
    } else {
        "✗ out of range"
    }
}
