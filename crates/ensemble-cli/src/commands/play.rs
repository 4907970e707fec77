use anyhow::Result;
use std::path::Path;

use ensemble_core::{store, Performance};

/// Find a member by name and print their performance of a song.
pub fn play_song(
    path: &Path,
    member: &str,
    song: String,
    rhythm_count: Option<String>,
    gratitude: Vec<String>,
    dedication: Option<String>,
) -> Result<()> {
    let band = store::load_band(path)?;

    let musician = band
        .members()
        .iter()
        .find(|m| m.name() == member)
        .ok_or_else(|| anyhow::anyhow!("no member {member:?} in {}", band.name()))?;

    let mut performance = Performance::new(song)?;
    if let Some(count) = rhythm_count {
        performance = performance.with_rhythm_count(count);
    }
    for line in gratitude {
        performance = performance.with_gratitude(line);
    }
    if let Some(dedication) = dedication {
        performance = performance.with_dedication(dedication);
    }

    println!("{}", musician.play(&performance));

    Ok(())
}
