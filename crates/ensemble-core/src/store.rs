//! Saving and loading bands as JSON documents on disk.

use std::fs;
use std::path::Path;

use crate::codec;
use crate::error::Result;
use crate::model::Band;

/// Write one band to `path` as pretty-printed JSON.
pub fn save_band(band: &Band, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(band)?;
    fs::write(path, json)?;
    log::info!("saved band {:?} to {}", band.name(), path.display());
    Ok(())
}

/// Read one band back from `path`.
pub fn load_band(path: &Path) -> Result<Band> {
    let contents = fs::read_to_string(path)?;
    codec::band_from_json(&contents)
}

/// Write a list of bands to `path` as pretty-printed JSON.
pub fn save_roster(bands: &[Band], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(bands)?;
    fs::write(path, json)?;
    log::info!("saved {} band(s) to {}", bands.len(), path.display());
    Ok(())
}

/// Read a list of bands back from `path`.
pub fn load_roster(path: &Path) -> Result<Vec<Band>> {
    let contents = fs::read_to_string(path)?;
    codec::roster_from_json(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Musician;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn quarrymen() -> Band {
        Band::new(
            "The Quarrymen",
            vec![Musician::new("John Lennon").unwrap()],
            NaiveDate::from_ymd_opt(1956, 11, 1).unwrap(),
            NaiveDate::from_ymd_opt(1960, 1, 1).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_band_file_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quarrymen.json");

        let band = quarrymen();
        save_band(&band, &path).unwrap();
        assert_eq!(load_band(&path).unwrap(), band);
    }

    #[test]
    fn test_roster_file_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.json");

        let roster = vec![quarrymen()];
        save_roster(&roster, &path).unwrap();
        assert_eq!(load_roster(&path).unwrap(), roster);
    }

    #[test]
    fn test_load_band_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(load_band(&dir.path().join("nope.json")).is_err());
    }

    #[test]
    fn test_load_band_malformed_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "not json at all").unwrap();
        assert!(load_band(&path).is_err());
    }
}
