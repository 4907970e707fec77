use anyhow::Result;
use std::path::Path;

use ensemble_core::store;

/// Walk the band's member cursor from the top and list every member.
pub fn list_members(path: &Path) -> Result<()> {
    let mut band = store::load_band(path)?;

    println!("Members of {}:\n", band.name());

    band.start_iteration();
    while let Ok(member) = band.next_member() {
        println!("  {member}");
    }

    println!("\n{} member(s)", band.members().len());

    Ok(())
}
