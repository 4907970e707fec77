use anyhow::Result;
use chrono::NaiveDate;

use ensemble_core::{codec, Band, Instrument, Musician, Vocals};

fn ymd(y: i32, m: u32, d: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| anyhow::anyhow!("bad date {y}-{m}-{d}"))
}

/// Walk through the canonical Beatles example: construction, rendering,
/// equality, the member cursor, and a JSON round trip.
pub fn run_demo() -> Result<()> {
    println!("Genres on record: {}\n", Band::GENRES.join(", "));

    let the_beatles = Band::new(
        "The Beatles",
        vec![
            Musician::singer_songwriter("John Lennon", Vocals::LeadVocals, Instrument::RhythmGuitar)?,
            Musician::singer_songwriter("Paul McCartney", Vocals::LeadVocals, Instrument::Bass)?,
            Musician::songwriter("George Harrison", Instrument::LeadGuitar)?,
            Musician::songwriter("Ringo Starr", Instrument::Drums)?,
        ],
        ymd(1957, 7, 6)?,
        ymd(1970, 4, 10)?,
    )?;
    println!("{the_beatles}\n");

    // The same band with a fifth member is a different band.
    let mut with_pete = the_beatles.members().to_vec();
    with_pete.push(Musician::new("Pete Best")?);
    let beatles_with_pete = Band::new(
        "The Beatles",
        with_pete,
        the_beatles.start(),
        the_beatles.end(),
    )?;
    println!(
        "Same band once Pete Best joins? {}\n",
        the_beatles == beatles_with_pete
    );

    println!(
        "Start date {} is valid: {}\n",
        the_beatles.start(),
        Band::is_date_valid(the_beatles.start())
    );

    println!("Walking the member cursor:");
    let mut cursor_band = the_beatles.clone();
    while let Ok(member) = cursor_band.next_member() {
        println!("  {}", member.name());
    }
    println!();

    let json = codec::band_to_json(&the_beatles)?;
    println!("As JSON:\n{json}\n");
    let decoded = codec::band_from_json(&json)?;
    println!("Round trip preserved the band: {}", decoded == the_beatles);

    Ok(())
}
