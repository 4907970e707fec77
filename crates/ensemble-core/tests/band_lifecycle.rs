//! End-to-end walk through a band's life: construction, rendering,
//! equality, the member cursor, JSON, and the file store.

use chrono::NaiveDate;
use ensemble_core::{
    codec, dates, store, Band, EndOfIteration, Instrument, IterationState, Musician, Performance,
    Vocals,
};
use tempfile::TempDir;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn the_beatles() -> Band {
    Band::new(
        "The Beatles",
        vec![
            Musician::singer_songwriter("John Lennon", Vocals::LeadVocals, Instrument::RhythmGuitar)
                .unwrap(),
            Musician::singer_songwriter("Paul McCartney", Vocals::LeadVocals, Instrument::Bass)
                .unwrap(),
            Musician::singer_songwriter(
                "George Harrison",
                Vocals::BackgroundVocals,
                Instrument::LeadGuitar,
            )
            .unwrap(),
            Musician::songwriter("Ringo Starr", Instrument::Drums).unwrap(),
        ],
        ymd(1957, 7, 6),
        ymd(1970, 4, 10),
    )
    .unwrap()
}

/// The canonical render of the canonical band.
#[test]
fn test_beatles_render() {
    assert_eq!(
        the_beatles().to_string(),
        "The Beatles (John Lennon, Paul McCartney, George Harrison, Ringo Starr), 1957-1970"
    );
}

/// Same name, dates, and members in a different order: equal. An added
/// fifth member: not equal.
#[test]
fn test_beatles_equality() {
    let band = the_beatles();

    let mut reordered = band.members().to_vec();
    reordered.swap(0, 2);
    let same = Band::new("The Beatles", reordered, band.start(), band.end()).unwrap();
    assert_eq!(band, same);

    let mut with_pete = band.members().to_vec();
    with_pete.push(Musician::new("Pete Best").unwrap());
    let bigger = Band::new("The Beatles", with_pete, band.start(), band.end()).unwrap();
    assert_ne!(band, bigger);
}

#[test]
fn test_date_validity_window() {
    assert!(Band::is_date_valid(ymd(1957, 7, 6)));
    assert!(Band::is_date_valid(ymd(1954, 7, 5)));
    assert!(!Band::is_date_valid(ymd(1954, 7, 4)));
    assert!(!Band::is_date_valid(dates::today() + chrono::Days::new(1)));
}

/// Consume the cursor, hit the end signal, rewind, and walk again.
#[test]
fn test_cursor_protocol() {
    let mut band = the_beatles();
    let total = band.members().len();

    for _ in 0..total {
        band.next_member().unwrap();
    }
    assert_eq!(band.next_member(), Err(EndOfIteration));
    assert_eq!(band.iteration_state(), IterationState::Exhausted);

    band.start_iteration();
    let mut walked = 0;
    while band.next_member().is_ok() {
        walked += 1;
    }
    assert_eq!(walked, total);
}

#[test]
fn test_json_roundtrip_is_identity() {
    let band = the_beatles();
    let json = codec::band_to_json(&band).unwrap();
    let decoded = codec::band_from_json(&json).unwrap();
    assert_eq!(decoded, band);

    // Order survives the trip even though equality would not notice.
    let names: Vec<&str> = decoded.members().iter().map(Musician::name).collect();
    let original: Vec<&str> = band.members().iter().map(Musician::name).collect();
    assert_eq!(names, original);
}

#[test]
fn test_store_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("beatles.json");

    let band = the_beatles();
    store::save_band(&band, &path).unwrap();
    assert_eq!(store::load_band(&path).unwrap(), band);
}

#[test]
fn test_member_performs() {
    let band = the_beatles();
    let paul = band
        .members()
        .iter()
        .find(|m| m.name() == "Paul McCartney")
        .unwrap();

    let performance = Performance::new("Hey Jude")
        .unwrap()
        .with_gratitude("Thank you!");
    let text = paul.play(&performance);
    assert!(text.contains("Paul McCartney performs Hey Jude"));
    assert!(text.ends_with("Oh, yeah!"));
}
