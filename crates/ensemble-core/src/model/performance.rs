use crate::error::{Error, Result};

/// Everything a musician needs to play a song: the title, an optional
/// count-in, lines of gratitude for the audience, and an optional
/// dedication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Performance {
    song_title: String,
    rhythm_count: Option<String>,
    gratitude: Vec<String>,
    dedication: Option<String>,
}

impl Performance {
    /// Fails if the song title is blank; a performance without a song does
    /// not exist.
    pub fn new(song_title: impl Into<String>) -> Result<Self> {
        let song_title = song_title.into();
        if song_title.trim().is_empty() {
            return Err(Error::Validation(String::from(
                "a performance needs a song title",
            )));
        }
        Ok(Self {
            song_title,
            rhythm_count: None,
            gratitude: Vec::new(),
            dedication: None,
        })
    }

    /// The count-in called before the song, e.g. "One, two, three, four!".
    #[must_use]
    pub fn with_rhythm_count(mut self, count: impl Into<String>) -> Self {
        self.rhythm_count = Some(count.into());
        self
    }

    /// Add one expression of gratitude; call repeatedly for more.
    #[must_use]
    pub fn with_gratitude(mut self, line: impl Into<String>) -> Self {
        self.gratitude.push(line.into());
        self
    }

    #[must_use]
    pub fn with_dedication(mut self, dedication: impl Into<String>) -> Self {
        self.dedication = Some(dedication.into());
        self
    }

    pub fn song_title(&self) -> &str {
        &self.song_title
    }

    pub fn rhythm_count(&self) -> Option<&str> {
        self.rhythm_count.as_deref()
    }

    pub fn gratitude(&self) -> &[String] {
        &self.gratitude
    }

    pub fn dedication(&self) -> Option<&str> {
        self.dedication.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_performance_new() {
        let performance = Performance::new("Hey Jude").unwrap();
        assert_eq!(performance.song_title(), "Hey Jude");
        assert!(performance.rhythm_count().is_none());
        assert!(performance.gratitude().is_empty());
    }

    #[test]
    fn test_performance_rejects_blank_title() {
        assert!(Performance::new("").is_err());
        assert!(Performance::new("  \t").is_err());
    }

    #[test]
    fn test_performance_builders() {
        let performance = Performance::new("Let It Be")
            .unwrap()
            .with_rhythm_count("Two, three, four!")
            .with_gratitude("Thank you!")
            .with_gratitude("You're wonderful!")
            .with_dedication("We love you!");

        assert_eq!(performance.rhythm_count(), Some("Two, three, four!"));
        assert_eq!(performance.gratitude().len(), 2);
        assert_eq!(performance.dedication(), Some("We love you!"));
    }
}
