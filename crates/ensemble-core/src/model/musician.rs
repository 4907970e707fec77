use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::model::performance::Performance;
use crate::taxonomy::{Instrument, Vocals};

/// What a musician does in a group, beyond performing.
///
/// A closed set of variants rather than an open hierarchy: a musician either
/// just performs, sings, writes songs on an instrument, or does both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Performer,
    Singer { vocals: Vocals },
    Songwriter { instrument: Instrument },
    SingerSongwriter { vocals: Vocals, instrument: Instrument },
}

/// A performer, sufficiently described by their name, whether they are a
/// band member or a solo artist, and their [`Role`].
///
/// Equality is structural and role-aware: a singer and a plain performer
/// with the same name are not equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "crate::codec::MusicianWire",
    into = "crate::codec::MusicianWire"
)]
pub struct Musician {
    name: String,
    is_band_member: bool,
    role: Role,
}

impl Musician {
    /// Create a plain performer. Fails if the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::from_parts(name.into(), true, Role::Performer)
    }

    /// Create a singer with the given vocal duty.
    pub fn singer(name: impl Into<String>, vocals: Vocals) -> Result<Self> {
        Self::from_parts(name.into(), true, Role::Singer { vocals })
    }

    /// Create a songwriter playing the given instrument.
    pub fn songwriter(name: impl Into<String>, instrument: Instrument) -> Result<Self> {
        Self::from_parts(name.into(), true, Role::Songwriter { instrument })
    }

    /// Create a singer-songwriter with both a vocal duty and an instrument.
    pub fn singer_songwriter(
        name: impl Into<String>,
        vocals: Vocals,
        instrument: Instrument,
    ) -> Result<Self> {
        Self::from_parts(name.into(), true, Role::SingerSongwriter { vocals, instrument })
    }

    pub(crate) fn from_parts(name: String, is_band_member: bool, role: Role) -> Result<Self> {
        Ok(Self {
            name: validated_name(name)?,
            is_band_member,
            role,
        })
    }

    /// Mark this musician as a solo artist rather than a band member.
    #[must_use]
    pub fn solo(mut self) -> Self {
        self.is_band_member = false;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the musician. Fails on a blank name, leaving the current
    /// name in place.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.name = validated_name(name.into())?;
        Ok(())
    }

    pub fn is_band_member(&self) -> bool {
        self.is_band_member
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn vocals(&self) -> Option<Vocals> {
        match self.role {
            Role::Singer { vocals } | Role::SingerSongwriter { vocals, .. } => Some(vocals),
            Role::Performer | Role::Songwriter { .. } => None,
        }
    }

    pub fn instrument(&self) -> Option<Instrument> {
        match self.role {
            Role::Songwriter { instrument } | Role::SingerSongwriter { instrument, .. } => {
                Some(instrument)
            }
            Role::Performer | Role::Singer { .. } => None,
        }
    }

    /// Perform a song, returning the lines of the performance as text.
    ///
    /// Singing roles close the performance with one extra line.
    pub fn play(&self, performance: &Performance) -> String {
        let mut lines = Vec::new();
        if let Some(count) = performance.rhythm_count() {
            lines.push(count.to_string());
        }
        lines.push(format!("{} performs {}", self.name, performance.song_title()));
        lines.extend(performance.gratitude().iter().cloned());
        if let Some(dedication) = performance.dedication() {
            lines.push(dedication.to_string());
        }
        if self.vocals().is_some() {
            lines.push(String::from("Oh, yeah!"));
        }
        lines.join("\n")
    }
}

fn validated_name(name: String) -> Result<String> {
    if name.trim().is_empty() {
        return Err(Error::Validation(String::from(
            "musician name must not be blank",
        )));
    }
    Ok(name)
}

impl fmt::Display for Musician {
    /// `"<name> (band member|solo artist[, <vocals>][, <instrument>])"`.
    ///
    /// [`Musician::from_str`] parses exactly this shape.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let membership = if self.is_band_member {
            "band member"
        } else {
            "solo artist"
        };
        write!(f, "{} ({membership}", self.name)?;
        if let Some(vocals) = self.vocals() {
            write!(f, ", {vocals}")?;
        }
        if let Some(instrument) = self.instrument() {
            write!(f, ", {instrument}")?;
        }
        write!(f, ")")
    }
}

impl FromStr for Musician {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (name, rest) = s
            .rsplit_once(" (")
            .ok_or_else(|| Error::Parse(format!("not a musician string: {s:?}")))?;
        let details = rest
            .strip_suffix(')')
            .ok_or_else(|| Error::Parse(format!("unterminated musician string: {s:?}")))?;

        let mut attrs = details.split(", ");
        let is_band_member = match attrs.next() {
            Some("band member") => true,
            Some("solo artist") => false,
            _ => {
                return Err(Error::Parse(format!(
                    "missing membership in musician string: {s:?}"
                )))
            }
        };

        let attrs: Vec<&str> = attrs.collect();
        let role = match attrs.as_slice() {
            [] => Role::Performer,
            [attr] => {
                if let Ok(vocals) = attr.parse::<Vocals>() {
                    Role::Singer { vocals }
                } else if let Ok(instrument) = attr.parse::<Instrument>() {
                    Role::Songwriter { instrument }
                } else {
                    return Err(Error::Parse(format!("unknown musician attribute: {attr:?}")));
                }
            }
            [vocals, instrument] => Role::SingerSongwriter {
                vocals: vocals.parse()?,
                instrument: instrument.parse()?,
            },
            _ => {
                return Err(Error::Parse(format!(
                    "too many attributes in musician string: {s:?}"
                )))
            }
        };

        Self::from_parts(name.to_string(), is_band_member, role)
    }
}
