use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// An instrument a songwriter plays in a group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Instrument {
    #[default]
    RhythmGuitar,
    LeadGuitar,
    Bass,
    Drums,
    Keyboard,
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::RhythmGuitar => "rhythm guitar",
            Self::LeadGuitar => "lead guitar",
            Self::Bass => "bass",
            Self::Drums => "drums",
            Self::Keyboard => "keyboard",
        };
        write!(f, "{label}")
    }
}

impl FromStr for Instrument {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "rhythm guitar" => Ok(Self::RhythmGuitar),
            "lead guitar" => Ok(Self::LeadGuitar),
            "bass" => Ok(Self::Bass),
            "drums" => Ok(Self::Drums),
            "keyboard" => Ok(Self::Keyboard),
            other => Err(Error::Parse(format!("unknown instrument: {other:?}"))),
        }
    }
}
