use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The vocal duty a singer covers in a group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vocals {
    #[default]
    LeadVocals,
    BackgroundVocals,
}

impl fmt::Display for Vocals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::LeadVocals => "lead vocals",
            Self::BackgroundVocals => "background vocals",
        };
        write!(f, "{label}")
    }
}

impl FromStr for Vocals {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "lead vocals" => Ok(Self::LeadVocals),
            "background vocals" => Ok(Self::BackgroundVocals),
            other => Err(Error::Parse(format!("unknown vocals: {other:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocals_default() {
        assert_eq!(Vocals::default(), Vocals::LeadVocals);
    }

    #[test]
    fn test_vocals_display_roundtrip() {
        let vocals = Vocals::BackgroundVocals;
        assert_eq!(vocals.to_string().parse::<Vocals>().ok(), Some(vocals));
    }

    #[test]
    fn test_vocals_rejects_unknown_label() {
        assert!("growling".parse::<Vocals>().is_err());
    }
}
