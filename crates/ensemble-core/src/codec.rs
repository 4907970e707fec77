//! JSON wire format for musicians and bands.
//!
//! Musicians travel with a `type` tag discriminating the role; vocals and
//! instrument fields appear only where the role carries them. Bands carry
//! their members inline and dates in ISO `YYYY-MM-DD` form. Decoding runs
//! the same validation as construction, so malformed documents never yield
//! half-built values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Band, Musician, Role};
use crate::taxonomy::{Instrument, Vocals};

/// Role discriminator carried in the `type` field of musician JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum RoleTag {
    Musician,
    Singer,
    Songwriter,
    SingerSongwriter,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct MusicianWire {
    name: String,
    is_band_member: bool,
    #[serde(rename = "type")]
    role: RoleTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    vocals: Option<Vocals>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    instrument: Option<Instrument>,
}

impl From<Musician> for MusicianWire {
    fn from(musician: Musician) -> Self {
        let role = match musician.role() {
            Role::Performer => RoleTag::Musician,
            Role::Singer { .. } => RoleTag::Singer,
            Role::Songwriter { .. } => RoleTag::Songwriter,
            Role::SingerSongwriter { .. } => RoleTag::SingerSongwriter,
        };
        Self {
            name: musician.name().to_string(),
            is_band_member: musician.is_band_member(),
            role,
            vocals: musician.vocals(),
            instrument: musician.instrument(),
        }
    }
}

impl TryFrom<MusicianWire> for Musician {
    type Error = Error;

    /// A tagged variant that omits its `vocals`/`instrument` field decodes
    /// with that field's default, matching the constructor defaults.
    fn try_from(wire: MusicianWire) -> Result<Self> {
        let role = match wire.role {
            RoleTag::Musician => Role::Performer,
            RoleTag::Singer => Role::Singer {
                vocals: wire.vocals.unwrap_or_default(),
            },
            RoleTag::Songwriter => Role::Songwriter {
                instrument: wire.instrument.unwrap_or_default(),
            },
            RoleTag::SingerSongwriter => Role::SingerSongwriter {
                vocals: wire.vocals.unwrap_or_default(),
                instrument: wire.instrument.unwrap_or_default(),
            },
        };
        Musician::from_parts(wire.name, wire.is_band_member, role)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct BandWire {
    name: String,
    members: Vec<MusicianWire>,
    start: NaiveDate,
    end: NaiveDate,
}

impl From<Band> for BandWire {
    fn from(band: Band) -> Self {
        let (name, members, start, end) = band.into_parts();
        Self {
            name,
            members: members.into_iter().map(MusicianWire::from).collect(),
            start,
            end,
        }
    }
}

impl TryFrom<BandWire> for Band {
    type Error = Error;

    fn try_from(wire: BandWire) -> Result<Self> {
        let members = wire
            .members
            .into_iter()
            .map(Musician::try_from)
            .collect::<Result<Vec<_>>>()?;
        Band::new(wire.name, members, wire.start, wire.end)
    }
}

pub fn musician_to_json(musician: &Musician) -> Result<String> {
    Ok(serde_json::to_string(musician)?)
}

pub fn musician_from_json(json: &str) -> Result<Musician> {
    Ok(serde_json::from_str(json)?)
}

pub fn band_to_json(band: &Band) -> Result<String> {
    Ok(serde_json::to_string(band)?)
}

pub fn band_from_json(json: &str) -> Result<Band> {
    Ok(serde_json::from_str(json)?)
}

pub fn roster_to_json(bands: &[Band]) -> Result<String> {
    Ok(serde_json::to_string(bands)?)
}

pub fn roster_from_json(json: &str) -> Result<Vec<Band>> {
    Ok(serde_json::from_str(json)?)
}
