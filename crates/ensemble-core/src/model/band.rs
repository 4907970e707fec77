use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dates;
use crate::error::{EndOfIteration, Error, Result};
use crate::model::musician::Musician;

/// Where a band's member cursor currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationState {
    /// Never iterated since construction or the last rewind.
    Fresh,
    /// Mid-walk; at least one member may still be returned.
    Iterating,
    /// The cursor ran off the end and stays there until rewound.
    Exhausted,
}

#[derive(Debug, Clone, Copy)]
enum Cursor {
    Fresh,
    Iterating(usize),
    Exhausted,
}

/// A music group: a name, its members, and the date range of its career.
///
/// Members are kept in the order given at construction. The band carries its
/// own member cursor ([`Band::start_iteration`] / [`Band::next_member`]) in
/// addition to ordinary borrowing iteration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "crate::codec::BandWire", into = "crate::codec::BandWire")]
pub struct Band {
    name: String,
    members: Vec<Musician>,
    start: NaiveDate,
    end: NaiveDate,
    cursor: Cursor,
}

impl Band {
    pub const GENRES: [&'static str; 5] = ["rock", "blues", "pop", "alternative", "unknown"];

    /// Create a band. Fails with [`Error::BandName`] if the trimmed name is
    /// empty; no band value exists after a failed construction.
    ///
    /// The start date is deliberately not checked here; see
    /// [`Band::is_date_valid`] for the opt-in validity rule.
    pub fn new(
        name: impl Into<String>,
        members: Vec<Musician>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::BandName(name));
        }
        Ok(Self {
            name,
            members,
            start,
            end,
            cursor: Cursor::Fresh,
        })
    }

    /// Create a band whose career starts (and so far ends) today.
    pub fn formed_today(name: impl Into<String>, members: Vec<Musician>) -> Result<Self> {
        let today = dates::today();
        Self::new(name, members, today, today)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[Musician] {
        &self.members
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `d` can denote the start of a band's career: no earlier than
    /// Jul 05, 1954, and no later than today.
    pub fn is_date_valid(d: NaiveDate) -> bool {
        dates::earliest_start() <= d && d <= dates::today()
    }

    /// Rewind the member cursor to the first member, from any state.
    pub fn start_iteration(&mut self) {
        self.cursor = Cursor::Iterating(0);
    }

    /// Return the member at the cursor and advance it.
    ///
    /// Signals [`EndOfIteration`] once the cursor passes the last member,
    /// and keeps signalling it until [`Band::start_iteration`] rewinds.
    /// A fresh band iterates from the first member without an explicit
    /// rewind.
    pub fn next_member(&mut self) -> std::result::Result<&Musician, EndOfIteration> {
        let i = match self.cursor {
            Cursor::Fresh => 0,
            Cursor::Iterating(i) => i,
            Cursor::Exhausted => return Err(EndOfIteration),
        };
        if i < self.members.len() {
            self.cursor = Cursor::Iterating(i + 1);
            Ok(&self.members[i])
        } else {
            self.cursor = Cursor::Exhausted;
            Err(EndOfIteration)
        }
    }

    pub fn iteration_state(&self) -> IterationState {
        match self.cursor {
            Cursor::Fresh => IterationState::Fresh,
            Cursor::Iterating(_) => IterationState::Iterating,
            Cursor::Exhausted => IterationState::Exhausted,
        }
    }

    /// A finite, lazy walk over the members in storage order, logging each
    /// one as it is handed out.
    pub fn member_sequence(&self) -> impl Iterator<Item = &Musician> {
        self.members
            .iter()
            .inspect(|member| log::debug!("presenting member: {}", member.name()))
    }

    pub(crate) fn into_parts(self) -> (String, Vec<Musician>, NaiveDate, NaiveDate) {
        (self.name, self.members, self.start, self.end)
    }
}

impl fmt::Display for Band {
    /// `"<name> (<member names | 'members unknown'>), <start year>-<end year>"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members = if self.members.is_empty() {
            String::from("members unknown")
        } else {
            self.members
                .iter()
                .map(Musician::name)
                .collect::<Vec<_>>()
                .join(", ")
        };
        write!(
            f,
            "{} ({}), {}-{}",
            self.name,
            members,
            self.start.year(),
            self.end.year()
        )
    }
}

impl PartialEq for Band {
    fn eq(&self, other: &Self) -> bool {
        // Members are compared both ways, because the two rosters can be of
        // different length. Multiplicities are not distinguished.
        self.name == other.name
            && self.start == other.start
            && self.end == other.end
            && self.members.iter().all(|m| other.members.contains(m))
            && other.members.iter().all(|m| self.members.contains(m))
    }
}

impl Eq for Band {}

impl<'a> IntoIterator for &'a Band {
    type Item = &'a Musician;
    type IntoIter = std::slice::Iter<'a, Musician>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
