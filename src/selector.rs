// ===== letterdraw/src/selector.rs =====
use crate::catalog::Record;
use crate::error::PickerError;
use crate::fields::{self, FlagField};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

/// The letter that flips meaning in wildcard mode.
pub const WILDCARD_LETTER: char = 'X';

/// An upper-case ASCII letter A-Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter(char);

impl Letter {
    pub fn as_char(&self) -> char {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Letter> {
        ('A'..='Z').map(Letter)
    }
}

impl TryFrom<char> for Letter {
    type Error = PickerError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_alphabetic() {
            Ok(Letter(c.to_ascii_uppercase()))
        } else {
            Err(PickerError::InvalidLetter(c.to_string()))
        }
    }
}

impl FromStr for Letter {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Letter::try_from(c),
            _ => Err(PickerError::InvalidLetter(trimmed.to_string())),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Exclusion switches, declared in the order they are applied.
#[derive(
    Debug,
    Clone,
    Copy,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ExclusionKind {
    OutsidePelican,
    PerfectionLocked,
    MasteryLocked,
    MineralLocked,
}

impl ExclusionKind {
    pub fn field(&self) -> FlagField {
        match self {
            Self::OutsidePelican => FlagField::OutsidePelican,
            Self::PerfectionLocked => FlagField::PerfectionLocked,
            Self::MasteryLocked => FlagField::MasteryLocked,
            Self::MineralLocked => FlagField::Mineral,
        }
    }

    /// True when this switch, once on, rules the record out.
    pub fn excludes(&self, record: &Record) -> bool {
        fields::lookup_bool_field(record, self.field())
    }

    fn bit(&self) -> u8 {
        1 << (*self as u8)
    }
}

/// Set of active exclusion switches. Iteration follows filter order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ExclusionSet(u8);

impl ExclusionSet {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn contains(&self, kind: ExclusionKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn set(&mut self, kind: ExclusionKind, on: bool) {
        if on {
            self.0 |= kind.bit();
        } else {
            self.0 &= !kind.bit();
        }
    }

    /// Flips one switch and returns its new state.
    pub fn toggle(&mut self, kind: ExclusionKind) -> bool {
        self.0 ^= kind.bit();
        self.contains(kind)
    }

    pub fn with(mut self, kind: ExclusionKind) -> Self {
        self.set(kind, true);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = ExclusionKind> + '_ {
        ExclusionKind::iter().filter(move |k| self.contains(*k))
    }

    /// True when any active switch rules the record out.
    pub fn excludes(&self, record: &Record) -> bool {
        self.iter().any(|k| k.excludes(record))
    }
}

impl FromIterator<ExclusionKind> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = ExclusionKind>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |set, k| set.with(k))
    }
}

impl FromStr for ExclusionSet {
    type Err = PickerError;

    /// Comma-separated switch names, e.g. `mineral-locked,mastery-locked`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| {
                ExclusionKind::from_str(p).map_err(|_| PickerError::UnknownExclusion(p.to_string()))
            })
            .collect()
    }
}

impl fmt::Display for ExclusionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let names: Vec<String> = self.iter().map(|k| k.to_string()).collect();
        write!(f, "{}", names.join(","))
    }
}

/// Everything `select` needs to know about the user's current choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRequest {
    pub letter: Letter,
    pub wildcard: bool,
    pub exclusions: ExclusionSet,
}

impl SelectionRequest {
    pub fn new(letter: Letter) -> Self {
        Self {
            letter,
            wildcard: false,
            exclusions: ExclusionSet::new(),
        }
    }

    pub fn wildcard(mut self, on: bool) -> Self {
        self.wildcard = on;
        self
    }

    pub fn exclusions(mut self, exclusions: ExclusionSet) -> Self {
        self.exclusions = exclusions;
        self
    }

    /// Wildcard only changes the meaning of X.
    pub fn is_inverted(&self) -> bool {
        self.wildcard && self.letter.as_char() == WILDCARD_LETTER
    }

    /// Letter rule alone, before any exclusion.
    pub fn matches_letter(&self, record: &Record) -> bool {
        let Some(first) = fields::name(record).and_then(|n| n.chars().next()) else {
            return false;
        };
        let mut upper = first.to_uppercase();
        let starts_with_letter =
            upper.next() == Some(self.letter.as_char()) && upper.next().is_none();

        if self.is_inverted() {
            !starts_with_letter
        } else {
            starts_with_letter
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.matches_letter(record) && !self.exclusions.excludes(record)
    }
}

/// Source of uniform indices. `pick_index(len)` must return a value in
/// `0..len`; it is never called with `len == 0`.
pub trait IndexSource {
    fn pick_index(&mut self, len: usize) -> usize;
}

impl IndexSource for fastrand::Rng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.usize(..len)
    }
}

/// Empty candidate set after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoMatch {
    pub letter: Letter,
    pub wildcard: bool,
    pub active: ExclusionSet,
}

impl fmt::Display for NoMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "No items found starting with \"{}\" with current filters",
            self.letter
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Picked(&'a Record),
    NoMatch(NoMatch),
}

impl<'a> Selection<'a> {
    pub fn picked(&self) -> Option<&'a Record> {
        match self {
            Selection::Picked(r) => Some(*r),
            Selection::NoMatch(_) => None,
        }
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, Selection::NoMatch(_))
    }
}

/// Letter narrowing followed by each active exclusion in order.
pub fn candidates<'a>(records: &'a [Record], request: &SelectionRequest) -> Vec<&'a Record> {
    let mut pool: Vec<&Record> = records
        .iter()
        .filter(|r| request.matches_letter(r))
        .collect();
    debug!("{} candidates for letter {}", pool.len(), request.letter);

    for kind in request.exclusions.iter() {
        pool.retain(|r| !kind.excludes(r));
        debug!("{} candidates after {}", pool.len(), kind);
    }

    pool
}

/// Picks one record for the request, or reports that nothing matched.
pub fn select<'a, R: IndexSource + ?Sized>(
    records: &'a [Record],
    request: &SelectionRequest,
    rng: &mut R,
) -> Selection<'a> {
    let pool = candidates(records, request);

    if pool.is_empty() {
        return Selection::NoMatch(NoMatch {
            letter: request.letter,
            wildcard: request.wildcard,
            active: request.exclusions,
        });
    }

    let idx = rng.pick_index(pool.len()) % pool.len();
    Selection::Picked(pool[idx])
}
