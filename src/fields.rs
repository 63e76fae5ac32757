// ===== letterdraw/src/fields.rs =====
use crate::catalog::Record;
use strum_macros::Display;

pub const NAME: &str = "name";
pub const LOCAL_IMAGE_PATH: &str = "local_image_path";
pub const WIKI_URL: &str = "wiki_url";

/// Yes/no columns that the exclusion switches read. The datasets in the
/// wild spell them with two different casings.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash)]
pub enum FlagField {
    OutsidePelican,
    PerfectionLocked,
    MasteryLocked,
    Mineral,
}

impl FlagField {
    pub fn variants(&self) -> [&'static str; 2] {
        match self {
            Self::OutsidePelican => ["OutsidePelican", "outsidepelican"],
            Self::PerfectionLocked => ["Perfection-locked", "perfection-locked"],
            Self::MasteryLocked => ["Mastery-locked", "mastery-locked"],
            Self::Mineral => ["Mineral", "mineral"],
        }
    }
}

/// First variant holding a non-empty value.
pub fn lookup_field<'r>(record: &'r Record, variants: &[&str]) -> Option<&'r str> {
    variants
        .iter()
        .filter_map(|v| record.get(v))
        .find(|value| !value.is_empty())
}

/// True only when the flag column reads "yes" (any case). Missing means no.
pub fn lookup_bool_field(record: &Record, field: FlagField) -> bool {
    lookup_field(record, &field.variants())
        .map(|v| v.to_lowercase() == "yes")
        .unwrap_or(false)
}

/// The item name, if present and non-empty.
pub fn name(record: &Record) -> Option<&str> {
    record.get(NAME).filter(|n| !n.is_empty())
}

pub fn local_image_path(record: &Record) -> Option<&str> {
    record.get(LOCAL_IMAGE_PATH).filter(|p| !p.is_empty())
}

pub fn wiki_url(record: &Record) -> Option<&str> {
    record.get(WIKI_URL).filter(|u| !u.is_empty())
}
