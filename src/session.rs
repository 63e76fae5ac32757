// ===== letterdraw/src/session.rs =====
use crate::catalog::{Catalog, Record};
use crate::error::PkResult;
use crate::selector::{
    self, ExclusionKind, ExclusionSet, IndexSource, Letter, NoMatch, Selection, SelectionRequest,
};
use tracing::{debug, error, info};

pub enum LoadState {
    /// Dataset not read yet. Every pick is a NoMatch.
    Pending,
    Ready(Catalog),
    /// Load failed; the dataset stays empty for the rest of the session.
    Failed(String),
}

/// What the shell should show after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Item(Record),
    NoMatch(NoMatch),
}

impl Shown {
    pub fn item(&self) -> Option<&Record> {
        match self {
            Shown::Item(r) => Some(r),
            Shown::NoMatch(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub kind: ExclusionKind,
    pub enabled: bool,
    /// Set when the displayed item was ruled out and a new one was drawn.
    pub rerolled: Option<Shown>,
}

/// Mutable UI state around the pure selector: chosen letter, wildcard
/// flag, exclusion switches and the item currently on screen.
pub struct Session {
    load: LoadState,
    letter: Option<Letter>,
    wildcard: bool,
    exclusions: ExclusionSet,
    current: Option<Record>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            load: LoadState::Pending,
            letter: None,
            wildcard: false,
            exclusions: ExclusionSet::new(),
            current: None,
        }
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        let mut session = Self::new();
        session.load = LoadState::Ready(catalog);
        session
    }

    /// Stores the result of the one-shot load. A failure is logged here
    /// and nowhere else.
    pub fn finish_load(&mut self, result: PkResult<Catalog>) {
        self.load = match result {
            Ok(catalog) => {
                info!("Session ready with {} items", catalog.len());
                LoadState::Ready(catalog)
            }
            Err(e) => {
                error!("{}", e);
                LoadState::Failed(e.to_string())
            }
        };
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn load_error(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match &self.load {
            LoadState::Ready(c) => Some(c),
            _ => None,
        }
    }

    pub fn records(&self) -> &[Record] {
        self.catalog().map(Catalog::records).unwrap_or(&[])
    }

    pub fn letter(&self) -> Option<Letter> {
        self.letter
    }

    pub fn wildcard(&self) -> bool {
        self.wildcard
    }

    pub fn exclusions(&self) -> ExclusionSet {
        self.exclusions
    }

    pub fn current(&self) -> Option<&Record> {
        self.current.as_ref()
    }

    /// Seeds the switches without triggering any draw.
    pub fn apply_filters(&mut self, wildcard: bool, exclusions: ExclusionSet) {
        self.wildcard = wildcard;
        self.exclusions = exclusions;
    }

    /// The request a letter click would issue right now.
    pub fn request(&self, letter: Letter) -> SelectionRequest {
        SelectionRequest::new(letter)
            .wildcard(self.wildcard)
            .exclusions(self.exclusions)
    }

    pub fn select_letter<R: IndexSource + ?Sized>(&mut self, letter: Letter, rng: &mut R) -> Shown {
        self.letter = Some(letter);
        let request = self.request(letter);

        let shown = match selector::select(self.records(), &request, rng) {
            Selection::Picked(record) => Shown::Item(record.clone()),
            Selection::NoMatch(no_match) => Shown::NoMatch(no_match),
        };

        self.current = shown.item().cloned();
        shown
    }

    /// Same letter, fresh draw. Nothing happens before a letter is chosen.
    pub fn reroll<R: IndexSource + ?Sized>(&mut self, rng: &mut R) -> Option<Shown> {
        let letter = self.letter?;
        Some(self.select_letter(letter, rng))
    }

    /// Flips one switch. Turning it on while the displayed item carries
    /// that flag draws a replacement.
    pub fn toggle<R: IndexSource + ?Sized>(
        &mut self,
        kind: ExclusionKind,
        rng: &mut R,
    ) -> ToggleOutcome {
        let enabled = self.exclusions.toggle(kind);
        debug!("Switch {} is now {}", kind, if enabled { "on" } else { "off" });

        let ruled_out = enabled && self.current.as_ref().is_some_and(|r| kind.excludes(r));

        let rerolled = match self.letter {
            Some(letter) if ruled_out => Some(self.select_letter(letter, rng)),
            _ => None,
        };

        ToggleOutcome {
            kind,
            enabled,
            rerolled,
        }
    }

    pub fn wildcard_on(&mut self) {
        self.wildcard = true;
    }

    /// Returns whether anything changed.
    pub fn wildcard_off(&mut self) -> bool {
        if self.wildcard {
            self.wildcard = false;
            true
        } else {
            false
        }
    }
}
