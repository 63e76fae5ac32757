// ===== letterdraw/src/config.rs =====
use crate::error::{PickerError, PkResult};
use crate::selector::{ExclusionKind, ExclusionSet, Letter, SelectionRequest};
use clap::parser::ValueSource;
use clap::{ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    #[command(flatten)]
    pub filters: FilterParams,
    #[command(flatten)]
    pub rng: RngParams,
}

/// Filter switches. Also the shape of a `--profile` JSON file.
#[derive(Args, Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterParams {
    /// Letter X picks everything that does NOT start with X
    #[arg(short, long, default_value_t = false)]
    pub wildcard: bool,

    /// Exclusion switches to turn on (comma-separated)
    #[arg(short = 'x', long, value_delimiter = ',')]
    pub exclude: Vec<ExclusionKind>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RngParams {
    /// Fixed seed for reproducible picks
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

impl FilterParams {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PkResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            PickerError::Config(format!(
                "Failed to read profile '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overwrites profile values with the flags the user actually typed.
    pub fn merge_from_cli(&mut self, cli: &FilterParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(wildcard, "wildcard");
        update_if_present!(exclude, "exclude");
    }

    pub fn exclusions(&self) -> ExclusionSet {
        self.exclude.iter().copied().collect()
    }

    pub fn request(&self, letter: Letter) -> SelectionRequest {
        SelectionRequest::new(letter)
            .wildcard(self.wildcard)
            .exclusions(self.exclusions())
    }
}

impl RngParams {
    pub fn build(&self) -> fastrand::Rng {
        match self.seed {
            Some(s) => fastrand::Rng::with_seed(s),
            None => fastrand::Rng::new(),
        }
    }
}
