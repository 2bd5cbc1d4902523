//! Core crate exports for looking up class refs and strides.
//!
//! The library loads the `(classRef, stride)` dataset, matches queries against
//! it in hex, decimal and byte-swapped forms, computes FNV-1 hashes, stores
//! user preferences and drives the terminal UI built on top of all of these.

pub mod app_dirs;
pub mod dataset;
pub mod display;
pub mod hash;
pub mod logging;
pub mod preferences;
pub mod search;
pub mod ui;

pub use dataset::{ClassEntry, Dataset, DatasetError, Row};
pub use display::DisplaySettings;
pub use hash::fnv1_32;
pub use preferences::{JsonFileStore, MemoryStore, PreferenceStore, Preferences};
pub use search::{MatchResult, QueryKeys, SearchOutcome, match_query};
pub use ui::{LookupUi, Theme, UiLabels};
