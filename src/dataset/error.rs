use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading a dataset artifact.
#[derive(Debug, Error)]
pub enum DatasetError {
	/// The dataset file could not be opened or read.
	#[error("failed to read dataset {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The dataset was not a JSON array of `{classRef, stride}` records.
	#[error("malformed dataset {origin}: {source}")]
	Parse {
		origin: String,
		#[source]
		source: serde_json::Error,
	},

	/// A record carried an empty identifier.
	#[error("dataset entry {index} has an empty classRef")]
	EmptyClassRef { index: usize },
}

impl DatasetError {
	pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
		Self::Io {
			path: path.into(),
			source,
		}
	}

	pub(crate) fn parse(origin: impl Into<String>, source: serde_json::Error) -> Self {
		Self::Parse {
			origin: origin.into(),
			source,
		}
	}
}
