use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
	Default,
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
			Self::Default => write!(f, "built-in default"),
		}
	}
}

/// Where each validated setting came from, when it was set explicitly.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) dataset_path: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
	pub(crate) log_level: Option<SettingSource>,
	pub(crate) headers: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_dataset_path(&self) -> SettingSource {
		self.dataset_path.clone().unwrap_or(SettingSource::Default)
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.theme
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.theme"))
	}

	pub(crate) fn source_for_log_level(&self) -> SettingSource {
		self.log_level.clone().unwrap_or(SettingSource::Default)
	}

	pub(crate) fn source_for_headers(&self) -> SettingSource {
		self.headers
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.headers"))
	}
}
