//! Formatting of strides and hashes for display.

/// Presentation settings shared with the rendering layer.
///
/// Owned by the session and passed explicitly to anything that formats values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplaySettings {
	/// Render numbers as `0x`-prefixed hex instead of decimal.
	pub display_hex: bool,
}

impl DisplaySettings {
	#[must_use]
	pub fn new(display_hex: bool) -> Self {
		Self { display_hex }
	}

	#[must_use]
	pub fn toggled(self) -> Self {
		Self {
			display_hex: !self.display_hex,
		}
	}
}

/// Prefix shown in front of hex values.
pub const HEX_PREFIX: &str = "0x";

/// Upper-case hex digits of `value`.
///
/// With `separate_bytes` the value is padded to four bytes and each byte is
/// separated by a space.
#[must_use]
pub fn hex_digits(value: u32, separate_bytes: bool) -> String {
	if !separate_bytes {
		return format!("{value:X}");
	}
	value
		.to_be_bytes()
		.iter()
		.map(|byte| format!("{byte:02X}"))
		.collect::<Vec<_>>()
		.join(" ")
}

/// Format a stride column value.
#[must_use]
pub fn format_stride(value: u32, settings: DisplaySettings) -> String {
	if settings.display_hex {
		format!("{HEX_PREFIX}{}", hex_digits(value, false))
	} else {
		value.to_string()
	}
}

/// Format a hash value, separating bytes when shown as hex.
#[must_use]
pub fn format_hash(value: u32, settings: DisplaySettings) -> String {
	if settings.display_hex {
		format!("{HEX_PREFIX}{}", hex_digits(value, true))
	} else {
		value.to_string()
	}
}
