//! Integer parsing and byte-order helpers used to interpret numeric queries.

/// Rendered form of a failed numeric interpretation.
pub const NAN_KEY: &str = "nan";

/// Parse the leading integer of `text` in the given radix.
///
/// Accepts an optional sign and, for radix 16, an optional `0x` prefix, then
/// consumes the longest run of valid digits; trailing characters are ignored.
/// Returns `None` when no digit is found. The value wraps modulo 2^32, which
/// is all the byte-swap below ever looks at.
#[must_use]
pub fn parse_integer(text: &str, radix: u32) -> Option<u32> {
	debug_assert!((2..=36).contains(&radix));

	let (negative, unsigned) = match text.as_bytes().first() {
		Some(b'-') => (true, &text[1..]),
		Some(b'+') => (false, &text[1..]),
		_ => (false, text),
	};
	let digits = if radix == 16 {
		unsigned
			.strip_prefix("0x")
			.or_else(|| unsigned.strip_prefix("0X"))
			.unwrap_or(unsigned)
	} else {
		unsigned
	};

	let mut value: u32 = 0;
	let mut seen_digit = false;
	for digit in digits.chars().map_while(|ch| ch.to_digit(radix)) {
		value = value.wrapping_mul(radix).wrapping_add(digit);
		seen_digit = true;
	}

	if !seen_digit {
		return None;
	}
	Some(if negative { value.wrapping_neg() } else { value })
}

/// Reverse the four byte lanes of a 32-bit value.
#[must_use]
pub const fn byteswap32(value: u32) -> u32 {
	value.swap_bytes()
}

/// Render a numeric interpretation as lower-case, unpadded hex.
#[must_use]
pub fn hex_or_nan(value: Option<u32>) -> String {
	match value {
		Some(value) => format!("{value:x}"),
		None => NAN_KEY.to_string(),
	}
}
