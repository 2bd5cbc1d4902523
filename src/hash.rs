//! FNV-1 32-bit hashing for the calculator tab.

/// FNV-1 32-bit offset basis.
pub const FNV1_32_OFFSET_BASIS: u32 = 0x811C_9DC5;
/// FNV-1 32-bit prime.
pub const FNV1_32_PRIME: u32 = 0x0100_0193;

/// Hash the UTF-8 bytes of `input` with FNV-1 (multiply, then xor).
#[must_use]
pub fn fnv1_32(input: &str) -> u32 {
	fnv1_32_bytes(input.as_bytes())
}

#[must_use]
pub fn fnv1_32_bytes(bytes: &[u8]) -> u32 {
	bytes.iter().fold(FNV1_32_OFFSET_BASIS, |hash, &byte| {
		hash.wrapping_mul(FNV1_32_PRIME) ^ u32::from(byte)
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	/// The prime multiplication spelled out as shifts and adds.
	fn fnv1_32_shift_add(input: &str) -> u32 {
		let mut hash = FNV1_32_OFFSET_BASIS;
		for &byte in input.as_bytes() {
			hash = hash
				.wrapping_add(hash << 1)
				.wrapping_add(hash << 4)
				.wrapping_add(hash << 7)
				.wrapping_add(hash << 8)
				.wrapping_add(hash << 24);
			hash ^= u32::from(byte);
		}
		hash
	}

	#[test]
	fn empty_input_is_offset_basis() {
		assert_eq!(fnv1_32(""), 0x811c_9dc5);
	}

	#[test]
	fn known_vectors() {
		assert_eq!(fnv1_32("a"), 0x050c_5d7e);
		assert_eq!(fnv1_32("foobar"), 0x31f0_b262);
	}

	#[test]
	fn prime_multiply_equals_shift_and_add() {
		for input in ["", "a", "foobar", "PlayerCharacter", "ünïcode"] {
			assert_eq!(fnv1_32(input), fnv1_32_shift_add(input), "{input}");
		}
	}
}
