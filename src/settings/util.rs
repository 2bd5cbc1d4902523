/// Remove empty headers and trim whitespace from the provided values.
pub(super) fn sanitize_headers(headers: Vec<String>) -> Vec<String> {
	headers
		.into_iter()
		.map(|header| header.trim().to_string())
		.filter(|header| !header.is_empty())
		.collect()
}

/// Trim a free-form label, treating blank input as unset.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn headers_are_trimmed_and_filtered() {
		let headers = sanitize_headers(vec![" foo ".into(), "".into(), "bar".into()]);
		assert_eq!(headers, vec!["foo", "bar"]);
	}

	#[test]
	fn blank_labels_are_unset() {
		assert_eq!(non_blank(Some("  ".into())), None);
		assert_eq!(non_blank(Some(" Refs ".into())), Some("Refs".into()));
		assert_eq!(non_blank(None), None);
	}
}
