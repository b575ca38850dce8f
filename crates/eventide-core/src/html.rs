//! HTML escaping for markup rendered by the view controllers.

/// Escape HTML special characters.
///
/// # Examples
///
/// ```
/// use eventide_core::html::escape;
///
/// assert_eq!(escape("Hello, World!"), "Hello, World!");
/// assert_eq!(escape("5 < 10 & 10 > 5"), "5 &lt; 10 &amp; 10 &gt; 5");
/// ```
pub fn escape(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			_ => result.push(ch),
		}
	}
	result
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_escape_script_tag() {
		assert_eq!(
			escape("<script>alert('x')</script>"),
			"&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"
		);
	}

	#[test]
	fn test_escape_quotes() {
		assert_eq!(escape("a \"b\" 'c'"), "a &quot;b&quot; &#x27;c&#x27;");
	}

	#[test]
	fn test_escape_plain_text_unchanged() {
		assert_eq!(escape("plain text"), "plain text");
	}
}
