//! Render plans and script extraction.
//!
//! A script node inserted via markup injection does not auto-execute; the
//! loader recreates embedded scripts as [`ScriptDirective`]s in original
//! order, preserving the inline vs. referenced-source distinction. All
//! directives execute in document order, never as independently-scheduled
//! asynchronous units.

/// What to render for a route: the pure output of the planning step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
	/// Page title to set.
	pub title: String,
	/// Locator of the component markup to fetch and mount.
	pub component_ref: String,
	/// Behavior script to append once, if the descriptor names one.
	pub behavior_script: Option<String>,
	/// Route key the address must be updated to reflect, when the access
	/// check redirected.
	pub redirect: Option<String>,
}

/// A script to re-execute after mounting, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptDirective {
	/// Inline script body.
	Inline(String),
	/// Script referenced by source locator.
	External(String),
}

/// Extracts the scripts embedded in `markup`, in document order.
///
/// A `<script>` element with a `src` attribute becomes
/// [`ScriptDirective::External`]; one without becomes
/// [`ScriptDirective::Inline`] carrying its body. Malformed trailing script
/// tags (no closing tag) are ignored.
///
/// # Examples
///
/// ```
/// use eventide_router::plan::{ScriptDirective, extract_scripts};
///
/// let markup = r#"<div></div><script>init();</script>"#;
/// assert_eq!(
///     extract_scripts(markup),
///     vec![ScriptDirective::Inline("init();".to_string())]
/// );
/// ```
pub fn extract_scripts(markup: &str) -> Vec<ScriptDirective> {
	// ASCII-lowercased copy for case-insensitive tag search; byte offsets
	// stay valid in the original.
	let lower = markup.to_ascii_lowercase();
	let mut scripts = Vec::new();
	let mut pos = 0;

	while let Some(rel) = lower[pos..].find("<script") {
		let open_start = pos + rel;
		let after_name = open_start + "<script".len();

		// Require a delimiter after the tag name so "<scripting>" is skipped.
		match lower.as_bytes().get(after_name) {
			Some(b'>') | Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r') | Some(b'/') => {}
			_ => {
				pos = after_name;
				continue;
			}
		}

		let Some(open_end_rel) = lower[after_name..].find('>') else {
			break;
		};
		let open_end = after_name + open_end_rel;
		let attrs = &markup[after_name..open_end];

		let body_start = open_end + 1;
		let Some(close_rel) = lower[body_start..].find("</script") else {
			break;
		};
		let body_end = body_start + close_rel;
		let Some(close_end_rel) = lower[body_end..].find('>') else {
			break;
		};

		if let Some(src) = attribute_value(attrs, "src") {
			scripts.push(ScriptDirective::External(src));
		} else {
			scripts.push(ScriptDirective::Inline(markup[body_start..body_end].to_string()));
		}

		pos = body_end + close_end_rel + 1;
	}

	scripts
}

/// Finds the value of attribute `name` in a tag's attribute text.
///
/// Handles `name="value"`, `name='value'`, and bare `name=value`, with
/// whitespace around the `=`.
fn attribute_value(attrs: &str, name: &str) -> Option<String> {
	let lower = attrs.to_ascii_lowercase();
	let mut search = 0;

	while let Some(rel) = lower[search..].find(name) {
		let at = search + rel;
		search = at + name.len();

		// Word boundary before the attribute name.
		if at > 0 {
			let before = lower.as_bytes()[at - 1];
			if before.is_ascii_alphanumeric() || before == b'-' || before == b'_' {
				continue;
			}
		}

		let rest = attrs[at + name.len()..].trim_start();
		let Some(rest) = rest.strip_prefix('=') else {
			continue;
		};
		let rest = rest.trim_start();

		let value = match rest.as_bytes().first() {
			Some(&quote @ (b'"' | b'\'')) => {
				let inner = &rest[1..];
				let end = inner.find(quote as char)?;
				&inner[..end]
			}
			Some(_) => rest.split_whitespace().next().unwrap_or(""),
			None => "",
		};
		return Some(value.to_string());
	}

	None
}
