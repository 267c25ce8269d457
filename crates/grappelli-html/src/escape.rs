//! HTML entity escaping.

use std::borrow::Cow;

/// Escapes the five HTML-reserved characters in `s`.
///
/// Replaces `"` `&` `'` `<` `>` with `&quot;` `&amp;` `&#39;` `&lt;`
/// `&gt;`. All other characters, multi-byte code points included, pass
/// through unchanged in their original order.
///
/// Returns `Cow::Borrowed` of the input when nothing needs replacing, so
/// the common all-clean case costs no allocation. Replacement happens in
/// one left-to-right pass over the input; emitted entity text is never
/// rescanned, so `&"` becomes `&amp;&quot;` rather than the double-escaped
/// output a sequential per-character replace would produce.
pub fn escape_html(s: &str) -> Cow<'_, str> {
	let bytes = s.as_bytes();
	let Some(first) = bytes.iter().position(|&b| entity(b).is_some()) else {
		return Cow::Borrowed(s);
	};

	// Every index used for slicing sits on a single-byte ASCII character,
	// so the slices below stay on char boundaries.
	let mut out = String::with_capacity(s.len() + 8);
	out.push_str(&s[..first]);
	let mut last = first;
	for (i, &b) in bytes.iter().enumerate().skip(first) {
		let Some(entity) = entity(b) else { continue };
		if i != last {
			out.push_str(&s[last..i]);
		}
		out.push_str(entity);
		last = i + 1;
	}
	out.push_str(&s[last..]);
	Cow::Owned(out)
}

fn entity(b: u8) -> Option<&'static str> {
	match b {
		b'"' => Some("&quot;"),
		b'&' => Some("&amp;"),
		b'\'' => Some("&#39;"),
		b'<' => Some("&lt;"),
		b'>' => Some("&gt;"),
		_ => None,
	}
}

/// True when `s` contains any character `escape_html` would replace.
pub(crate) fn contains_reserved(s: &str) -> bool {
	s.bytes().any(|b| entity(b).is_some())
}
