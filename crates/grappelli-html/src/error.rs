//! Render errors.

use thiserror::Error;

/// Errors raised while serializing markup.
///
/// Escaping, flattening, and element serialization are total over their
/// inputs; the one failure mode is a malformed attribute name. HTML has no
/// entity encoding for names, so a reserved character there cannot be
/// sanitized; it signals a construction bug upstream and aborts the whole
/// render call rather than silently dropping the attribute.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
	/// Attribute name contains one of `"` `&` `'` `<` `>`.
	#[error("invalid attribute name: {name}")]
	InvalidAttributeName {
		/// The offending name, verbatim.
		name: String,
	},
}
