//! Trusted HTML fragments.

use std::fmt;

/// A string that is already final HTML.
///
/// `Html` values come out of this crate's serializers ([`render`],
/// [`render_template`]) or out of [`Html::from_trusted`], the one explicit
/// trust boundary for caller-supplied raw markup. The inner string is
/// private, so ordinary data cannot be shaped into a fragment; it has to
/// pass through the escaper to get here.
///
/// Splicing an `Html` into a parent render inserts it verbatim; it is
/// never escaped a second time.
///
/// [`render`]: crate::render
/// [`render_template`]: crate::render_template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Html(String);

impl Html {
	/// Wraps a string the caller vouches for as final HTML.
	///
	/// Nothing is escaped or validated; the content lands in the output
	/// verbatim. Anything user-controlled must go through the normal
	/// value path instead.
	pub fn from_trusted(html: impl Into<String>) -> Self {
		Html(html.into())
	}

	/// Wraps serializer output. Internal return path only.
	pub(crate) fn from_rendered(html: String) -> Self {
		Html(html)
	}

	/// Returns the fragment's HTML.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Unwraps the final HTML string for transmission or storage.
	pub fn into_string(self) -> String {
		self.0
	}

	/// True when the fragment holds no output at all.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<Html> for String {
	fn from(html: Html) -> Self {
		html.0
	}
}

impl AsRef<str> for Html {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Html {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}
