//! Document-level SSR renderer.

use grappelli_html::{Html, RenderError, escape_html, render_children};
use tracing::debug;

use crate::component::Component;

/// Options for SSR rendering.
#[derive(Debug, Clone)]
pub struct SsrOptions {
	/// Whether to minify the output.
	pub minify: bool,
	/// Language attribute for the `<html>` element.
	pub lang: String,
	/// Document title, escaped into `<title>` when present.
	pub title: Option<String>,
}

impl Default for SsrOptions {
	fn default() -> Self {
		Self {
			minify: false,
			lang: "en".to_string(),
			title: None,
		}
	}
}

impl SsrOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the language.
	pub fn lang(mut self, lang: impl Into<String>) -> Self {
		self.lang = lang.into();
		self
	}

	/// Enables minification.
	pub fn minify(mut self) -> Self {
		self.minify = true;
		self
	}

	/// Sets the document title.
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}
}

/// Renders components into complete HTML documents.
pub struct SsrRenderer {
	options: SsrOptions,
}

impl Default for SsrRenderer {
	fn default() -> Self {
		Self::new()
	}
}

impl SsrRenderer {
	/// Creates a renderer with default options.
	pub fn new() -> Self {
		Self {
			options: SsrOptions::default(),
		}
	}

	/// Creates a renderer with custom options.
	pub fn with_options(options: SsrOptions) -> Self {
		Self { options }
	}

	/// Renders a component to an HTML string.
	pub fn render<C: Component>(&self, component: &C) -> Result<String, RenderError> {
		debug!(component = C::name(), "rendering component");
		let value = component.render()?;
		Ok(render_children(&value))
	}

	/// Renders a component to a full HTML page.
	pub fn render_page<C: Component>(&self, component: &C) -> Result<String, RenderError> {
		let content = self.render(component)?;
		Ok(self.wrap_in_html(&content))
	}

	/// Renders a pre-rendered fragment to a full HTML page.
	pub fn render_fragment_page(&self, fragment: &Html) -> String {
		self.wrap_in_html(fragment.as_str())
	}

	/// Wraps already-rendered body content in a complete HTML document.
	///
	/// The content is spliced verbatim; it is expected to be serializer
	/// output. Option-sourced strings (`lang`, `title`) are escaped.
	pub fn wrap_in_html(&self, content: &str) -> String {
		let mut html = String::with_capacity(content.len() + 256);

		html.push_str("<!DOCTYPE html>\n");
		html.push_str("<html lang=\"");
		html.push_str(&escape_html(&self.options.lang));
		html.push_str("\">\n<head>\n<meta charset=\"UTF-8\">\n");
		html.push_str(
			"<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
		);
		if let Some(title) = &self.options.title {
			html.push_str("<title>");
			html.push_str(&escape_html(title));
			html.push_str("</title>\n");
		}
		html.push_str("</head>\n<body>\n");
		html.push_str(content);
		html.push_str("\n</body>\n</html>");

		if self.options.minify {
			minify_html(&html)
		} else {
			html
		}
	}
}

/// Maximum input size for HTML minification (1 MiB).
///
/// Larger inputs are returned unmodified.
const MINIFY_HTML_MAX_INPUT_SIZE: usize = 1024 * 1024;

/// Collapses whitespace runs to a single space, outside `<pre>` blocks.
fn minify_html(html: &str) -> String {
	if html.len() > MINIFY_HTML_MAX_INPUT_SIZE {
		return html.to_string();
	}

	let mut out = String::with_capacity(html.len());
	let mut prev_was_whitespace = false;
	let mut in_pre = false;
	let mut chars = html.char_indices().peekable();

	while let Some((pos, c)) = chars.next() {
		let rest = &html[pos..];

		if !in_pre
			&& c == '<'
			&& rest.strip_prefix("<pre").is_some_and(|after| {
				after.is_empty() || after.starts_with(|ch: char| ch == '>' || ch.is_ascii_whitespace())
			}) {
			in_pre = true;
		}

		if in_pre && c == '<' && rest.starts_with("</pre>") {
			out.push_str("</pre>");
			// '<' is already consumed; skip the other five chars.
			for _ in 0..5 {
				chars.next();
			}
			in_pre = false;
			prev_was_whitespace = false;
			continue;
		}

		if in_pre {
			out.push(c);
		} else if c.is_whitespace() {
			if !prev_was_whitespace {
				out.push(' ');
				prev_was_whitespace = true;
			}
		} else {
			out.push(c);
			prev_was_whitespace = false;
		}
	}

	out
}
