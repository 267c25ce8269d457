//! Escaping and serialization core.
//!
//! This crate turns trees of UI-description values into final HTML
//! strings. It is purely synchronous, allocates only the output it
//! returns, and keeps one hard security invariant: arbitrary dynamic data
//! is escaped exactly once, while [`Html`] fragments produced by the
//! serializers themselves are spliced verbatim and never re-escaped.
//!
//! ## Overview
//!
//! ```
//! use grappelli_html::{Props, render};
//!
//! let html = render(
//! 	"a",
//! 	Props::new()
//! 		.attr("href", "/search?q=rust&lang=en")
//! 		.child("Tom & Jerry"),
//! )?;
//! assert_eq!(
//! 	html.as_str(),
//! 	"<a href=\"/search?q=rust&amp;lang=en\">Tom &amp; Jerry</a>",
//! );
//! # Ok::<(), grappelli_html::RenderError>(())
//! ```

mod element;
mod error;
mod escape;
mod fragment;
mod template;
mod value;

pub use element::{Props, RESERVED_PROPS, Target, VOID_ELEMENTS, render, render_attribute};
pub use error::RenderError;
pub use escape::escape_html;
pub use fragment::Html;
pub use template::render_template;
pub use value::{Event, EventHandler, IntoValue, Value, render_children};
