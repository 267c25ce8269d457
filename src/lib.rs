//! # Grappelli
//!
//! A server-side HTML rendering runtime: element and component trees in,
//! one escaped HTML string out.
//!
//! Grappelli is the runtime half of a precompiled markup pipeline. An
//! upstream compiler lowers tag syntax into calls to [`render`] and
//! [`render_template`]; this crate owns the part that has to be correct:
//! the escaping and serialization core.
//!
//! - **Escaper** ([`escape_html`]): replaces the five HTML-reserved
//!   characters with entities in a single left-to-right pass.
//! - **Value classifier and flattener** ([`Value`], [`render_children`]):
//!   decides what a dynamic value contributes to the output and whether it
//!   needs escaping.
//! - **Element and template serializers** ([`render`],
//!   [`render_template`]): build tag markup and splice precompiled static
//!   parts around per-render dynamic slots.
//!
//! Serialized output is always an [`Html`] trusted fragment. Fragments
//! splice into parent renders verbatim, so composed markup is escaped
//! exactly once, at the point where data entered the tree.
//!
//! ## Feature flags
//!
//! - `pages` (default): the [`Component`] trait and the document-level
//!   [`SsrRenderer`] from `grappelli-pages`.
//!
//! ## Quick example
//!
//! ```
//! use grappelli::{render, render_template, Props, Value};
//!
//! let item = render("li", Props::new().child("a & b"))?;
//! let page = render_template(&["<ul>", "</ul>"], vec![Value::Html(item)]);
//! assert_eq!(page.as_str(), "<ul><li>a &amp; b</li></ul>");
//! # Ok::<(), grappelli::RenderError>(())
//! ```

pub use grappelli_html::{
	Event, EventHandler, Html, IntoValue, Props, RESERVED_PROPS, RenderError, Target, VOID_ELEMENTS,
	Value, escape_html, render, render_attribute, render_children, render_template,
};

#[cfg(feature = "pages")]
pub use grappelli_pages::{Component, DynComponent, SsrOptions, SsrRenderer};

pub mod prelude {
	//! Commonly used items, for glob import.

	pub use crate::{Html, IntoValue, Props, RenderError, Value, render, render_template};

	#[cfg(feature = "pages")]
	pub use crate::{Component, SsrOptions, SsrRenderer};
}
