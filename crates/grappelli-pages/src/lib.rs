//! Component abstraction and document-level SSR rendering.
//!
//! `grappelli-html` serializes individual element trees; this crate adds
//! the two pieces a server needs on top: a [`Component`] trait for
//! reusable struct-based UI units, and an [`SsrRenderer`] that renders a
//! component and wraps it in a complete HTML document.
//!
//! ```
//! use grappelli_html::{Props, RenderError, Value, render};
//! use grappelli_pages::{Component, SsrRenderer};
//!
//! struct Greeting {
//! 	name: String,
//! }
//!
//! impl Component for Greeting {
//! 	fn render(&self) -> Result<Value, RenderError> {
//! 		let el = render(
//! 			"div",
//! 			Props::new()
//! 				.attr("class", "greeting")
//! 				.child(format!("Hello, {}!", self.name)),
//! 		)?;
//! 		Ok(Value::Html(el))
//! 	}
//!
//! 	fn name() -> &'static str {
//! 		"Greeting"
//! 	}
//! }
//!
//! let renderer = SsrRenderer::new();
//! let html = renderer.render(&Greeting { name: "World".into() })?;
//! assert_eq!(html, "<div class=\"greeting\">Hello, World!</div>");
//! # Ok::<(), RenderError>(())
//! ```

mod component;
mod renderer;

pub use component::{Component, DynComponent};
pub use renderer::{SsrOptions, SsrRenderer};
