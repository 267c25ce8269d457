//! Component trait definition.

use grappelli_html::{RenderError, Value};

/// Trait for reusable UI components.
///
/// Components encapsulate state and rendering logic. They render to a
/// [`Value`], so a component can return a serialized element fragment,
/// bare text (escaped on output), a list of either, or nothing at all.
///
/// # Example
///
/// ```
/// use grappelli_html::{Props, RenderError, Value, render};
/// use grappelli_pages::Component;
///
/// struct Badge {
/// 	label: String,
/// }
///
/// impl Component for Badge {
/// 	fn render(&self) -> Result<Value, RenderError> {
/// 		let el = render(
/// 			"span",
/// 			Props::new().attr("class", "badge").child(self.label.clone()),
/// 		)?;
/// 		Ok(Value::Html(el))
/// 	}
///
/// 	fn name() -> &'static str {
/// 		"Badge"
/// 	}
/// }
/// ```
pub trait Component: 'static {
	/// Renders the component to a dynamic value.
	fn render(&self) -> Result<Value, RenderError>;

	/// Returns the component's name for debugging and logging.
	fn name() -> &'static str
	where
		Self: Sized;
}

/// A boxed component for dynamic dispatch.
pub struct DynComponent {
	inner: Box<dyn Component>,
	name: &'static str,
}

impl DynComponent {
	/// Boxes a component, capturing its name.
	pub fn new<T: Component>(component: T) -> Self {
		Self {
			inner: Box::new(component),
			name: T::name(),
		}
	}

	/// Returns the component's name.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Renders the boxed component.
	pub fn render(&self) -> Result<Value, RenderError> {
		self.inner.render()
	}
}

impl std::fmt::Debug for DynComponent {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DynComponent")
			.field("name", &self.name)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use grappelli_html::{Props, render, render_children};

	struct TestComponent {
		message: String,
	}

	impl Component for TestComponent {
		fn render(&self) -> Result<Value, RenderError> {
			let el = render("div", Props::new().child(self.message.clone()))?;
			Ok(Value::Html(el))
		}

		fn name() -> &'static str {
			"TestComponent"
		}
	}

	#[test]
	fn component_renders_to_value() {
		let comp = TestComponent {
			message: "Hello".to_string(),
		};
		let value = comp.render().unwrap();
		assert_eq!(render_children(&value), "<div>Hello</div>");
	}

	#[test]
	fn component_name() {
		assert_eq!(TestComponent::name(), "TestComponent");
	}

	#[test]
	fn dyn_component_preserves_name_and_output() {
		let comp = DynComponent::new(TestComponent {
			message: "Dynamic".to_string(),
		});
		assert_eq!(comp.name(), "TestComponent");
		let value = comp.render().unwrap();
		assert_eq!(render_children(&value), "<div>Dynamic</div>");
	}

	#[test]
	fn component_returning_text_is_escaped_on_output() {
		struct Plain;
		impl Component for Plain {
			fn render(&self) -> Result<Value, RenderError> {
				Ok(Value::Text("a & b".into()))
			}
			fn name() -> &'static str {
				"Plain"
			}
		}
		let value = Plain.render().unwrap();
		assert_eq!(render_children(&value), "a &amp; b");
	}
}
