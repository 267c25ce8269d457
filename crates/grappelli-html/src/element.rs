//! Element and component serialization.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::error::RenderError;
use crate::escape::{contains_reserved, escape_html};
use crate::fragment::Html;
use crate::value::{IntoValue, Value, flatten_into, render_children};

/// HTML void elements: no content, no closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
	"track", "wbr",
];

/// Structural prop names that never appear in the output.
pub const RESERVED_PROPS: &[&str] = &["key", "ref"];

fn is_void(tag: &str) -> bool {
	VOID_ELEMENTS.contains(&tag)
}

/// A component function: takes the element's props, returns a dynamic
/// value that goes through the normal flattening path.
pub type ComponentFn = Arc<dyn Fn(Props) -> Value + Send + Sync>;

/// What a render call targets: a host element or a component.
///
/// The tag-or-component decision is made once, at the call site, instead
/// of being re-discovered from the value's shape at render time.
#[derive(Clone)]
pub enum Target {
	/// A host element with a literal tag name.
	Tag(Cow<'static, str>),
	/// A component invoked with the props.
	Component(ComponentFn),
}

impl Target {
	/// A host-element target.
	pub fn tag(name: impl Into<Cow<'static, str>>) -> Self {
		Target::Tag(name.into())
	}

	/// A component target.
	pub fn component(f: impl Fn(Props) -> Value + Send + Sync + 'static) -> Self {
		Target::Component(Arc::new(f))
	}
}

impl From<&'static str> for Target {
	fn from(tag: &'static str) -> Self {
		Target::Tag(Cow::Borrowed(tag))
	}
}

impl From<String> for Target {
	fn from(tag: String) -> Self {
		Target::Tag(Cow::Owned(tag))
	}
}

impl fmt::Debug for Target {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Target::Tag(tag) => f.debug_tuple("Tag").field(tag).finish(),
			Target::Component(_) => f.debug_tuple("Component").field(&"<fn>").finish(),
		}
	}
}

/// Props for a single render call.
///
/// Builder-style, consumed by [`render`]. Attribute order is preserved.
#[derive(Debug, Default)]
pub struct Props {
	attrs: Vec<(Cow<'static, str>, Value)>,
	children: Value,
	inner_html: Option<Html>,
}

impl Props {
	/// Creates empty props.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds an attribute.
	pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl IntoValue) -> Self {
		self.attrs.push((name.into(), value.into_value()));
		self
	}

	/// Appends a child.
	pub fn child(mut self, child: impl IntoValue) -> Self {
		let child = child.into_value();
		self.children = match std::mem::take(&mut self.children) {
			Value::Empty => child,
			Value::List(mut items) => {
				items.push(child);
				Value::List(items)
			}
			existing => Value::List(vec![existing, child]),
		};
		self
	}

	/// Appends multiple children.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoValue>) -> Self {
		for child in children {
			self = self.child(child);
		}
		self
	}

	/// Sets the element's content to raw, unescaped HTML.
	///
	/// This is the caller-controlled trust boundary: the content is
	/// spliced verbatim and overrides any `children`. Accepts a plain
	/// string or an already-rendered [`Html`] fragment.
	pub fn dangerously_set_inner_html(mut self, html: impl Into<String>) -> Self {
		self.inner_html = Some(Html::from_trusted(html.into()));
		self
	}

	/// Returns the children value.
	pub fn take_children(&mut self) -> Value {
		std::mem::take(&mut self.children)
	}

	/// Looks up an attribute value by name.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v)
	}
}

/// Serializes one attribute as `name="escapedValue"`.
///
/// Returns an empty string, suppressing the attribute, for the
/// structural names in [`RESERVED_PROPS`], for handler values, and for
/// [`Value::Empty`] (an absent value drops the attribute instead of
/// rendering a literal placeholder). Booleans and numbers stringify via
/// their ordinary textual form.
///
/// The value is always escaped; the name never is. Attribute names have no
/// entity encoding in HTML, so a name containing a reserved character is
/// rejected with [`RenderError::InvalidAttributeName`].
pub fn render_attribute(name: &str, value: &Value) -> Result<String, RenderError> {
	if RESERVED_PROPS.contains(&name) || matches!(value, Value::Handler(_) | Value::Empty) {
		return Ok(String::new());
	}
	if contains_reserved(name) {
		return Err(RenderError::InvalidAttributeName {
			name: name.to_string(),
		});
	}

	let mut text = String::new();
	coerce_text(value, &mut text);
	Ok(format!("{name}=\"{}\"", escape_html(&text)))
}

/// Plain textual coercion for attribute values, applied before escaping.
///
/// Unlike child flattening, nothing here is trusted markup: a fragment
/// used in attribute position is just data and its text gets escaped like
/// any other.
fn coerce_text(value: &Value, out: &mut String) {
	match value {
		Value::Empty | Value::Handler(_) => {}
		Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
		Value::Int(n) => out.push_str(&n.to_string()),
		Value::Float(n) => out.push_str(&n.to_string()),
		Value::Text(text) => out.push_str(text),
		Value::List(items) => {
			for item in items {
				coerce_text(item, out);
			}
		}
		Value::Html(html) => out.push_str(html.as_str()),
	}
}

/// Serializes `target` with `props` into a trusted fragment.
///
/// A [`Target::Tag`] emits `<tag attrs>content</tag>`. Members of
/// [`VOID_ELEMENTS`] emit `<tag attrs>` and drop children and inner HTML
/// entirely (HTML forbids them content). When
/// [`Props::dangerously_set_inner_html`] was set, it overrides `children`
/// and splices verbatim.
///
/// A [`Target::Component`] is invoked with the props; its return value is
/// flattened through the normal child path, so returned fragments splice
/// verbatim while returned bare text still gets escaped.
///
/// The result is always an [`Html`] fragment and composes into a parent's
/// children without being escaped again.
pub fn render(target: impl Into<Target>, props: Props) -> Result<Html, RenderError> {
	match target.into() {
		Target::Tag(tag) => render_tag(&tag, props),
		Target::Component(component) => {
			let value = component(props);
			Ok(Html::from_rendered(render_children(&value)))
		}
	}
}

fn render_tag(tag: &str, props: Props) -> Result<Html, RenderError> {
	let mut out = String::with_capacity(tag.len() * 2 + 16);
	out.push('<');
	out.push_str(tag);

	for (name, value) in &props.attrs {
		let attr = render_attribute(name, value)?;
		if !attr.is_empty() {
			out.push(' ');
			out.push_str(&attr);
		}
	}
	out.push('>');

	if is_void(tag) {
		return Ok(Html::from_rendered(out));
	}

	if let Some(inner) = &props.inner_html {
		out.push_str(inner.as_str());
	} else {
		flatten_into(&props.children, &mut out);
	}

	out.push_str("</");
	out.push_str(tag);
	out.push('>');
	Ok(Html::from_rendered(out))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn renders_simple_element() {
		let html = render("div", Props::new()).unwrap();
		assert_eq!(html.as_str(), "<div></div>");
	}

	#[test]
	fn renders_attributes_in_order() {
		let html = render(
			"div",
			Props::new().attr("class", "container").attr("id", "main"),
		)
		.unwrap();
		assert_eq!(html.as_str(), "<div class=\"container\" id=\"main\"></div>");
	}

	#[test]
	fn escapes_attribute_values() {
		let html = render("a", Props::new().attr("href", "/?a=1&b=2")).unwrap();
		assert_eq!(html.as_str(), "<a href=\"/?a=1&amp;b=2\"></a>");
	}

	#[test]
	fn escapes_text_children() {
		let html = render("div", Props::new().child("<span>x</span>")).unwrap();
		assert_eq!(html.as_str(), "<div>&lt;span&gt;x&lt;/span&gt;</div>");
	}

	#[test]
	fn void_element_drops_content_and_closing_tag() {
		let html = render("br", Props::new().child("x")).unwrap();
		assert_eq!(html.as_str(), "<br>");

		let html = render("img", Props::new().attr("src", "a.png").child("alt")).unwrap();
		assert_eq!(html.as_str(), "<img src=\"a.png\">");
	}

	#[test]
	fn void_element_ignores_inner_html() {
		let html = render("hr", Props::new().dangerously_set_inner_html("<b>x</b>")).unwrap();
		assert_eq!(html.as_str(), "<hr>");
	}

	#[test]
	fn inner_html_is_spliced_verbatim_and_overrides_children() {
		let html = render(
			"div",
			Props::new()
				.child("ignored")
				.dangerously_set_inner_html("<span>x</span>"),
		)
		.unwrap();
		assert_eq!(html.as_str(), "<div><span>x</span></div>");
	}

	#[test]
	fn reserved_props_are_suppressed() {
		assert_eq!(render_attribute("key", &"x".into_value()).unwrap(), "");
		assert_eq!(render_attribute("ref", &"x".into_value()).unwrap(), "");

		let html = render("div", Props::new().attr("key", "a").attr("id", "b")).unwrap();
		assert_eq!(html.as_str(), "<div id=\"b\"></div>");
	}

	#[test]
	fn handler_values_suppress_the_attribute() {
		let handler = crate::EventHandler::new(|_| {});
		assert_eq!(
			render_attribute("onclick", &Value::Handler(handler.clone())).unwrap(),
			""
		);

		let html = render(
			"div",
			Props::new().attr("class", "foo").attr("onclick", handler),
		)
		.unwrap();
		assert_eq!(html.as_str(), "<div class=\"foo\"></div>");
	}

	#[test]
	fn empty_value_suppresses_the_attribute() {
		assert_eq!(render_attribute("title", &Value::Empty).unwrap(), "");
		let html = render("div", Props::new().attr("title", None::<String>)).unwrap();
		assert_eq!(html.as_str(), "<div></div>");
	}

	#[test]
	fn bool_and_number_values_stringify() {
		assert_eq!(
			render_attribute("data-on", &true.into_value()).unwrap(),
			"data-on=\"true\""
		);
		assert_eq!(
			render_attribute("data-off", &false.into_value()).unwrap(),
			"data-off=\"false\""
		);
		assert_eq!(
			render_attribute("tabindex", &3.into_value()).unwrap(),
			"tabindex=\"3\""
		);
	}

	#[test]
	fn invalid_attribute_name_is_rejected() {
		let err = render_attribute("&\"'><", &"foo".into_value()).unwrap_err();
		assert_eq!(
			err,
			RenderError::InvalidAttributeName {
				name: "&\"'><".to_string()
			}
		);
	}

	#[test]
	fn invalid_attribute_name_aborts_the_render_call() {
		let result = render("div", Props::new().attr("a<b", "x"));
		assert!(matches!(
			result,
			Err(RenderError::InvalidAttributeName { .. })
		));
	}

	#[test]
	fn attribute_values_encode_all_entities() {
		let attr = render_attribute("foo", &"&\"'><&\"'><".into_value()).unwrap();
		assert_eq!(
			attr,
			"foo=\"&amp;&quot;&#39;&gt;&lt;&amp;&quot;&#39;&gt;&lt;\""
		);
	}

	#[test]
	fn fragment_in_attribute_position_is_escaped_as_data() {
		let fragment = Html::from_trusted("<b>x</b>");
		assert_eq!(
			render_attribute("data-html", &fragment.into_value()).unwrap(),
			"data-html=\"&lt;b&gt;x&lt;/b&gt;\""
		);
	}

	#[test]
	fn component_target_is_invoked_with_props() {
		let target = Target::component(|mut props: Props| props.take_children());
		let html = render(target, Props::new().child("a & b")).unwrap();
		assert_eq!(html.as_str(), "a &amp; b");
	}

	#[test]
	fn component_returning_fragment_splices_verbatim() {
		let target = Target::component(|_| Html::from_trusted("<p></p>").into_value());
		let html = render(target, Props::new()).unwrap();
		assert_eq!(html.as_str(), "<p></p>");
	}

	#[test]
	fn nested_renders_never_double_escape() {
		let inner = render("span", Props::new().child("a&b")).unwrap();
		let outer = render("div", Props::new().child(inner)).unwrap();
		assert_eq!(outer.as_str(), "<div><span>a&amp;b</span></div>");
	}

	#[test]
	fn props_get_finds_attribute() {
		let props = Props::new().attr("id", "main");
		assert!(matches!(props.get("id"), Some(Value::Text(t)) if t == "main"));
		assert!(props.get("class").is_none());
	}
}
