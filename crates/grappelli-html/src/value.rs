//! Dynamic values and child flattening.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::escape::escape_html;
use crate::fragment::Html;

/// Event payload passed to handlers.
///
/// Server-side rendering never fires events. This type exists so handler
/// signatures stay identical to a client runtime's and components can be
/// shared without conditional compilation.
#[derive(Debug, Clone, Default)]
pub struct Event;

impl Event {
	/// No-op on the server.
	pub fn prevent_default(&self) {}
}

/// An opaque callable attached to an element.
///
/// Handlers never serialize: as a child they contribute nothing, and as
/// an attribute value they suppress the whole attribute.
#[derive(Clone)]
pub struct EventHandler {
	inner: Arc<dyn Fn(Event) + Send + Sync + 'static>,
}

impl EventHandler {
	/// Wraps a handler function.
	pub fn new(handler: impl Fn(Event) + Send + Sync + 'static) -> Self {
		Self {
			inner: Arc::new(handler),
		}
	}

	/// Invokes the handler. Only a client runtime has a reason to call
	/// this; the serializer never does.
	pub fn call(&self, event: Event) {
		(self.inner)(event)
	}
}

impl fmt::Debug for EventHandler {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EventHandler")
			.field("inner", &"<closure>")
			.finish()
	}
}

/// The dynamic-value union the flattener accepts.
///
/// Classification is total: every convertible input maps to exactly one
/// variant, and rendering matches on all of them with no fallthrough case.
#[derive(Debug, Clone, Default)]
pub enum Value {
	/// Renders nothing (the null/unit/absent case).
	#[default]
	Empty,
	/// Renders nothing as a child, so `cond && markup` style conditionals
	/// collapse cleanly. Stringifies in attribute position.
	Bool(bool),
	/// Integer; stringified, never needs escaping.
	Int(i64),
	/// Float; stringified, never needs escaping.
	Float(f64),
	/// Arbitrary text. Escaped exactly once when rendered.
	Text(Cow<'static, str>),
	/// Ordered sequence, flattened recursively in order.
	List(Vec<Value>),
	/// Pre-rendered fragment, spliced verbatim.
	Html(Html),
	/// Callable. Renders nothing.
	Handler(EventHandler),
}

/// Flattens `value` into its textual contribution.
///
/// Total over the [`Value`] union; recursive, depth-first, left-to-right.
/// `Empty`, `Bool`, and `Handler` values contribute nothing. Lists
/// concatenate their flattened items at arbitrary nesting depth. [`Html`]
/// fragments are spliced verbatim: they were escaped or explicitly
/// trusted at construction time, and this function never touches them
/// again. Bare text is escaped exactly once.
pub fn render_children(value: &Value) -> String {
	let mut out = String::new();
	flatten_into(value, &mut out);
	out
}

pub(crate) fn flatten_into(value: &Value, out: &mut String) {
	match value {
		Value::Empty | Value::Bool(_) | Value::Handler(_) => {}
		// Integer and float formatting never produce reserved characters.
		Value::Int(n) => out.push_str(&n.to_string()),
		Value::Float(n) => out.push_str(&n.to_string()),
		Value::Text(text) => out.push_str(&escape_html(text)),
		Value::List(items) => {
			for item in items {
				flatten_into(item, out);
			}
		}
		Value::Html(html) => out.push_str(html.as_str()),
	}
}

/// Conversion into a [`Value`].
///
/// Mirrors the shapes a markup compiler can hand the runtime: strings and
/// numbers, unit and `Option` for the empty case, vectors and small tuples
/// for sequences, fragments and handlers for the opaque cases.
pub trait IntoValue {
	/// Converts self into a [`Value`].
	fn into_value(self) -> Value;
}

impl IntoValue for Value {
	fn into_value(self) -> Value {
		self
	}
}

impl IntoValue for () {
	fn into_value(self) -> Value {
		Value::Empty
	}
}

impl IntoValue for bool {
	fn into_value(self) -> Value {
		Value::Bool(self)
	}
}

impl IntoValue for String {
	fn into_value(self) -> Value {
		Value::Text(Cow::Owned(self))
	}
}

impl IntoValue for &String {
	fn into_value(self) -> Value {
		Value::Text(Cow::Owned(self.clone()))
	}
}

impl IntoValue for &'static str {
	fn into_value(self) -> Value {
		Value::Text(Cow::Borrowed(self))
	}
}

impl IntoValue for Cow<'static, str> {
	fn into_value(self) -> Value {
		Value::Text(self)
	}
}

impl IntoValue for f32 {
	fn into_value(self) -> Value {
		Value::Float(f64::from(self))
	}
}

impl IntoValue for f64 {
	fn into_value(self) -> Value {
		Value::Float(self)
	}
}

impl IntoValue for Html {
	fn into_value(self) -> Value {
		Value::Html(self)
	}
}

impl IntoValue for EventHandler {
	fn into_value(self) -> Value {
		Value::Handler(self)
	}
}

macro_rules! impl_into_value_for_int {
	($($ty:ty),*) => {
		$(
			impl IntoValue for $ty {
				fn into_value(self) -> Value {
					Value::Int(i64::from(self))
				}
			}
		)*
	};
}

impl_into_value_for_int!(i8, i16, i32, i64, u8, u16, u32);

impl<T: IntoValue> IntoValue for Option<T> {
	fn into_value(self) -> Value {
		match self {
			Some(v) => v.into_value(),
			None => Value::Empty,
		}
	}
}

impl<T: IntoValue> IntoValue for Vec<T> {
	fn into_value(self) -> Value {
		Value::List(self.into_iter().map(IntoValue::into_value).collect())
	}
}

// Tuple implementations for fixed-arity sequences

impl<A: IntoValue, B: IntoValue> IntoValue for (A, B) {
	fn into_value(self) -> Value {
		Value::List(vec![self.0.into_value(), self.1.into_value()])
	}
}

impl<A: IntoValue, B: IntoValue, C: IntoValue> IntoValue for (A, B, C) {
	fn into_value(self) -> Value {
		Value::List(vec![
			self.0.into_value(),
			self.1.into_value(),
			self.2.into_value(),
		])
	}
}

impl<A: IntoValue, B: IntoValue, C: IntoValue, D: IntoValue> IntoValue for (A, B, C, D) {
	fn into_value(self) -> Value {
		Value::List(vec![
			self.0.into_value(),
			self.1.into_value(),
			self.2.into_value(),
			self.3.into_value(),
		])
	}
}
