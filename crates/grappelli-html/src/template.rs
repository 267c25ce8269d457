//! Precompiled template splicing.

use crate::fragment::Html;
use crate::value::{Value, flatten_into};

/// Splices static template parts around flattened dynamic slots.
///
/// `statics` is authored by the upstream compiler and inserted verbatim;
/// this path exists so constant markup can be hoisted ahead of time and
/// only the varying parts pay per-render cost. Every entry of `dynamics`
/// goes through the same flattener as element children, so lists,
/// fragments, and bare values behave identically in both positions.
///
/// Slot `i` lands after `statics[i]`, so the expected shape is `n + 1`
/// static parts around `n` dynamics. Arity is the compiler's contract, not
/// ours: with surplus dynamics the first extra lands after the final
/// static part (one slot per static) and the rest are dropped; missing
/// dynamics contribute nothing.
pub fn render_template(statics: &[&str], dynamics: Vec<Value>) -> Html {
	let mut out = String::with_capacity(statics.iter().map(|s| s.len()).sum());
	let mut dynamics = dynamics.into_iter();
	for part in statics {
		out.push_str(part);
		if let Some(value) = dynamics.next() {
			flatten_into(&value, &mut out);
		}
	}
	Html::from_rendered(out)
}
