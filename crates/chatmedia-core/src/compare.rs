//! Order-insensitive structural comparison over JSON-like values.

use serde_json::Value;

/// Compare two slices as multisets: sorted copies must match element-wise,
/// including length. The inputs are never mutated and duplicate counts matter.
pub fn sorted_arrays_equal<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a_sorted = a.to_vec();
    let mut b_sorted = b.to_vec();
    a_sorted.sort();
    b_sorted.sort();
    a_sorted == b_sorted
}

/// Structural equality over JSON trees, insensitive to object key order at
/// every nesting level. Array element order stays significant.
///
/// `None` and `Some(Value::Null)` are both the same "absent" value: absent vs.
/// absent is equal, absent vs. any concrete value is not.
pub fn deep_equal(a: Option<&Value>, b: Option<&Value>) -> bool {
    match (normalize(a), normalize(b)) {
        (None, None) => true,
        (Some(a), Some(b)) => values_equal(a, b),
        _ => false,
    }
}

fn normalize(value: Option<&Value>) -> Option<&Value> {
    match value {
        None | Some(Value::Null) => None,
        concrete => concrete,
    }
}

fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, va)| b.get(key).is_some_and(|vb| values_equal(va, vb)))
        }
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(va, vb)| values_equal(va, vb))
        }
        _ => a == b,
    }
}
