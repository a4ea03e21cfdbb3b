//! Property-path predicates over `serde_json` values.
//!
//! This module provides a small accessor for nested values and two
//! predicate constructors built on it:
//!
//! - [`get`]: look up a value by [`PropertyPath`]
//! - [`prop_exists`]: the raw value at a path, usable as a predicate
//! - [`prop_equals`]: whether the value at a path is strictly equal to a
//!   given value
//!
//! Containers are anything implementing [`Props`]: a [`serde_json::Value`],
//! a [`serde_json::Map`], or an `Option` of either, where `None` stands for
//! an absent container.
//!
//! # Examples
//!
//! ```
//! use combinars::props::{prop_equals, prop_exists};
//! use combinars::Truthy;
//! use serde_json::{json, Value};
//!
//! let name_exists = prop_exists("name");
//! assert!(name_exists(&Some(json!({ "name": "Gabrielle" }))).is_truthy());
//! assert!(name_exists(&Some(json!({ "name": true }))).is_truthy());
//! assert!(name_exists(&Some(json!({}))).is_falsy());
//! assert!(name_exists(&None::<Value>).is_falsy());
//!
//! let user_name_is_sam = prop_equals("user.name", "Sam");
//! assert!(user_name_is_sam(&json!({ "user": { "name": "Sam" } })));
//! assert!(!user_name_is_sam(&json!({ "user": { "name": "Frodo" } })));
//! ```

mod access;
mod path;

pub use access::{Props, get};
pub use path::{PropertyPath, Segment};

use serde_json::Value;

/// Returns a function yielding the value found at `path`.
///
/// The value is handed back as found (cloned), not coerced to `bool`, so it
/// can feed later computation as well as act as a predicate through
/// [`Truthy`](crate::Truthy). A `0`, `""`, `false` or `null` found at the
/// path is falsy, and so is an absent path or container (`None`).
///
/// # Examples
///
/// ```
/// use combinars::props::prop_exists;
/// use serde_json::json;
///
/// let city = prop_exists("address.city");
/// assert_eq!(city(&json!({ "address": { "city": "Lyon" } })), Some(json!("Lyon")));
/// assert_eq!(city(&json!({ "address": {} })), None);
/// ```
pub fn prop_exists<A, K>(path: K) -> impl Fn(&A) -> Option<Value>
where
    A: Props + ?Sized,
    K: Into<PropertyPath>,
{
    let path = path.into();
    move |props| props.prop(&path).cloned()
}

/// Returns a predicate that is `true` iff the value at `path` is strictly
/// equal to `value`.
///
/// See [`strict_equals`] for what "strictly equal" means. An absent path or
/// container is never equal.
///
/// # Examples
///
/// ```
/// use combinars::props::prop_equals;
/// use serde_json::{json, Value};
///
/// let five = prop_equals("x", 5);
/// assert!(five(&json!({ "x": 5 })));
/// assert!(five(&json!({ "x": 5.0 })));
/// assert!(!five(&json!({ "x": "5" })));
/// let five_opt = prop_equals("x", 5);
/// assert!(!five_opt(&None::<Value>));
/// ```
pub fn prop_equals<A, K, V>(path: K, value: V) -> impl Fn(&A) -> bool
where
    A: Props + ?Sized,
    K: Into<PropertyPath>,
    V: Into<Value>,
{
    let path = path.into();
    let expected = value.into();
    move |props| {
        props
            .prop(&path)
            .is_some_and(|found| strict_equals(found, &expected))
    }
}

/// Identity-style equality on JSON values.
///
/// - `null`, booleans and strings compare by value
/// - numbers compare by numeric value, so `5` equals `5.0`
/// - values of different kinds are never equal (`5` is not `"5"`)
/// - arrays and objects are never equal, because two separately owned
///   compound values are never the same instance
///
/// # Examples
///
/// ```
/// use combinars::props::strict_equals;
/// use serde_json::json;
///
/// assert!(strict_equals(&json!(1), &json!(1.0)));
/// assert!(!strict_equals(&json!(true), &json!(1)));
/// assert!(!strict_equals(&json!([1]), &json!([1])));
/// ```
pub fn strict_equals(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(left), Value::Bool(right)) => left == right,
        (Value::String(left), Value::String(right)) => left == right,
        (Value::Number(left), Value::Number(right)) => {
            if let (Some(left), Some(right)) = (left.as_i64(), right.as_i64()) {
                left == right
            } else if let (Some(left), Some(right)) = (left.as_u64(), right.as_u64()) {
                left == right
            } else {
                #[allow(clippy::float_cmp)]
                let equal = left.as_f64() == right.as_f64();
                equal
            }
        }
        _ => false,
    }
}
