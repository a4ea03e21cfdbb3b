//! Looking up values by property path.

use serde_json::{Map, Value};

use super::path::{PropertyPath, Segment};

/// A container that values can be looked up in by [`PropertyPath`].
///
/// Lookups never fail loudly: a missing key, an out-of-range index, a
/// segment that steps into a scalar, or an absent container all yield
/// `None`.
pub trait Props {
    /// Returns the value at `path`, if every segment resolves.
    fn prop(&self, path: &PropertyPath) -> Option<&Value>;
}

impl Props for Value {
    /// The empty path addresses the value itself.
    fn prop(&self, path: &PropertyPath) -> Option<&Value> {
        path.segments()
            .iter()
            .try_fold(self, |current, segment| step(current, segment))
    }
}

impl Props for Map<String, Value> {
    /// The empty path resolves to nothing, since a map is not itself a
    /// [`Value`].
    fn prop(&self, path: &PropertyPath) -> Option<&Value> {
        let (head, rest) = path.segments().split_first()?;
        let start = match head {
            Segment::Key(key) => self.get(key),
            Segment::Index(index) => self.get(&index.to_string()),
        }?;
        rest.iter()
            .try_fold(start, |current, segment| step(current, segment))
    }
}

impl<T: Props> Props for Option<T> {
    fn prop(&self, path: &PropertyPath) -> Option<&Value> {
        self.as_ref()?.prop(path)
    }
}

impl<T: Props + ?Sized> Props for &T {
    fn prop(&self, path: &PropertyPath) -> Option<&Value> {
        (**self).prop(path)
    }
}

impl<T: Props + ?Sized> Props for Box<T> {
    fn prop(&self, path: &PropertyPath) -> Option<&Value> {
        (**self).prop(path)
    }
}

fn step<'a>(current: &'a Value, segment: &Segment) -> Option<&'a Value> {
    match (current, segment) {
        (Value::Object(map), Segment::Key(key)) => map.get(key),
        (Value::Object(map), Segment::Index(index)) => map.get(&index.to_string()),
        (Value::Array(items), Segment::Index(index)) => items.get(*index),
        (Value::Array(items), Segment::Key(key)) => {
            array_index(key).and_then(|index| items.get(index))
        }
        _ => None,
    }
}

/// Canonical decimal indices only: `"01"` and `"+1"` are plain keys.
fn array_index(key: &str) -> Option<usize> {
    let index = key.parse::<usize>().ok()?;
    (index.to_string() == key).then_some(index)
}

/// Returns the value at `path` inside `container`, or `None` if any segment
/// is missing.
///
/// Dots in a path string always separate keys, even when the container
/// holds a key that literally contains a dot. Address such a key with the
/// quoted bracket form, as in `meta["a.b"]`.
///
/// # Examples
///
/// ```
/// use combinars::props::get;
/// use serde_json::{json, Value};
///
/// let user = json!({ "user": { "name": "Sam", "roles": ["admin", "ops"] } });
///
/// assert_eq!(get(&user, "user.name"), Some(&json!("Sam")));
/// assert_eq!(get(&user, "user.roles[1]"), Some(&json!("ops")));
/// assert_eq!(get(&user, "user.roles.0"), Some(&json!("admin")));
/// assert_eq!(get(&user, "user.email"), None);
/// assert_eq!(get(&user, "user.name.first"), None);
///
/// let absent: Option<Value> = None;
/// assert_eq!(get(&absent, "user.name"), None);
///
/// let dotted = json!({ "a.b": 1 });
/// assert_eq!(get(&dotted, "a.b"), None);
/// assert_eq!(get(&dotted, r#"["a.b"]"#), Some(&json!(1)));
/// ```
pub fn get<'a, P, K>(container: &'a P, path: K) -> Option<&'a Value>
where
    P: Props + ?Sized,
    K: Into<PropertyPath>,
{
    container.prop(&path.into())
}
