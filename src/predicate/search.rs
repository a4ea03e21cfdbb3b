//! Short-circuiting searches over a list of functions.
//!
//! All three combinators probe their functions in order with the same
//! argument and stop as soon as the answer is known:
//!
//! - [`first`] stops at the first truthy result and returns it
//! - [`any`] stops at the first truthy result and returns `true`
//! - [`all`] stops at the first falsy result and returns `false`
//!
//! Functions after the deciding one are never invoked.
//!
//! The lists are homogeneous, so closures of different types need boxing.
//! The [`first!`](crate::first), [`any!`](crate::any) and
//! [`all!`](crate::all) macros avoid that by expanding to a closure chain.

use crate::truthy::Truthy;

/// Returns a function yielding the first truthy result of `functions`.
///
/// Returns `None` when every function yields a falsy result (or the list
/// is empty).
///
/// # Examples
///
/// ```
/// use combinars::predicate::first;
///
/// type Lookup = Box<dyn Fn(&str) -> Option<&'static str>>;
///
/// let resolve = first(vec![
///     Box::new(|key: &str| (key == "home").then_some("/home/sam")) as Lookup,
///     Box::new(|key: &str| (key == "tmp").then_some("/tmp")),
/// ]);
///
/// assert_eq!(resolve("tmp"), Some(Some("/tmp")));
/// assert_eq!(resolve("etc"), None);
/// ```
pub fn first<A, R, F, I>(functions: I) -> impl Fn(&A) -> Option<R>
where
    A: ?Sized,
    R: Truthy,
    F: Fn(&A) -> R,
    I: IntoIterator<Item = F>,
{
    let functions: Vec<F> = functions.into_iter().collect();
    move |arguments| {
        functions
            .iter()
            .map(|function| function(arguments))
            .find(|result| result.is_truthy())
    }
}

/// Returns a predicate that is `true` if any of `functions` yields a truthy
/// result.
///
/// Only the answer is kept. Use [`first`] to get the truthy result itself.
///
/// # Examples
///
/// ```
/// use combinars::predicate::any;
///
/// let odd_or_less_than_ten = any(vec![
///     Box::new(|n: &i32| n % 2 == 1) as Box<dyn Fn(&i32) -> bool>,
///     Box::new(|n: &i32| *n < 10),
/// ]);
///
/// assert!(odd_or_less_than_ten(&15));
/// assert!(odd_or_less_than_ten(&8));
/// assert!(!odd_or_less_than_ten(&12));
/// ```
pub fn any<A, R, F, I>(functions: I) -> impl Fn(&A) -> bool
where
    A: ?Sized,
    R: Truthy,
    F: Fn(&A) -> R,
    I: IntoIterator<Item = F>,
{
    let functions: Vec<F> = functions.into_iter().collect();
    move |arguments| {
        functions
            .iter()
            .any(|function| function(arguments).is_truthy())
    }
}

/// Returns a predicate that is `true` when every one of `functions` yields
/// a truthy result.
///
/// An empty list is vacuously `true`.
///
/// # Examples
///
/// ```
/// use combinars::predicate::all;
///
/// fn less_than_ten(n: &i32) -> bool { *n < 10 }
/// fn greater_than_four(n: &i32) -> bool { *n > 4 }
/// fn even(n: &i32) -> bool { n % 2 == 0 }
///
/// let check = all([less_than_ten as fn(&i32) -> bool, greater_than_four, even]);
///
/// assert!(!check(&7));
/// assert!(check(&8));
/// assert!(!check(&2));
/// ```
pub fn all<A, R, F, I>(functions: I) -> impl Fn(&A) -> bool
where
    A: ?Sized,
    R: Truthy,
    F: Fn(&A) -> R,
    I: IntoIterator<Item = F>,
{
    let functions: Vec<F> = functions.into_iter().collect();
    move |arguments| {
        functions
            .iter()
            .all(|function| function(arguments).is_truthy())
    }
}
