//! Constant, negation and conditional combinators.
//!
//! - [`pure`]: a function that ignores its argument (K combinator)
//! - [`not`]: complement of a predicate
//! - [`when`] / [`when_else`]: pick a branch from a condition

use crate::truthy::Truthy;

/// Creates a function that always returns the given value, ignoring its
/// argument.
///
/// Also known as the K combinator. The returned function clones `value` on
/// every call.
///
/// # Examples
///
/// ```
/// use combinars::predicate::pure;
///
/// let always_five = pure(5);
/// assert_eq!(always_five(&"ignored"), 5);
///
/// let always_hello = pure(String::from("hello"));
/// assert_eq!(always_hello(&(1, 2, 3)), "hello");
/// ```
#[inline]
pub fn pure<T: Clone, A: ?Sized>(value: T) -> impl Fn(&A) -> T {
    move |_| value.clone()
}

/// Returns a predicate that is `true` exactly when `function`'s result is
/// falsy.
///
/// `function` is always invoked, so its side effects still happen.
///
/// # Examples
///
/// ```
/// use combinars::predicate::not;
///
/// let is_odd = not(|n: &i32| n % 2 == 0);
/// assert!(is_odd(&3));
/// assert!(!is_odd(&4));
///
/// let is_blank = not(|text: &str| text.trim().to_string());
/// assert!(is_blank("   "));
/// ```
#[inline]
pub fn not<A, R, F>(function: F) -> impl Fn(&A) -> bool
where
    A: ?Sized,
    R: Truthy,
    F: Fn(&A) -> R,
{
    move |arguments| function(arguments).is_falsy()
}

/// Returns a function that runs `if_true` when `condition` is truthy.
///
/// On a falsy condition the result is `None`. Use [`when_else`] to supply
/// the other branch.
///
/// # Examples
///
/// ```
/// use combinars::predicate::when;
///
/// let describe_digits = when(
///     |message: &str| !message.is_empty() && message.chars().all(|c| c.is_ascii_digit()),
///     |message: &str| format!("{message} is a whole number"),
/// );
///
/// assert_eq!(describe_digits("5"), Some(String::from("5 is a whole number")));
/// assert_eq!(describe_digits("5.1"), None);
/// ```
#[inline]
pub fn when<A, C, R, P, T>(condition: P, if_true: T) -> impl Fn(&A) -> Option<R>
where
    A: ?Sized,
    C: Truthy,
    P: Fn(&A) -> C,
    T: Fn(&A) -> R,
{
    move |arguments| {
        if condition(arguments).is_truthy() {
            Some(if_true(arguments))
        } else {
            None
        }
    }
}

/// Returns a function that runs `if_true` when `condition` is truthy and
/// `if_false` otherwise.
///
/// `condition` and the chosen branch receive the same argument.
///
/// # Examples
///
/// ```
/// use combinars::predicate::when_else;
///
/// let parity = when_else(
///     |n: &u32| n % 2 == 0,
///     |n: &u32| format!("{n} is even"),
///     |n: &u32| format!("{n} is odd"),
/// );
///
/// assert_eq!(parity(&4), "4 is even");
/// assert_eq!(parity(&7), "7 is odd");
/// ```
#[inline]
pub fn when_else<A, C, R, P, T, F>(condition: P, if_true: T, if_false: F) -> impl Fn(&A) -> R
where
    A: ?Sized,
    C: Truthy,
    P: Fn(&A) -> C,
    T: Fn(&A) -> R,
    F: Fn(&A) -> R,
{
    move |arguments| {
        if condition(arguments).is_truthy() {
            if_true(arguments)
        } else {
            if_false(arguments)
        }
    }
}
