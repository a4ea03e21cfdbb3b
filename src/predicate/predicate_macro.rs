//! Variadic forms of the search and sequence combinators.
//!
//! The function forms take a homogeneous list, so closures of different
//! types have to be boxed. These macros accept any mix of functions and
//! expand to a chain of closures instead, in the same way `compose!`-style
//! macros nest their inner functions.
//!
//! Every function in the chain receives the same `&A` argument. The closures
//! are moved into the chain when the macro is evaluated.

/// Returns the first truthy result of the given functions, as an `Option`.
///
/// All functions must share the same result type.
///
/// # Examples
///
/// ```
/// use combinars::first;
///
/// let name_or_login = first!(
///     |user: &(&str, &str)| user.0.to_string(),
///     |user: &(&str, &str)| user.1.to_string(),
/// );
///
/// assert_eq!(name_or_login(&("Gabrielle", "gab")), Some(String::from("Gabrielle")));
/// assert_eq!(name_or_login(&("", "gab")), Some(String::from("gab")));
/// assert_eq!(name_or_login(&("", "")), None);
/// ```
#[macro_export]
macro_rules! first {
    ($function:expr $(,)?) => {{
        let function = $function;
        move |arguments: &_| {
            let result = function(arguments);
            if $crate::Truthy::is_truthy(&result) {
                ::core::option::Option::Some(result)
            } else {
                ::core::option::Option::None
            }
        }
    }};

    ($function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let head = $function;
        let tail = $crate::first!($($remaining_functions),+);
        move |arguments: &_| {
            let result = head(arguments);
            if $crate::Truthy::is_truthy(&result) {
                ::core::option::Option::Some(result)
            } else {
                tail(arguments)
            }
        }
    }};
}

/// Returns `true` if any of the given functions yields a truthy result.
///
/// Result types may differ between functions.
///
/// # Examples
///
/// ```
/// use combinars::any;
///
/// let odd_or_less_than_ten = any!(|n: &i32| n % 2 == 1, |n: &i32| *n < 10);
///
/// assert!(odd_or_less_than_ten(&15));
/// assert!(odd_or_less_than_ten(&8));
/// assert!(!odd_or_less_than_ten(&12));
/// ```
#[macro_export]
macro_rules! any {
    ($function:expr $(,)?) => {{
        let function = $function;
        move |arguments: &_| $crate::Truthy::is_truthy(&function(arguments))
    }};

    ($function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let head = $function;
        let tail = $crate::any!($($remaining_functions),+);
        move |arguments: &_| $crate::Truthy::is_truthy(&head(arguments)) || tail(arguments)
    }};
}

/// Returns `true` when every given function yields a truthy result.
///
/// `all!()` with no functions is a predicate that is always `true`.
///
/// # Examples
///
/// ```
/// use combinars::all;
///
/// let between_four_and_ten_and_even = all!(
///     |n: &i32| *n < 10,
///     |n: &i32| *n > 4,
///     |n: &i32| n % 2 == 0,
/// );
///
/// assert!(!between_four_and_ten_and_even(&7));
/// assert!(between_four_and_ten_and_even(&8));
/// assert!(!between_four_and_ten_and_even(&2));
/// ```
#[macro_export]
macro_rules! all {
    () => {
        $crate::predicate::pure(true)
    };

    ($function:expr $(,)?) => {{
        let function = $function;
        move |arguments: &_| $crate::Truthy::is_truthy(&function(arguments))
    }};

    ($function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let head = $function;
        let tail = $crate::all!($($remaining_functions),+);
        move |arguments: &_| $crate::Truthy::is_truthy(&head(arguments)) && tail(arguments)
    }};
}

/// Runs every given function, in order, with the same argument.
///
/// # Examples
///
/// ```
/// use combinars::each;
/// use std::cell::RefCell;
///
/// let lines = RefCell::new(Vec::new());
/// let maths = each!(
///     |n: &i32| lines.borrow_mut().push(n * 2),
///     |n: &i32| lines.borrow_mut().push(n + 2),
/// );
///
/// maths(&3);
/// assert_eq!(*lines.borrow(), vec![6, 5]);
/// ```
#[macro_export]
macro_rules! each {
    ($function:expr $(,)?) => {{
        let function = $function;
        move |arguments: &_| {
            let _ = function(arguments);
        }
    }};

    ($function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let head = $function;
        let tail = $crate::each!($($remaining_functions),+);
        move |arguments: &_| {
            let _ = head(arguments);
            tail(arguments);
        }
    }};
}
