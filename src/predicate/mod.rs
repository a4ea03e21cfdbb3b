//! Predicate and branching combinators.
//!
//! This module builds new functions out of functions of shape
//! `Fn(&A) -> R`. Each wrapped function receives the very same borrowed
//! argument, and results are interpreted through [`Truthy`](crate::Truthy)
//! wherever a yes/no answer is needed.
//!
//! # Overview
//!
//! - [`pure`]: ignore the argument and return a constant
//! - [`not`]: negate a predicate
//! - [`when`] / [`when_else`]: choose a branch from a condition
//! - [`first`]: the first truthy result
//! - [`any`] / [`all`]: short-circuiting disjunction and conjunction
//! - [`each`] / [`pipe`]: run every function for its side effects
//!
//! The variadic macros [`first!`](crate::first), [`any!`](crate::any),
//! [`all!`](crate::all) and [`each!`](crate::each) accept functions of
//! different types without boxing.
//!
//! # Examples
//!
//! ```
//! use combinars::predicate::{not, when_else};
//! use combinars::{all, any};
//!
//! let is_vowel = any!(|c: &char| "aeiou".contains(*c), |c: &char| "AEIOU".contains(*c));
//! let is_consonant = all!(|c: &char| c.is_ascii_alphabetic(), not(&is_vowel));
//! let classify = when_else(&is_consonant, pure_label("consonant"), pure_label("other"));
//!
//! assert_eq!(classify(&'b'), "consonant");
//! assert_eq!(classify(&'E'), "other");
//!
//! fn pure_label(label: &'static str) -> impl Fn(&char) -> &'static str {
//!     combinars::predicate::pure(label)
//! }
//! ```
//!
//! # Laws
//!
//! - **Double negation**: `not(not(f))(x) == f(x).is_truthy()`
//! - **De Morgan**: `not(any([f, g]))(x) == all([not(f), not(g)])(x)`
//! - **Units**: `all([])(x) == true`, `any([])(x) == false`

mod branch;
mod predicate_macro;
mod search;
mod sequence;

pub use branch::{not, pure, when, when_else};
pub use search::{all, any, first};
pub use sequence::{each, pipe};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::all;
pub use crate::any;
pub use crate::each;
pub use crate::first;
