//! # combinars
//!
//! Small, typed function combinators for predicate composition,
//! conditional dispatch, logging wrappers and counters.
//!
//! ## Overview
//!
//! Every combinator takes one or more functions of shape `Fn(&A) -> R` and
//! returns a new function. The argument `A` is borrowed and handed unchanged
//! to each wrapped function; several positional arguments are passed as a
//! tuple.
//!
//! - **Truthiness**: the [`Truthy`] trait decides which results count as
//!   "yes" for the predicate combinators
//! - **Predicates**: `pure`, `not`, `when`, `first`, `any`, `all`, `each`
//! - **Properties**: dotted-path lookup into `serde_json` values with
//!   `prop_exists` and `prop_equals`
//! - **Dispatch**: `action_dispatcher` bridges event handlers to a
//!   dispatch function
//! - **Counters**: `times` and `every_count`
//! - **Logging**: `log_with_tag` and `log_with_logger` decorators
//!
//! ## Feature Flags
//!
//! - `predicate`: predicate and branching combinators
//! - `props`: property paths over `serde_json::Value`
//! - `dispatch`: action dispatcher
//! - `counter`: `times` and `every_count`
//! - `log`: logging decorators backed by `tracing`
//! - `serde`: `Serialize`/`Deserialize` for property paths
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use combinars::prelude::*;
//!
//! let small_and_even = all(vec![
//!     Box::new(|n: &i32| *n < 10) as Box<dyn Fn(&i32) -> bool>,
//!     Box::new(|n: &i32| n % 2 == 0),
//! ]);
//!
//! assert!(small_and_even(&8));
//! assert!(!small_and_even(&7));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use combinars::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::CombinatorError;
    pub use crate::truthy::Truthy;

    #[cfg(feature = "predicate")]
    pub use crate::predicate::*;

    #[cfg(feature = "props")]
    pub use crate::props::*;

    #[cfg(feature = "dispatch")]
    pub use crate::dispatch::*;

    #[cfg(feature = "counter")]
    pub use crate::counter::*;

    #[cfg(feature = "log")]
    pub use crate::log::*;
}

pub mod error;
pub mod truthy;

#[cfg(feature = "predicate")]
pub mod predicate;

#[cfg(feature = "props")]
pub mod props;

#[cfg(feature = "dispatch")]
pub mod dispatch;

#[cfg(feature = "counter")]
pub mod counter;

#[cfg(feature = "log")]
pub mod log;

pub use error::CombinatorError;
pub use truthy::Truthy;
