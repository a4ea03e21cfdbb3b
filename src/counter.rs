//! Repeating and rate-limiting combinators.
//!
//! - [`times`] / [`times_flatten`]: call a function a fixed number of times
//!   and collect the results
//! - [`every_count`] / [`every_count_sync`]: call a function on every
//!   `count`-th invocation only
//!
//! # Counter semantics
//!
//! The `every_count` family owns a private call counter that starts at `1`
//! and is incremented after every invocation, whether or not the wrapped
//! function fired. The function fires when the counter is a multiple of
//! `count`, i.e. on calls `count`, `2 * count`, `3 * count`, and so on. The
//! counter is never reset. It is a `u64` and wraps on overflow.
//!
//! The counter advances before the wrapped function runs. A call that
//! panics has still been counted, so the call after it does not fire again
//! in its place.

use std::cell::Cell;
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::CombinatorError;

/// Returns a function that calls `function` exactly `count` times with the
/// same argument and collects every result, in call order.
///
/// A `count` of zero performs no calls and returns an empty `Vec`.
///
/// # Examples
///
/// ```
/// use combinars::counter::times;
///
/// let greet_three_times = times(3, |name: &str| format!("hello {name}"));
/// assert_eq!(
///     greet_three_times("Janelle"),
///     vec!["hello Janelle", "hello Janelle", "hello Janelle"]
/// );
/// ```
pub fn times<A, R, F>(count: usize, function: F) -> impl Fn(&A) -> Vec<R>
where
    A: ?Sized,
    F: Fn(&A) -> R,
{
    move |arguments| (0..count).map(|_| function(arguments)).collect()
}

/// Like [`times`], but each result is a sequence whose items are
/// concatenated, one level deep, into the returned `Vec`.
///
/// # Examples
///
/// ```
/// use combinars::counter::times_flatten;
///
/// let pairs = times_flatten(2, |n: &i32| vec![*n, n * 10]);
/// assert_eq!(pairs(&4), vec![4, 40, 4, 40]);
///
/// let nested = times_flatten(2, |_: &()| vec![vec![1], vec![2]]);
/// assert_eq!(nested(&()), vec![vec![1], vec![2], vec![1], vec![2]]);
/// ```
pub fn times_flatten<A, R, F>(count: usize, function: F) -> impl Fn(&A) -> Vec<R::Item>
where
    A: ?Sized,
    R: IntoIterator,
    F: Fn(&A) -> R,
{
    move |arguments| (0..count).flat_map(|_| function(arguments)).collect()
}

/// Returns a function that calls `function` only on every `count`-th call.
///
/// The returned function is single-threaded (its counter lives in a
/// [`Cell`]); use [`every_count_sync`] to share one across threads.
///
/// # Errors
///
/// Returns [`CombinatorError::ZeroCount`] if `count` is zero.
///
/// # Examples
///
/// ```
/// use combinars::counter::every_count;
/// use std::cell::Cell;
///
/// let fired = Cell::new(0);
/// let every_third = every_count(3, |_: &()| fired.set(fired.get() + 1))?;
///
/// every_third(&());
/// every_third(&());
/// assert_eq!(fired.get(), 0);
///
/// every_third(&());
/// assert_eq!(fired.get(), 1);
/// # Ok::<(), combinars::CombinatorError>(())
/// ```
pub fn every_count<A, R, F>(count: u64, function: F) -> Result<impl Fn(&A), CombinatorError>
where
    A: ?Sized,
    F: Fn(&A) -> R,
{
    let period = NonZeroU64::new(count).ok_or(CombinatorError::ZeroCount {
        combinator: "every_count",
    })?;
    let current = Cell::new(1_u64);

    Ok(move |arguments: &A| {
        let call = current.get();
        current.set(call.wrapping_add(1));
        if call % period == 0 {
            let _ = function(arguments);
        }
    })
}

/// Thread-safe variant of [`every_count`].
///
/// The counter is an [`AtomicU64`], so concurrent callers each observe a
/// distinct call number and `function` fires exactly once per `count`
/// calls overall.
///
/// # Errors
///
/// Returns [`CombinatorError::ZeroCount`] if `count` is zero.
///
/// # Examples
///
/// ```
/// use combinars::counter::every_count_sync;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use std::thread;
///
/// let fired = Arc::new(AtomicUsize::new(0));
/// let fired_in_callback = Arc::clone(&fired);
/// let every_tenth = Arc::new(every_count_sync(10, move |_: &()| {
///     fired_in_callback.fetch_add(1, Ordering::SeqCst);
/// })?);
///
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let every_tenth = Arc::clone(&every_tenth);
///         thread::spawn(move || (0..25).for_each(|_| every_tenth(&())))
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(fired.load(Ordering::SeqCst), 10);
/// # Ok::<(), combinars::CombinatorError>(())
/// ```
pub fn every_count_sync<A, R, F>(
    count: u64,
    function: F,
) -> Result<impl Fn(&A) + Send + Sync, CombinatorError>
where
    A: ?Sized,
    F: Fn(&A) -> R + Send + Sync,
{
    let period = NonZeroU64::new(count).ok_or(CombinatorError::ZeroCount {
        combinator: "every_count_sync",
    })?;
    let current = AtomicU64::new(1);

    Ok(move |arguments: &A| {
        let call = current.fetch_add(1, Ordering::Relaxed);
        if call % period == 0 {
            let _ = function(arguments);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_times_zero_never_calls() {
        let calls = Cell::new(0);
        let never = times(0, |_: &()| calls.set(calls.get() + 1));
        assert!(never(&()).is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_times_flatten_with_option() {
        let maybe = times_flatten(3, |n: &i32| (*n > 0).then_some(*n));
        assert_eq!(maybe(&2), vec![2, 2, 2]);
        assert!(maybe(&-2).is_empty());
    }

    #[test]
    fn test_every_count_zero_is_rejected() {
        let result = every_count(0, |_: &()| ());
        assert_eq!(
            result.err(),
            Some(CombinatorError::ZeroCount {
                combinator: "every_count"
            })
        );
    }

    #[test]
    fn test_every_count_sync_zero_is_rejected() {
        let result = every_count_sync(0, |_: &()| ());
        assert!(matches!(
            result,
            Err(CombinatorError::ZeroCount {
                combinator: "every_count_sync"
            })
        ));
    }

    #[test]
    fn test_every_count_one_fires_always() {
        let fired = Cell::new(0);
        let always = every_count(1, |_: &()| fired.set(fired.get() + 1)).unwrap();
        for _ in 0..5 {
            always(&());
        }
        assert_eq!(fired.get(), 5);
    }
}
