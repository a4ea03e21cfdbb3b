//! Bridges from event handlers to action creators.
//!
//! A state container usually exposes a `dispatch` function taking actions,
//! and an event source hands handlers some arguments. The dispatcher built
//! here connects the two in three steps:
//!
//! 1. [`action_dispatcher`] fixes the action creator
//! 2. [`ActionDispatcher::map_args`] (or [`ActionDispatcher::default_args`])
//!    fixes how handler arguments become the action creator's input
//! 3. [`ArgsMapper::bind`] fixes the `dispatch` function and yields the
//!    handler `|args| dispatch(action(map_args(args)))`
//!
//! Every step borrows its receiver, so a partially built dispatcher can be
//! reused for several argument mappings or several stores.
//!
//! # Examples
//!
//! ```
//! use combinars::dispatch::action_dispatcher;
//! use std::cell::RefCell;
//!
//! #[derive(Debug, PartialEq)]
//! enum Action {
//!     Rename(String),
//! }
//!
//! let dispatched = RefCell::new(Vec::new());
//! let dispatch = |action: Action| dispatched.borrow_mut().push(action);
//!
//! let rename = action_dispatcher(Action::Rename)
//!     .map_args(|event: &(u32, &str)| event.1.to_uppercase())
//!     .bind(&dispatch);
//!
//! rename(&(7, "sam"));
//! assert_eq!(*dispatched.borrow(), vec![Action::Rename(String::from("SAM"))]);
//! ```

/// The default argument mapping: the whole argument, owned, as the only
/// element of a sequence.
pub type DefaultArgs<A> = fn(&A) -> Vec<<A as ToOwned>::Owned>;

/// First stage of an action dispatcher, holding the action creator.
#[derive(Debug, Clone, Copy)]
pub struct ActionDispatcher<Act> {
    action: Act,
}

/// Second stage of an action dispatcher, holding the action creator and the
/// argument mapping.
#[derive(Debug, Clone, Copy)]
pub struct ArgsMapper<Act, M> {
    action: Act,
    map_args: M,
}

/// Starts building a dispatcher around the action creator `action`.
pub const fn action_dispatcher<Act>(action: Act) -> ActionDispatcher<Act> {
    ActionDispatcher { action }
}

impl<Act: Clone> ActionDispatcher<Act> {
    /// Fixes how handler arguments are turned into the action creator's
    /// input.
    pub fn map_args<M>(&self, map_args: M) -> ArgsMapper<Act, M> {
        ArgsMapper {
            action: self.action.clone(),
            map_args,
        }
    }

    /// Uses the default mapping, which passes the whole argument list as a
    /// single payload: `args` becomes `vec![args.to_owned()]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use combinars::dispatch::action_dispatcher;
    /// use std::cell::RefCell;
    ///
    /// let seen = RefCell::new(Vec::new());
    /// let handler = action_dispatcher(|payload: Vec<Vec<i32>>| payload)
    ///     .default_args::<[i32]>()
    ///     .bind(|action: Vec<Vec<i32>>| seen.borrow_mut().push(action));
    ///
    /// handler(&[1, 2, 3][..]);
    /// assert_eq!(*seen.borrow(), vec![vec![vec![1, 2, 3]]]);
    /// ```
    pub fn default_args<A>(&self) -> ArgsMapper<Act, DefaultArgs<A>>
    where
        A: ToOwned + ?Sized,
    {
        self.map_args(wrap_arguments::<A> as DefaultArgs<A>)
    }
}

impl<Act: Clone, M: Clone> ArgsMapper<Act, M> {
    /// Fixes the dispatch function, returning the finished handler.
    ///
    /// Whatever `dispatch` returns is returned by the handler.
    pub fn bind<A, P, Msg, O, D>(&self, dispatch: D) -> impl Fn(&A) -> O + use<Act, M, A, P, Msg, O, D>
    where
        A: ?Sized,
        M: Fn(&A) -> P,
        Act: Fn(P) -> Msg,
        D: Fn(Msg) -> O,
    {
        let action = self.action.clone();
        let map_args = self.map_args.clone();
        move |arguments| dispatch(action(map_args(arguments)))
    }
}

fn wrap_arguments<A: ToOwned + ?Sized>(arguments: &A) -> Vec<A::Owned> {
    vec![arguments.to_owned()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_default_args_wraps_tuple() {
        let received = Cell::new(None);
        let handler = action_dispatcher(|payload: Vec<(i32, i32, i32)>| (payload.len(), payload[0].1))
            .default_args::<(i32, i32, i32)>()
            .bind(|action: (usize, i32)| received.set(Some(action)));
        handler(&(10, 20, 30));
        assert_eq!(received.get(), Some((1, 20)));
    }

    #[test]
    fn test_bind_returns_dispatch_result() {
        let handler = action_dispatcher(|n: i32| n * 2)
            .map_args(|n: &i32| *n + 1)
            .bind(|doubled: i32| format!("dispatched {doubled}"));
        assert_eq!(handler(&4), "dispatched 10");
    }

    #[test]
    fn test_stages_are_reusable() {
        let negate = action_dispatcher(|n: i32| -n);
        let identity_args = negate.map_args(|n: &i32| *n);
        let offset_args = negate.map_args(|n: &i32| *n + 100);

        let first_store = identity_args.bind(|n: i32| n);
        let second_store = identity_args.bind(|n: i32| n * 10);
        let offset_store = offset_args.bind(|n: i32| n);

        assert_eq!(first_store(&1), -1);
        assert_eq!(second_store(&1), -10);
        assert_eq!(offset_store(&1), -101);
    }
}
