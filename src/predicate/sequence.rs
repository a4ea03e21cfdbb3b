//! Running a list of functions for their side effects.

/// Returns a function that invokes every one of `functions`, in order, with
/// the same argument, discarding their results.
///
/// Unlike the searches in this module, `each` never short-circuits.
///
/// # Examples
///
/// ```
/// use combinars::predicate::each;
/// use std::cell::RefCell;
///
/// let lines = RefCell::new(Vec::new());
/// let doubled = |n: &i32| lines.borrow_mut().push(format!("*2 {}", n * 2));
/// let plus_two = |n: &i32| lines.borrow_mut().push(format!("+2 {}", n + 2));
///
/// let maths = each(vec![&doubled as &dyn Fn(&i32), &plus_two]);
/// maths(&3);
///
/// assert_eq!(*lines.borrow(), vec!["*2 6", "+2 5"]);
/// ```
pub fn each<A, R, F, I>(functions: I) -> impl Fn(&A)
where
    A: ?Sized,
    F: Fn(&A) -> R,
    I: IntoIterator<Item = F>,
{
    let functions: Vec<F> = functions.into_iter().collect();
    move |arguments| {
        for function in &functions {
            let _ = function(arguments);
        }
    }
}

/// Alias of [`each`].
///
/// # Examples
///
/// ```
/// use combinars::predicate::pipe;
/// use std::cell::Cell;
///
/// let total = Cell::new(0);
/// let add = |n: &i32| total.set(total.get() + n);
///
/// let add_twice = pipe([&add, &add]);
/// add_twice(&5);
/// assert_eq!(total.get(), 10);
/// ```
#[inline]
pub fn pipe<A, R, F, I>(functions: I) -> impl Fn(&A)
where
    A: ?Sized,
    F: Fn(&A) -> R,
    I: IntoIterator<Item = F>,
{
    each(functions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_each_of_nothing_does_nothing() {
        let nothing = each(Vec::<fn(&str)>::new());
        nothing("ignored");
    }

    #[test]
    fn test_each_ignores_falsy_results() {
        let calls = Cell::new(0);
        let count = |_: &()| {
            calls.set(calls.get() + 1);
            false
        };
        let all_of_them = each([&count, &count, &count]);
        all_of_them(&());
        assert_eq!(calls.get(), 3);
    }
}
