//! Truthiness of combinator results.
//!
//! The predicate combinators (`not`, `when`, `first`, `any`, `all`) do not
//! require their functions to return `bool`. Any result type implementing
//! [`Truthy`] can drive a branch, which lets a lookup such as `prop_exists`
//! hand back the raw value it found and still be used as a predicate.
//!
//! # Rules
//!
//! | Type                 | Truthy when                          |
//! |----------------------|--------------------------------------|
//! | `bool`               | `true`                               |
//! | `()`                 | never                                |
//! | integers             | non-zero                             |
//! | `f32`, `f64`         | non-zero and not NaN                 |
//! | `str`, `String`      | non-empty                            |
//! | `Option<T>`          | `Some(value)` with a truthy `value`  |
//! | `serde_json::Value`  | see below                            |
//!
//! For `serde_json::Value`, `Null` is falsy, `Bool`, `Number` and `String`
//! follow the scalar rules above, and `Array` and `Object` are always truthy
//! (even when empty).
//!
//! # Examples
//!
//! ```rust
//! use combinars::Truthy;
//!
//! assert!(1.is_truthy());
//! assert!(0.is_falsy());
//! assert!("name".is_truthy());
//! assert!(String::new().is_falsy());
//! assert!(Some(true).is_truthy());
//! assert!(Some(false).is_falsy());
//! assert!(None::<bool>.is_falsy());
//! ```

/// A value that can be tested for truthiness.
pub trait Truthy {
    /// Returns `true` if this value counts as "yes" in a predicate.
    fn is_truthy(&self) -> bool;

    /// Returns `true` if this value counts as "no" in a predicate.
    #[inline]
    fn is_falsy(&self) -> bool {
        !self.is_truthy()
    }
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for () {
    #[inline]
    fn is_truthy(&self) -> bool {
        false
    }
}

macro_rules! impl_truthy_for_integer {
    ($($integer:ty),+ $(,)?) => {
        $(
            impl Truthy for $integer {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )+
    };
}

impl_truthy_for_integer!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

macro_rules! impl_truthy_for_float {
    ($($float:ty),+ $(,)?) => {
        $(
            impl Truthy for $float {
                #[inline]
                fn is_truthy(&self) -> bool {
                    !self.is_nan() && *self != 0.0
                }
            }
        )+
    };
}

impl_truthy_for_float!(f32, f64);

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

#[cfg(feature = "props")]
impl Truthy for serde_json::Value {
    fn is_truthy(&self) -> bool {
        use serde_json::Value;

        match self {
            Value::Null => false,
            Value::Bool(value) => *value,
            Value::Number(number) => number.as_f64().is_some_and(|value| value.is_truthy()),
            Value::String(text) => text.is_truthy(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

static_assertions::assert_obj_safe!(Truthy);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_is_falsy() {
        assert!(().is_falsy());
    }

    #[test]
    fn test_nan_is_falsy() {
        assert!(f64::NAN.is_falsy());
        assert!(f32::NAN.is_falsy());
        assert!((-0.0_f64).is_falsy());
        assert!(0.5_f64.is_truthy());
    }

    #[test]
    fn test_nested_option_delegates() {
        assert!(Some(Some(1)).is_truthy());
        assert!(Some(Some(0)).is_falsy());
        assert!(Some(None::<i32>).is_falsy());
    }

    #[test]
    fn test_references_and_boxes_delegate() {
        let text: &str = "";
        assert!(text.is_falsy());
        assert!((&&1_u8).is_truthy());
        assert!(Box::new(String::from("x")).is_truthy());
    }

    #[test]
    fn test_dyn_truthy() {
        let values: Vec<Box<dyn Truthy>> = vec![Box::new(1), Box::new(false), Box::new("a")];
        let truthy: Vec<bool> = values.iter().map(|value| value.is_truthy()).collect();
        assert_eq!(truthy, vec![true, false, true]);
    }

    #[cfg(feature = "props")]
    #[test]
    fn test_json_value_truthiness() {
        use serde_json::json;

        assert!(json!(null).is_falsy());
        assert!(json!(false).is_falsy());
        assert!(json!(0).is_falsy());
        assert!(json!(0.0).is_falsy());
        assert!(json!("").is_falsy());
        assert!(json!(-3).is_truthy());
        assert!(json!("Sam").is_truthy());
        assert!(json!([]).is_truthy());
        assert!(json!({}).is_truthy());
    }
}
