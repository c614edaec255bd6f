//! Binary class labels.
//!
//! Ground truth arrives in many shapes: `bool` vectors, `u8` masks, or the
//! `i64` columns a dataframe hands over. [`BinaryLabel`] maps each of them
//! onto the positive/negative decision the curve sweep needs.

/// A value that encodes membership in the positive class.
pub trait BinaryLabel {
    /// `Some(true)` for the positive class, `Some(false)` for the negative
    /// class, `None` when the value is neither 0 nor 1.
    fn as_binary(&self) -> Option<bool>;
}

impl BinaryLabel for bool {
    #[inline]
    fn as_binary(&self) -> Option<bool> {
        Some(*self)
    }
}

macro_rules! impl_int_label {
    ($($t:ty),* $(,)?) => {
        $(
            impl BinaryLabel for $t {
                #[inline]
                fn as_binary(&self) -> Option<bool> {
                    match *self {
                        0 => Some(false),
                        1 => Some(true),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_int_label!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

impl<L: BinaryLabel + ?Sized> BinaryLabel for &L {
    #[inline]
    fn as_binary(&self) -> Option<bool> {
        (**self).as_binary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_labels() {
        assert_eq!(true.as_binary(), Some(true));
        assert_eq!(false.as_binary(), Some(false));
    }

    #[test]
    fn integer_labels() {
        assert_eq!(1u8.as_binary(), Some(true));
        assert_eq!(0i64.as_binary(), Some(false));
        assert_eq!(1usize.as_binary(), Some(true));
    }

    #[test]
    fn non_binary_integers() {
        assert_eq!(2u32.as_binary(), None);
        assert_eq!((-1i32).as_binary(), None);
        assert_eq!(255u8.as_binary(), None);
    }

    #[test]
    fn through_reference() {
        let label = 1i32;
        assert_eq!((&label).as_binary(), Some(true));
    }
}
