//! Conversion traits for "one or many codes" arguments.

use crate::code::{CodeInput, normalize_region};

/// Anything that can be turned into a list of normalized codes.
///
/// Implemented for single codes (`&str`, `String`, `u16`, `u32`) and for
/// collections of them, so both of these work:
///
/// ```
/// use m49_region::CustomRegion;
///
/// let one = CustomRegion::new("EU").unwrap();
/// let many = CustomRegion::new(["142", "009"]).unwrap();
/// assert!(one.contains("FR"));
/// assert!(many.is_within(1u32));
/// ```
pub trait IntoCodes {
    fn into_codes(self) -> Vec<String>;
}

impl IntoCodes for &str {
    fn into_codes(self) -> Vec<String> {
        vec![normalize_region(self)]
    }
}

impl IntoCodes for String {
    fn into_codes(self) -> Vec<String> {
        vec![normalize_region(self)]
    }
}

impl IntoCodes for u16 {
    fn into_codes(self) -> Vec<String> {
        vec![normalize_region(self)]
    }
}

impl IntoCodes for u32 {
    fn into_codes(self) -> Vec<String> {
        vec![normalize_region(self)]
    }
}

impl IntoCodes for CodeInput {
    fn into_codes(self) -> Vec<String> {
        vec![self.normalize()]
    }
}

impl<T: Into<CodeInput>> IntoCodes for Vec<T> {
    fn into_codes(self) -> Vec<String> {
        self.into_iter().map(normalize_region).collect()
    }
}

impl<T: Into<CodeInput>, const N: usize> IntoCodes for [T; N] {
    fn into_codes(self) -> Vec<String> {
        self.into_iter().map(normalize_region).collect()
    }
}

impl<T: Into<CodeInput> + Clone> IntoCodes for &[T] {
    fn into_codes(self) -> Vec<String> {
        self.iter().cloned().map(normalize_region).collect()
    }
}
