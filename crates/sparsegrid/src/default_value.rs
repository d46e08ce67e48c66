//! Type-level configuration of the value unoccupied cells read as.
//!
//! A [`SparseMatrix`] never stores its Default value. Which value that is gets
//! fixed at the type level through a [`DefaultValue`] provider, so two matrices
//! with different Defaults are different types.
//!
//! # Providers
//!
//! - [`TypeDefault`] - uses [`Default::default`] of the value type
//! - [`ConstI32`], [`ConstU8`], [`ConstBool`], ... - a const generic literal
//!
//! [`SparseMatrix`]: crate::SparseMatrix
//!
//! # Examples
//!
//! ```
//! use sparsegrid::{SparseMatrix, default_value::ConstI32};
//!
//! let matrix = SparseMatrix::<i32, ConstI32<-1>>::new();
//! assert_eq!(matrix.get(0, 0), -1);
//! assert!(matrix.is_empty());
//! ```
//!
//! ## Implementing a custom provider
//!
//! ```
//! use sparsegrid::{SparseMatrix, default_value::DefaultValue};
//!
//! struct Blank;
//!
//! impl DefaultValue for Blank {
//!     type Value = &'static str;
//!
//!     fn default_value() -> Self::Value {
//!         "."
//!     }
//! }
//!
//! let mut matrix = SparseMatrix::<&str, Blank>::new();
//! matrix.set(1, 1, "#");
//! matrix.set(1, 1, ".");
//! assert!(matrix.is_empty());
//! ```

use std::{fmt, marker::PhantomData};

/// Provides the value unoccupied cells read as.
pub trait DefaultValue {
    /// The type of values stored in the matrix.
    type Value;

    /// Returns the Default value.
    fn default_value() -> Self::Value;

    /// Returns `true` if `value` equals the Default value.
    #[inline]
    fn is_default(value: &Self::Value) -> bool
    where
        Self::Value: PartialEq,
    {
        *value == Self::default_value()
    }
}

/// Uses [`Default::default`] of `T` as the Default value.
///
/// This is the provider used when none is named, so `SparseMatrix<i32>` reads
/// `0` for every unoccupied cell.
pub struct TypeDefault<T>(PhantomData<fn() -> T>);

impl<T: Default> DefaultValue for TypeDefault<T> {
    type Value = T;

    #[inline]
    fn default_value() -> T {
        T::default()
    }
}

impl<T> fmt::Debug for TypeDefault<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TypeDefault")
    }
}

macro_rules! const_default {
    ($($(#[$meta:meta])* $name:ident($ty:ty);)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $name<const V: $ty>;

            impl<const V: $ty> DefaultValue for $name<V> {
                type Value = $ty;

                #[inline]
                fn default_value() -> $ty {
                    V
                }
            }
        )*
    };
}

const_default! {
    /// An `i8` literal Default.
    ConstI8(i8);
    /// An `i16` literal Default.
    ConstI16(i16);
    /// An `i32` literal Default.
    ConstI32(i32);
    /// An `i64` literal Default.
    ConstI64(i64);
    /// An `i128` literal Default.
    ConstI128(i128);
    /// An `isize` literal Default.
    ConstIsize(isize);
    /// A `u8` literal Default.
    ConstU8(u8);
    /// A `u16` literal Default.
    ConstU16(u16);
    /// A `u32` literal Default.
    ConstU32(u32);
    /// A `u64` literal Default.
    ConstU64(u64);
    /// A `u128` literal Default.
    ConstU128(u128);
    /// A `usize` literal Default.
    ConstUsize(usize);
    /// A `bool` literal Default.
    ConstBool(bool);
    /// A `char` literal Default.
    ConstChar(char);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_default() {
        assert_eq!(TypeDefault::<i32>::default_value(), 0);
        assert_eq!(TypeDefault::<String>::default_value(), "");
        assert!(TypeDefault::<bool>::is_default(&false));
        assert!(!TypeDefault::<u8>::is_default(&1));
    }

    #[test]
    fn test_const_defaults() {
        assert_eq!(ConstI32::<-1>::default_value(), -1);
        assert_eq!(ConstU64::<{ u64::MAX }>::default_value(), u64::MAX);
        assert_eq!(ConstChar::<'.'>::default_value(), '.');
        assert!(ConstBool::<true>::is_default(&true));
        assert!(!ConstI8::<5>::is_default(&0));
    }
}
