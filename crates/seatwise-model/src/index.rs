// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Strongly Typed Indices
//!
//! Transparent `usize` newtypes for the four index spaces of a seating grid:
//! groups (rows), benches within a group, seats within a bench, and interned
//! class identifiers. Keeping these distinct at the type level prevents the
//! classic bug of feeding a bench index where a seat index is expected, at no
//! runtime cost.

macro_rules! define_index {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(usize);

        impl $name {
            /// Creates a new index from a raw `usize`.
            #[inline(always)]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Returns the underlying `usize` value.
            #[inline(always)]
            pub const fn get(&self) -> usize {
                self.0
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl From<usize> for $name {
            fn from(index: usize) -> Self {
                Self::new(index)
            }
        }

        impl From<$name> for usize {
            fn from(index: $name) -> Self {
                index.0
            }
        }
    };
}

define_index!(
    /// Index of a group (row of benches) within a room layout.
    GroupIndex
);

define_index!(
    /// Index of a bench within a group.
    BenchIndex
);

define_index!(
    /// Index of a seat column within a bench.
    SeatIndex
);

define_index!(
    /// Identifier of an interned class label within a roster.
    ClassId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_get() {
        let group = GroupIndex::new(2);
        assert_eq!(group.get(), 2);

        let bench = BenchIndex::new(7);
        assert_eq!(bench.get(), 7);
    }

    #[test]
    fn test_conversions() {
        let seat: SeatIndex = 4.into();
        assert_eq!(seat.get(), 4);

        let raw: usize = seat.into();
        assert_eq!(raw, 4);
    }

    #[test]
    fn test_debug_and_display() {
        let class = ClassId::new(3);
        assert_eq!(format!("{}", class), "ClassId(3)");
        assert_eq!(format!("{:?}", class), "ClassId(3)");

        let bench = BenchIndex::new(0);
        assert_eq!(format!("{}", bench), "BenchIndex(0)");
    }

    #[test]
    fn test_ordering_within_one_space() {
        assert!(BenchIndex::new(1) < BenchIndex::new(2));
        assert_eq!(GroupIndex::new(5), GroupIndex::new(5));
    }
}
