//! Strongly typed identifier wrappers.
//!
//! IDs are `Copy + Ord + Hash` so they work as map keys and sorted
//! collection elements.  A station is shared by every line that touches it;
//! lines and segments hold its `StationId`, never a copy of the station.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// The ID following `self`; used by directories that hand out
            /// sequential IDs.
            #[inline]
            pub fn successor(self) -> $name {
                $name(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Stable identity of a station in the station directory.
    pub struct StationId(u32);
}

typed_id! {
    /// Stable identity of a transit line.
    pub struct LineId(u32);
}
