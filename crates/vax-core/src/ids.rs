//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  An ID is the index of the entity's
//! slot inside its owning registry, so cross-references between structures
//! (stock entries, appointments, lot records) stay valid no matter how the
//! registry's backing `Vec` grows.  The inner integer is `pub` to allow direct
//! indexing via `id.0 as usize`, but callers should prefer the `.index()`
//! helper for clarity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a registry slot index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
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
    /// Slot of a person inside the `PersonRegistry`, assigned in
    /// registration order.
    pub struct PersonId(u32);
}

typed_id! {
    /// Slot of a vaccine inside the `VaccineRegistry`.  Registration order
    /// doubles as the scheduler's sweep order over the vaccine set.
    pub struct VaccineId(u32);
}

typed_id! {
    /// Slot of a health center inside the `CenterDirectory`.
    pub struct CenterId(u32);
}
