//! Identifier types.
//!
//! Numeric ids are `Copy + Ord + Hash` wrappers around a primitive integer.
//! `PassengerIdx` is the dense position of a passenger in the run's passenger
//! table; `PassengerId` is the caller-supplied name that appears in traces.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
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
    /// Configured elevator number.  Not an index: fleets are looked up by
    /// position, and ids need not be dense.
    pub struct ElevatorId(u32);
}

typed_id! {
    /// Position of a passenger in the simulation's passenger table.
    pub struct PassengerIdx(u32);
}

impl fmt::Display for ElevatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PassengerIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Caller-supplied passenger name (`"p1"`, `"p2"`, …), unique within a run.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct PassengerId(pub String);

impl PassengerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PassengerId {
    fn from(s: &str) -> Self {
        PassengerId(s.to_owned())
    }
}

impl From<String> for PassengerId {
    fn from(s: String) -> Self {
        PassengerId(s)
    }
}

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
