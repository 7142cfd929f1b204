//! Enumerations - Enumerated types used by the entities

use serde::{Deserialize, Serialize};
use std::fmt;

// ********************* ENUMERATIONS **********************//

/// Species classification of a pet.
///
/// Stored and transported as its integer code. Codes without a named variant
/// are kept as `Other` so they survive a round trip through the store.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(from = "i32", into = "i32")]
pub enum Species {
    Dog,
    Cat,
    Other(i32),
}

impl Species {
    pub fn code(self) -> i32 {
        match self {
            Species::Dog => 0,
            Species::Cat => 1,
            Species::Other(code) => code,
        }
    }
}

impl From<i32> for Species {
    fn from(code: i32) -> Self {
        match code {
            0 => Species::Dog,
            1 => Species::Cat,
            other => Species::Other(other),
        }
    }
}

impl From<Species> for i32 {
    fn from(value: Species) -> Self {
        value.code()
    }
}

/// Decimal representation of the code, as sent over the wire
impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
