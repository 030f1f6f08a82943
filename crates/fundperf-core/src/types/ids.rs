//! Identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create a new identifier.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id!(
    /// Identifier of the entity a performance record describes
    /// (the whole fund, one sub-fund, or one ticker).
    EntityId
);

string_id!(
    /// Sub-fund identifier (e.g. `grad`, `quant`).
    FundId
);

string_id!(
    /// Holding ticker symbol.
    Ticker
);

impl From<Ticker> for EntityId {
    fn from(ticker: Ticker) -> Self {
        Self(ticker.0)
    }
}

impl From<FundId> for EntityId {
    fn from(fund: FundId) -> Self {
        Self(fund.0)
    }
}
