use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::FulfillmentError;

/// Wire-protocol version of the fulfillment webhook.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Version {
    V1,
    #[default]
    V2,
}

impl Version {
    /// Lowercase protocol name, `"v1"` or `"v2"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Version {
    type Err = FulfillmentError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("v1") {
            Ok(Self::V1)
        } else if trimmed.eq_ignore_ascii_case("v2") {
            Ok(Self::V2)
        } else {
            Err(FulfillmentError::invalid_argument(format!(
                "unknown protocol version '{trimmed}'"
            )))
        }
    }
}
