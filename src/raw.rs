//! Raw platform payload passthrough.
//!
//! A [`Raw`] response carries a caller-built JSON object that the crate does
//! not model. It is emitted verbatim under both protocol versions, so the
//! caller is responsible for handing in a payload that the target platform
//! understands.

use std::borrow::Cow;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::{FulfillmentError, Result, RichResponse};

const EMPTY_PAYLOAD: &str = "payload can not be empty";

/// Response item wrapping an opaque platform payload.
///
/// ```
/// use fulfillment_rich::{Raw, RichResponse};
/// use serde_json::json;
///
/// let raw = Raw::new(json!({ "speech": "Text response", "type": 0 }))?;
/// assert_eq!(*raw.v1_response_object(), json!({ "speech": "Text response", "type": 0 }));
/// # Ok::<(), fulfillment_rich::FulfillmentError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub struct Raw {
    payload: Value,
}

impl Raw {
    /// Wraps `payload`.
    ///
    /// Fails with [`FulfillmentError::InvalidArgument`] when the payload is
    /// falsy: `null`, `false`, a zero number or an empty string. Empty
    /// objects and arrays are accepted.
    pub fn new(payload: impl Into<Value>) -> Result<Self> {
        let payload = payload.into();
        if !is_truthy(&payload) {
            #[cfg(feature = "tracing")]
            tracing::debug!(?payload, "rejecting raw response payload");

            return Err(FulfillmentError::invalid_argument(EMPTY_PAYLOAD));
        }

        Ok(Self { payload })
    }

    /// Wraps a payload that may be absent. `None` is rejected like `null`.
    pub fn from_option<T: Into<Value>>(payload: Option<T>) -> Result<Self> {
        match payload {
            Some(payload) => Self::new(payload),
            None => Err(FulfillmentError::invalid_argument(EMPTY_PAYLOAD)),
        }
    }

    /// Borrows the wrapped payload.
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Consumes the response and returns the wrapped payload.
    pub fn into_payload(self) -> Value {
        self.payload
    }
}

impl RichResponse for Raw {
    fn v1_response_object(&self) -> Cow<'_, Value> {
        Cow::Borrowed(&self.payload)
    }

    fn v2_response_object(&self) -> Cow<'_, Value> {
        Cow::Borrowed(&self.payload)
    }
}

impl TryFrom<Value> for Raw {
    type Error = FulfillmentError;

    fn try_from(payload: Value) -> Result<Self> {
        Self::new(payload)
    }
}

impl Serialize for Raw {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.payload.serialize(serializer)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        // -0.0 == 0.0, so negative zero is falsy too.
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
