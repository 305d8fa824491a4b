use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::RichResponse;

/// Plain text reply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub text: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl RichResponse for Text {
    fn v1_response_object(&self) -> Cow<'_, Value> {
        Cow::Owned(json!({ "type": 0, "speech": self.text }))
    }

    fn v2_response_object(&self) -> Cow<'_, Value> {
        Cow::Owned(json!({ "text": { "text": [self.text] } }))
    }
}

impl From<String> for Text {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{RichResponse, Text};

    #[test]
    fn wire_objects() {
        let text = Text::new("hello");
        assert_eq!(
            text.v1_response_object().into_owned(),
            json!({ "type": 0, "speech": "hello" })
        );
        assert_eq!(
            text.v2_response_object().into_owned(),
            json!({ "text": { "text": ["hello"] } })
        );
    }

    #[test]
    fn empty_text_is_allowed() {
        let text = Text::from("");
        assert_eq!(text.v1_response_object()["speech"], "");
    }
}
