use std::borrow::Cow;

use serde_json::Value;

use crate::{Raw, RichResponse, Text};

/// Closed set of response items an agent can reply with.
///
/// There is no direct `Serialize` impl: the wire shape depends on the
/// protocol version, so go through [`RichResponse::response_object`].
#[derive(Clone, Debug, PartialEq)]
pub enum Response {
    Text(Text),
    Raw(Raw),
}

impl RichResponse for Response {
    fn v1_response_object(&self) -> Cow<'_, Value> {
        match self {
            Self::Text(text) => text.v1_response_object(),
            Self::Raw(raw) => raw.v1_response_object(),
        }
    }

    fn v2_response_object(&self) -> Cow<'_, Value> {
        match self {
            Self::Text(text) => text.v2_response_object(),
            Self::Raw(raw) => raw.v2_response_object(),
        }
    }
}

impl From<Text> for Response {
    fn from(response: Text) -> Self {
        Self::Text(response)
    }
}

impl From<Raw> for Response {
    fn from(response: Raw) -> Self {
        Self::Raw(response)
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use serde_json::json;

    use crate::{Raw, Response, RichResponse, Text, Version};

    #[test]
    fn delegates_to_variant() {
        let raw: Response = Raw::new(json!({"a": 1})).unwrap().into();
        let text: Response = Text::new("hi").into();

        assert!(matches!(raw.v1_response_object(), Cow::Borrowed(_)));
        assert_eq!(raw.response_object(Version::V2).into_owned(), json!({"a": 1}));
        assert_eq!(
            text.response_object(Version::V1).into_owned(),
            json!({ "type": 0, "speech": "hi" })
        );
    }

    #[test]
    fn mixed_list_serializes_per_version() {
        let responses: Vec<Response> = vec![
            Text::new("Hello").into(),
            Raw::new(json!({"speech": "raw", "type": 0})).unwrap().into(),
        ];
        let render = |version| {
            let objects: Vec<_> = responses
                .iter()
                .map(|response| response.response_object(version))
                .collect();
            serde_json::to_string(&objects).unwrap()
        };

        assert_eq!(
            render(Version::V1),
            r#"[{"speech":"Hello","type":0},{"speech":"raw","type":0}]"#
        );
        assert_eq!(
            render(Version::V2),
            r#"[{"text":{"text":["Hello"]}},{"speech":"raw","type":0}]"#
        );
    }
}
