use std::borrow::Cow;

use serde_json::Value;

use crate::Version;

/// Common capability of every response item.
///
/// The assembly layer asks each item for its wire object under the protocol
/// version it is answering with. Items that carry a prebuilt payload hand it
/// out borrowed; items built from fields produce an owned object.
pub trait RichResponse {
    /// Wire object for the v1 webhook protocol.
    fn v1_response_object(&self) -> Cow<'_, Value>;

    /// Wire object for the v2 webhook protocol.
    fn v2_response_object(&self) -> Cow<'_, Value>;

    /// Dispatches to the accessor matching `version`.
    fn response_object(&self, version: Version) -> Cow<'_, Value> {
        #[cfg(feature = "tracing")]
        tracing::trace!(%version, "building response object");

        match version {
            Version::V1 => self.v1_response_object(),
            Version::V2 => self.v2_response_object(),
        }
    }
}
