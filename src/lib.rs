//! `fulfillment-rich` models the rich response items of a conversational
//! agent fulfillment webhook.
//!
//! Every item implements [`RichResponse`], which yields its wire object for
//! either protocol version:
//! - [`Text`] builds a plain text message
//! - [`Raw`] passes a platform-specific payload through untouched

mod error;
mod raw;
mod response;
mod rich;
mod text;
mod version;

pub use error::FulfillmentError;
pub use raw::Raw;
pub use response::Response;
pub use rich::RichResponse;
pub use text::Text;
pub use version::Version;

pub type Result<T> = std::result::Result<T, FulfillmentError>;
