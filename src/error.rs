/// Error type returned by this crate.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FulfillmentError {
    /// A constructor or parser received a value it cannot accept.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl FulfillmentError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
