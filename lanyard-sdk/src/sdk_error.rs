use std::error::Error;
use std::fmt;

/// Errors the SDK might return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SdkError {
    /// The gateway endpoint is not a ws:// or wss:// URL.
    InvalidEndpoint,
    /// Error transmitting a frame.
    TransmittingError,
    /// An event frame did not decode into a presence payload. The frame is dropped.
    MalformedPresenceEvent,
    /// Could not write the preference store.
    CouldNotWritePreferences,
}

impl fmt::Display for SdkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SdkError::InvalidEndpoint => {
                write!(f, "The gateway endpoint is not a ws:// or wss:// URL")
            }

            SdkError::TransmittingError => write!(f, "Error transmitting a frame"),

            SdkError::MalformedPresenceEvent => {
                write!(f, "An event frame did not decode into a presence payload")
            }

            SdkError::CouldNotWritePreferences => {
                write!(f, "Could not write the preference store")
            }
        }
    }
}

impl Error for SdkError {}
