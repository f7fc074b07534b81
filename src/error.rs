use std::fmt;

/// Error type for AI module operations
/// Implements Clone for sending through channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Requested provider is not active (no key, or unknown name)
    ProviderUnavailable(String)
  , /// Request body could not be encoded
    SerializeError(String)
  , /// Transport level failure, nothing came back
    HttpError(String)
  , /// API answered with a non-success status
    UnexpectedStatus(u16)
  , /// Failed to parse API response
    ParseError(String)
  , /// Invalid configuration
    InvalidConfiguration(String)
  , /// Generic error
    Other(String)
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::ProviderUnavailable(provider) => {
              write!(f, "Provider not available: {}", provider)
            }
          , Error::SerializeError(msg) => {
              write!(f, "Failed to encode request: {}", msg)
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::UnexpectedStatus(code) => {
              write!(f, "API returned unexpected status code {}", code)
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
          , Error::Other(msg) => {
              write!(f, "Error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}
