use crate::parser::ParseError;

/// Error while collecting a [`ResponseHead`].
///
/// [`ResponseHead`]: super::ResponseHead
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadError {
    /// Response is malformed.
    Parse(ParseError),
    /// Version is well formed but unknown, e.g: `HTTP/1.2`.
    UnsupportedVersion,
    /// Status code is outside `100..=999`.
    InvalidStatus,
}

impl std::error::Error for HeadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for HeadError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Parse(err) => std::fmt::Display::fmt(err, f),
            Self::UnsupportedVersion => f.write_str("unsupported version"),
            Self::InvalidStatus => f.write_str("invalid status code"),
        }
    }
}

impl From<ParseError> for HeadError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}
