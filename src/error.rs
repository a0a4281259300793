use std::fmt;

/// Error returned by [`crate::State::new_keyed`] when given an empty key.
///
/// An empty key is rejected rather than silently treated as an unkeyed
/// state — callers who want that use [`crate::State::new_hash`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyKey;

impl fmt::Display for EmptyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key must not be empty")
    }
}

impl std::error::Error for EmptyKey {}

/// Error returned by the Base-16/Base-64 codecs when input is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeFormatError(pub(crate) String);

impl fmt::Display for DecodeFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed input: {}", self.0)
    }
}

impl std::error::Error for DecodeFormatError {}

/// Errors surfaced at the command-line boundary. Unlike [`EmptyKey`] and
/// [`DecodeFormatError`], which describe a single component's contract,
/// `CliError` is the union a subcommand handler can fail with.
#[derive(Debug)]
pub enum CliError {
    /// An operand's value didn't meet the subcommand's requirements, e.g. an
    /// `in.fmt`/`out.fmt`/`key.fmt` outside `{16, 64, 256}`.
    InvalidArgument(String),
    /// Reading or writing a file or stream failed.
    Io(std::io::Error),
    /// A Base-16/Base-64 payload was malformed.
    DecodeFormat(DecodeFormatError),
    /// The two interactively captured passphrases didn't match.
    PassphraseMismatch,
    /// A key exceeded the cipher's maximum key size.
    KeyTooLarge,
    /// The key was empty.
    EmptyKey,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::DecodeFormat(err) => write!(f, "{err}"),
            CliError::PassphraseMismatch => write!(f, "passphrases do not match"),
            CliError::KeyTooLarge => write!(f, "key is too large"),
            CliError::EmptyKey => write!(f, "key must not be empty"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err)
    }
}

impl From<DecodeFormatError> for CliError {
    fn from(err: DecodeFormatError) -> Self {
        CliError::DecodeFormat(err)
    }
}

impl From<EmptyKey> for CliError {
    fn from(_: EmptyKey) -> Self {
        CliError::EmptyKey
    }
}
