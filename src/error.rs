//! Error types for Huffman compression and decompression.

use thiserror::Error;

/// Error variants for codec operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The header ended before all declared `(symbol, frequency)` pairs were read.
    #[error("header truncated: need {expected} bytes, found {found}")]
    TruncatedHeader {
        /// Bytes the declared symbol count requires.
        expected: usize,
        /// Bytes actually available.
        found: usize,
    },

    /// The header declares more distinct symbols than a byte alphabet holds.
    #[error("header declares {0} symbols, alphabet has 256")]
    TooManySymbols(u64),

    /// The same symbol appears twice in the frequency table.
    #[error("duplicate symbol {0:#04x} in frequency table")]
    DuplicateSymbol(u8),

    /// A symbol was declared with a frequency of zero.
    #[error("symbol {0:#04x} has zero frequency")]
    ZeroFrequency(u8),

    /// The frequencies sum past `u64::MAX`.
    #[error("frequency total overflows u64")]
    FrequencyOverflow,

    /// The decoded length cannot be addressed on this platform.
    #[error("output of {0} bytes does not fit in memory")]
    TooLarge(u64),

    /// The encoder was handed a byte its frequency table never saw.
    #[error("symbol {0:#04x} has no code")]
    UnknownSymbol(u8),

    /// The code stream does not describe a valid walk through the tree.
    #[error("corrupt code stream: {0}")]
    Corrupt(&'static str),

    /// The payload ran out before every symbol was decoded.
    #[error("payload truncated: decoded {decoded} of {expected} symbols")]
    TruncatedPayload {
        /// Symbols the frequency table promises.
        expected: u64,
        /// Symbols decoded before the bits ran out.
        decoded: u64,
    },

    /// An I/O error occurred while reading or writing a stream.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error describes malformed compressed data rather than I/O.
    pub fn is_format(&self) -> bool {
        !matches!(self, Error::Io(_))
    }
}

/// A specialized Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_truncated_payload() {
        let err = Error::TruncatedPayload {
            expected: 10,
            decoded: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains("7 of 10"));
    }

    #[test]
    fn test_display_symbol_is_hex() {
        assert_eq!(
            Error::DuplicateSymbol(0x0a).to_string(),
            "duplicate symbol 0x0a in frequency table"
        );
    }

    #[test]
    fn test_is_format() {
        assert!(Error::Corrupt("x").is_format());
        let io = Error::from(std::io::Error::other("disk"));
        assert!(!io.is_format());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + std::error::Error>() {}
        assert_send_sync::<Error>();
    }
}
