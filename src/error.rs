//! # Error Types Module
//!
//! Centralized error handling for the Talkboard application.
//!
//! ## Error Types
//! - `ProgramError`: bundled program dataset parsing failures
//! - `StoreError`: selection store I/O and (de)serialization errors
//! - `ConfigError`: configuration file I/O and parsing errors
//!
//! Storage and config failures are recoverable: callers log them and fall
//! back to an empty store or default settings. Only a malformed bundled
//! dataset is fatal at startup.

use std::fmt;

/// Errors that can occur while parsing the bundled program dataset
#[derive(Debug)]
pub enum ProgramError {
    /// The embedded JSON does not match the expected shape
    ParseFailed(serde_json::Error),
}

impl fmt::Display for ProgramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgramError::ParseFailed(e) => {
                write!(f, "Failed to parse bundled program dataset: {}", e)
            }
        }
    }
}

impl std::error::Error for ProgramError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProgramError::ParseFailed(e) => Some(e),
        }
    }
}

/// Errors that can occur while reading or writing the selection store file
#[derive(Debug)]
pub enum StoreError {
    /// Failed to read the selections file
    ReadFailed(std::io::Error),
    /// Failed to write the selections file
    WriteFailed(std::io::Error),
    /// Failed to parse the selections file
    ParseFailed(serde_json::Error),
    /// Failed to serialize the selections
    SerializeFailed(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::ReadFailed(e) => {
                write!(f, "Failed to read selections file: {}", e)
            }
            StoreError::WriteFailed(e) => {
                write!(f, "Failed to write selections file: {}", e)
            }
            StoreError::ParseFailed(e) => {
                write!(f, "Failed to parse selections file: {}", e)
            }
            StoreError::SerializeFailed(e) => {
                write!(f, "Failed to serialize selections: {}", e)
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::ReadFailed(e) => Some(e),
            StoreError::WriteFailed(e) => Some(e),
            StoreError::ParseFailed(e) => Some(e),
            StoreError::SerializeFailed(e) => Some(e),
        }
    }
}

/// Errors that can occur during configuration operations
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read config file
    ReadFailed(std::io::Error),
    /// Failed to write config file
    WriteFailed(std::io::Error),
    /// Failed to parse config file
    ParseFailed(toml::de::Error),
    /// Failed to serialize config
    SerializeFailed(toml::ser::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ReadFailed(e) => {
                write!(f, "Failed to read config file: {}", e)
            }
            ConfigError::WriteFailed(e) => {
                write!(f, "Failed to write config file: {}", e)
            }
            ConfigError::ParseFailed(e) => {
                write!(f, "Failed to parse config file: {}", e)
            }
            ConfigError::SerializeFailed(e) => {
                write!(f, "Failed to serialize config: {}", e)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::ReadFailed(e) => Some(e),
            ConfigError::WriteFailed(e) => Some(e),
            ConfigError::ParseFailed(e) => Some(e),
            ConfigError::SerializeFailed(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_chain() {
        use std::error::Error;
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = StoreError::ReadFailed(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_program_error_display() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ProgramError::ParseFailed(json_err);
        assert!(err.to_string().contains("program dataset"));
    }
}
