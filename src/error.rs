// src/error.rs

use std::{error::Error, fmt};

#[derive(Debug)]
pub enum ConvertError {
    Io(String),
    InvalidConfiguration(String),
    InvalidPath(String),
    MaxSizeExceeded(usize, usize),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Io(e) => write!(f, "I/O error: {}", e),
            ConvertError::InvalidConfiguration(e) => write!(f, "Invalid configuration: {}", e),
            ConvertError::InvalidPath(e) => write!(f, "Invalid path: {}", e),
            ConvertError::MaxSizeExceeded(max, got) => {
                write!(f, "Input too large: max {} bytes, got {}", max, got)
            }
        }
    }
}

impl Error for ConvertError {}
