use std::error::Error;
use std::fmt;

use crate::base64;
use crate::hex::{self, DecodeError};
use crate::xor::{self, XorError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    Decode(DecodeError),
    Xor(XorError),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Decode(e) => e.fmt(f),
            CodecError::Xor(e) => e.fmt(f),
        }
    }
}

impl Error for CodecError {}

impl From<DecodeError> for CodecError {
    fn from(e: DecodeError) -> Self {
        CodecError::Decode(e)
    }
}

impl From<XorError> for CodecError {
    fn from(e: XorError) -> Self {
        CodecError::Xor(e)
    }
}

pub fn hex_to_base64(hex_str: &str) -> Result<String, DecodeError> {
    let bytes = hex::decode(hex_str)?;
    Ok(base64::encode(&bytes))
}

pub fn hex_fixed_xor(hex_x: &str, hex_y: &str) -> Result<String, CodecError> {
    let x = hex::decode(hex_x)?;
    let y = hex::decode(hex_y)?;

    let combined = xor::fixed_xor(&x, &y)?;
    Ok(hex::encode(&combined))
}
