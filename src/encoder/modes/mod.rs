//! QR code data mode encoders
//!
//! This module contains encoders for different QR data modes:
//! - Numeric: Efficient encoding for digits (0-9)
//! - Alphanumeric: Letters, numbers, and symbols
//! - Byte: 8-bit data (ISO-8859-1)

pub mod alphanumeric;
pub mod byte;
pub mod numeric;
