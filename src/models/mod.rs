//! Core data structures (ModuleMatrix, Version, ECLevel, masks)

mod matrix;
mod symbol;

pub use matrix::{Module, ModuleMatrix};
pub use symbol::{ECLevel, EncodingMode, MaskPattern, QrSymbol, Version};
