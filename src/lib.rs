//! # parity_hide 库
//!
//! 本库包含基于像素奇偶性的 LSB 隐写工具的核心逻辑。

// 声明库包含的所有模块。

pub mod bitstream;
pub mod cli;
pub mod constants;
pub mod error;
pub mod grid;
pub mod handler;
pub mod steganography;

pub use bitstream::Bitstream;
pub use error::StegoError;
pub use grid::{PixelGrid, PixelGridMut};
