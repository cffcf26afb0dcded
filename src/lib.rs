//! # lsb_blue 库
//!
//! 本库包含蓝色通道 LSB 隐写工具的核心逻辑：
//! 比特帧 (`framer`)、通道嵌入 (`embedder`) 及其组合 (`steganography`)，
//! 以及基于 `image` crate 的读写与命令行处理。

// 声明库包含的所有模块。

pub mod cli;
pub mod constants;
pub mod embedder;
pub mod error;
pub mod framer;
pub mod grid;
pub mod handler;
pub mod image_io;
pub mod steganography;

pub use error::{Result, StegoError};
pub use framer::{BitSequence, Message};
pub use grid::{PixelGrid, PixelGridMut};
pub use steganography::{available_pixels, fits, hide, hide_strict, required_pixels, reveal};
