//! # bmp_mem 库
//!
//! 本库包含 24 位 BMP 与 hex 内存文件互相转换的核心逻辑。

// 声明库包含的所有模块。

pub mod bmp;
pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod hex;
pub mod logger;
pub mod pixel;

pub use error::{Error, Result};
pub use pixel::{Pixel, PixelGrid};
