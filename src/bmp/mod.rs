//! # BMP 编解码模块
//!
//! 仅支持无压缩、无调色板的 24 位 BMP，头部固定为 54 字节。
//! 磁盘上的像素按自下而上、BGR 顺序存储，每行填充至 4 字节对齐。

mod decode;
mod encode;
mod header;

pub use decode::decode_pixels;
pub use encode::encode_bmp;
pub use header::{BmpHeader, row_size};
