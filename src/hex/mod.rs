//! # mem 文本格式模块
//!
//! 每行一个 `RRGGBB` 十六进制像素，供 Verilog 测试平台的 `$readmemh` 读取。

mod decode;
mod encode;

pub use decode::{MemLine, ParseMode, is_pixel_record, read_mem};
pub use encode::{format_pixel, write_mem};
