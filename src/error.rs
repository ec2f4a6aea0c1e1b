//! # 错误类型模块
//!
//! 编解码层使用的错误类型。命令处理层 (`handler`) 会用 `anyhow` 为这些错误附加文件上下文。

use std::io;

/// BMP 与 mem 编解码过程中可能出现的错误。
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("not a standard 54-byte BMP header: only {0} bytes available")]
    HeaderTooShort(usize),

    #[error("only 24-bit BMP is supported, got bpp={0}")]
    UnsupportedBitDepth(u16),

    #[error("image dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("pixel data truncated at row {row}: need {needed} bytes, got {actual}")]
    TruncatedData {
        row: usize,
        needed: usize,
        actual: usize,
    },

    #[error("not enough pixels for a {width}x{height} image: need {needed}, got {actual}")]
    PixelCountMismatch {
        width: u32,
        height: u32,
        needed: usize,
        actual: usize,
    },

    #[error("malformed pixel record at line {line}: {content:?}")]
    MalformedRecord { line: usize, content: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// 是否属于头部格式错误 (头部过短、位深不支持或尺寸溢出)。
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Error::HeaderTooShort(_)
                | Error::UnsupportedBitDepth(_)
                | Error::DimensionsTooLarge { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
