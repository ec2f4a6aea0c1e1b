use crate::constants::{ADDRESS_PREFIX, COMMENT_PREFIX, HEX_DIGITS_PER_PIXEL};
use crate::error::{Error, Result};
use crate::pixel::Pixel;
use log::{debug, warn};
use std::io::BufRead;

/// 对格式错误的数据行的处理方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// 静默丢弃格式错误的行 (仅记录警告)。
    #[default]
    Lenient,
    /// 遇到格式错误的行立即失败。
    Strict,
}

/// mem 文件中一行的分类结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemLine {
    Record(Pixel),
    Blank,
    Comment,
    Address,
    Malformed,
}

impl MemLine {
    /// 对一行文本分类，前后空白会先被去除。
    pub fn classify(line: &str) -> Self {
        let line = line.trim();

        if line.is_empty() {
            MemLine::Blank
        } else if line.starts_with(COMMENT_PREFIX) {
            MemLine::Comment
        } else if line.starts_with(ADDRESS_PREFIX) {
            MemLine::Address
        } else if is_pixel_record(line) {
            // 已校验为 6 位十六进制，不会失败
            u32::from_str_radix(line, 16)
                .map(|value| MemLine::Record(Pixel::from_rgb24(value)))
                .unwrap_or(MemLine::Malformed)
        } else {
            MemLine::Malformed
        }
    }
}

/// 恰好 6 个字符且全部为十六进制数字 (不区分大小写)。
pub fn is_pixel_record(line: &str) -> bool {
    line.len() == HEX_DIGITS_PER_PIXEL && line.bytes().all(|b| b.is_ascii_hexdigit())
}

/// 读取 mem 文本，按行序返回所有像素记录。
///
/// 空行、`//` 注释行和 `@` 地址标记行被跳过。不检查像素数量，由调用方负责。
///
/// # Errors
///
/// * `ParseMode::Strict` 下遇到格式错误的行时返回 `Error::MalformedRecord` (行号从 1 开始)。
/// * 读取失败或内容不是合法 UTF-8 时返回 `Error::Io`。
pub fn read_mem<R: BufRead>(reader: R, mode: ParseMode) -> Result<Vec<Pixel>> {
    let mut pixels = Vec::new();
    let mut dropped = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        match MemLine::classify(&line) {
            MemLine::Record(pixel) => pixels.push(pixel),
            MemLine::Blank | MemLine::Comment | MemLine::Address => {}
            MemLine::Malformed => match mode {
                ParseMode::Strict => {
                    return Err(Error::MalformedRecord {
                        line: index + 1,
                        content: line.trim().to_string(),
                    });
                }
                ParseMode::Lenient => {
                    debug!("skipping malformed line {}: {:?}", index + 1, line.trim());
                    dropped += 1;
                }
            },
        }
    }

    if dropped > 0 {
        warn!("{} malformed lines were skipped", dropped);
    }

    Ok(pixels)
}
