use crate::constants::{
    BMP_HEADER_SIZE, BPP_POS, BYTES_PER_PIXEL, DATA_OFFSET_POS, HEIGHT_POS, ROW_ALIGNMENT,
    SUPPORTED_BPP, WIDTH_POS,
};
use crate::error::{Error, Result};
use crate::pixel;
use log::debug;
use std::io::Read;

/// 经典 54 字节 BMP 头部。
///
/// 原始字节会在重新编码时原样写回，其余字段由固定偏移解析得到。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BmpHeader {
    raw: [u8; BMP_HEADER_SIZE],
    pub data_offset: u32,
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u16,
}

impl BmpHeader {
    /// 从数据源的当前位置读取恰好 54 字节并解析。
    ///
    /// 最多读取 54 字节，不会越过头部。
    ///
    /// # Errors
    ///
    /// * 可用字节不足 54 时返回 `Error::HeaderTooShort`。
    /// * 位深不是 24 时返回 `Error::UnsupportedBitDepth`。
    /// * 底层读取失败时返回 `Error::Io`。
    pub fn read_from<R: Read>(reader: R) -> Result<Self> {
        let mut buf = Vec::with_capacity(BMP_HEADER_SIZE);
        reader
            .take(BMP_HEADER_SIZE as u64)
            .read_to_end(&mut buf)?;
        BmpHeader::from_bytes(&buf)
    }

    /// 解析内存中的头部字节，只使用前 54 字节。
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let raw: [u8; BMP_HEADER_SIZE] = bytes
            .get(..BMP_HEADER_SIZE)
            .and_then(|head| head.try_into().ok())
            .ok_or(Error::HeaderTooShort(bytes.len()))?;

        let header = BmpHeader {
            raw,
            data_offset: read_u32(&raw, DATA_OFFSET_POS),
            width: read_u32(&raw, WIDTH_POS),
            height: read_u32(&raw, HEIGHT_POS),
            bits_per_pixel: read_u16(&raw, BPP_POS),
        };

        if header.bits_per_pixel != SUPPORTED_BPP {
            return Err(Error::UnsupportedBitDepth(header.bits_per_pixel));
        }

        debug!(
            "BMP header: {}x{}, bpp={}, data offset={}",
            header.width, header.height, header.bits_per_pixel, header.data_offset
        );

        Ok(header)
    }

    /// 原始的 54 字节头部。
    pub fn raw(&self) -> &[u8; BMP_HEADER_SIZE] {
        &self.raw
    }

    /// 每条扫描线在磁盘上的字节数，按 4 字节对齐。
    pub fn row_size(&self) -> Result<usize> {
        row_size(self.width).ok_or(Error::DimensionsTooLarge {
            width: self.width,
            height: self.height,
        })
    }

    /// 每行末尾的填充字节数。
    pub fn padding(&self) -> Result<usize> {
        Ok(self.row_size()? - self.width as usize * BYTES_PER_PIXEL)
    }

    pub fn pixel_count(&self) -> Result<usize> {
        pixel::pixel_count(self.width, self.height)
    }
}

/// `ceil(width * 3 / 4) * 4`，溢出时返回 `None`。
pub fn row_size(width: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(BYTES_PER_PIXEL)?
        .checked_next_multiple_of(ROW_ALIGNMENT)
}

fn read_u16(raw: &[u8; BMP_HEADER_SIZE], pos: usize) -> u16 {
    u16::from_le_bytes([raw[pos], raw[pos + 1]])
}

fn read_u32(raw: &[u8; BMP_HEADER_SIZE], pos: usize) -> u32 {
    u32::from_le_bytes([raw[pos], raw[pos + 1], raw[pos + 2], raw[pos + 3]])
}
