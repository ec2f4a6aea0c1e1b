use super::BmpHeader;
use crate::error::{Error, Result};
use crate::pixel::PixelGrid;
use std::io::Write;

/// 以原始头部和自上而下的像素网格写出完整的 BMP 字节流。
///
/// 头部 54 字节原样写入，随后从网格最后一行开始 (磁盘最底行) 逐行写出 BGR 字节，
/// 每行末尾补零至 4 字节对齐。
///
/// # Errors
///
/// * 网格尺寸与头部声明不一致时返回 `Error::PixelCountMismatch`。
/// * 写入失败时返回 `Error::Io`。
pub fn encode_bmp<W: Write>(mut writer: W, header: &BmpHeader, grid: &PixelGrid) -> Result<()> {
    if grid.width() != header.width || grid.height() != header.height {
        return Err(Error::PixelCountMismatch {
            width: header.width,
            height: header.height,
            needed: header.pixel_count()?,
            actual: grid.len(),
        });
    }

    let padding = vec![0u8; header.padding()?];
    let mut scanline = Vec::with_capacity(header.row_size()?);

    writer.write_all(header.raw())?;

    for row in grid.rows().rev() {
        scanline.clear();
        scanline.extend(row.iter().flat_map(|pixel| pixel.to_bgr()));
        scanline.extend_from_slice(&padding);
        writer.write_all(&scanline)?;
    }

    Ok(())
}
