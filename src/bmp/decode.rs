use super::BmpHeader;
use crate::constants::BYTES_PER_PIXEL;
use crate::error::{Error, Result};
use crate::pixel::{Pixel, PixelGrid};
use log::debug;
use std::io::{Read, Seek, SeekFrom};

/// 读取 BMP 像素数据并返回自上而下的像素网格。
///
/// 数据源会先定位到 `header.data_offset`，然后按磁盘顺序 (最底行在前) 逐行读取
/// `row_size` 字节，每行只取前 `width` 个 BGR 像素，行尾填充字节被忽略。
///
/// # Errors
///
/// * 某一行的可用字节少于 `row_size` 时返回 `Error::TruncatedData`。
/// * 尺寸计算溢出时返回 `Error::DimensionsTooLarge`。
/// * 底层读取或定位失败时返回 `Error::Io`。
pub fn decode_pixels<R: Read + Seek>(mut reader: R, header: &BmpHeader) -> Result<PixelGrid> {
    let row_size = header.row_size()?;
    let width = header.width as usize;
    let mut bottom_up = Vec::new();
    let mut row = Vec::new();

    // 宽度为 0 时每行都是空的，无需逐行读取
    if row_size == 0 {
        return PixelGrid::from_pixels(header.width, header.height, Vec::new());
    }

    reader.seek(SeekFrom::Start(header.data_offset.into()))?;

    for row_index in 0..header.height as usize {
        row.clear();
        (&mut reader)
            .take(row_size as u64)
            .read_to_end(&mut row)?;

        if row.len() < row_size {
            return Err(Error::TruncatedData {
                row: row_index,
                needed: row_size,
                actual: row.len(),
            });
        }

        bottom_up.extend(
            row.chunks_exact(BYTES_PER_PIXEL)
                .take(width)
                .map(|bgr| Pixel::from_bgr([bgr[0], bgr[1], bgr[2]])),
        );
    }

    debug!(
        "decoded {} pixels from {} rows of {} bytes",
        bottom_up.len(),
        header.height,
        row_size
    );

    PixelGrid::from_bottom_up(header.width, header.height, bottom_up)
}
