//! # 像素数据模型
//!
//! `PixelGrid` 是两条流水线共用的内存表示：无论磁盘上的存储顺序如何，
//! 网格总是按自上而下、从左到右的行优先顺序排列。

use crate::error::{Error, Result};
use log::warn;

/// 一个 24 位 RGB 像素。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Pixel { r, g, b }
    }

    /// 由 BMP 磁盘上的 B, G, R 字节序构造。
    pub const fn from_bgr(bgr: [u8; 3]) -> Self {
        Pixel::new(bgr[2], bgr[1], bgr[0])
    }

    /// 转换为 BMP 磁盘上的 B, G, R 字节序。
    pub const fn to_bgr(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }

    /// 由 24 位整数 `0xRRGGBB` 构造，高 8 位被忽略。
    pub const fn from_rgb24(value: u32) -> Self {
        Pixel::new(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }
}

/// 自上而下、行优先排列的像素网格。
///
/// 长度恒等于 `width * height`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    /// 以自上而下顺序的像素序列构造网格。
    ///
    /// # Errors
    ///
    /// 像素数少于 `width * height` 时返回 `Error::PixelCountMismatch`；
    /// 多余的像素会被截断并记录警告。
    pub fn from_pixels(width: u32, height: u32, mut pixels: Vec<Pixel>) -> Result<Self> {
        let needed = pixel_count(width, height)?;

        if pixels.len() < needed {
            return Err(Error::PixelCountMismatch {
                width,
                height,
                needed,
                actual: pixels.len(),
            });
        }

        if pixels.len() > needed {
            warn!(
                "{} surplus pixels ignored ({} supplied, {}x{} image needs {})",
                pixels.len() - needed,
                pixels.len(),
                width,
                height,
                needed
            );
            pixels.truncate(needed);
        }

        Ok(PixelGrid {
            width,
            height,
            pixels,
        })
    }

    /// 以自下而上 (BMP 磁盘顺序) 的像素序列构造网格，行序会被翻转。
    pub fn from_bottom_up(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
        let grid = PixelGrid::from_pixels(width, height, pixels)?;
        Ok(grid.flipped())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// 按自上而下顺序遍历各行。
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Pixel]> + ExactSizeIterator {
        // width 为 0 时 chunks_exact 会 panic，此时网格必然为空
        self.pixels.chunks_exact(self.width.max(1) as usize)
    }

    /// 返回行序翻转后的新网格：输出第 `i` 行 = 输入第 `height - 1 - i` 行。
    ///
    /// 翻转两次得到原网格。
    pub fn flipped(&self) -> Self {
        let pixels = self.rows().rev().flatten().copied().collect();
        PixelGrid {
            width: self.width,
            height: self.height,
            pixels,
        }
    }
}

/// 计算 `width * height`，溢出时返回 `Error::DimensionsTooLarge`。
pub fn pixel_count(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(Error::DimensionsTooLarge { width, height })
}
