use crate::error::Result;
use crate::pixel::Pixel;
use std::io::Write;

/// 将像素按给定顺序写为 mem 文本，每行一个大写 `RRGGBB`。
pub fn write_mem<'a, W, I>(mut writer: W, pixels: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Pixel>,
{
    for pixel in pixels {
        writeln!(writer, "{:02X}{:02X}{:02X}", pixel.r, pixel.g, pixel.b)?;
    }
    Ok(())
}

/// 格式化单个像素，总是 6 位，不足补零。
pub fn format_pixel(pixel: Pixel) -> String {
    format!("{:02X}{:02X}{:02X}", pixel.r, pixel.g, pixel.b)
}
