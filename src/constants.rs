/// BMP 文件头 (BITMAPFILEHEADER 14 字节 + BITMAPINFOHEADER 40 字节) 的总大小。
pub const BMP_HEADER_SIZE: usize = 54;

/// 像素数据偏移量字段在头部中的位置 (u32, 小端)。
pub const DATA_OFFSET_POS: usize = 10;

/// 图像宽度字段的位置 (u32, 小端)。
pub const WIDTH_POS: usize = 18;

/// 图像高度字段的位置 (u32, 小端)。
pub const HEIGHT_POS: usize = 22;

/// 位深字段的位置 (u16, 小端)。
pub const BPP_POS: usize = 28;

/// 唯一支持的位深。
pub const SUPPORTED_BPP: u16 = 24;

/// 每个像素在磁盘上占用的字节数 (B, G, R)。
pub const BYTES_PER_PIXEL: usize = 3;

/// 每条扫描线按此字节数对齐。
pub const ROW_ALIGNMENT: usize = 4;

/// mem 文件中每个像素记录的十六进制位数 (RRGGBB)。
pub const HEX_DIGITS_PER_PIXEL: usize = 6;

/// mem 文件的注释行前缀。
pub const COMMENT_PREFIX: &str = "//";

/// mem 文件的地址标记行前缀 (如 `$readmemh` 的 `@0000`)。
pub const ADDRESS_PREFIX: &str = "@";

/// 参数错误时的进程退出码。
pub const USAGE_EXIT_CODE: i32 = 1;
