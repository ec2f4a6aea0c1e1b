//! # 命令处理逻辑模块
//!
//! 包含处理 `preprocess` 和 `postprocess` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用 BMP 与 mem 编解码函数以及向用户报告结果。

use crate::bmp::{BmpHeader, decode_pixels, encode_bmp};
use crate::cli::{PostprocessArgs, PreprocessArgs};
use crate::hex::{ParseMode, read_mem, write_mem};
use crate::pixel::PixelGrid;
use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

/// 处理 'Preprocess' 命令的执行逻辑。
///
/// 读取 BMP 头部和像素数据，转换为自上而下的顺序后写出 mem 文件，
/// 并打印像素总数。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `PreprocessArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法打开或读取输入的 BMP 文件。
/// * BMP 头部不足 54 字节或位深不是 24。
/// * 像素数据被截断。
/// * 无法写入 mem 文件。
pub fn handle_preprocess(args: PreprocessArgs) -> Result<()> {
    let file = File::open(&args.image).with_context(|| {
        format!(
            "Unable to open image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;
    let mut reader = BufReader::new(file);

    let header = BmpHeader::read_from(&mut reader).with_context(|| {
        format!(
            "Invalid BMP header in: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let grid = decode_pixels(&mut reader, &header).with_context(|| {
        format!(
            "Failed to read pixel data from: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;
    info!("Decoded {}x{} image", grid.width(), grid.height());

    let file = File::create(&args.mem).with_context(|| {
        format!(
            "Unable to create mem file: {}",
            args.mem.to_string_lossy().red().bold()
        )
    })?;
    let mut writer = BufWriter::new(file);

    write_mem(&mut writer, grid.pixels())
        .map_err(anyhow::Error::from)
        .and_then(|_| writer.flush().map_err(anyhow::Error::from))
        .with_context(|| {
            format!(
                "Unable to write to mem file: {}",
                args.mem.to_string_lossy().red().bold()
            )
        })?;

    println!(
        "Generated {}, total pixels = {}",
        args.mem.to_string_lossy().green().bold(),
        grid.len().to_string().green().bold()
    );

    Ok(())
}

/// 处理 'Postprocess' 命令的执行逻辑。
///
/// 从原始 BMP 中读取头部，解析 mem 文件中的像素，再以原头部重建 BMP 文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径和解析模式的 `PostprocessArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取原始 BMP 或 mem 文件。
/// * BMP 头部不足 54 字节或位深不是 24。
/// * mem 文件中的像素少于 `width * height`。
/// * 使用 `--strict` 时 mem 文件存在格式错误的行。
/// * 无法写入目标 BMP 文件。
pub fn handle_postprocess(args: PostprocessArgs) -> Result<()> {
    let file = File::open(&args.image).with_context(|| {
        format!(
            "Unable to open image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let header = BmpHeader::read_from(BufReader::new(file)).with_context(|| {
        format!(
            "Invalid BMP header in: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let mode = if args.strict {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    };

    let file = File::open(&args.mem).with_context(|| {
        format!(
            "Unable to open mem file: {}",
            args.mem.to_string_lossy().red().bold()
        )
    })?;

    let pixels = read_mem(BufReader::new(file), mode).with_context(|| {
        format!(
            "Failed to parse mem file: {}",
            args.mem.to_string_lossy().red().bold()
        )
    })?;
    info!("Read {} pixels ({:?} mode)", pixels.len(), mode);

    let grid = PixelGrid::from_pixels(header.width, header.height, pixels).with_context(|| {
        format!(
            "The mem file {} does not cover the image described by {}",
            args.mem.to_string_lossy().red().bold(),
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let file = File::create(&args.dest).with_context(|| {
        format!(
            "Unable to create target image file: {}",
            args.dest.to_string_lossy().red().bold()
        )
    })?;
    let mut writer = BufWriter::new(file);

    encode_bmp(&mut writer, &header, &grid)
        .map_err(anyhow::Error::from)
        .and_then(|_| writer.flush().map_err(anyhow::Error::from))
        .with_context(|| {
            format!(
                "Unable to write to target image file: {}",
                args.dest.to_string_lossy().red().bold()
            )
        })?;

    println!(
        "Generated BMP: {}",
        args.dest.to_string_lossy().green().bold()
    );

    Ok(())
}
