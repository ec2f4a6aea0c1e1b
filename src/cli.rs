//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。

use clap::Parser;
use std::path::PathBuf;

/// 在 24 位 BMP 图像与 Verilog 测试平台使用的 hex 内存文件 (.mem) 之间互相转换。
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// 提高日志详细程度 (-v 为 info，-vv 为 debug，-vvv 为 trace)。
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：preprocess (BMP 转 mem) 和 postprocess (mem 转 BMP)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 将 24 位 BMP 图像转换为每行一个 RRGGBB 像素的 mem 文件。
    #[command(visible_alias = "pre")]
    Preprocess(PreprocessArgs),

    /// 以原始 BMP 的头部为模板，将 mem 文件重建为 BMP 图像。
    #[command(visible_alias = "post")]
    Postprocess(PostprocessArgs),
}

/// 'preprocess' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct PreprocessArgs {
    /// 输入的 24 位 BMP 图像。
    pub image: PathBuf,

    /// 输出的 mem 文件。
    pub mem: PathBuf,
}

/// 'postprocess' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct PostprocessArgs {
    /// 原始 BMP 图像，提供头部与尺寸。
    pub image: PathBuf,

    /// 输入的 mem 文件 (通常由测试平台生成)。
    pub mem: PathBuf,

    /// 输出的 BMP 图像。
    pub dest: PathBuf,

    /// 遇到格式错误的数据行时报错，而不是跳过。
    #[arg(long)]
    pub strict: bool,
}
