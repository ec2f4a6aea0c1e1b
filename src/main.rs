use clap::Parser;

use bmp_mem::{
    cli::{Cli, Commands},
    constants::USAGE_EXIT_CODE,
    handler::{handle_postprocess, handle_preprocess},
    logger::setup_logger,
};

/// 程序的主入口点
///
/// 负责解析命令行参数，并根据指定的子命令（`preprocess` 或 `postprocess`）
/// 将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    // 参数错误时打印用法并以退出码 1 结束；--help 和 --version 照常退出
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            std::process::exit(USAGE_EXIT_CODE);
        }
        Err(err) => err.exit(),
    };

    setup_logger(cli.verbose)?;

    // 根据子命令调用相应的处理函数
    match cli.command {
        Commands::Preprocess(args) => handle_preprocess(args),
        Commands::Postprocess(args) => handle_postprocess(args),
    }
}
