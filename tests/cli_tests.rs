use bmp_mem::{constants::USAGE_EXIT_CODE, logger::level_for_verbosity};
use log::Level;
use std::process::{Command, Output};

/// 运行编译好的 bmp_mem 可执行文件
fn run_bmp_mem(args: &[&str]) -> std::io::Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_bmp_mem")).args(args).output()
}

/// 验证参数数量错误时以退出码 1 结束并打印用法
#[test]
fn test_wrong_argument_count_exits_with_usage_code() -> anyhow::Result<()> {
    for args in [
        &["pre", "only_one_arg"][..],
        &["post", "a.bmp", "b.mem"][..],
        &["preprocess", "a.bmp", "b.mem", "extra"][..],
    ] {
        let output = run_bmp_mem(args)?;
        assert_eq!(output.status.code(), Some(USAGE_EXIT_CODE), "args: {:?}", args);
        assert!(
            String::from_utf8_lossy(&output.stderr).contains("Usage"),
            "usage should be printed for {:?}",
            args
        );
    }

    Ok(())
}

/// 验证缺少子命令时同样以退出码 1 结束
#[test]
fn test_missing_subcommand_exits_with_usage_code() -> anyhow::Result<()> {
    let output = run_bmp_mem(&[])?;
    assert_eq!(output.status.code(), Some(USAGE_EXIT_CODE));

    Ok(())
}

/// 验证 --help 和 --version 正常退出
#[test]
fn test_help_and_version_exit_successfully() -> anyhow::Result<()> {
    let output = run_bmp_mem(&["--help"])?;
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("preprocess"));

    let output = run_bmp_mem(&["--version"])?;
    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

/// 验证 -v 次数与日志级别的对应关系
#[test]
fn test_verbosity_to_log_level() {
    assert_eq!(level_for_verbosity(0), Level::Warn);
    assert_eq!(level_for_verbosity(1), Level::Info);
    assert_eq!(level_for_verbosity(2), Level::Debug);
    assert_eq!(level_for_verbosity(3), Level::Trace);
    assert_eq!(level_for_verbosity(u8::MAX), Level::Trace);
}
