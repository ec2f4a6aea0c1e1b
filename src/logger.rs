use log::{Level, info};

/// 根据 `-v` 的次数初始化日志，默认只输出警告。
pub fn setup_logger(verbosity: u8) -> anyhow::Result<()> {
    let level = level_for_verbosity(verbosity);

    simple_logger::init_with_level(level)?;

    info!("Log level: {}", level);
    Ok(())
}

/// `-v` 次数对应的日志级别：0 为 warn，1 为 info，2 为 debug，更多为 trace。
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::Warn,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace,
    }
}
