use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

use parity_hide::{
    cli::{Cli, Commands},
    handler::{handle_hide, handle_recover},
};

/// 初始化日志：格式为 `[LEVEL] message`，默认 INFO，`--verbose` 时为 DEBUG。
/// 仍可通过 `RUST_LOG` 覆盖。
fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    Builder::new()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// 程序的主入口点
///
/// 负责解析命令行参数，并根据 `--decode` 开关
/// 将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();
    init_logger(cli.verbose);

    // 根据操作调用相应的处理函数
    match cli.into_command() {
        Commands::Hide(args) => handle_hide(args),
        Commands::Recover(args) => handle_recover(args).map(|_| ()),
    }
}
