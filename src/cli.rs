//! # 命令行接口模块
//!
//! 使用 `clap` 定义程序的命令行参数。
//! 通过 `--decode` 开关在隐藏与恢复两种模式之间切换，
//! [`Cli::into_command`] 将扁平的参数映射为具体的子命令参数。

use crate::constants::{DEFAULT_IMAGE_PATH, DEFAULT_MESSAGE, DEFAULT_OUTPUT_PATH};
use clap::Parser;
use std::path::PathBuf;

/// 一款基于像素奇偶性 (LSB) 的隐写工具，用于在无损格式图像 (如 BMP, PNG) 中隐藏或恢复简短的 ASCII 文本。
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// 要隐藏的文本 (仅使用每个字符的低 8 位)。
    #[arg(short = 's', long, default_value = DEFAULT_MESSAGE)]
    pub message: String,

    /// 从图像中恢复文本，而不是隐藏文本。
    #[arg(short, long)]
    pub decode: bool,

    /// 载体图像或已隐写图像的路径。
    #[arg(short, long, default_value = DEFAULT_IMAGE_PATH)]
    pub image: PathBuf,

    /// 隐写完成后，保存结果图像的输出路径。
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// 恢复模式下，额外将文本保存到该路径。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 输出调试日志。
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// 根据 `--decode` 开关选择要执行的子命令。
    pub fn into_command(self) -> Commands {
        if self.decode {
            Commands::Recover(RecoverArgs {
                image: self.image,
                text: self.text,
            })
        } else {
            Commands::Hide(HideArgs {
                image: self.image,
                message: self.message,
                dest: self.output,
            })
        }
    }
}

/// 可执行的操作：hide (隐藏) 和 recover (恢复)。
#[derive(Debug)]
pub enum Commands {
    /// 在图像中隐藏文本。
    Hide(HideArgs),

    /// 从经过隐写的图像中恢复隐藏的文本。
    Recover(RecoverArgs),
}

/// 'hide' 操作所需的参数。
#[derive(Debug, Clone)]
pub struct HideArgs {
    /// 用于隐写的输入图像文件路径。
    pub image: PathBuf,

    /// 要隐藏的文本内容。
    pub message: String,

    /// 保存结果图像的输出路径。
    pub dest: PathBuf,
}

/// 'recover' 操作所需的参数。
#[derive(Debug, Clone)]
pub struct RecoverArgs {
    /// 已隐藏文本数据的图像文件路径。
    pub image: PathBuf,

    /// 保存恢复文本的路径 (可选)。
    pub text: Option<PathBuf>,
}
