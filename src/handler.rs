//! # 命令处理逻辑模块
//!
//! 包含处理隐藏与恢复操作的高级业务逻辑。
//! 本模块负责协调图像 I/O、调用核心隐写算法以及向用户报告结果。

use crate::cli::{HideArgs, RecoverArgs};
use crate::grid::{capacity, load_carrier, save_carrier};
use crate::steganography::{hide_message, recover_message};
use anyhow::{Context, Result};
use colored::Colorize;
use image::GenericImageView;
use log::{info, warn};
use std::fs;

/// 处理 'Hide' 操作的执行逻辑。
///
/// 读取载体图像并转换为可写的 RGBA 网格，将消息 (含结束标记) 嵌入像素奇偶性，
/// 最后将结果写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径与消息文本的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入图像。
/// * 图像容量不足以容纳消息及结束标记。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let source = load_carrier(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;
    let (width, height) = source.dimensions();
    info!("Carrier {}: {}x{}", args.image.display(), width, height);

    let mut carrier = source.to_rgba8();
    hide_message(&args.message, &mut carrier).with_context(|| {
        format!(
            "Not enough space in the image to hide the message. \nCapacity: {} bits",
            capacity(&carrier).to_string().green().bold()
        )
    })?;

    if let Some(parent) = args.dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| {
            format!(
                "Unable to create output directory: {}",
                parent.to_string_lossy().red().bold()
            )
        })?;
    }

    save_carrier(&carrier, &args.dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            args.dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The message has been successfully hidden and saved: {}",
        args.dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 操作的执行逻辑。
///
/// 扫描图像中的通道奇偶性直到遇到结束标记，还原并打印文本。
/// 返回的文本包含结束标记对应的空字符；图像中没有结束标记时为空字符串。
///
/// # Arguments
///
/// * `args` - 包含输入路径与可选文本输出路径的 `RecoverArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入图像。
/// * 无法写入到目标文本文件。
pub fn handle_recover(args: RecoverArgs) -> Result<String> {
    let carrier = load_carrier(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;
    let (width, height) = carrier.dimensions();
    info!("Carrier {}: {}x{}", args.image.display(), width, height);

    let message = recover_message(&carrier);
    if message.is_empty() {
        warn!(
            "No hidden message found in {}",
            args.image.to_string_lossy().yellow()
        );
    }

    println!("{message}");

    if let Some(text_path) = &args.text {
        fs::write(text_path, &message).with_context(|| {
            format!(
                "Unable to write to target text file: {}",
                text_path.to_string_lossy().red().bold()
            )
        })?;
        println!(
            "The message has been successfully recovered and saved: {}",
            text_path.to_string_lossy().green().bold()
        );
    }

    Ok(message)
}
