//! # 错误类型模块
//!
//! 定义隐写核心与图像 I/O 可能产生的错误。
//! 命令处理层 (`handler`) 会用 `anyhow` 为这些错误补充上下文。

use std::path::PathBuf;
use thiserror::Error;

/// 隐写过程中可能发生的错误。
#[derive(Error, Debug)]
pub enum StegoError {
    /// 比特流长度超过载体图像的容量 (每个像素 3 比特)。
    #[error("Payload does not fit in the carrier image: required {required} bits, available {available} bits")]
    CapacityExceeded { required: usize, available: usize },

    /// 无法打开或解码载体图像。
    #[error("Unable to load image {}", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// 无法创建或编码目标图像。
    #[error("Unable to save image {}", path.display())]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
