//! # 错误类型模块
//!
//! 库层面的所有可失败操作都返回 [`StegoError`]。
//! 命令行层 (`handler`) 再用 `anyhow` 为其附加上下文。

use std::path::PathBuf;
use thiserror::Error;

/// 库操作的结果类型别名。
pub type Result<T> = std::result::Result<T, StegoError>;

#[derive(Error, Debug)]
pub enum StegoError {
    /// 字符的码点超出单字节范围 (0–255)，无法编码。
    #[error("Character {code_point:?} at index {index} does not fit in a single byte")]
    Encoding { index: usize, code_point: char },

    /// 严格模式下，图像像素不足以容纳整条消息。
    #[error("Not enough space in the image: need {required} pixels, have {available} pixels")]
    CapacityExceeded { required: usize, available: usize },

    /// 源图像不存在或无法解码。
    #[error("Unable to open image file: {}", .path.display())]
    FileNotAccessible {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// 输出路径的扩展名不是受支持的无损格式。
    #[error("Unsupported or lossy output format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
