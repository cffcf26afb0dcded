//! # 图像读写模块
//!
//! 隐写核心不接触文件系统；本模块基于 `image` crate 负责加载与保存。
//! 只允许保存为无损格式，因为有损压缩会破坏最低有效位中的数据。

use crate::error::{Result, StegoError};
use image::{ImageFormat, RgbaImage};
use log::debug;
use std::path::Path;

/// 加载图像并统一转换为 RGBA8 像素网格。
///
/// # Errors
///
/// 文件不存在、不可读或无法解码时返回 [`StegoError::FileNotAccessible`]。
pub fn load(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path).map_err(|source| StegoError::FileNotAccessible {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image.to_rgba8())
}

/// 按扩展名选择格式保存像素网格。
///
/// # Errors
///
/// * 扩展名无法识别或对应有损格式时返回 [`StegoError::UnsupportedFormat`]。
/// * 编码或写入失败时返回 [`StegoError::Image`]。
pub fn save(grid: &RgbaImage, path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path)
        .ok()
        .filter(|format| is_lossless(*format))
        .ok_or_else(|| StegoError::UnsupportedFormat(path.to_path_buf()))?;

    grid.save_with_format(path, format)?;
    debug!("Saved {} as {:?}", path.display(), format);
    Ok(())
}

/// 本程序启用的、能够原样保留像素值的格式。
pub fn is_lossless(format: ImageFormat) -> bool {
    matches!(
        format,
        ImageFormat::Png
            | ImageFormat::Bmp
            | ImageFormat::Tiff
            | ImageFormat::WebP
            | ImageFormat::Qoi
    )
}
