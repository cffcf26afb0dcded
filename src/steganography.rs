//! # 隐写核心模块
//!
//! 将比特帧模块与通道嵌入模块组合为对外的 `hide` / `reveal` 操作，
//! 并提供容量检查，供需要严格校验的调用方使用。

use crate::constants::{BITS_PER_BYTE, TERMINATOR_BITS};
use crate::embedder::{embed, extract};
use crate::error::{Result, StegoError};
use crate::framer::{self, Message};
use crate::grid::{PixelGrid, PixelGridMut};
use log::{debug, warn};

/// 隐藏 `message` 所需的像素数。空消息不写入任何比特，因此为 0。
pub fn required_pixels(message: &Message) -> usize {
    if message.is_empty() {
        0
    } else {
        message.len() * BITS_PER_BYTE + TERMINATOR_BITS
    }
}

/// 网格可用的像素数 (每像素 1 bit)。
pub fn available_pixels<G: PixelGrid + ?Sized>(grid: &G) -> usize {
    grid.pixel_count()
}

/// 网格能否完整容纳消息及其终止符。
pub fn fits<G: PixelGrid + ?Sized>(grid: &G, message: &Message) -> bool {
    required_pixels(message) <= available_pixels(grid)
}

/// 将消息隐藏到网格中并返回修改后的网格。
///
/// 容量不足时只写入前 `width * height` 个比特，不返回错误；
/// 此时消息 (至少是终止符) 会丢失，并记录一条警告日志。
/// 需要原始网格的调用方应在传入前自行克隆。
pub fn hide<G: PixelGridMut>(mut grid: G, message: &Message) -> G {
    let bits = framer::encode(message);
    let embedded = embed(&mut grid, &bits);

    if embedded < bits.len() {
        warn!(
            "Image capacity exceeded: only {} of {} bits were hidden, the message will be truncated",
            embedded,
            bits.len()
        );
    }
    grid
}

/// 与 [`hide`] 相同，但在容量不足时直接失败，且不修改网格。
///
/// # Errors
///
/// 所需像素数超过可用像素数时返回 [`StegoError::CapacityExceeded`]。
pub fn hide_strict<G: PixelGridMut>(grid: G, message: &Message) -> Result<G> {
    let required = required_pixels(message);
    let available = available_pixels(&grid);
    if required > available {
        return Err(StegoError::CapacityExceeded {
            required,
            available,
        });
    }
    Ok(hide(grid, message))
}

/// 从网格中恢复隐藏的消息。
///
/// 没有找到终止符时返回全部可解码的字符，不视为错误。
pub fn reveal<G: PixelGrid + ?Sized>(grid: &G) -> Message {
    let bits = extract(grid);
    let message = framer::decode(&bits);
    debug!("Revealed {} characters", message.len());
    message
}
