//! # 通道嵌入模块
//!
//! 按列优先的光栅顺序遍历像素网格，每个像素在蓝色通道的最低有效位中
//! 写入或读出 1 bit。

use crate::constants::LSB_MASK;
use crate::framer::BitSequence;
use crate::grid::{raster_order, PixelGrid, PixelGridMut};
use log::debug;

/// 将 `bits` 依次写入网格前 `bits.len()` 个像素的蓝色通道最低位。
///
/// 其余比特 (包括所有其他通道) 保持原样。若比特数超过像素总数，
/// 只写入前 `width * height` 个，剩余部分被丢弃且不报错。
///
/// 返回实际写入的比特数，调用方可据此判断是否发生截断。
pub fn embed<G: PixelGridMut + ?Sized>(grid: &mut G, bits: &[bool]) -> usize {
    let (width, height) = grid.dimensions();

    let mut embedded = 0;
    for ((x, y), &bit) in raster_order(width, height).zip(bits) {
        let blue = grid.blue(x, y);
        grid.set_blue(x, y, (blue & !LSB_MASK) | u8::from(bit));
        embedded += 1;
    }

    debug!(
        "Embedded {} of {} bits into a {}x{} grid",
        embedded,
        bits.len(),
        width,
        height
    );
    embedded
}

/// 读取网格中每个像素蓝色通道的最低位。
///
/// 结果长度恒为 `width * height`；终止符的识别由比特帧模块负责。
pub fn extract<G: PixelGrid + ?Sized>(grid: &G) -> BitSequence {
    let (width, height) = grid.dimensions();
    raster_order(width, height)
        .map(|(x, y)| grid.blue(x, y) & LSB_MASK == 1)
        .collect()
}
