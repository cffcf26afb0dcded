//! # 像素网格模块
//!
//! 隐写算法只依赖这里定义的最小能力集合：报告宽高、读取蓝色通道、
//! 写入蓝色通道。任何满足该契约的适配器 (文件图像、内存缓冲区、测试夹具)
//! 都可以交给嵌入器使用。

use crate::constants::BLUE_CHANNEL;
use image::{Pixel, Rgb, Rgba, RgbImage, RgbaImage};

/// 只读像素网格，按 `(x, y)` 寻址。
pub trait PixelGrid {
    /// 返回 `(width, height)`。
    fn dimensions(&self) -> (u32, u32);

    /// 读取 `(x, y)` 处像素的蓝色通道值。
    fn blue(&self, x: u32, y: u32) -> u8;

    /// 网格可承载的比特数，即像素总数。
    fn pixel_count(&self) -> usize {
        let (width, height) = self.dimensions();
        width as usize * height as usize
    }
}

/// 可写像素网格。实现者只允许修改蓝色通道，红、绿、alpha 通道保持不变。
pub trait PixelGridMut: PixelGrid {
    fn set_blue(&mut self, x: u32, y: u32, value: u8);
}

macro_rules! impl_pixel_grid {
    ($image:ty, $pixel:ident) => {
        impl PixelGrid for $image {
            fn dimensions(&self) -> (u32, u32) {
                image::ImageBuffer::<$pixel<u8>, Vec<u8>>::dimensions(self)
            }

            fn blue(&self, x: u32, y: u32) -> u8 {
                self.get_pixel(x, y).channels()[BLUE_CHANNEL]
            }
        }

        impl PixelGridMut for $image {
            fn set_blue(&mut self, x: u32, y: u32, value: u8) {
                self.get_pixel_mut(x, y).channels_mut()[BLUE_CHANNEL] = value;
            }
        }
    };
}

impl_pixel_grid!(RgbImage, Rgb);
impl_pixel_grid!(RgbaImage, Rgba);

/// 光栅遍历顺序：外层循环列 `x`，内层循环行 `y` (列优先)。
///
/// 编码与解码必须使用完全相同的顺序，它是隐写数据格式的一部分。
pub fn raster_order(width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
    (0..width).flat_map(move |x| (0..height).map(move |y| (x, y)))
}
