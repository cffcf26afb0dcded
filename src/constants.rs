/// 每个字符占用的比特数。
/// 消息中的每个字符都是一个 `u8`，按高位在前的顺序展开为 8 个比特。
pub const BITS_PER_BYTE: usize = 8;

/// 消息末尾附加的终止符比特数 (一个全零字节)。
pub const TERMINATOR_BITS: usize = BITS_PER_BYTE;

/// 蓝色通道在 RGB / RGBA 像素中的下标。
pub const BLUE_CHANNEL: usize = 2;

/// 最低有效位掩码。每个像素只在蓝色通道的这一位中存储 1 bit。
pub const LSB_MASK: u8 = 0x01;

/// 未指定输出路径时，隐写图像文件名的前缀。
pub const DOCTORED_PREFIX: &str = "doctored_";

/// 未指定输出路径时，恢复文本文件名的前缀。
pub const RECOVERED_PREFIX: &str = "recovered_";
