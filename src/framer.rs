//! # 比特帧模块
//!
//! 在字节消息与比特序列之间转换。编码时每个字节按高位在前展开为 8 bits，
//! 并在末尾追加一个全零的终止字节；解码时每 8 bits 组成一个字节，
//! 遇到第一个全零字节即停止。

use crate::constants::{BITS_PER_BYTE, TERMINATOR_BITS};
use crate::error::{Result, StegoError};
use log::debug;

/// 有序的比特序列，`true` 表示 1。
pub type BitSequence = Vec<bool>;

/// 待隐藏或已恢复的消息：每个字符都是 0–255 之间的码点。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message(Vec<u8>);

impl Message {
    /// 直接由字节构造。任意字节都是合法码点，因此不会失败。
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// 由字符串构造，每个 `char` 必须落在 U+0000..=U+00FF 之内。
    ///
    /// # Errors
    ///
    /// 第一个超出单字节范围的字符会导致 [`StegoError::Encoding`]，
    /// 而不是被静默截断。
    pub fn from_latin1(text: &str) -> Result<Self> {
        text.chars()
            .enumerate()
            .map(|(index, c)| {
                u8::try_from(c).map_err(|_| StegoError::Encoding {
                    index,
                    code_point: c,
                })
            })
            .collect::<Result<Vec<u8>>>()
            .map(Self)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// 每个字节映射为同码点的 `char`。
    pub fn to_latin1_string(&self) -> String {
        self.0.iter().map(|&b| char::from(b)).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[u8]> for Message {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

/// 将消息展开为比特序列，并追加 8 个零比特作为终止符。
///
/// 空消息返回空序列，调用方据此把编码视为空操作。
pub fn encode(message: &Message) -> BitSequence {
    if message.is_empty() {
        return BitSequence::new();
    }

    let mut bits = BitSequence::with_capacity(message.len() * BITS_PER_BYTE + TERMINATOR_BITS);
    for &byte in message.as_bytes() {
        bits.extend((0..BITS_PER_BYTE).rev().map(|shift| (byte >> shift) & 1 == 1));
    }
    bits.extend(std::iter::repeat_n(false, TERMINATOR_BITS));

    debug!(
        "Framed {} characters into {} bits",
        message.len(),
        bits.len()
    );
    bits
}

/// 将比特序列重新组装为消息。
///
/// 遇到全零字节时立即返回 (终止符本身不计入结果)；
/// 末尾不足 8 bits 的残余部分被丢弃；
/// 若始终没有终止符，则返回全部已解码的字符。
pub fn decode(bits: &[bool]) -> Message {
    let bytes: Vec<u8> = bits
        .chunks_exact(BITS_PER_BYTE)
        .map(|group| group.iter().fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit)))
        .take_while(|&byte| byte != 0)
        .collect();

    debug!(
        "Decoded {} characters from {} bits",
        bytes.len(),
        bits.len()
    );
    Message(bytes)
}
