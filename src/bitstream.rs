//! # 比特流模块
//!
//! 负责文本与比特序列之间的相互转换。
//! 每个字符贡献 8 个比特 (最高位优先)，消息之后固定追加 8 个 0 比特作为结束标记。

use crate::constants::{BITS_PER_CHAR, TERMINATOR_BITS};

/// 有序的比特序列，每个元素取值为 0 或 1。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bitstream {
    bits: Vec<u8>,
}

impl Bitstream {
    /// 将消息文本编码为带结束标记的比特流。
    ///
    /// 每个字符只取其低 8 位 (超出范围的值被截断而不是报错)，
    /// 按最高位优先写出，最后追加 [`TERMINATOR_BITS`] 个 0 比特。
    /// 空消息只产生结束标记。
    pub fn from_message(message: &str) -> Self {
        let char_count = message.chars().count();
        let mut bits = Vec::with_capacity((char_count + 1) * BITS_PER_CHAR);

        for ch in message.chars() {
            let byte = (u32::from(ch) & 0xFF) as u8;
            bits.extend((0..BITS_PER_CHAR).rev().map(|shift| (byte >> shift) & 1));
        }
        bits.extend(std::iter::repeat_n(0, TERMINATOR_BITS));

        Self { bits }
    }

    /// 由已有的比特序列构造比特流。非零值一律视为 1。
    pub fn from_bits(bits: Vec<u8>) -> Self {
        let bits = bits.into_iter().map(|bit| u8::from(bit != 0)).collect();
        Self { bits }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bits
    }

    /// 返回一个从头开始读取的游标。
    pub fn cursor(&self) -> BitCursor<'_> {
        BitCursor {
            bits: &self.bits,
            position: 0,
        }
    }

    /// 将比特流还原为文本。
    ///
    /// 共还原 `len / 8` 个字符，不足 8 位的尾部比特被丢弃。
    /// 由于扫描结果包含结束标记，还原出的文本通常以一个空字符 (`'\0'`) 结尾。
    pub fn to_message(&self) -> String {
        self.bits
            .chunks_exact(BITS_PER_CHAR)
            .map(|group| {
                let letter = group.iter().fold(0u8, |acc, &bit| (acc << 1) | bit);
                char::from(letter)
            })
            .collect()
    }
}

impl From<&str> for Bitstream {
    fn from(message: &str) -> Self {
        Self::from_message(message)
    }
}

/// 在不可变比特缓冲区上顺序读取的游标。
///
/// 每个比特最多被读取一次，`position` 记录下一个待读取比特的下标。
#[derive(Debug, Clone)]
pub struct BitCursor<'a> {
    bits: &'a [u8],
    position: usize,
}

impl BitCursor<'_> {
    /// 读取下一个比特；比特流耗尽时返回 `None`。
    pub fn next_bit(&mut self) -> Option<u8> {
        let bit = *self.bits.get(self.position)?;
        self.position += 1;
        Some(bit)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.bits.len() - self.position
    }
}

impl Iterator for BitCursor<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.next_bit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitCursor<'_> {}
