//! # 隐写核心模块
//!
//! 通过通道值的奇偶性隐藏比特：偶数表示 0，奇数表示 1。
//! 像素按光栅顺序 (先 x 后 y) 访问，每个像素的 R、G、B 通道依次承载一个比特，Alpha 不变。

use crate::bitstream::Bitstream;
use crate::constants::{BITS_PER_PIXEL, CHANNEL_MAX, TERMINATOR_BITS};
use crate::error::StegoError;
use crate::grid::{PixelGrid, PixelGridMut, capacity};
use log::{debug, warn};

/// 按奇偶翻转规则调整单个 16 位通道值，使其奇偶性等于 `bit`。
///
/// * 写入 0 且值为奇数时加 1；若已是最大值则改为减 1。
/// * 写入 1 且值为偶数时加 1；若值为 0 则减 1 (回绕为 `0xFFFF`，截断为 8 位后是 `0xFF`)。
///
/// 值为 0 时的分支保持与已有载体图像的兼容，结果仍为奇数。
pub fn embed_bit(bit: u8, value: u16) -> u16 {
    if bit == 0 {
        if value % 2 != 0 {
            if value == CHANNEL_MAX { value - 1 } else { value + 1 }
        } else {
            value
        }
    } else if value % 2 == 0 {
        if value != 0 {
            value + 1
        } else {
            value.wrapping_sub(1)
        }
    } else {
        value
    }
}

/// 16 位通道值写回时只保留低 8 位。
fn narrow(value: u16) -> u8 {
    (value & 0xFF) as u8
}

/// 将比特流按光栅顺序嵌入网格。
///
/// 在写入任何像素之前先检查容量，比特流长于 `width * height * 3` 时返回
/// [`StegoError::CapacityExceeded`]，网格保持不变。
/// 比特流在像素中途结束时，该像素已处理的通道照常写回，其余通道保持原值。
///
/// # Errors
///
/// 载体容量不足时返回 [`StegoError::CapacityExceeded`]。
pub fn embed<G: PixelGridMut + ?Sized>(
    stream: &Bitstream,
    grid: &mut G,
) -> Result<(), StegoError> {
    let required = stream.len();
    let available = capacity(grid);
    if required > available {
        return Err(StegoError::CapacityExceeded {
            required,
            available,
        });
    }

    let width = grid.width() as usize;
    let mut cursor = stream.cursor();
    let mut pixel_index = 0usize;

    while cursor.remaining() > 0 {
        let x = (pixel_index % width) as u32;
        let y = (pixel_index / width) as u32;

        let mut channels = grid.get(x, y);
        for channel in channels.iter_mut().take(BITS_PER_PIXEL) {
            let Some(bit) = cursor.next_bit() else {
                break;
            };
            *channel = embed_bit(bit, *channel);
        }
        grid.set(x, y, channels.map(narrow));

        pixel_index += 1;
    }

    debug!(
        "Embedded {} bits into {} pixels ({} bits available)",
        cursor.position(),
        pixel_index,
        available
    );
    Ok(())
}

/// 按光栅顺序扫描网格，读取通道奇偶性得到比特流。
///
/// 连续出现 [`TERMINATOR_BITS`] 个 0 比特时立即停止，返回包含结束标记在内的比特。
/// 结束标记可能出现在像素中途。扫描完整个网格仍未找到结束标记时返回空比特流。
pub fn scan<G: PixelGrid + ?Sized>(grid: &G) -> Bitstream {
    let mut bits = Vec::new();
    let mut zero_run = 0usize;

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let channels = grid.get(x, y);
            for &value in &channels[..BITS_PER_PIXEL] {
                let bit = (value % 2) as u8;
                bits.push(bit);

                if bit == 0 {
                    zero_run += 1;
                } else {
                    zero_run = 0;
                }

                if zero_run == TERMINATOR_BITS {
                    debug!("Terminator found after {} bits", bits.len());
                    return Bitstream::from_bits(bits);
                }
            }
        }
    }

    warn!("No terminator found in {} scanned bits", bits.len());
    Bitstream::default()
}

/// 编码流程：文本 -> 比特流 -> 写入网格。
///
/// # Errors
///
/// 消息加结束标记超出载体容量时返回 [`StegoError::CapacityExceeded`]。
pub fn hide_message<G: PixelGridMut + ?Sized>(
    message: &str,
    grid: &mut G,
) -> Result<(), StegoError> {
    let stream = Bitstream::from(message);
    embed(&stream, grid)
}

/// 解码流程：扫描网格 -> 比特流 -> 文本。
///
/// 返回的文本包含结束标记还原出的空字符；未找到结束标记时返回空字符串。
pub fn recover_message<G: PixelGrid + ?Sized>(grid: &G) -> String {
    scan(grid).to_message()
}
