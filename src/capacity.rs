//! # 容量校验模块
//!
//! 在写入任何像素之前，判断帧（头部 + 载荷）能否装入图像的最低有效位。
//! 容量计算与实际打包逻辑完全一致：每字符 8 bits，无字符间填充。

use crate::constants::{BITS_PER_CHAR, CHANNELS_PER_PIXEL, header_bits};
use crate::error::StegoError;

/// 校验消息能否以每通道 1 bit 的方式装入给定尺寸的图像。
///
/// # Errors
///
/// 可用比特数小于帧所需比特数时返回 [`StegoError::Capacity`]，
/// 携带所需与可用的比特数。
pub fn check_capacity(message: &str, width: u32, height: u32) -> Result<(), StegoError> {
    let available = u64::from(width) * u64::from(height) * CHANNELS_PER_PIXEL as u64;
    let payload = message.len() as u64 * BITS_PER_CHAR as u64;
    let requested = payload + header_bits() as u64;

    if available < requested {
        return Err(StegoError::Capacity {
            requested,
            available,
        });
    }

    Ok(())
}
