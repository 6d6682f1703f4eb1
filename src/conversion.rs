//! # 转换工具模块
//!
//! 整数、定宽比特序列与 ASCII 字符串之间的纯函数转换。
//! 比特以 `0`/`1` 的 `u8` 值表示，最高位在前。
//! 所有函数无状态；宽度不符的输入立即失败，不做部分转换。

use crate::constants::{BITS_PER_CHAR, LENGTH_FIELD_BITS};
use crate::error::StegoError;

/// 将一个字节转换为 8 位比特序列，最高位在前。
pub fn byte_to_bits(value: u8) -> [u8; 8] {
    let mut bits = [0u8; 8];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = (value >> (7 - i)) & 1;
    }
    bits
}

/// 将一个 32 位无符号整数转换为 32 位比特序列，最高位在前。
pub fn u32_to_bits(value: u32) -> [u8; 32] {
    let mut bits = [0u8; 32];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = ((value >> (31 - i)) & 1) as u8;
    }
    bits
}

/// 将 ASCII 字符串按字符顺序转换为比特序列，每字符 8 bits，无分隔符。
///
/// # Errors
///
/// 字符串包含非 ASCII 字符时返回 [`StegoError::NonAscii`]。
pub fn str_to_bits(text: &str) -> Result<Vec<u8>, StegoError> {
    if !text.is_ascii() {
        return Err(StegoError::NonAscii);
    }
    Ok(text.bytes().flat_map(byte_to_bits).collect())
}

/// [`str_to_bits`] 的逆操作。
///
/// # Errors
///
/// 比特序列长度不是 8 的倍数时返回 [`StegoError::BitWidth`]，
/// 解码出非 ASCII 字节时返回 [`StegoError::NonAscii`]。
pub fn bits_to_string(bits: &[u8]) -> Result<String, StegoError> {
    if bits.len() % BITS_PER_CHAR != 0 {
        return Err(StegoError::BitWidth {
            expected: bits.len().next_multiple_of(BITS_PER_CHAR),
            actual: bits.len(),
        });
    }

    let bytes: Vec<u8> = bits
        .chunks_exact(BITS_PER_CHAR)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | bit))
        .collect();

    if !bytes.is_ascii() {
        return Err(StegoError::NonAscii);
    }

    String::from_utf8(bytes).map_err(|_| StegoError::NonAscii)
}

/// 将恰好 32 位的比特序列解析为无符号整数，最高位在前。
///
/// # Errors
///
/// 比特序列长度不为 32 时返回 [`StegoError::BitWidth`]。
pub fn bits_to_u32(bits: &[u8]) -> Result<u32, StegoError> {
    if bits.len() != LENGTH_FIELD_BITS {
        return Err(StegoError::BitWidth {
            expected: LENGTH_FIELD_BITS,
            actual: bits.len(),
        });
    }

    Ok(bits.iter().fold(0u32, |acc, &bit| (acc << 1) | u32::from(bit)))
}

/// 用给定比特替换字节的最低有效位，其余 7 位保持不变。
pub fn replace_lsb(byte: u8, bit: u8) -> u8 {
    (byte & 0xFE) | (bit & 1)
}

/// 取出字节的最低有效位。
pub fn get_lsb(byte: u8) -> u8 {
    byte & 1
}
