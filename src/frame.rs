//! # 帧编解码模块
//!
//! 构建与解析嵌入图像的比特流帧，与像素访问完全无关。
//! 帧的区段顺序固定：长度标记、32 位长度字段、起始标记、载荷。
//! 解码时必须先校验长度标记，再校验起始标记，两者都通过后才能解码载荷。

use crate::constants::{
    BITS_PER_CHAR, LENGTH_FIELD_BITS, LENGTH_TAG_TEXT, START_TAG_TEXT, header_bits,
};
use crate::conversion::{bits_to_string, bits_to_u32, byte_to_bits, str_to_bits, u32_to_bits};
use crate::error::StegoError;

/// 标记字面量的 ASCII 比特形式。
fn tag_bits(tag: &str) -> Vec<u8> {
    tag.bytes().flat_map(byte_to_bits).collect()
}

/// 构建完整的出站帧：长度标记 + 载荷比特长度 + 起始标记 + 载荷。
///
/// # Errors
///
/// 消息包含非 ASCII 字符，或载荷比特长度超出 32 位字段的表示范围时返回错误。
pub fn build_frame(message: &str) -> Result<Vec<u8>, StegoError> {
    let payload = str_to_bits(message)?;
    let payload_bits = u32::try_from(payload.len()).map_err(|_| StegoError::MessageTooLong)?;

    let mut frame = Vec::with_capacity(header_bits() + payload.len());
    frame.extend(tag_bits(LENGTH_TAG_TEXT));
    frame.extend(u32_to_bits(payload_bits));
    frame.extend(tag_bits(START_TAG_TEXT));
    frame.extend(payload);

    Ok(frame)
}

/// 校验比特流开头的长度标记。
///
/// # Errors
///
/// 标记不匹配时返回 [`StegoError::NoMessageFound`]，
/// 说明图像中没有消息或使用的编码方案不兼容。
pub fn parse_length_tag(bits: &[u8]) -> Result<(), StegoError> {
    let tag = tag_bits(LENGTH_TAG_TEXT);
    if bits.len() < tag.len() || bits[..tag.len()] != tag[..] {
        return Err(StegoError::NoMessageFound {
            reason: "length tag mismatch".to_string(),
        });
    }

    Ok(())
}

/// 校验长度字段之后的起始标记。
///
/// # Errors
///
/// 标记不匹配时返回 [`StegoError::NoMessageFound`]。
pub fn parse_start_tag(bits: &[u8]) -> Result<(), StegoError> {
    let offset = LENGTH_TAG_TEXT.len() * BITS_PER_CHAR + LENGTH_FIELD_BITS;
    let tag = tag_bits(START_TAG_TEXT);
    let end = offset + tag.len();
    if bits.len() < end || bits[offset..end] != tag[..] {
        return Err(StegoError::NoMessageFound {
            reason: "start tag mismatch".to_string(),
        });
    }

    Ok(())
}

/// 读取长度标记之后的 32 位长度字段，得到载荷的比特长度。
///
/// # Errors
///
/// 比特流长度不足以覆盖长度字段时返回 [`StegoError::BitWidth`]。
pub fn parse_length(bits: &[u8]) -> Result<u32, StegoError> {
    let offset = LENGTH_TAG_TEXT.len() * BITS_PER_CHAR;
    let end = offset + LENGTH_FIELD_BITS;
    if bits.len() < end {
        return Err(StegoError::BitWidth {
            expected: end,
            actual: bits.len(),
        });
    }

    bits_to_u32(&bits[offset..end])
}

/// 从头部之后取出恰好 `bit_length` 位载荷并解码为消息。
///
/// # Errors
///
/// 比特流长度不足，或载荷无法按 ASCII 解码时返回错误。
pub fn parse_payload(bits: &[u8], bit_length: usize) -> Result<String, StegoError> {
    let start = header_bits();
    let end = start + bit_length;
    if bits.len() < end {
        return Err(StegoError::BitWidth {
            expected: end,
            actual: bits.len(),
        });
    }

    bits_to_string(&bits[start..end])
}
