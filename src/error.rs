//! # 错误类型模块
//!
//! 定义隐写过程中可能出现的结构化错误。
//! 这些错误不会自动重试：容量不足需要更大的图像或更短的消息，
//! 标记校验失败则说明图像中没有可识别的消息。

use thiserror::Error;

/// 隐写编解码的错误类型。
#[derive(Debug, Error)]
pub enum StegoError {
    /// 图像容量不足以容纳帧头部与载荷。
    /// 在任何像素被修改之前抛出，编码操作是全有或全无的。
    #[error(
        "message does not fit in the carrier image: requested {requested} bits, available {available} bits"
    )]
    Capacity { requested: u64, available: u64 },

    /// 解码时长度标记或起始标记校验失败，图像中没有可识别的隐藏消息。
    #[error("no hidden message found: {reason}")]
    NoMessageFound { reason: String },

    /// 消息包含非 ASCII 字符，无法按每字符 8 bits 编码。
    #[error("message contains non-ASCII characters and cannot be encoded")]
    NonAscii,

    /// 比特串宽度不符合预期，属于调用方的前置条件违例。
    #[error("malformed bit string: expected {expected} bits, got {actual}")]
    BitWidth { expected: usize, actual: usize },

    /// 载荷的比特长度超出 32 位长度字段的表示范围。
    #[error("message is too long for the 32-bit length field")]
    MessageTooLong,
}
