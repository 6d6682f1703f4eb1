//! # text_hide 库
//!
//! 本库包含基于带标记帧格式的 LSB 文本隐写工具的核心逻辑。

// 声明库包含的所有模块。

pub mod capacity;
pub mod cli;
pub mod constants;
pub mod conversion;
pub mod error;
pub mod frame;
pub mod handler;
pub mod steganography;
