/// 长度标记的字面文本。
/// 其 ASCII 二进制形式构成帧的第一个区段，解码时用于判断图像中是否存在隐藏消息。
pub const LENGTH_TAG_TEXT: &str = "SIZE";

/// 起始标记的字面文本。
/// 紧随 32 位长度字段之后，对帧进行二次校验，防止把随机噪声误认为消息。
pub const START_TAG_TEXT: &str = "START";

/// 每个消息字符占用的比特数。
/// 消息按 ASCII 处理，每个字符以 8 bits (`u8`) 编码，编码与解码必须使用同一宽度。
pub const BITS_PER_CHAR: usize = 8;

/// 长度字段的宽度 (bits)。
/// 以 32 位无符号大端整数记录载荷的比特长度。
pub const LENGTH_FIELD_BITS: usize = 32;

/// 每个像素可用的颜色通道数 (R, G, B)。
/// 每个通道贡献 1 个最低有效位，因此图像总容量为 `width * height * 3` bits。
pub const CHANNELS_PER_PIXEL: usize = 3;

/// 帧头部的总比特数：长度标记 + 32 位长度字段 + 起始标记。
/// 由两个标记字面量推导得出，而非硬编码的数值。
pub const fn header_bits() -> usize {
    LENGTH_TAG_TEXT.len() * BITS_PER_CHAR + LENGTH_FIELD_BITS + START_TAG_TEXT.len() * BITS_PER_CHAR
}
