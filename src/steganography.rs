use image::RgbImage;

use crate::capacity::check_capacity;
use crate::constants::{CHANNELS_PER_PIXEL, header_bits};
use crate::conversion::{get_lsb, replace_lsb};
use crate::error::StegoError;
use crate::frame::{build_frame, parse_length, parse_length_tag, parse_payload, parse_start_tag};

/// 将消息写入图像副本的最低有效位，返回编码后的新图像。
/// 容量校验先于一切像素操作，失败时不产生任何输出。
pub fn hide(source: &RgbImage, message: &str) -> Result<RgbImage, StegoError> {
    check_capacity(message, source.width(), source.height())?;
    let frame = build_frame(message)?;

    let mut encoded = RgbImage::new(source.width(), source.height());
    let mut cursor = 0usize;

    for x in 0..source.width() {
        for y in 0..source.height() {
            let mut pixel = *source.get_pixel(x, y);
            for channel in pixel.0.iter_mut() {
                if cursor < frame.len() {
                    *channel = replace_lsb(*channel, frame[cursor]);
                    cursor += 1;
                }
            }
            encoded.put_pixel(x, y, pixel);
        }
    }

    Ok(encoded)
}

/// 从编码过的图像中恢复隐藏的消息。
/// 先收集头部比特并校验标记，再按长度字段精确读取载荷，不扫描图像剩余部分。
pub fn retrieve(image: &RgbImage) -> Result<String, StegoError> {
    let mut bits = collect_bits(image, 0, header_bits())?;
    parse_length_tag(&bits)?;
    parse_start_tag(&bits)?;
    let payload_bits = parse_length(&bits)? as usize;

    bits.extend(collect_bits(image, header_bits(), payload_bits)?);
    parse_payload(&bits, payload_bits)
}

// 比特位置是 (x, y, 通道) 的纯函数，与编码遍历的顺序完全一致：
// x 为外层循环，y 为内层，通道按 R、G、B。
fn collect_bits(image: &RgbImage, start: usize, count: usize) -> Result<Vec<u8>, StegoError> {
    let width = image.width() as usize;
    let height = image.height() as usize;
    let total = width * height * CHANNELS_PER_PIXEL;

    let end = start + count;
    if end > total {
        return Err(StegoError::NoMessageFound {
            reason: format!("image holds {total} bits, frame requires at least {end}"),
        });
    }

    let mut bits = Vec::with_capacity(count);
    for index in start..end {
        let pixel = index / CHANNELS_PER_PIXEL;
        let channel = index % CHANNELS_PER_PIXEL;
        let x = (pixel / height) as u32;
        let y = (pixel % height) as u32;
        bits.push(get_lsb(image.get_pixel(x, y).0[channel]));
    }

    Ok(bits)
}
