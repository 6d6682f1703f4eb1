//! # 命令处理逻辑模块
//!
//! 包含处理 `hide` 和 `recover` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::cli::{HideArgs, RecoverArgs};
use crate::steganography::{hide, retrieve};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// 为 'hide' 命令生成默认输出路径：输入图像旁的 doctored_<原文件名>。
fn default_hide_dest(image: &Path) -> PathBuf {
    let name = image
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    image.with_file_name(format!("doctored_{name}"))
}

/// 为 'recover' 命令生成默认输出路径：输入图像旁的 recovered_<主文件名>.txt。
fn default_recover_dest(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    image.with_file_name(format!("recovered_{stem}.txt"))
}

/// 覆盖保护：目标文件已存在且未指定 `--force` 时拒绝写入。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和文本文件、调用核心隐写函数将带标记的帧写入像素的最低有效位，
/// 最后将结果保存到目标图像文件。容量校验在核心函数内部完成，
/// 校验失败时不会产生任何输出文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径与覆盖选项的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像文件，或无法读取文本文件。
/// * 目标文件已存在且未指定 `--force`。
/// * 图像容量不足，或消息包含非 ASCII 字符（结构化错误原样上抛）。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let picture = image::open(&args.image)
        .with_context(|| {
            format!(
                "Unable to read image file: {}",
                args.image.to_string_lossy().red().bold()
            )
        })?
        .to_rgb8();

    let message = fs::read_to_string(&args.text).with_context(|| {
        format!(
            "Unable to read text file: {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    let dest = args.dest.unwrap_or_else(|| default_hide_dest(&args.image));
    ensure_writable(&dest, args.force)?;

    let encoded = hide(&picture, &message)?;

    encoded.save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、调用核心恢复函数校验帧标记并按长度字段取回消息，
/// 最后将恢复的文本内容写入目标文本文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径与覆盖选项的 `RecoverArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像文件。
/// * 目标文件已存在且未指定 `--force`。
/// * 图像中没有可识别的隐藏消息（标记校验失败，结构化错误原样上抛）。
/// * 无法写入到目标文本文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let picture = image::open(&args.image)
        .with_context(|| {
            format!(
                "Unable to read image file: {}",
                args.image.to_string_lossy().red().bold()
            )
        })?
        .to_rgb8();

    let text = args.text.unwrap_or_else(|| default_recover_dest(&args.image));
    ensure_writable(&text, args.force)?;

    let message = retrieve(&picture)?;

    fs::write(&text, message).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            text.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully recovered and saved: {}",
        text.to_string_lossy().green().bold()
    );

    Ok(())
}
