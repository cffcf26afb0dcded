//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::cli::{CapacityArgs, HideArgs, RecoverArgs};
use crate::constants::{BITS_PER_BYTE, DOCTORED_PREFIX, RECOVERED_PREFIX, TERMINATOR_BITS};
use crate::framer::Message;
use crate::image_io;
use crate::steganography::{available_pixels, hide, hide_strict, required_pixels, reveal};
use anyhow::{Context, Result};
use colored::Colorize;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和消息、确定输出路径、调用隐写核心函数，
/// 最后将结果写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径及选项的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像或文本文件，或命令行消息含有多字节字符。
/// * 目标文件已存在且未指定 `--force`。
/// * 指定了 `--strict` 且图像空间不足。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let picture = image_io::load(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let message = read_message(args.text.as_deref(), args.message.as_deref())?;
    if message.as_bytes().contains(&0) {
        warn!("The message contains a NUL byte; recovery will stop at the first one");
    }

    let dest = args
        .dest
        .unwrap_or_else(|| default_output(&args.image, DOCTORED_PREFIX, "png"));
    ensure_writable(&dest, args.force)?;

    let required = required_pixels(&message);
    let available = available_pixels(&picture);

    let picture = if args.strict {
        hide_strict(picture, &message).with_context(|| {
            format!(
                "Not enough space in the image to hide the text. \nRequired: {}, Available: {}",
                required.to_string().red().bold(),
                available.to_string().green().bold()
            )
        })?
    } else {
        if required > available {
            println!(
                "{} the image holds {} of the {} bits required, the hidden text will be truncated.",
                "Warning:".yellow().bold(),
                available.to_string().yellow(),
                required.to_string().yellow()
            );
        }
        hide(picture, &message)
    };

    image_io::save(&picture, &dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    info!("Hid {} characters in {}", message.len(), dest.display());
    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、调用恢复核心函数，
/// 最后将恢复的字节原样写入目标文本文件。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像文件。
/// * 目标文件已存在且未指定 `--force`。
/// * 无法写入到目标文本文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let picture = image_io::load(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let text_path = args
        .text
        .unwrap_or_else(|| default_output(&args.image, RECOVERED_PREFIX, "txt"));
    ensure_writable(&text_path, args.force)?;

    let message = reveal(&picture);
    if message.len() * BITS_PER_BYTE + TERMINATOR_BITS > available_pixels(&picture) {
        warn!(
            "No terminator found in {}; the recovered text may be noise",
            args.image.display()
        );
    }

    fs::write(&text_path, message.as_bytes()).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            text_path.to_string_lossy().red().bold()
        )
    })?;

    info!(
        "Recovered {} characters from {}",
        message.len(),
        args.image.display()
    );
    println!(
        "The text has been successfully recovered and saved: {}",
        text_path.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'Capacity' 命令的执行逻辑。
///
/// 打印图像可承载的像素数与字符数；若给出了消息，再报告它是否放得下。
///
/// # Errors
///
/// 无法读取图像或消息时返回错误。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let picture = image_io::load(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let available = available_pixels(&picture);
    let max_chars = available.saturating_sub(TERMINATOR_BITS) / BITS_PER_BYTE;
    println!(
        "{}: {} pixels, up to {} characters",
        args.image.to_string_lossy().bold(),
        available.to_string().green().bold(),
        max_chars.to_string().green().bold()
    );

    if args.text.is_some() || args.message.is_some() {
        let message = read_message(args.text.as_deref(), args.message.as_deref())?;
        let required = required_pixels(&message);
        if required <= available {
            println!(
                "The text fits. Required: {}, Available: {}",
                required.to_string().green().bold(),
                available.to_string().green().bold()
            );
        } else {
            println!(
                "The text does not fit. Required: {}, Available: {}",
                required.to_string().red().bold(),
                available.to_string().green().bold()
            );
        }
    }

    Ok(())
}

/// 从文本文件 (按字节) 或命令行字符串 (按单字节字符) 读取消息。
fn read_message(text: Option<&Path>, message: Option<&str>) -> Result<Message> {
    match (text, message) {
        (Some(path), _) => {
            let bytes = fs::read(path).with_context(|| {
                format!(
                    "Unable to read text file: {}",
                    path.to_string_lossy().red().bold()
                )
            })?;
            Ok(Message::from_bytes(bytes))
        }
        (None, Some(text)) => Message::from_latin1(text).with_context(|| {
            "The message can only contain single-byte characters (U+0000 to U+00FF)."
        }),
        (None, None) => anyhow::bail!("Either a text file or a message must be provided."),
    }
}

/// 在源文件旁生成 `<prefix><stem>.<extension>` 形式的默认输出路径。
fn default_output(source: &Path, prefix: &str, extension: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_else(|| "output".into());
    source.with_file_name(format!("{prefix}{stem}.{extension}"))
}

fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse {} to overwrite it.",
        path.to_string_lossy().red().bold(),
        "--force".yellow()
    );
    Ok(())
}
