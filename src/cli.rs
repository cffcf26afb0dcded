//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::{ArgAction, ArgGroup, Parser};
use std::path::PathBuf;

/// 在无损格式图像 (如 PNG, BMP) 蓝色通道的最低有效位中隐藏或恢复单字节文本。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "在无损格式图像 (如 PNG, BMP) 蓝色通道的最低有效位中隐藏或恢复单字节文本。\n每个像素存储 1 bit，按列优先顺序遍历，消息以一个全零字节结尾。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 提高日志级别 (-v 为 info，-vv 为 debug)。`RUST_LOG` 优先。
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// 可用的子命令：hide (隐藏)、recover (恢复) 和 capacity (容量查询)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 在无损格式图像中隐藏文本。
    Hide(HideArgs),

    /// 从经过隐写的图像中恢复隐藏的文本。
    Recover(RecoverArgs),

    /// 显示图像可容纳的字符数，并可检查某条消息是否放得下。
    Capacity(CapacityArgs),
}

/// 'hide' 命令所需的参数。
#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("payload").required(true).args(["text", "message"])))]
pub struct HideArgs {
    /// 用于隐写的输入图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的文本内容的文件路径，按字节原样读取。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 直接在命令行给出的消息，每个字符必须在 U+0000..=U+00FF 之内。
    #[arg(short, long)]
    pub message: Option<String>,

    /// 结果图像的输出路径。缺省为输入图像旁的 `doctored_<name>.png`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 允许覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,

    /// 图像容量不足时报错，而不是截断消息。
    #[arg(short, long)]
    pub strict: bool,
}

/// 'recover' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct RecoverArgs {
    /// 已隐藏文本数据的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 恢复文本的输出路径。缺省为图像旁的 `recovered_<name>.txt`。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 允许覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'capacity' 命令所需的参数。
#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("payload").args(["text", "message"])))]
pub struct CapacityArgs {
    /// 要检查容量的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 可选：待检查的文本文件。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 可选：待检查的命令行消息。
    #[arg(short, long)]
    pub message: Option<String>,
}
