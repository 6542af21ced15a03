//! # Host CLI
//!
//! 无窗口宿主：加载 UI 配置，按给定的按键序列驱动 UI 层，并把宿主调用写入日志。
//!
//! ## 用法
//!
//! ```bash
//! cargo run -p host-cli -- K_TAB K_ESCAPE h K_RETURN
//! cargo run -p host-cli -- --config ui.json --translations zh.json --module-version 4008002 s
//! ```

mod headless;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use vn_ui::{AppContext, UiConfig, screens};

use headless::HeadlessHost;

#[derive(Parser)]
#[command(name = "host-cli")]
#[command(about = "无窗口宿主 - 用按键序列驱动默认 UI 层")]
#[command(version)]
struct Cli {
    /// 配置文件（默认：ui.json）
    #[arg(short, long, default_value = "ui.json")]
    config: PathBuf,

    /// 翻译文件，覆盖配置中的路径
    #[arg(short, long)]
    translations: Option<PathBuf>,

    /// 模拟的扩展模块版本，0 表示未找到
    #[arg(short, long, default_value = "0")]
    module_version: u32,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,

    /// 按顺序发送的按键
    keys: Vec<String>,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = UiConfig::load(&cli.config);
    if let Some(path) = cli.translations {
        config.translations_path = Some(path);
    }

    let mut ctx = AppContext::from_config(config).context("UI 上下文初始化失败")?;
    ctx.setup();

    let mut host = HeadlessHost::new(cli.module_version);
    for key in cli.keys {
        host.push_input(key);
    }

    let status = ctx.check_module(&mut host);
    info!(status = ?status, "扩展模块检查完成");

    let menu = screens::main_menu(&ctx, false).context("主菜单构建失败")?;
    let labels: Vec<_> = menu.buttons().into_iter().filter_map(|b| b.text()).collect();
    info!(buttons = ?labels, "显示主菜单");

    while let Some(key) = host.next_input() {
        let consumed = ctx.handle_key(&key, &mut host);
        debug!(key = %key, consumed = consumed, "按键处理");

        let overlays: Vec<_> = ctx
            .render_overlays()
            .iter()
            .filter_map(|e| e.text().map(str::to_string))
            .collect();
        if !overlays.is_empty() {
            info!(overlays = ?overlays, "提示层");
        }
    }

    info!(skip = ctx.skip.is_active(), "按键序列结束");
    Ok(())
}
