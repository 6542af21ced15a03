//! # Entry 模块
//!
//! 宿主上下文栈可以跳入的具名入口点。
//!
//! 进入入口点是一次同步子调用：宿主在新上下文中运行入口点，
//! 运行结束后回到调用方，调用方的上下文保留在 [`ContextStack`](crate::context::ContextStack) 中。

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::context::AppContext;
use crate::error::UiError;
use crate::host::Host;
use crate::module_check::{ModuleStatus, check_module};
use crate::screens::{self, GameMenuPage};
use crate::widget::Screen;

/// 具名入口点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryPoint {
    /// 游戏菜单
    GameMenu,
    /// 隐藏对话窗口直到下一次输入
    HideWindows,
    /// 扩展模块检查
    ModuleCheck,
}

impl EntryPoint {
    /// 入口点名称
    pub fn name(self) -> &'static str {
        match self {
            EntryPoint::GameMenu => "_game_menu",
            EntryPoint::HideWindows => "_hide_windows",
            EntryPoint::ModuleCheck => "_check_module",
        }
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 隐藏窗口的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HideOutcome {
    /// 窗口已处于隐藏状态，直接返回
    AlreadyHidden,
    /// 已隐藏并在收到输入后恢复
    Restored { input: Option<String> },
}

/// 入口点运行结果
#[derive(Debug, Clone, PartialEq)]
pub enum EntryOutcome {
    /// 游戏菜单界面，交给宿主显示
    GameMenu(Screen),
    HideWindows(HideOutcome),
    ModuleCheck(ModuleStatus),
}

/// 运行入口点
///
/// 宿主在 [`Host::call_in_new_context`] 中调用。
pub fn run_entry_point(
    entry: EntryPoint,
    ctx: &mut AppContext,
    host: &mut dyn Host,
) -> Result<EntryOutcome, UiError> {
    debug!(entry = %entry, depth = ctx.contexts.depth(), "进入入口点");
    let outcome = match entry {
        EntryPoint::GameMenu => {
            EntryOutcome::GameMenu(screens::game_menu(ctx, GameMenuPage::default())?)
        }
        EntryPoint::HideWindows => EntryOutcome::HideWindows(hide_windows(ctx, host)),
        EntryPoint::ModuleCheck => EntryOutcome::ModuleCheck(check_module(ctx, host)),
    };
    Ok(outcome)
}

/// 隐藏对话窗口，直到下一次输入
///
/// 已隐藏时直接返回，避免重入时重复隐藏。
pub fn hide_windows(ctx: &mut AppContext, host: &mut dyn Host) -> HideOutcome {
    if ctx.windows_hidden {
        debug!("窗口已隐藏，忽略");
        return HideOutcome::AlreadyHidden;
    }

    ctx.windows_hidden = true;
    ctx.suppress_overlay = true;

    let input = host.wait_for_input();

    ctx.windows_hidden = false;
    ctx.suppress_overlay = false;
    debug!(input = ?input, "窗口恢复显示");

    HideOutcome::Restored { input }
}
