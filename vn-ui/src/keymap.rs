//! # Keymap 模块
//!
//! 按键到动作的分发表。
//!
//! ## 状态
//!
//! ```text
//! Uninstalled --install()--> Installed
//! ```
//!
//! 安装后单个绑定不再修改，只能通过再次调用 `install` 整体替换。
//! 不提供卸载。

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info, warn};

use crate::config::KeymapConfig;
use crate::context::AppContext;
use crate::entry::EntryPoint;
use crate::host::Host;

/// 可绑定的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputAction {
    /// 回滚
    Rollback,
    /// 截图
    Screenshot,
    /// 切换全屏
    ToggleFullscreen,
    /// 切换音乐
    ToggleMusic,
    /// 切换快进
    ToggleSkip,
    /// 打开游戏菜单
    GameMenu,
    /// 隐藏对话窗口
    HideWindows,
    /// 启动外部编辑器
    LaunchEditor,
}

impl InputAction {
    pub fn name(self) -> &'static str {
        match self {
            InputAction::Rollback => "rollback",
            InputAction::Screenshot => "screenshot",
            InputAction::ToggleFullscreen => "toggle_fullscreen",
            InputAction::ToggleMusic => "toggle_music",
            InputAction::ToggleSkip => "toggle_skip",
            InputAction::GameMenu => "game_menu",
            InputAction::HideWindows => "hide_windows",
            InputAction::LaunchEditor => "launch_editor",
        }
    }
}

impl fmt::Display for InputAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 安装状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeymapState {
    #[default]
    Uninstalled,
    Installed,
}

/// 按键分发表
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    state: KeymapState,
    bindings: HashMap<String, InputAction>,
}

impl Keymap {
    /// 创建未安装的分发表
    pub fn new() -> Self {
        Self::default()
    }

    /// 按配置安装（重复调用时整体替换）
    ///
    /// 配置应先经过 `KeymapConfig::validate`；未校验的配置中同一按键绑定多个动作时，
    /// 按动作顺序后者覆盖前者并记录警告。
    pub fn install(&mut self, config: &KeymapConfig) {
        let mut bindings = HashMap::new();
        for (action, keys) in config.bindings() {
            for key in keys {
                if let Some(previous) = bindings.insert(key.clone(), action)
                    && previous != action
                {
                    warn!(key = %key, previous = %previous, action = %action, "按键重复绑定，后者覆盖前者");
                }
            }
        }

        let replaced = self.state == KeymapState::Installed;
        self.bindings = bindings;
        self.state = KeymapState::Installed;
        info!(keys = self.bindings.len(), replaced = replaced, "按键表已安装");
    }

    pub fn state(&self) -> KeymapState {
        self.state
    }

    pub fn is_installed(&self) -> bool {
        self.state == KeymapState::Installed
    }

    /// 查找按键绑定的动作，未安装时总是 `None`
    pub fn action_for(&self, key: &str) -> Option<InputAction> {
        if !self.is_installed() {
            return None;
        }
        self.bindings.get(key).copied()
    }

    /// 已绑定的按键数量
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// 分发一个按键事件
///
/// 返回按键是否被分发表消费。
pub fn dispatch(key: &str, ctx: &mut AppContext, host: &mut dyn Host) -> bool {
    let Some(action) = ctx.keymap.action_for(key) else {
        return false;
    };

    debug!(key = %key, action = %action, "按键分发");
    run_action(action, ctx, host);
    true
}

/// 执行动作
pub fn run_action(action: InputAction, ctx: &mut AppContext, host: &mut dyn Host) {
    match action {
        InputAction::Rollback => host.rollback(),
        InputAction::Screenshot => host.screenshot(&ctx.config.screenshot_filename),
        InputAction::ToggleFullscreen => host.toggle_fullscreen(),
        InputAction::ToggleMusic => host.toggle_music(),
        InputAction::ToggleSkip => {
            ctx.skip.toggle();
            debug!(active = ctx.skip.is_active(), "快进模式切换");
            host.restart_interaction();
        }
        InputAction::GameMenu => {
            if let Some(sound) = &ctx.config.game_menu_sound {
                host.play_sound(sound);
            }
            ctx.enter_context(EntryPoint::GameMenu, host);
        }
        InputAction::HideWindows => ctx.enter_context(EntryPoint::HideWindows, host),
        InputAction::LaunchEditor => host.launch_editor(),
    }
}
