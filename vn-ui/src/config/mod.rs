//! # Config 模块
//!
//! UI 层配置，集中管理所有配置项。
//!
//! ## 配置优先级
//!
//! 1. 宿主在启动时显式设置的值（最高）
//! 2. 配置文件 (ui.json)
//! 3. 默认值（最低）

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::ConfigError;
use crate::keymap::InputAction;

/// 未知布局参数的处理策略
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LayoutHintPolicy {
    /// 忽略并记录警告
    #[default]
    Ignore,
    /// 构建时报错
    Reject,
}

/// UI 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// 快进时是否显示提示
    #[serde(default = "default_true")]
    pub skip_indicator: bool,

    /// 是否检查扩展模块版本
    #[serde(default = "default_true")]
    pub module_warning: bool,

    /// 要求的最低扩展模块版本
    #[serde(default = "default_required_module_version")]
    pub required_module_version: u32,

    /// 截图文件名
    #[serde(default = "default_screenshot_filename")]
    pub screenshot_filename: String,

    /// 进入游戏菜单时播放的音效
    #[serde(default)]
    pub game_menu_sound: Option<String>,

    /// 界面语言（仅用于日志）
    #[serde(default)]
    pub language: Option<String>,

    /// 翻译文件路径
    #[serde(default)]
    pub translations_path: Option<PathBuf>,

    /// 未知布局参数的处理策略
    #[serde(default)]
    pub layout_hint_policy: LayoutHintPolicy,

    /// 按键绑定
    #[serde(default)]
    pub keymap: KeymapConfig,
}

/// 按键配置
///
/// 每个动作可以绑定多个按键，按键名称由宿主定义（如 `K_ESCAPE`、`mouseup_3`）。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeymapConfig {
    #[serde(default = "default_rollback_keys")]
    pub rollback: Vec<String>,

    #[serde(default = "default_screenshot_keys")]
    pub screenshot: Vec<String>,

    #[serde(default = "default_toggle_fullscreen_keys")]
    pub toggle_fullscreen: Vec<String>,

    #[serde(default = "default_toggle_music_keys")]
    pub toggle_music: Vec<String>,

    #[serde(default = "default_toggle_skip_keys")]
    pub toggle_skip: Vec<String>,

    #[serde(default = "default_game_menu_keys")]
    pub game_menu: Vec<String>,

    #[serde(default = "default_hide_windows_keys")]
    pub hide_windows: Vec<String>,

    #[serde(default = "default_launch_editor_keys")]
    pub launch_editor: Vec<String>,
}

impl KeymapConfig {
    /// 按动作列出绑定的按键
    pub fn bindings(&self) -> [(InputAction, &[String]); 8] {
        [
            (InputAction::Rollback, self.rollback.as_slice()),
            (InputAction::Screenshot, self.screenshot.as_slice()),
            (InputAction::ToggleFullscreen, self.toggle_fullscreen.as_slice()),
            (InputAction::ToggleMusic, self.toggle_music.as_slice()),
            (InputAction::ToggleSkip, self.toggle_skip.as_slice()),
            (InputAction::GameMenu, self.game_menu.as_slice()),
            (InputAction::HideWindows, self.hide_windows.as_slice()),
            (InputAction::LaunchEditor, self.launch_editor.as_slice()),
        ]
    }

    /// 验证按键配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: HashMap<&str, InputAction> = HashMap::new();

        for (action, keys) in self.bindings() {
            for key in keys {
                if key.trim().is_empty() {
                    return Err(ConfigError::ValidationFailed(format!(
                        "动作 {action} 绑定了空按键"
                    )));
                }
                if let Some(previous) = seen.insert(key.as_str(), action)
                    && previous != action
                {
                    return Err(ConfigError::ValidationFailed(format!(
                        "按键 '{key}' 同时绑定到 {previous} 和 {action}"
                    )));
                }
            }
        }

        Ok(())
    }
}

// 默认值函数
fn default_true() -> bool {
    true
}

fn default_required_module_version() -> u32 {
    crate::module_check::PIXELLATE_VERSION
}

fn default_screenshot_filename() -> String {
    "screenshot.bmp".to_string()
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn default_rollback_keys() -> Vec<String> {
    keys(&["K_PAGEUP", "mousedown_4"])
}

fn default_screenshot_keys() -> Vec<String> {
    keys(&["s"])
}

fn default_toggle_fullscreen_keys() -> Vec<String> {
    keys(&["f"])
}

fn default_toggle_music_keys() -> Vec<String> {
    keys(&["m"])
}

fn default_toggle_skip_keys() -> Vec<String> {
    keys(&["K_TAB"])
}

fn default_game_menu_keys() -> Vec<String> {
    keys(&["K_ESCAPE", "mouseup_3"])
}

fn default_hide_windows_keys() -> Vec<String> {
    keys(&["mouseup_2", "h"])
}

fn default_launch_editor_keys() -> Vec<String> {
    keys(&["E"])
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            rollback: default_rollback_keys(),
            screenshot: default_screenshot_keys(),
            toggle_fullscreen: default_toggle_fullscreen_keys(),
            toggle_music: default_toggle_music_keys(),
            toggle_skip: default_toggle_skip_keys(),
            game_menu: default_game_menu_keys(),
            hide_windows: default_hide_windows_keys(),
            launch_editor: default_launch_editor_keys(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            skip_indicator: true,
            module_warning: true,
            required_module_version: default_required_module_version(),
            screenshot_filename: default_screenshot_filename(),
            game_menu_sound: None,
            language: None,
            translations_path: None,
            layout_hint_policy: LayoutHintPolicy::default(),
            keymap: KeymapConfig::default(),
        }
    }
}

impl UiConfig {
    /// 加载配置文件
    ///
    /// 如果文件不存在或解析失败，返回默认配置并记录警告。
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            warn!(path = ?path, "配置文件不存在，使用默认配置");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => {
                    info!(path = ?path, "配置文件加载成功");
                    config
                }
                Err(e) => {
                    warn!(path = ?path, error = %e, "配置文件解析失败，使用默认配置");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(path = ?path, error = %e, "配置文件读取失败，使用默认配置");
                Self::default()
            }
        }
    }

    /// 保存配置到文件
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        fs::write(path, json).map_err(|e| ConfigError::Io(e.to_string()))?;

        Ok(())
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screenshot_filename.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "screenshot_filename 不能为空".to_string(),
            ));
        }

        if let Some(sound) = &self.game_menu_sound
            && sound.trim().is_empty()
        {
            return Err(ConfigError::ValidationFailed(
                "game_menu_sound 不能为空字符串，不需要音效时请省略该项".to_string(),
            ));
        }

        self.keymap.validate()
    }
}
