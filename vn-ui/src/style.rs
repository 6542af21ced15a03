//! # Style 模块
//!
//! 控件角色、样式标识符推导以及样式表。
//!
//! ## 推导规则
//!
//! ```text
//! base        = role.name()
//! base        = base + "-selected"   （仅当 selected && !disabled）
//! button      = base + "-button"
//! button text = base + "-button-text"
//! label       = role.name() + "-label"
//! ```
//!
//! 角色是封闭枚举，样式标识符只能由这里的函数产生，外部不做字符串拼接。

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// 控件角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// 主菜单
    MainMenu,
    /// 游戏菜单导航
    GameMenuNav,
    /// 存档选择导航
    FilePickerNav,
    /// 是/否确认
    #[serde(rename = "yesno")]
    YesNo,
    /// 设置
    Preferences,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::MainMenu,
        Role::GameMenuNav,
        Role::FilePickerNav,
        Role::YesNo,
        Role::Preferences,
    ];

    /// 样式族名称
    pub fn name(self) -> &'static str {
        match self {
            Role::MainMenu => "main-menu",
            Role::GameMenuNav => "game-menu-nav",
            Role::FilePickerNav => "file-picker-nav",
            Role::YesNo => "yesno",
            Role::Preferences => "preferences",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.name() == s)
            .ok_or(())
    }
}

/// 样式标识符
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleId(String);

impl StyleId {
    /// 具名样式（菜单、提示层等非角色样式）
    pub fn named(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn style_base(role: Role, selected: bool, disabled: bool) -> String {
    if selected && !disabled {
        format!("{}-selected", role.name())
    } else {
        role.name().to_string()
    }
}

/// 按钮样式
pub fn button_style(role: Role, selected: bool, disabled: bool) -> StyleId {
    StyleId(format!("{}-button", style_base(role, selected, disabled)))
}

/// 按钮文字样式
pub fn button_text_style(role: Role, selected: bool, disabled: bool) -> StyleId {
    StyleId(format!("{}-button-text", style_base(role, selected, disabled)))
}

/// 标签样式
pub fn label_style(role: Role) -> StyleId {
    StyleId(format!("{}-label", role.name()))
}

/// RGBA 颜色（0.0 - 1.0）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
}

/// 样式描述
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleDescriptor {
    /// 背景色
    pub background: Color,
    /// 悬停背景色
    pub hover_background: Color,
    /// 文字颜色
    pub text_color: Color,
    /// 字号
    pub font_size: f32,
}

/// 调色板（深色）
mod palette {
    use super::Color;

    pub const BG_PANEL: Color = Color::new(0.15, 0.15, 0.22, 0.95);
    pub const TEXT_PRIMARY: Color = Color::new(0.95, 0.95, 0.97, 1.0);
    pub const TEXT_SECONDARY: Color = Color::new(0.7, 0.7, 0.75, 1.0);
    pub const ACCENT: Color = Color::new(0.85, 0.65, 0.3, 1.0);
    pub const ACCENT_HOVER: Color = Color::new(0.95, 0.75, 0.4, 1.0);
    pub const BUTTON_BG: Color = Color::new(0.2, 0.2, 0.28, 1.0);
    pub const BUTTON_HOVER: Color = Color::new(0.28, 0.28, 0.38, 1.0);
    pub const WARNING: Color = Color::new(0.9, 0.7, 0.2, 1.0);

    pub const FONT_SIZE_LARGE: f32 = 28.0;
    pub const FONT_SIZE_NORMAL: f32 = 22.0;
    pub const FONT_SIZE_SMALL: f32 = 16.0;
}

/// 样式表
///
/// 以 `StyleId` 查找样式描述，未登记的标识符落到默认描述。
#[derive(Debug, Clone)]
pub struct StyleSheet {
    styles: HashMap<StyleId, StyleDescriptor>,
    fallback: StyleDescriptor,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::dark()
    }
}

impl StyleSheet {
    /// 深色样式表（默认）
    pub fn dark() -> Self {
        let fallback = StyleDescriptor {
            background: Color::TRANSPARENT,
            hover_background: Color::TRANSPARENT,
            text_color: palette::TEXT_PRIMARY,
            font_size: palette::FONT_SIZE_NORMAL,
        };

        let mut styles = HashMap::new();
        for role in Role::ALL {
            let font_size = match role {
                Role::MainMenu => palette::FONT_SIZE_LARGE,
                Role::FilePickerNav | Role::Preferences => palette::FONT_SIZE_SMALL,
                _ => palette::FONT_SIZE_NORMAL,
            };

            let idle = StyleDescriptor {
                background: palette::BUTTON_BG,
                hover_background: palette::BUTTON_HOVER,
                text_color: palette::TEXT_PRIMARY,
                font_size,
            };
            let selected = StyleDescriptor {
                background: palette::ACCENT,
                hover_background: palette::ACCENT_HOVER,
                text_color: palette::BG_PANEL,
                font_size,
            };

            styles.insert(button_style(role, false, false), idle);
            styles.insert(button_text_style(role, false, false), idle);
            styles.insert(button_style(role, true, false), selected);
            styles.insert(button_text_style(role, true, false), selected);
            styles.insert(
                label_style(role),
                StyleDescriptor {
                    background: Color::TRANSPARENT,
                    hover_background: Color::TRANSPARENT,
                    text_color: palette::TEXT_SECONDARY,
                    font_size,
                },
            );
        }

        styles.insert(
            StyleId::named("skip_indicator"),
            StyleDescriptor {
                background: Color::TRANSPARENT,
                hover_background: Color::TRANSPARENT,
                text_color: palette::WARNING,
                font_size: palette::FONT_SIZE_SMALL,
            },
        );

        Self { styles, fallback }
    }

    /// 查找样式
    pub fn resolve(&self, id: &StyleId) -> &StyleDescriptor {
        self.styles.get(id).unwrap_or(&self.fallback)
    }

    /// 覆盖或登记样式
    pub fn set(&mut self, id: StyleId, descriptor: StyleDescriptor) {
        self.styles.insert(id, descriptor);
    }

    pub fn contains(&self, id: &StyleId) -> bool {
        self.styles.contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_button_style() {
        for role in Role::ALL {
            assert_eq!(
                button_style(role, true, false).as_str(),
                format!("{}-selected-button", role.name())
            );
            assert_eq!(
                button_text_style(role, true, false).as_str(),
                format!("{}-selected-button-text", role.name())
            );
        }
    }

    #[test]
    fn test_disabled_never_selected() {
        for role in Role::ALL {
            let expected = format!("{}-button", role.name());
            assert_eq!(button_style(role, true, true).as_str(), expected);
            assert_eq!(button_style(role, false, true).as_str(), expected);
            assert_eq!(button_style(role, false, false).as_str(), expected);
        }
    }

    #[test]
    fn test_label_style() {
        assert_eq!(label_style(Role::YesNo).as_str(), "yesno-label");
        assert_eq!(label_style(Role::MainMenu).as_str(), "main-menu-label");
    }

    #[test]
    fn test_role_parse() {
        assert_eq!("game-menu-nav".parse::<Role>(), Ok(Role::GameMenuNav));
        assert_eq!("gm_nav".parse::<Role>(), Err(()));
    }

    #[test]
    fn test_role_serde_name_matches() {
        for role in Role::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.name()));
            assert_eq!(serde_json::from_str::<Role>(&json).unwrap(), role);
            assert_eq!(role.name().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn test_style_sheet_lookup() {
        let sheet = StyleSheet::dark();
        let selected = sheet.resolve(&button_style(Role::MainMenu, true, false));
        let idle = sheet.resolve(&button_style(Role::MainMenu, false, false));
        assert_ne!(selected.background, idle.background);

        // 未登记的样式使用默认描述
        let unknown = sheet.resolve(&StyleId::named("nonexistent"));
        assert_eq!(unknown.background, Color::TRANSPARENT);
        assert!(sheet.contains(&StyleId::named("skip_indicator")));
    }
}
