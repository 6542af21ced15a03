//! # Widget 模块
//!
//! 按钮/标签工厂以及渲染列表中的元素类型。
//!
//! ## 设计说明
//!
//! - `ButtonSpec` 在每次渲染菜单时新建，渲染调用返回后即丢弃
//! - 禁用的按钮永远不会携带点击动作
//! - 文本在写入元素前经过翻译表

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

use crate::config::LayoutHintPolicy;
use crate::entry::EntryPoint;
use crate::error::UiError;
use crate::keymap::InputAction;
use crate::positions::Anchor;
use crate::style::{self, Role, StyleId};
use crate::translation::TranslationTable;

/// 点击动作
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickAction {
    /// 交互返回该值
    Return(String),
    /// 跳转到标签
    Jump(String),
    /// 退出当前上下文，并在上层上下文中跳转到标签
    JumpOutOfContext(String),
    /// 在新上下文中运行入口点
    Call(EntryPoint),
    /// 执行按键动作
    Invoke(InputAction),
}

impl ClickAction {
    pub fn returns(value: impl Into<String>) -> Self {
        Self::Return(value.into())
    }

    pub fn jumps(label: impl Into<String>) -> Self {
        Self::Jump(label.into())
    }

    pub fn jumps_out_of_context(label: impl Into<String>) -> Self {
        Self::JumpOutOfContext(label.into())
    }
}

/// 布局参数名
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKey {
    XPos,
    YPos,
    XAnchor,
    YAnchor,
    XMinimum,
    YMinimum,
    XMaximum,
    YMaximum,
    XFill,
    YFill,
    Spacing,
    Size,
}

impl LayoutKey {
    pub const ALL: [LayoutKey; 12] = [
        LayoutKey::XPos,
        LayoutKey::YPos,
        LayoutKey::XAnchor,
        LayoutKey::YAnchor,
        LayoutKey::XMinimum,
        LayoutKey::YMinimum,
        LayoutKey::XMaximum,
        LayoutKey::YMaximum,
        LayoutKey::XFill,
        LayoutKey::YFill,
        LayoutKey::Spacing,
        LayoutKey::Size,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LayoutKey::XPos => "xpos",
            LayoutKey::YPos => "ypos",
            LayoutKey::XAnchor => "xanchor",
            LayoutKey::YAnchor => "yanchor",
            LayoutKey::XMinimum => "xminimum",
            LayoutKey::YMinimum => "yminimum",
            LayoutKey::XMaximum => "xmaximum",
            LayoutKey::YMaximum => "ymaximum",
            LayoutKey::XFill => "xfill",
            LayoutKey::YFill => "yfill",
            LayoutKey::Spacing => "spacing",
            LayoutKey::Size => "size",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == s)
    }

    /// 检查取值类型
    fn accepts(self, value: &LayoutValue) -> bool {
        match self {
            LayoutKey::XPos | LayoutKey::YPos => {
                matches!(value, LayoutValue::Int(_) | LayoutValue::Float(_))
            }
            LayoutKey::XAnchor | LayoutKey::YAnchor => match value {
                LayoutValue::Int(_) | LayoutValue::Float(_) => true,
                LayoutValue::Text(name) => Anchor::parse(name).is_some(),
                LayoutValue::Bool(_) => false,
            },
            LayoutKey::XFill | LayoutKey::YFill => matches!(value, LayoutValue::Bool(_)),
            LayoutKey::XMinimum
            | LayoutKey::YMinimum
            | LayoutKey::XMaximum
            | LayoutKey::YMaximum
            | LayoutKey::Spacing
            | LayoutKey::Size => matches!(value, LayoutValue::Int(_)),
        }
    }
}

impl fmt::Display for LayoutKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 布局参数值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LayoutValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// 布局参数（位置/尺寸覆盖）
///
/// 只能经由 `from_pairs`/`from_json_str` 从外部数据构建，两者都按策略校验。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LayoutHints {
    hints: BTreeMap<LayoutKey, LayoutValue>,
}

impl LayoutHints {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置已知参数
    pub fn with(mut self, key: LayoutKey, value: LayoutValue) -> Self {
        self.hints.insert(key, value);
        self
    }

    /// 从任意键值对构建
    ///
    /// 未知键或取值类型不符时，`Ignore` 策略丢弃并记录警告，`Reject` 策略返回错误。
    pub fn from_pairs<'a, I>(pairs: I, policy: LayoutHintPolicy) -> Result<Self, UiError>
    where
        I: IntoIterator<Item = (&'a str, LayoutValue)>,
    {
        let mut hints = BTreeMap::new();

        for (name, value) in pairs {
            let Some(key) = LayoutKey::parse(name) else {
                match policy {
                    LayoutHintPolicy::Ignore => {
                        warn!(key = %name, "忽略未知布局参数");
                        continue;
                    }
                    LayoutHintPolicy::Reject => {
                        return Err(UiError::UnknownLayoutHint {
                            key: name.to_string(),
                        });
                    }
                }
            };

            if !key.accepts(&value) {
                match policy {
                    LayoutHintPolicy::Ignore => {
                        warn!(key = %key, value = ?value, "忽略类型不符的布局参数");
                        continue;
                    }
                    LayoutHintPolicy::Reject => {
                        return Err(UiError::InvalidLayoutHint {
                            key: key.name().to_string(),
                            message: format!("{value:?}"),
                        });
                    }
                }
            }

            hints.insert(key, value);
        }

        Ok(Self { hints })
    }

    /// 从 JSON 对象构建，键值按 `from_pairs` 的策略处理
    pub fn from_json_str(content: &str, policy: LayoutHintPolicy) -> Result<Self, UiError> {
        let raw: BTreeMap<String, LayoutValue> = serde_json::from_str(content)
            .map_err(|e| UiError::LayoutHintParse(e.to_string()))?;
        Self::from_pairs(raw.iter().map(|(k, v)| (k.as_str(), v.clone())), policy)
    }

    pub fn get(&self, key: LayoutKey) -> Option<&LayoutValue> {
        self.hints.get(&key)
    }

    /// 合并，`other` 中的值覆盖自身
    pub fn merged(mut self, other: &LayoutHints) -> Self {
        for (key, value) in &other.hints {
            self.hints.insert(*key, value.clone());
        }
        self
    }

    pub fn len(&self) -> usize {
        self.hints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }
}

/// 按钮描述
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonSpec {
    /// 未翻译的文本
    pub label: String,
    pub role: Role,
    pub selected: bool,
    pub disabled: bool,
    pub on_click: Option<ClickAction>,
    pub layout: LayoutHints,
}

impl ButtonSpec {
    pub fn new(label: impl Into<String>, role: Role) -> Self {
        Self {
            label: label.into(),
            role,
            selected: false,
            disabled: false,
            on_click: None,
            layout: LayoutHints::default(),
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(mut self, action: ClickAction) -> Self {
        self.on_click = Some(action);
        self
    }

    pub fn layout(mut self, layout: LayoutHints) -> Self {
        self.layout = layout;
        self
    }

    /// 实际生效的点击动作：禁用时始终为空
    pub fn effective_action(&self) -> Option<&ClickAction> {
        if self.disabled {
            None
        } else {
            self.on_click.as_ref()
        }
    }

    pub fn style(&self) -> StyleId {
        style::button_style(self.role, self.selected, self.disabled)
    }

    pub fn text_style(&self) -> StyleId {
        style::button_text_style(self.role, self.selected, self.disabled)
    }
}

/// 容器类型
#[derive(Debug, Clone, PartialEq)]
pub enum ContainerKind {
    /// 纵向排列
    VBox,
    /// 横向排列
    HBox,
    /// 固定坐标
    Fixed,
    /// 带背景的单子控件窗口
    Window,
    /// 包裹单个子控件的按钮
    Button(Option<ClickAction>),
    /// 等大单元格网格，子控件数必须正好为 `cols * rows`
    ///
    /// `transpose` 为假时子控件按行排列，为真时按列排列。
    Grid {
        cols: usize,
        rows: usize,
        padding: u32,
        transpose: bool,
    },
    /// 限制单个子控件可用尺寸，上限记在布局参数的 `xmaximum`/`ymaximum` 中
    Sizer,
}

impl ContainerKind {
    pub fn name(&self) -> &'static str {
        match self {
            ContainerKind::VBox => "vbox",
            ContainerKind::HBox => "hbox",
            ContainerKind::Fixed => "fixed",
            ContainerKind::Window => "window",
            ContainerKind::Button(_) => "button",
            ContainerKind::Grid { .. } => "grid",
            ContainerKind::Sizer => "sizer",
        }
    }
}

/// 渲染元素
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// 可交互按钮
    Button {
        text: String,
        style: StyleId,
        text_style: StyleId,
        action: Option<ClickAction>,
        layout: LayoutHints,
    },
    /// 不可交互文本
    Label {
        text: String,
        style: StyleId,
        layout: LayoutHints,
    },
    /// 容器
    Container {
        kind: ContainerKind,
        style: StyleId,
        layout: LayoutHints,
        children: Vec<Element>,
    },
    /// 空占位
    Null { layout: LayoutHints },
}

impl Element {
    /// 显示的文本（按钮/标签）
    pub fn text(&self) -> Option<&str> {
        match self {
            Element::Button { text, .. } | Element::Label { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn style(&self) -> Option<&StyleId> {
        match self {
            Element::Button { style, .. }
            | Element::Label { style, .. }
            | Element::Container { style, .. } => Some(style),
            Element::Null { .. } => None,
        }
    }

    /// 子元素
    pub fn children(&self) -> &[Element] {
        match self {
            Element::Container { children, .. } => children,
            _ => &[],
        }
    }

    /// 深度优先遍历自身及所有子元素
    pub fn walk<'a>(&'a self, out: &mut Vec<&'a Element>) {
        out.push(self);
        for child in self.children() {
            child.walk(out);
        }
    }
}

/// 渲染目标
pub trait ElementSink {
    fn emit(&mut self, element: Element);
}

/// 当前界面的渲染列表
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderList {
    elements: Vec<Element>,
}

impl RenderList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl ElementSink for RenderList {
    fn emit(&mut self, element: Element) {
        self.elements.push(element);
    }
}

impl ElementSink for Vec<Element> {
    fn emit(&mut self, element: Element) {
        self.push(element);
    }
}

/// 按图层组织的完整界面
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Screen {
    pub layers: BTreeMap<String, Vec<Element>>,
}

impl Screen {
    pub fn layer(&self, name: &str) -> &[Element] {
        self.layers.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 所有图层中的全部元素（深度优先）
    pub fn all_elements(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        for elements in self.layers.values() {
            for element in elements {
                element.walk(&mut out);
            }
        }
        out
    }

    /// 所有按钮
    pub fn buttons(&self) -> Vec<&Element> {
        self.all_elements()
            .into_iter()
            .filter(|e| matches!(e, Element::Button { .. }))
            .collect()
    }
}

/// 渲染按钮
///
/// 文本经过翻译表，样式按角色/选中/禁用推导，禁用时不携带点击动作。
pub fn render_button<S: ElementSink + ?Sized>(
    sink: &mut S,
    translations: &TranslationTable,
    spec: ButtonSpec,
) {
    let style = spec.style();
    let text_style = spec.text_style();
    let action = spec.effective_action().cloned();

    sink.emit(Element::Button {
        text: translations.translate(&spec.label).to_string(),
        style,
        text_style,
        action,
        layout: spec.layout,
    });
}

/// 渲染标签
pub fn render_label<S: ElementSink + ?Sized>(
    sink: &mut S,
    translations: &TranslationTable,
    label: &str,
    role: Role,
    layout: LayoutHints,
) {
    sink.emit(Element::Label {
        text: translations.translate(label).to_string(),
        style: style::label_style(role),
        layout,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TranslationTable {
        TranslationTable::from_pairs([("Save Game", "保存游戏")])
    }

    #[test]
    fn test_disabled_button_has_no_action() {
        let mut list = RenderList::new();
        let spec = ButtonSpec::new("Save Game", Role::GameMenuNav)
            .selected(true)
            .disabled(true)
            .on_click(ClickAction::jumps("_game_menu_save"));
        assert!(spec.effective_action().is_none());

        render_button(&mut list, &table(), spec);

        match &list.elements()[0] {
            Element::Button {
                text,
                style,
                text_style,
                action,
                ..
            } => {
                assert_eq!(text, "保存游戏");
                assert_eq!(style.as_str(), "game-menu-nav-button");
                assert_eq!(text_style.as_str(), "game-menu-nav-button-text");
                assert!(action.is_none());
            }
            other => panic!("expected button, got {other:?}"),
        }
    }

    #[test]
    fn test_enabled_button_keeps_action() {
        let mut list = RenderList::new();
        let spec = ButtonSpec::new("Load Game", Role::GameMenuNav)
            .selected(true)
            .on_click(ClickAction::jumps("_game_menu_load"));
        render_button(&mut list, &table(), spec);

        let Element::Button {
            text,
            style,
            action,
            ..
        } = &list.elements()[0]
        else {
            panic!("expected button");
        };
        assert_eq!(text, "Load Game");
        assert_eq!(style.as_str(), "game-menu-nav-selected-button");
        assert_eq!(action, &Some(ClickAction::jumps("_game_menu_load")));
    }

    #[test]
    fn test_enabled_button_without_action() {
        let mut list = Vec::new();
        render_button(&mut list, &table(), ButtonSpec::new("Quit", Role::MainMenu));
        assert!(matches!(&list[0], Element::Button { action: None, .. }));
    }

    #[test]
    fn test_render_label() {
        let mut list = RenderList::new();
        let layout = LayoutHints::new().with(LayoutKey::XPos, LayoutValue::Float(0.5));
        render_label(&mut list, &table(), "Save Game", Role::FilePickerNav, layout.clone());

        assert_eq!(
            list.elements()[0],
            Element::Label {
                text: "保存游戏".to_string(),
                style: StyleId::named("file-picker-nav-label"),
                layout,
            }
        );
    }

    #[test]
    fn test_layout_hints_ignore_policy() {
        let hints = LayoutHints::from_pairs(
            [
                ("xpos", LayoutValue::Int(10)),
                ("colour", LayoutValue::Text("red".to_string())),
                ("xfill", LayoutValue::Int(1)),
                ("xanchor", LayoutValue::Text("center".to_string())),
            ],
            LayoutHintPolicy::Ignore,
        )
        .unwrap();

        assert_eq!(hints.len(), 2);
        assert_eq!(hints.get(LayoutKey::XPos), Some(&LayoutValue::Int(10)));
        assert!(hints.get(LayoutKey::XFill).is_none());
    }

    #[test]
    fn test_layout_hints_reject_policy() {
        let err = LayoutHints::from_pairs(
            [("colour", LayoutValue::Text("red".to_string()))],
            LayoutHintPolicy::Reject,
        )
        .unwrap_err();
        assert_eq!(
            err,
            UiError::UnknownLayoutHint {
                key: "colour".to_string()
            }
        );

        let err = LayoutHints::from_pairs(
            [("xanchor", LayoutValue::Text("middle".to_string()))],
            LayoutHintPolicy::Reject,
        )
        .unwrap_err();
        assert!(matches!(err, UiError::InvalidLayoutHint { .. }));
    }

    #[test]
    fn test_layout_hints_merge() {
        let base = LayoutHints::new()
            .with(LayoutKey::XPos, LayoutValue::Int(0))
            .with(LayoutKey::Spacing, LayoutValue::Int(4));
        let over = LayoutHints::new().with(LayoutKey::XPos, LayoutValue::Int(20));

        let merged = base.merged(&over);
        assert_eq!(merged.get(LayoutKey::XPos), Some(&LayoutValue::Int(20)));
        assert_eq!(merged.get(LayoutKey::Spacing), Some(&LayoutValue::Int(4)));
    }

    #[test]
    fn test_layout_hints_from_json() {
        let hints = LayoutHints::from_json_str(
            r#"{"xpos": 0.5, "yfill": true, "size": 18}"#,
            LayoutHintPolicy::Reject,
        )
        .unwrap();
        assert_eq!(hints.get(LayoutKey::XPos), Some(&LayoutValue::Float(0.5)));
        assert_eq!(hints.get(LayoutKey::YFill), Some(&LayoutValue::Bool(true)));
        assert_eq!(hints.get(LayoutKey::Size), Some(&LayoutValue::Int(18)));
    }

    #[test]
    fn test_layout_hints_from_json_ignore_policy() {
        let hints =
            LayoutHints::from_json_str(r#"{"xpos": 1, "colour": "red"}"#, LayoutHintPolicy::Ignore)
                .unwrap();
        assert_eq!(hints.len(), 1);
        assert_eq!(hints.get(LayoutKey::XPos), Some(&LayoutValue::Int(1)));

        let hints =
            LayoutHints::from_json_str(r#"{"xfill": 1, "size": "big"}"#, LayoutHintPolicy::Ignore)
                .unwrap();
        assert!(hints.is_empty());
    }

    #[test]
    fn test_layout_hints_from_json_reject_policy() {
        let err =
            LayoutHints::from_json_str(r#"{"xpos": 1, "colour": "red"}"#, LayoutHintPolicy::Reject)
                .unwrap_err();
        assert_eq!(
            err,
            UiError::UnknownLayoutHint {
                key: "colour".to_string()
            }
        );

        let err = LayoutHints::from_json_str(r#"{"size": "big"}"#, LayoutHintPolicy::Reject)
            .unwrap_err();
        assert!(matches!(err, UiError::InvalidLayoutHint { .. }));

        let err = LayoutHints::from_json_str("[1, 2]", LayoutHintPolicy::Ignore).unwrap_err();
        assert!(matches!(err, UiError::LayoutHintParse(_)));
    }

    #[test]
    fn test_layout_hints_serialize() {
        let hints = LayoutHints::new().with(LayoutKey::XPos, LayoutValue::Int(10));
        assert_eq!(serde_json::to_string(&hints).unwrap(), r#"{"xpos":10}"#);
    }
}
