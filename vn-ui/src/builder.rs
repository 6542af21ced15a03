//! # Builder 模块
//!
//! 过程式 UI 构建器。
//!
//! ## 设计说明
//!
//! 构建器维护一个"当前控件"：默认是某个图层，打开容器后变为该容器，
//! 之后添加的控件都进入当前容器，直到 `close()`。
//!
//! - `vbox`/`hbox`/`fixed` 打开后需要显式 `close()`
//! - `grid` 关闭时要求子控件数正好填满所有单元格
//! - `window`/`button`/`sizer` 只接受一个子控件，添加子控件后自动关闭
//! - `finish()` 要求栈已清空，对应交互前的检查

use std::collections::BTreeMap;

use crate::error::UiError;
use crate::style::StyleId;
use crate::translation::TranslationTable;
use crate::widget::{
    ClickAction, ContainerKind, Element, ElementSink, LayoutHints, LayoutKey, LayoutValue, Screen,
};

/// 已知图层
pub const LAYERS: [&str; 4] = ["master", "transient", "screens", "overlay"];

/// 默认图层
pub const DEFAULT_LAYER: &str = "transient";

/// 菜单项：文本 + 返回值（`None` 表示不可选的标题行）
pub type MenuItem<'a> = (&'a str, Option<&'a str>);

#[derive(Debug)]
struct OpenContainer {
    kind: ContainerKind,
    style: StyleId,
    layout: LayoutHints,
    children: Vec<Element>,
    /// 关闭时一并关闭父容器（父容器是单子控件容器，本容器就是那个子控件）
    closes_parent: bool,
}

impl OpenContainer {
    fn into_element(self) -> Element {
        Element::Container {
            kind: self.kind,
            style: self.style,
            layout: self.layout,
            children: self.children,
        }
    }
}

/// UI 构建器
#[derive(Debug)]
pub struct UiBuilder {
    layers: BTreeMap<String, Vec<Element>>,
    layer: String,
    layer_stack: Vec<String>,
    open: Vec<OpenContainer>,
    /// 当前容器只接受一个子控件，且尚未添加
    awaiting_child: bool,
}

impl Default for UiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UiBuilder {
    pub fn new() -> Self {
        Self {
            layers: BTreeMap::new(),
            layer: DEFAULT_LAYER.to_string(),
            layer_stack: Vec::new(),
            open: Vec::new(),
            awaiting_child: false,
        }
    }

    /// 栈深度（打开的容器 + 切换过的图层）
    pub fn depth(&self) -> usize {
        self.open.len() + self.layer_stack.len()
    }

    /// 当前图层
    pub fn current_layer(&self) -> &str {
        &self.layer
    }

    fn attach(&mut self, element: Element) {
        match self.open.last_mut() {
            Some(container) => container.children.push(element),
            None => self
                .layers
                .entry(self.layer.clone())
                .or_default()
                .push(element),
        }
    }

    /// 弹出栈顶容器并挂到父级
    fn pop_container(&mut self) {
        while let Some(container) = self.open.pop() {
            let closes_parent = container.closes_parent;
            self.attach(container.into_element());
            if !closes_parent {
                break;
            }
        }
    }

    /// 添加控件到当前容器
    pub fn add(&mut self, element: Element) {
        self.attach(element);
        if self.awaiting_child {
            self.awaiting_child = false;
            self.pop_container();
        }
    }

    /// 打开容器，之后的控件添加到其中
    ///
    /// `once` 为真时容器只接受一个子控件。
    fn open(&mut self, kind: ContainerKind, style: StyleId, layout: LayoutHints, once: bool) {
        let closes_parent = self.awaiting_child;
        self.awaiting_child = once;
        self.open.push(OpenContainer {
            kind,
            style,
            layout,
            children: Vec::new(),
            closes_parent,
        });
    }

    /// 切换到指定图层，直到对应的 `close()`
    pub fn layer(&mut self, name: &str) -> Result<(), UiError> {
        if !self.open.is_empty() {
            return Err(UiError::LayerWhileWidgetOpen);
        }
        if !LAYERS.contains(&name) {
            return Err(UiError::UnknownLayer {
                name: name.to_string(),
            });
        }

        let previous = std::mem::replace(&mut self.layer, name.to_string());
        self.layer_stack.push(previous);
        self.awaiting_child = false;
        Ok(())
    }

    /// 关闭当前容器或图层
    pub fn close(&mut self) -> Result<(), UiError> {
        if self.awaiting_child {
            let container = self
                .open
                .last()
                .map(|c| c.kind.name())
                .unwrap_or("unknown");
            return Err(UiError::AwaitingChild {
                container: container.to_string(),
            });
        }

        if let Some(container) = self.open.last() {
            if let ContainerKind::Grid { cols, rows, .. } = container.kind {
                let expected = cols * rows;
                let found = container.children.len();
                if found != expected {
                    return Err(UiError::GridNotFull { expected, found });
                }
            }
            self.pop_container();
            return Ok(());
        }

        match self.layer_stack.pop() {
            Some(previous) => {
                self.layer = previous;
                Ok(())
            }
            None => Err(UiError::CloseOnEmptyStack),
        }
    }

    /// 完成构建
    pub fn finish(self) -> Result<Screen, UiError> {
        let depth = self.depth();
        if depth > 0 {
            return Err(UiError::UnclosedStack { depth });
        }
        Ok(Screen {
            layers: self.layers,
        })
    }

    /// 空控件
    pub fn null(&mut self, layout: LayoutHints) {
        self.add(Element::Null { layout });
    }

    /// 文本（不经过翻译）
    pub fn text(&mut self, text: impl Into<String>, style: StyleId, layout: LayoutHints) {
        self.add(Element::Label {
            text: text.into(),
            style,
            layout,
        });
    }

    /// 纵向容器
    pub fn vbox(&mut self, style: Option<StyleId>, layout: LayoutHints) {
        let style = style.unwrap_or_else(|| StyleId::named("vbox"));
        self.open(ContainerKind::VBox, style, layout, false);
    }

    /// 横向容器
    pub fn hbox(&mut self, style: Option<StyleId>, layout: LayoutHints) {
        let style = style.unwrap_or_else(|| StyleId::named("hbox"));
        self.open(ContainerKind::HBox, style, layout, false);
    }

    /// 固定坐标容器
    pub fn fixed(&mut self, layout: LayoutHints) {
        self.open(ContainerKind::Fixed, StyleId::named("fixed"), layout, false);
    }

    /// 网格
    ///
    /// 子控件从左到右、从上到下依次填入；`transpose` 时改为从上到下、从左到右。
    pub fn grid(
        &mut self,
        cols: usize,
        rows: usize,
        padding: u32,
        transpose: bool,
        layout: LayoutHints,
    ) {
        let kind = ContainerKind::Grid {
            cols,
            rows,
            padding,
            transpose,
        };
        self.open(kind, StyleId::named("grid"), layout, false);
    }

    /// 尺寸限制，作用于下一个添加的控件
    pub fn sizer(&mut self, max_width: Option<i64>, max_height: Option<i64>, layout: LayoutHints) {
        let mut layout = layout;
        if let Some(width) = max_width {
            layout = layout.with(LayoutKey::XMaximum, LayoutValue::Int(width));
        }
        if let Some(height) = max_height {
            layout = layout.with(LayoutKey::YMaximum, LayoutValue::Int(height));
        }
        self.open(ContainerKind::Sizer, StyleId::named("default"), layout, true);
    }

    /// 窗口，包含下一个添加的控件
    pub fn window(&mut self, style: Option<StyleId>, layout: LayoutHints) {
        let style = style.unwrap_or_else(|| StyleId::named("window"));
        self.open(ContainerKind::Window, style, layout, true);
    }

    /// 按钮，包含下一个添加的控件
    pub fn button(&mut self, action: Option<ClickAction>, style: StyleId, layout: LayoutHints) {
        self.open(ContainerKind::Button(action), style, layout, true);
    }

    /// 文字按钮
    pub fn textbutton(
        &mut self,
        text: impl Into<String>,
        action: Option<ClickAction>,
        style: StyleId,
        text_style: StyleId,
        layout: LayoutHints,
    ) {
        self.add(Element::Button {
            text: text.into(),
            style,
            text_style,
            action,
            layout,
        });
    }

    /// 菜单
    ///
    /// 标题行生成标签，可选项生成返回对应值的按钮。文本经过翻译表。
    pub fn menu(
        &mut self,
        items: &[MenuItem<'_>],
        translations: &TranslationTable,
        layout: LayoutHints,
    ) -> Result<(), UiError> {
        self.vbox(Some(StyleId::named("menu")), layout);

        for (label, value) in items {
            let text = translations.translate(label).to_string();
            match value {
                None => self.text(text, StyleId::named("menu_caption"), LayoutHints::new()),
                Some(value) => self.textbutton(
                    text,
                    Some(ClickAction::returns(*value)),
                    StyleId::named("menu_choice_button"),
                    StyleId::named("menu_choice"),
                    LayoutHints::new(),
                ),
            }
        }

        self.close()
    }
}

impl ElementSink for UiBuilder {
    fn emit(&mut self, element: Element) {
        self.add(element);
    }
}
