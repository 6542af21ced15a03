//! # Context 模块
//!
//! 进程级应用上下文。
//!
//! ## 生命周期
//!
//! - 启动：`AppContext::new` + `setup`（安装按键表、登记提示层）
//! - 会话：渲染与输入层读写其中的状态
//! - 不提供销毁
//!
//! 所有状态只在宿主的 UI 线程上访问。

use tracing::{debug, info};

use crate::config::UiConfig;
use crate::entry::EntryPoint;
use crate::error::{UiError, VnUiResult};
use crate::host::Host;
use crate::keymap::{self, Keymap};
use crate::module_check::{self, ModuleStatus};
use crate::overlay::{self, OverlayKind, OverlayRegistry};
use crate::style::{Role, StyleSheet};
use crate::translation::TranslationTable;
use crate::widget::{
    self, ButtonSpec, ClickAction, Element, ElementSink, LayoutHints, LayoutValue,
};

/// 快进状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SkipState {
    active: bool,
}

impl SkipState {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn toggle(&mut self) {
        self.active = !self.active;
    }

    pub fn set(&mut self, active: bool) {
        self.active = active;
    }
}

/// 上下文栈
///
/// 记录当前嵌套进入的入口点，栈底为主上下文（不入栈）。
#[derive(Debug, Clone, Default)]
pub struct ContextStack {
    stack: Vec<EntryPoint>,
}

impl ContextStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// 进入入口点
    pub fn push(&mut self, entry: EntryPoint) {
        self.stack.push(entry);
    }

    /// 返回上一层
    pub fn pop(&mut self) -> Option<EntryPoint> {
        self.stack.pop()
    }

    /// 当前所在的入口点，主上下文中为 `None`
    pub fn current(&self) -> Option<EntryPoint> {
        self.stack.last().copied()
    }

    /// 是否已经处于某个入口点内
    pub fn contains(&self, entry: EntryPoint) -> bool {
        self.stack.contains(&entry)
    }

    /// 获取栈深度
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// 应用上下文
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: UiConfig,
    pub translations: TranslationTable,
    pub styles: StyleSheet,
    /// 快进状态
    pub skip: SkipState,
    /// 对话窗口是否已隐藏
    pub windows_hidden: bool,
    /// 是否屏蔽提示层
    pub suppress_overlay: bool,
    pub keymap: Keymap,
    pub overlays: OverlayRegistry,
    pub contexts: ContextStack,
}

impl AppContext {
    /// 创建上下文（尚未安装按键表）
    pub fn new(config: UiConfig, translations: TranslationTable) -> Self {
        Self {
            config,
            translations,
            styles: StyleSheet::default(),
            skip: SkipState::default(),
            windows_hidden: false,
            suppress_overlay: false,
            keymap: Keymap::new(),
            overlays: OverlayRegistry::new(),
            contexts: ContextStack::new(),
        }
    }

    /// 从配置创建，按配置加载翻译文件
    pub fn from_config(config: UiConfig) -> VnUiResult<Self> {
        config.validate()?;

        let translations = match &config.translations_path {
            Some(path) => {
                let table = TranslationTable::load_json(path)?;
                info!(path = ?path, entries = table.len(), language = ?config.language, "翻译表加载成功");
                table
            }
            None => TranslationTable::new(),
        };

        Ok(Self::new(config, translations))
    }

    /// 启动时执行一次：安装按键表，登记快进提示层
    pub fn setup(&mut self) {
        self.keymap.install(&self.config.keymap);
        self.overlays.register(OverlayKind::SkipIndicator);
    }

    /// 翻译
    pub fn translate<'a>(&'a self, source: &'a str) -> &'a str {
        self.translations.translate(source)
    }

    /// 按配置的策略解析布局参数
    pub fn layout_hints<'a, I>(&self, pairs: I) -> Result<LayoutHints, UiError>
    where
        I: IntoIterator<Item = (&'a str, LayoutValue)>,
    {
        LayoutHints::from_pairs(pairs, self.config.layout_hint_policy)
    }

    /// 渲染按钮
    pub fn render_button<S: ElementSink + ?Sized>(&self, sink: &mut S, spec: ButtonSpec) {
        widget::render_button(sink, &self.translations, spec);
    }

    /// 渲染标签
    pub fn render_label<S: ElementSink + ?Sized>(
        &self,
        sink: &mut S,
        label: &str,
        role: Role,
        layout: LayoutHints,
    ) {
        widget::render_label(sink, &self.translations, label, role, layout);
    }

    /// 处理按键事件，返回是否被按键表消费
    pub fn handle_key(&mut self, key: &str, host: &mut dyn Host) -> bool {
        keymap::dispatch(key, self, host)
    }

    /// 执行按钮的点击动作
    ///
    /// `Invoke`/`Call` 在 UI 层内完成，返回 `true`；`Return`/`Jump`/`JumpOutOfContext`
    /// 属于脚本控制流，返回 `false`，由宿主的解释器处理。
    pub fn click(&mut self, action: &ClickAction, host: &mut dyn Host) -> bool {
        debug!(action = ?action, "按钮点击");
        match action {
            ClickAction::Invoke(input) => {
                keymap::run_action(*input, self, host);
                true
            }
            ClickAction::Call(entry) => {
                self.enter_context(*entry, host);
                true
            }
            ClickAction::Return(_) | ClickAction::Jump(_) | ClickAction::JumpOutOfContext(_) => {
                false
            }
        }
    }

    /// 在新的执行上下文中运行入口点，结束后回到当前上下文
    pub fn enter_context(&mut self, entry: EntryPoint, host: &mut dyn Host) {
        self.contexts.push(entry);
        host.call_in_new_context(entry, self);
        self.contexts.pop();
        debug!(entry = %entry, depth = self.contexts.depth(), "返回调用方上下文");
    }

    /// 本帧的提示层
    pub fn render_overlays(&self) -> Vec<Element> {
        overlay::render_overlays(self)
    }

    /// 扩展模块检查
    pub fn check_module(&self, host: &mut dyn Host) -> ModuleStatus {
        module_check::check_module(self, host)
    }
}
