//! # VN UI
//!
//! 视觉小说引擎的默认 UI 层。
//!
//! ## 架构概述
//!
//! `vn-ui` 只产生渲染元素和调用宿主服务，不做任何绘制或 IO。
//! 宿主通过 [`Host`] trait 向 UI 层提供引擎能力：
//!
//! ```text
//! Host                           UI
//!   │                              │
//!   │──── key ───────────────────►│ handle_key()
//!   │◄─── Host::rollback() 等 ────│
//!   │                              │
//!   │──── 每帧 ──────────────────►│ render_overlays()
//!   │◄─── Vec<Element> ───────────│
//! ```
//!
//! ## 核心类型
//!
//! - [`AppContext`]：进程级上下文（配置、翻译、快进状态、按键表）
//! - [`ButtonSpec`] / [`Element`]：按钮描述与渲染元素
//! - [`UiBuilder`]：过程式界面构建器
//! - [`Host`]：宿主引擎接口
//!
//! ## 使用示例
//!
//! ```ignore
//! use vn_ui::{AppContext, UiConfig};
//!
//! let mut ctx = AppContext::from_config(UiConfig::load("config.json"))?;
//! ctx.setup();
//! ctx.check_module(&mut host);
//!
//! loop {
//!     let key = host.next_key();
//!     ctx.handle_key(&key, &mut host);
//!     host.draw(&ctx.render_overlays());
//! }
//! ```
//!
//! ## 模块结构
//!
//! - [`style`]：角色与样式标识符
//! - [`widget`]：按钮/标签工厂、布局参数、渲染元素
//! - [`builder`]：控件栈构建器
//! - [`screens`]：默认菜单界面
//! - [`keymap`]：按键分发
//! - [`overlay`]：快进提示层
//! - [`entry`]：入口点
//! - [`module_check`]：扩展模块检查
//! - [`positions`]：具名位置与过渡
//! - [`translation`]：翻译表
//! - [`config`]：配置
//! - [`error`]：错误类型

pub mod builder;
pub mod config;
pub mod context;
pub mod entry;
pub mod error;
pub mod host;
pub mod keymap;
pub mod module_check;
pub mod overlay;
pub mod positions;
pub mod screens;
pub mod style;
pub mod translation;
pub mod widget;

// 重导出核心类型
pub use builder::{DEFAULT_LAYER, LAYERS, MenuItem, UiBuilder};
pub use config::{KeymapConfig, LayoutHintPolicy, UiConfig};
pub use context::{AppContext, ContextStack, SkipState};
pub use entry::{EntryOutcome, EntryPoint, HideOutcome, hide_windows, run_entry_point};
pub use error::{ConfigError, TranslationError, UiError, VnUiError, VnUiResult};
pub use host::Host;
pub use keymap::{InputAction, Keymap, KeymapState};
pub use module_check::{ModuleCapabilities, ModuleStatus};
pub use overlay::{OverlayKind, OverlayRegistry, SKIP_INDICATOR_TEXT};
pub use positions::{
    Anchor, NamedPosition, PositionValue, TransitionKind, TransitionSpec, position_named,
    transition_for, transition_named,
};
pub use screens::GameMenuPage;
pub use style::{Role, StyleId, StyleSheet};
pub use translation::TranslationTable;
pub use widget::{
    ButtonSpec, ClickAction, ContainerKind, Element, ElementSink, LayoutHints, LayoutKey,
    LayoutValue, RenderList, Screen,
};
