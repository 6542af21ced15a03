//! # Overlay 模块
//!
//! 每帧绘制在游戏画面上方的提示层。

use crate::context::{AppContext, SkipState};
use crate::style::StyleId;
use crate::translation::TranslationTable;
use crate::widget::{Element, LayoutHints, LayoutKey, LayoutValue};

/// 快进提示文本
pub const SKIP_INDICATOR_TEXT: &str = "Skip Mode";

/// 提示层种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    /// 快进提示
    SkipIndicator,
}

/// 已登记的提示层
#[derive(Debug, Clone, Default)]
pub struct OverlayRegistry {
    overlays: Vec<OverlayKind>,
}

impl OverlayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记提示层，重复登记会被忽略
    ///
    /// 返回是否为新登记。
    pub fn register(&mut self, kind: OverlayKind) -> bool {
        if self.overlays.contains(&kind) {
            return false;
        }
        self.overlays.push(kind);
        true
    }

    pub fn contains(&self, kind: OverlayKind) -> bool {
        self.overlays.contains(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = OverlayKind> + '_ {
        self.overlays.iter().copied()
    }
}

/// 快进提示
///
/// 仅当快进开启且提示功能开启时返回元素。
pub fn skip_indicator(
    skip: SkipState,
    enabled: bool,
    translations: &TranslationTable,
) -> Option<Element> {
    if !(skip.is_active() && enabled) {
        return None;
    }

    Some(Element::Label {
        text: translations.translate(SKIP_INDICATOR_TEXT).to_string(),
        style: StyleId::named("skip_indicator"),
        layout: LayoutHints::new()
            .with(LayoutKey::XPos, LayoutValue::Int(10))
            .with(LayoutKey::YPos, LayoutValue::Int(10)),
    })
}

/// 本帧所有提示层
///
/// 隐藏窗口期间屏蔽全部提示层。
pub fn render_overlays(ctx: &AppContext) -> Vec<Element> {
    if ctx.suppress_overlay {
        return Vec::new();
    }

    ctx.overlays
        .iter()
        .filter_map(|kind| match kind {
            OverlayKind::SkipIndicator => {
                skip_indicator(ctx.skip, ctx.config.skip_indicator, &ctx.translations)
            }
        })
        .collect()
}
