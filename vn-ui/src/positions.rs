//! # Positions 模块
//!
//! 具名屏幕位置与过渡效果。
//!
//! 这里只登记参数，位置计算之外的过渡数学（溶解、像素化、裁剪）由宿主负责。

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::module_check::ModuleCapabilities;
use PositionValue::{Absolute, Fraction};

/// 位置值
///
/// 整数为绝对像素，浮点数为相对于可用区域的比例。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PositionValue {
    Absolute(i32),
    Fraction(f32),
}

impl PositionValue {
    /// 换算为像素
    pub fn resolve(self, base: f32) -> f32 {
        match self {
            PositionValue::Absolute(px) => px as f32,
            PositionValue::Fraction(f) => f * base,
        }
    }
}

/// 锚点名称
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Top,
    Center,
    Bottom,
    Left,
    Right,
}

impl Anchor {
    pub fn fraction(self) -> f32 {
        match self {
            Anchor::Top | Anchor::Left => 0.0,
            Anchor::Center => 0.5,
            Anchor::Bottom | Anchor::Right => 1.0,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::from_str(s).ok()
    }
}

impl FromStr for Anchor {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "center" => Ok(Self::Center),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(()),
        }
    }
}

/// 具名位置
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NamedPosition {
    pub name: &'static str,
    pub xpos: PositionValue,
    pub xanchor: f32,
    pub ypos: PositionValue,
    pub yanchor: f32,
}

impl NamedPosition {
    /// 计算子元素左上角坐标
    pub fn place(&self, area: (f32, f32), child: (f32, f32)) -> (f32, f32) {
        let x = self.xpos.resolve(area.0) - self.xanchor * child.0;
        let y = self.ypos.resolve(area.1) - self.yanchor * child.1;
        (x, y)
    }
}

const fn position(
    name: &'static str,
    xpos: PositionValue,
    xanchor: f32,
    ypos: PositionValue,
    yanchor: f32,
) -> NamedPosition {
    NamedPosition {
        name,
        xpos,
        xanchor,
        ypos,
        yanchor,
    }
}

/// 默认位置表
pub const POSITIONS: &[NamedPosition] = &[
    position("left", Fraction(0.0), 0.0, Fraction(1.0), 1.0),
    position("right", Fraction(1.0), 1.0, Fraction(1.0), 1.0),
    position("center", Fraction(0.5), 0.5, Fraction(1.0), 1.0),
    position("truecenter", Fraction(0.5), 0.5, Fraction(0.5), 0.5),
    position("offscreenleft", Fraction(0.0), 1.0, Fraction(1.0), 1.0),
    position("offscreenright", Fraction(1.0), 0.0, Fraction(1.0), 1.0),
    position("top_left", Absolute(0), 0.0, Absolute(0), 0.0),
];

/// 按名称查找位置
pub fn position_named(name: &str) -> Option<&'static NamedPosition> {
    POSITIONS.iter().find(|p| p.name == name)
}

/// 过渡效果种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// 经由黑色淡出淡入
    Fade,
    /// 交叉溶解
    Dissolve,
    /// 像素化（需要扩展模块）
    Pixellate,
    /// 位置移动
    Move,
    /// 从屏幕边缘移入
    MoveIn(Anchor),
    /// 移出到屏幕边缘
    MoveOut(Anchor),
    /// 缩放进入
    ZoomIn,
    /// 缩放退出
    ZoomOut,
    /// 垂直震动
    VPunch,
    /// 水平震动
    HPunch,
}

/// 过渡效果描述
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransitionSpec {
    pub name: &'static str,
    pub kind: TransitionKind,
    /// 持续时间（秒）
    pub duration: f32,
}

const fn transition(name: &'static str, kind: TransitionKind, duration: f32) -> TransitionSpec {
    TransitionSpec {
        name,
        kind,
        duration,
    }
}

/// 默认过渡表
pub const TRANSITIONS: &[TransitionSpec] = &[
    transition("fade", TransitionKind::Fade, 1.0),
    transition("dissolve", TransitionKind::Dissolve, 0.5),
    transition("pixellate", TransitionKind::Pixellate, 1.0),
    transition("move", TransitionKind::Move, 0.5),
    transition("moveinleft", TransitionKind::MoveIn(Anchor::Left), 0.5),
    transition("moveinright", TransitionKind::MoveIn(Anchor::Right), 0.5),
    transition("moveoutleft", TransitionKind::MoveOut(Anchor::Left), 0.5),
    transition("moveoutright", TransitionKind::MoveOut(Anchor::Right), 0.5),
    transition("zoomin", TransitionKind::ZoomIn, 0.5),
    transition("zoomout", TransitionKind::ZoomOut, 0.5),
    transition("vpunch", TransitionKind::VPunch, 0.275),
    transition("hpunch", TransitionKind::HPunch, 0.275),
];

/// 按名称查找过渡效果
pub fn transition_named(name: &str) -> Option<&'static TransitionSpec> {
    TRANSITIONS.iter().find(|t| t.name == name)
}

/// 按名称查找，并按扩展模块能力降级
///
/// 模块不支持像素化时，`pixellate` 降级为同时长的溶解。
pub fn transition_for(name: &str, caps: ModuleCapabilities) -> Option<TransitionSpec> {
    let spec = *transition_named(name)?;
    if spec.kind == TransitionKind::Pixellate && !caps.can_pixellate {
        return Some(TransitionSpec {
            kind: TransitionKind::Dissolve,
            ..spec
        });
    }
    Some(spec)
}
