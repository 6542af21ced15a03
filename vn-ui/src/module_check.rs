//! # Module Check 模块
//!
//! 扩展模块版本检查。只做提示，不阻塞执行。

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::context::AppContext;
use crate::host::Host;

/// 像素化所需的最低版本
pub const PIXELLATE_VERSION: u32 = 4008002;
/// 颜色映射所需的最低版本
pub const MAP_VERSION: u32 = 4008005;
/// alpha 通道转换所需的最低版本
pub const MUNGE_VERSION: u32 = 4008007;

/// 检查结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModuleStatus {
    /// 警告已关闭，未检查
    Disabled,
    /// 未找到模块
    NotFound,
    /// 模块版本过旧
    Outdated { found: u32, required: u32 },
    /// 版本满足要求
    Ok,
}

impl ModuleStatus {
    /// 根据版本号判断状态
    pub fn evaluate(enabled: bool, found: u32, required: u32) -> Self {
        if !enabled {
            ModuleStatus::Disabled
        } else if found == 0 {
            ModuleStatus::NotFound
        } else if found < required {
            ModuleStatus::Outdated { found, required }
        } else {
            ModuleStatus::Ok
        }
    }

    /// 需要显示的对话框（标题, 内容）
    pub fn dialog(&self) -> Option<(&'static str, String)> {
        match self {
            ModuleStatus::Disabled | ModuleStatus::Ok => None,
            ModuleStatus::NotFound => Some((
                "Module Not Found",
                "The _renpy module could not be found. Please read module/README.txt for more information."
                    .to_string(),
            )),
            ModuleStatus::Outdated { found, required } => Some((
                "Old Module",
                format!(
                    "The _renpy module is out of date. The version found is {found}, while the version required is {required}. Please read module/README.txt for more information."
                ),
            )),
        }
    }
}

/// 执行模块检查
///
/// 警告关闭时不查询宿主。需要提示时，标题经过翻译表。
pub fn check_module(ctx: &AppContext, host: &mut dyn Host) -> ModuleStatus {
    if !ctx.config.module_warning {
        debug!("模块检查已关闭");
        return ModuleStatus::Disabled;
    }

    let found = host.module_version();
    let status = ModuleStatus::evaluate(true, found, ctx.config.required_module_version);

    if let Some((title, message)) = status.dialog() {
        warn!(found = found, required = ctx.config.required_module_version, "扩展模块不可用或版本过旧");
        host.show_dialog(ctx.translate(title), &message);
    }

    status
}

/// 扩展模块提供的可选能力
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModuleCapabilities {
    pub can_pixellate: bool,
    pub can_map: bool,
    pub can_munge: bool,
}

impl ModuleCapabilities {
    pub fn from_version(version: u32) -> Self {
        Self {
            can_pixellate: version >= PIXELLATE_VERSION,
            can_map: version >= MAP_VERSION,
            can_munge: version >= MUNGE_VERSION,
        }
    }
}
