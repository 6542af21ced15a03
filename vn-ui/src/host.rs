//! # Host 模块
//!
//! 宿主引擎向 UI 层提供的服务。
//!
//! ## 设计说明
//!
//! - 渲染合成、过渡数学、存读档、音画资源和脚本解释器都属于宿主
//! - UI 层只通过 [`Host`] 调用这些能力，不持有任何引擎类型
//! - 所有调用都在宿主的 UI 线程上同步发生

use crate::context::AppContext;
use crate::entry::EntryPoint;

/// 宿主引擎接口
pub trait Host {
    /// 回滚到上一个交互点
    fn rollback(&mut self);

    /// 截取当前帧并保存到指定文件
    fn screenshot(&mut self, filename: &str);

    /// 切换全屏
    fn toggle_fullscreen(&mut self);

    /// 切换音乐开关
    fn toggle_music(&mut self);

    /// 播放音效
    fn play_sound(&mut self, name: &str);

    /// 立即重新开始当前交互（不等待下一帧重绘）
    fn restart_interaction(&mut self);

    /// 在新的执行上下文中运行入口点
    ///
    /// 同步调用：入口点运行结束后才返回，调用方的上下文在此期间保留。
    /// 实现方通常调用 [`crate::entry::run_entry_point`]。
    fn call_in_new_context(&mut self, entry: EntryPoint, ctx: &mut AppContext);

    /// 启动外部编辑器
    fn launch_editor(&mut self);

    /// 扩展模块版本号，0 表示未找到
    fn module_version(&self) -> u32;

    /// 显示提示对话框
    fn show_dialog(&mut self, title: &str, message: &str);

    /// 等待下一个有效输入
    ///
    /// 返回按键名称；输入源已结束时返回 `None`。
    fn wait_for_input(&mut self) -> Option<String>;
}
