//! # Headless 模块
//!
//! 无窗口宿主：把所有宿主调用写入日志，输入来自预先给定的按键序列。

use std::collections::VecDeque;

use tracing::{error, info, warn};
use vn_ui::{AppContext, EntryOutcome, EntryPoint, Host, run_entry_point};

/// 无窗口宿主
#[derive(Debug, Default)]
pub struct HeadlessHost {
    module_version: u32,
    inputs: VecDeque<String>,
    fullscreen: bool,
    music: bool,
}

impl HeadlessHost {
    pub fn new(module_version: u32) -> Self {
        Self {
            module_version,
            music: true,
            ..Self::default()
        }
    }

    /// 追加按键
    pub fn push_input(&mut self, key: impl Into<String>) {
        self.inputs.push_back(key.into());
    }

    /// 取出下一个按键
    pub fn next_input(&mut self) -> Option<String> {
        self.inputs.pop_front()
    }
}

impl Host for HeadlessHost {
    fn rollback(&mut self) {
        info!("回滚");
    }

    fn screenshot(&mut self, filename: &str) {
        info!(filename = %filename, "截图");
    }

    fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        info!(fullscreen = self.fullscreen, "切换全屏");
    }

    fn toggle_music(&mut self) {
        self.music = !self.music;
        info!(music = self.music, "切换音乐");
    }

    fn play_sound(&mut self, name: &str) {
        info!(sound = %name, "播放音效");
    }

    fn restart_interaction(&mut self) {
        info!("重新开始交互");
    }

    fn call_in_new_context(&mut self, entry: EntryPoint, ctx: &mut AppContext) {
        match run_entry_point(entry, ctx, self) {
            Ok(EntryOutcome::GameMenu(screen)) => {
                let labels: Vec<_> = screen.buttons().into_iter().filter_map(|b| b.text()).collect();
                info!(entry = %entry, buttons = ?labels, "显示游戏菜单");
            }
            Ok(EntryOutcome::HideWindows(outcome)) => {
                info!(entry = %entry, outcome = ?outcome, "隐藏窗口结束");
            }
            Ok(EntryOutcome::ModuleCheck(status)) => {
                info!(entry = %entry, status = ?status, "模块检查结束");
            }
            Err(e) => {
                error!(entry = %entry, error = %e, "入口点运行失败");
            }
        }
    }

    fn launch_editor(&mut self) {
        info!("启动编辑器");
    }

    fn module_version(&self) -> u32 {
        self.module_version
    }

    fn show_dialog(&mut self, title: &str, message: &str) {
        warn!(title = %title, message = %message, "对话框");
    }

    fn wait_for_input(&mut self) -> Option<String> {
        let key = self.next_input();
        info!(key = ?key, "等待输入");
        key
    }
}
