//! # 宿主交互集成测试
//!
//! 测试 按键 → Keymap → Host / 入口点 → AppContext 的完整链路。
//! 使用记录调用的测试宿主，不依赖真实的渲染/音频设备。

use std::collections::VecDeque;

use vn_ui::{
    AppContext, ClickAction, Element, EntryOutcome, EntryPoint, GameMenuPage, Host, HideOutcome,
    InputAction, KeymapConfig, ModuleStatus, TranslationTable, UiConfig, run_entry_point, screens,
};

/// 宿主调用记录
#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Rollback,
    Screenshot(String),
    ToggleFullscreen,
    ToggleMusic,
    PlaySound(String),
    RestartInteraction,
    /// 入口点名称 + 进入时的上下文栈深度
    EnterContext(EntryPoint, usize),
    LaunchEditor,
    ShowDialog(String, String),
    WaitForInput,
}

/// 记录所有调用的测试宿主
#[derive(Default)]
struct RecordingHost {
    calls: Vec<Call>,
    module_version: u32,
    inputs: VecDeque<String>,
    outcomes: Vec<EntryOutcome>,
}

impl RecordingHost {
    fn with_module_version(version: u32) -> Self {
        Self {
            module_version: version,
            ..Self::default()
        }
    }
}

impl Host for RecordingHost {
    fn rollback(&mut self) {
        self.calls.push(Call::Rollback);
    }

    fn screenshot(&mut self, filename: &str) {
        self.calls.push(Call::Screenshot(filename.to_string()));
    }

    fn toggle_fullscreen(&mut self) {
        self.calls.push(Call::ToggleFullscreen);
    }

    fn toggle_music(&mut self) {
        self.calls.push(Call::ToggleMusic);
    }

    fn play_sound(&mut self, name: &str) {
        self.calls.push(Call::PlaySound(name.to_string()));
    }

    fn restart_interaction(&mut self) {
        self.calls.push(Call::RestartInteraction);
    }

    fn call_in_new_context(&mut self, entry: EntryPoint, ctx: &mut AppContext) {
        self.calls.push(Call::EnterContext(entry, ctx.contexts.depth()));
        let outcome = run_entry_point(entry, ctx, self).unwrap();
        self.outcomes.push(outcome);
    }

    fn launch_editor(&mut self) {
        self.calls.push(Call::LaunchEditor);
    }

    fn module_version(&self) -> u32 {
        self.module_version
    }

    fn show_dialog(&mut self, title: &str, message: &str) {
        self.calls
            .push(Call::ShowDialog(title.to_string(), message.to_string()));
    }

    fn wait_for_input(&mut self) -> Option<String> {
        self.calls.push(Call::WaitForInput);
        self.inputs.pop_front()
    }
}

fn setup_context(config: UiConfig) -> AppContext {
    let mut ctx = AppContext::new(config, TranslationTable::new());
    ctx.setup();
    ctx
}

/// 测试默认按键表中每个动作都分发到对应的宿主调用
#[test]
fn test_default_bindings_dispatch() {
    let mut ctx = setup_context(UiConfig::default());
    let mut host = RecordingHost::default();

    for key in ["K_PAGEUP", "mousedown_4", "s", "f", "m", "E"] {
        assert!(ctx.handle_key(key, &mut host), "key {key} not consumed");
    }

    assert_eq!(
        host.calls,
        vec![
            Call::Rollback,
            Call::Rollback,
            Call::Screenshot("screenshot.bmp".to_string()),
            Call::ToggleFullscreen,
            Call::ToggleMusic,
            Call::LaunchEditor,
        ]
    );
}

/// 测试未绑定的按键不被消费
#[test]
fn test_unbound_key_falls_through() {
    let mut ctx = setup_context(UiConfig::default());
    let mut host = RecordingHost::default();

    assert!(!ctx.handle_key("K_F12", &mut host));
    assert!(!ctx.handle_key("e", &mut host));
    assert!(host.calls.is_empty());
}

/// 测试未安装的按键表不消费任何按键
#[test]
fn test_uninstalled_keymap() {
    let mut ctx = AppContext::new(UiConfig::default(), TranslationTable::new());
    let mut host = RecordingHost::default();

    assert!(!ctx.handle_key("K_ESCAPE", &mut host));
    assert!(!ctx.handle_key("s", &mut host));
    assert!(host.calls.is_empty());
}

/// 测试截图使用配置的文件名
#[test]
fn test_screenshot_filename_from_config() {
    let config = UiConfig {
        screenshot_filename: "shots/capture.png".to_string(),
        ..UiConfig::default()
    };
    let mut ctx = setup_context(config);
    let mut host = RecordingHost::default();

    ctx.handle_key("s", &mut host);
    assert_eq!(
        host.calls,
        vec![Call::Screenshot("shots/capture.png".to_string())]
    );
}

/// 测试快进切换：状态翻转并立即重启交互
#[test]
fn test_toggle_skip_restarts_interaction() {
    let mut ctx = setup_context(UiConfig::default());
    let mut host = RecordingHost::default();

    assert!(ctx.render_overlays().is_empty());

    ctx.handle_key("K_TAB", &mut host);
    assert!(ctx.skip.is_active());
    assert_eq!(host.calls, vec![Call::RestartInteraction]);

    let overlays = ctx.render_overlays();
    assert_eq!(overlays.len(), 1);
    assert_eq!(overlays[0].text(), Some("Skip Mode"));

    ctx.handle_key("K_TAB", &mut host);
    assert!(!ctx.skip.is_active());
    assert!(ctx.render_overlays().is_empty());
}

/// 测试关闭快进提示后不显示提示层
#[test]
fn test_skip_indicator_disabled() {
    let config = UiConfig {
        skip_indicator: false,
        ..UiConfig::default()
    };
    let mut ctx = setup_context(config);
    let mut host = RecordingHost::default();

    ctx.handle_key("K_TAB", &mut host);
    assert!(ctx.skip.is_active());
    assert!(ctx.render_overlays().is_empty());
}

/// 测试游戏菜单：先播放音效，再进入新上下文，返回后栈恢复
#[test]
fn test_game_menu_sound_then_context() {
    let config = UiConfig {
        game_menu_sound: Some("sfx/menu_open.ogg".to_string()),
        ..UiConfig::default()
    };
    let mut ctx = setup_context(config);
    let mut host = RecordingHost::default();

    assert!(ctx.handle_key("K_ESCAPE", &mut host));

    assert_eq!(
        host.calls,
        vec![
            Call::PlaySound("sfx/menu_open.ogg".to_string()),
            Call::EnterContext(EntryPoint::GameMenu, 1),
        ]
    );
    assert_eq!(ctx.contexts.depth(), 0);

    let [EntryOutcome::GameMenu(screen)] = host.outcomes.as_slice() else {
        panic!("expected one game menu outcome, got {:?}", host.outcomes);
    };
    assert!(!screen.buttons().is_empty());
}

/// 测试没有配置音效时不播放
#[test]
fn test_game_menu_without_sound() {
    let mut ctx = setup_context(UiConfig::default());
    let mut host = RecordingHost::default();

    ctx.handle_key("mouseup_3", &mut host);
    assert_eq!(host.calls, vec![Call::EnterContext(EntryPoint::GameMenu, 1)]);
}

/// 测试隐藏窗口：等待一次输入后恢复，提示层随之恢复
#[test]
fn test_hide_windows_waits_for_input() {
    let mut ctx = setup_context(UiConfig::default());
    ctx.skip.set(true);
    assert_eq!(ctx.render_overlays().len(), 1);

    let mut host = RecordingHost {
        inputs: VecDeque::from(["K_RETURN".to_string()]),
        ..RecordingHost::default()
    };

    assert!(ctx.handle_key("h", &mut host));

    assert_eq!(
        host.calls,
        vec![
            Call::EnterContext(EntryPoint::HideWindows, 1),
            Call::WaitForInput,
        ]
    );
    assert_eq!(
        host.outcomes[0],
        EntryOutcome::HideWindows(HideOutcome::Restored {
            input: Some("K_RETURN".to_string())
        })
    );

    assert!(!ctx.windows_hidden);
    assert!(!ctx.suppress_overlay);
    assert_eq!(ctx.render_overlays().len(), 1);
}

/// 测试窗口已隐藏时再次隐藏直接返回，不等待输入
#[test]
fn test_hide_windows_is_idempotent() {
    let mut ctx = setup_context(UiConfig::default());
    let mut host = RecordingHost::default();
    ctx.windows_hidden = true;

    ctx.handle_key("mouseup_2", &mut host);

    assert_eq!(
        host.calls,
        vec![Call::EnterContext(EntryPoint::HideWindows, 1)]
    );
    assert_eq!(
        host.outcomes[0],
        EntryOutcome::HideWindows(HideOutcome::AlreadyHidden)
    );
    assert!(ctx.windows_hidden);
}

/// 测试输入源结束时窗口同样恢复
#[test]
fn test_hide_windows_without_input() {
    let mut ctx = setup_context(UiConfig::default());
    let mut host = RecordingHost::default();

    ctx.handle_key("h", &mut host);

    assert_eq!(
        host.outcomes[0],
        EntryOutcome::HideWindows(HideOutcome::Restored { input: None })
    );
    assert!(!ctx.windows_hidden);
}

/// 测试模块检查的各种版本
#[test]
fn test_module_check_versions() {
    let ctx = setup_context(UiConfig::default());
    let required = ctx.config.required_module_version;

    let mut host = RecordingHost::with_module_version(0);
    assert_eq!(ctx.check_module(&mut host), ModuleStatus::NotFound);
    assert!(matches!(
        host.calls.as_slice(),
        [Call::ShowDialog(title, _)] if title == "Module Not Found"
    ));

    let mut host = RecordingHost::with_module_version(1);
    assert_eq!(
        ctx.check_module(&mut host),
        ModuleStatus::Outdated { found: 1, required }
    );
    let [Call::ShowDialog(title, message)] = host.calls.as_slice() else {
        panic!("expected one dialog, got {:?}", host.calls);
    };
    assert_eq!(title, "Old Module");
    assert!(message.contains("The version found is 1"));

    for version in [required, required + 1] {
        let mut host = RecordingHost::with_module_version(version);
        assert_eq!(ctx.check_module(&mut host), ModuleStatus::Ok);
        assert!(host.calls.is_empty());
    }
}

/// 测试关闭模块警告时不显示任何对话框
#[test]
fn test_module_check_disabled() {
    let config = UiConfig {
        module_warning: false,
        ..UiConfig::default()
    };
    let ctx = setup_context(config);
    let mut host = RecordingHost::with_module_version(0);

    assert_eq!(ctx.check_module(&mut host), ModuleStatus::Disabled);
    assert!(host.calls.is_empty());
}

/// 测试模块检查对话框标题经过翻译
#[test]
fn test_module_check_translated_title() {
    let translations = TranslationTable::from_pairs([("Old Module", "模块过旧")]);
    let ctx = AppContext::new(UiConfig::default(), translations);
    let mut host = RecordingHost::with_module_version(1);

    ctx.check_module(&mut host);
    assert!(matches!(
        host.calls.as_slice(),
        [Call::ShowDialog(title, _)] if title == "模块过旧"
    ));
}

/// 测试模块检查作为入口点运行
#[test]
fn test_module_check_entry_point() {
    let mut ctx = setup_context(UiConfig::default());
    let mut host = RecordingHost::with_module_version(0);

    ctx.enter_context(EntryPoint::ModuleCheck, &mut host);

    assert_eq!(
        host.outcomes[0],
        EntryOutcome::ModuleCheck(ModuleStatus::NotFound)
    );
    assert_eq!(ctx.contexts.depth(), 0);
}

/// 测试自定义按键表
#[test]
fn test_custom_keymap() {
    let config = UiConfig {
        keymap: KeymapConfig {
            toggle_skip: vec!["K_LCTRL".to_string()],
            ..KeymapConfig::default()
        },
        ..UiConfig::default()
    };
    let mut ctx = setup_context(config);
    let mut host = RecordingHost::default();

    assert!(!ctx.handle_key("K_TAB", &mut host));
    assert!(ctx.handle_key("K_LCTRL", &mut host));
    assert!(ctx.skip.is_active());
}

/// 测试点击动作：按键动作与入口点在 UI 层内执行，脚本跳转交给宿主
#[test]
fn test_click_actions() {
    let mut ctx = setup_context(UiConfig::default());
    let mut host = RecordingHost::default();

    assert!(ctx.click(&ClickAction::Invoke(InputAction::ToggleSkip), &mut host));
    assert!(ctx.skip.is_active());

    assert!(ctx.click(&ClickAction::Call(EntryPoint::GameMenu), &mut host));
    assert_eq!(ctx.contexts.depth(), 0);

    assert!(!ctx.click(&ClickAction::returns("yes"), &mut host));
    assert!(!ctx.click(&ClickAction::jumps("_quit"), &mut host));
    assert!(!ctx.click(&ClickAction::jumps_out_of_context("_main_menu"), &mut host));

    assert_eq!(
        host.calls,
        vec![
            Call::RestartInteraction,
            Call::EnterContext(EntryPoint::GameMenu, 1),
        ]
    );
}

/// 测试点击游戏菜单中的"快进"按钮
#[test]
fn test_click_game_menu_skip_button() {
    let mut ctx = setup_context(UiConfig::default());
    let mut host = RecordingHost::default();

    let screen = screens::game_menu(&ctx, GameMenuPage::Save).unwrap();
    let action = screen
        .buttons()
        .into_iter()
        .find_map(|b| match b {
            Element::Button {
                text,
                action: Some(action),
                ..
            } if text == "Skip Mode" => Some(action.clone()),
            _ => None,
        })
        .unwrap();

    assert!(ctx.click(&action, &mut host));
    assert!(ctx.skip.is_active());
    assert_eq!(host.calls, vec![Call::RestartInteraction]);
}
