//! # 界面模块
//!
//! 默认菜单界面：主菜单、游戏菜单、确认对话、存档翻页、设置。
//! 每次显示时重新生成，不保存任何状态。

use crate::builder::UiBuilder;
use crate::context::AppContext;
use crate::entry::EntryPoint;
use crate::error::UiError;
use crate::keymap::InputAction;
use crate::style::{Role, StyleId};
use crate::widget::{
    ButtonSpec, ClickAction, LayoutHints, LayoutKey, LayoutValue, Screen,
};

/// 游戏菜单页面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMenuPage {
    #[default]
    Save,
    Load,
    Preferences,
}

impl GameMenuPage {
    fn label(self) -> &'static str {
        match self {
            GameMenuPage::Save => "_game_menu_save",
            GameMenuPage::Load => "_game_menu_load",
            GameMenuPage::Preferences => "_game_menu_preferences",
        }
    }
}

fn position(xpos: f64, ypos: f64) -> LayoutHints {
    LayoutHints::new()
        .with(LayoutKey::XPos, LayoutValue::Float(xpos))
        .with(LayoutKey::YPos, LayoutValue::Float(ypos))
}

/// 主菜单
///
/// 没有存档时"继续游戏"按钮禁用。
pub fn main_menu(ctx: &AppContext, has_saves: bool) -> Result<Screen, UiError> {
    let mut ui = UiBuilder::new();

    ui.window(Some(StyleId::named("mm_root_window")), LayoutHints::new());
    ui.vbox(None, position(0.9, 0.9));

    let items = [
        ("Start Game", ClickAction::jumps_out_of_context("start"), false),
        ("Continue Game", ClickAction::jumps("_load_latest"), !has_saves),
        ("Preferences", ClickAction::jumps("_main_menu_preferences"), false),
        ("Quit", ClickAction::jumps("_quit"), false),
    ];
    for (label, action, disabled) in items {
        ctx.render_button(
            &mut ui,
            ButtonSpec::new(label, Role::MainMenu)
                .disabled(disabled)
                .on_click(action),
        );
    }

    ui.close()?;
    ui.finish()
}

/// 游戏菜单
///
/// 当前页面对应的导航按钮处于选中状态。
pub fn game_menu(ctx: &AppContext, page: GameMenuPage) -> Result<Screen, UiError> {
    let mut ui = UiBuilder::new();

    ui.window(Some(StyleId::named("gm_root_window")), LayoutHints::new());
    ui.vbox(None, position(0.98, 0.98));

    ctx.render_button(
        &mut ui,
        ButtonSpec::new("Return", Role::GameMenuNav).on_click(ClickAction::returns("return")),
    );

    for (label, target) in [
        ("Save Game", GameMenuPage::Save),
        ("Load Game", GameMenuPage::Load),
        ("Preferences", GameMenuPage::Preferences),
    ] {
        ctx.render_button(
            &mut ui,
            ButtonSpec::new(label, Role::GameMenuNav)
                .selected(target == page)
                .on_click(ClickAction::jumps(target.label())),
        );
    }

    ctx.render_button(
        &mut ui,
        ButtonSpec::new("Skip Mode", Role::GameMenuNav)
            .selected(ctx.skip.is_active())
            .on_click(ClickAction::Invoke(InputAction::ToggleSkip)),
    );
    ctx.render_button(
        &mut ui,
        ButtonSpec::new("Main Menu", Role::GameMenuNav)
            .on_click(ClickAction::jumps_out_of_context("_main_menu")),
    );
    ctx.render_button(
        &mut ui,
        ButtonSpec::new("Quit", Role::GameMenuNav).on_click(ClickAction::jumps("_quit")),
    );

    ui.close()?;
    ui.finish()
}

/// 是/否确认
pub fn yesno_prompt(
    ctx: &AppContext,
    message: &str,
    yes: ClickAction,
    no: ClickAction,
) -> Result<Screen, UiError> {
    let mut ui = UiBuilder::new();

    ui.window(Some(StyleId::named("yesno_window")), LayoutHints::new());
    ui.vbox(None, position(0.5, 0.5));

    ctx.render_label(&mut ui, message, Role::YesNo, LayoutHints::new());

    ui.hbox(None, LayoutHints::new().with(LayoutKey::Spacing, LayoutValue::Int(100)));
    ctx.render_button(&mut ui, ButtonSpec::new("Yes", Role::YesNo).on_click(yes));
    ctx.render_button(&mut ui, ButtonSpec::new("No", Role::YesNo).on_click(no));
    ui.close()?;

    ui.close()?;
    ui.finish()
}

/// 存档页翻页导航
///
/// 第一页时"上一页"禁用，最后一页时"下一页"禁用。
pub fn file_picker_nav(ctx: &AppContext, page: usize, page_count: usize) -> Result<Screen, UiError> {
    let mut ui = UiBuilder::new();

    ui.hbox(None, position(0.5, 0.95));

    ctx.render_button(
        &mut ui,
        ButtonSpec::new("Previous", Role::FilePickerNav)
            .disabled(page == 0)
            .on_click(ClickAction::returns("previous")),
    );

    for index in 0..page_count {
        let label = (index + 1).to_string();
        ctx.render_button(
            &mut ui,
            ButtonSpec::new(label.clone(), Role::FilePickerNav)
                .selected(index == page)
                .on_click(ClickAction::returns(label)),
        );
    }

    ctx.render_button(
        &mut ui,
        ButtonSpec::new("Next", Role::FilePickerNav)
            .disabled(page.saturating_add(1) >= page_count)
            .on_click(ClickAction::returns("next")),
    );

    ui.close()?;
    ui.finish()
}

/// 设置中的一组选项
pub struct PreferenceGroup<'a> {
    pub title: &'a str,
    /// (选项文本, 是否为当前值, 点击动作)
    pub options: Vec<(&'a str, bool, ClickAction)>,
}

/// 设置界面
pub fn preferences(ctx: &AppContext, groups: &[PreferenceGroup<'_>]) -> Result<Screen, UiError> {
    let mut ui = UiBuilder::new();

    ui.hbox(None, position(0.5, 0.05));
    for group in groups {
        ui.vbox(None, LayoutHints::new());
        ctx.render_label(&mut ui, group.title, Role::Preferences, LayoutHints::new());
        for (label, current, action) in &group.options {
            ctx.render_button(
                &mut ui,
                ButtonSpec::new(*label, Role::Preferences)
                    .selected(*current)
                    .on_click(action.clone()),
            );
        }
        ui.close()?;
    }
    ui.close()?;

    ui.finish()
}

/// 默认的设置分组
pub fn default_preference_groups(ctx: &AppContext, fullscreen: bool) -> Vec<PreferenceGroup<'static>> {
    vec![
        PreferenceGroup {
            title: "Display",
            options: vec![
                ("Window", !fullscreen, ClickAction::Invoke(InputAction::ToggleFullscreen)),
                ("Fullscreen", fullscreen, ClickAction::Invoke(InputAction::ToggleFullscreen)),
            ],
        },
        PreferenceGroup {
            title: "Skip",
            options: vec![
                ("Off", !ctx.skip.is_active(), ClickAction::Invoke(InputAction::ToggleSkip)),
                ("On", ctx.skip.is_active(), ClickAction::Invoke(InputAction::ToggleSkip)),
            ],
        },
        PreferenceGroup {
            title: "Game Menu",
            options: vec![("Open", false, ClickAction::Call(EntryPoint::GameMenu))],
        },
    ]
}
