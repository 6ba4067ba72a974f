use std::sync::Arc;

use druid::{
    widget::{CrossAxisAlignment, Either, Flex, Label, Scroll, SizedBox},
    Env, RoundedRectRadii, Widget, WidgetExt, WindowDesc,
};

use crate::{
    cmd,
    controller::NavController,
    data::{AppState, Config, Nav},
    webapi::WebApi,
    widget::{icons, MyWidgetExt, ViewDispatcher},
};

pub mod album;
pub mod home;
pub mod player;
pub mod theme;
pub mod utils;

pub fn main_window(config: &Config, api: &Arc<WebApi>) -> WindowDesc<AppState> {
    WindowDesc::new(root_widget(api))
        .title(|state: &AppState, _: &Env| state.route.full_title())
        .window_size(config.window_size)
        .with_min_size((theme::grid(40.0), theme::grid(50.0)))
}

fn root_widget(api: &Arc<WebApi>) -> impl Widget<AppState> {
    let topbar = Flex::row()
        .with_child(back_button_widget())
        .with_default_spacer()
        .with_child(title_widget());

    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(topbar)
        .with_flex_child(route_widget(api), 1.0)
        .with_child(player::panel_widget())
        .controller(NavController)
}

fn route_widget(api: &Arc<WebApi>) -> impl Widget<AppState> {
    let api = api.clone();
    let switcher = ViewDispatcher::new(
        |state: &AppState, _| state.route.clone(),
        move |route: &Nav, _, _| match route {
            Nav::Home => home::home_widget(&api).boxed(),
            Nav::AlbumDetail(_) => album::detail_widget(&api).boxed(),
        },
    )
    .padding(theme::grid(1.0));

    Scroll::new(switcher).vertical().expand()
}

fn back_button_widget() -> impl Widget<AppState> {
    let icon_width = 10.0;
    let icon_height = theme::grid(2.0);
    let empty_icon = SizedBox::empty().width(icon_width).height(icon_height);
    let back_icon = icons::BACK
        .scale((icon_width, icon_height))
        .padding(theme::grid(1.0))
        .link()
        .rounded(RoundedRectRadii::from(theme::grid(0.5)))
        .on_click(|ctx, _state, _env| {
            ctx.submit_command(cmd::NAVIGATE_BACK);
        });
    Either::new(
        |state: &AppState, _| state.history.is_empty(),
        empty_icon,
        back_icon,
    )
    .padding(theme::grid(1.0))
}

fn title_widget() -> impl Widget<AppState> {
    Label::dynamic(|state: &AppState, _| state.route.title()).with_font(theme::UI_FONT_MEDIUM)
}
