use std::sync::Arc;

use druid::{
    im::Vector,
    lens,
    widget::{CrossAxisAlignment, Flex, Label, List},
    Data, LensExt, Selector, Widget, WidgetExt,
};

use crate::{
    data::{self, Album, AppState, HomeState},
    ui::{
        album,
        theme,
        utils::{error_widget, spinner_widget},
    },
    webapi::WebApi,
    widget::{icons, Async, MyWidgetExt},
};

pub const LOAD_ALBUMS: Selector = Selector::new("app.home.load-albums");

pub fn home_widget(api: &Arc<WebApi>) -> impl Widget<AppState> {
    let api = api.clone();
    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(header_widget())
        .with_default_spacer()
        .with_child(
            Async::new(spinner_widget, loaded_widget, error_widget)
                .lens(AppState::home.then(HomeState::albums)),
        )
        .on_command_async(
            LOAD_ALBUMS,
            move |_| api.get_albums(),
            |_, data, d| data.home.albums.defer(d),
            |_, data, r| data.home.albums.update(r),
        )
}

fn header_widget() -> impl Widget<AppState> {
    let titles = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(
            Label::new("Vinyl")
                .with_font(theme::UI_FONT_MEDIUM)
                .with_text_size(theme::TEXT_SIZE_LARGE),
        )
        .with_child(
            Label::new("Your albums")
                .with_text_size(theme::TEXT_SIZE_SMALL)
                .with_text_color(theme::PLACEHOLDER_COLOR),
        );
    Flex::row()
        .must_fill_main_axis(true)
        .with_child(titles)
        .with_flex_spacer(1.0)
        .with_child(icons::SEARCH.scale(theme::ICON_SIZE))
        .padding(theme::grid(1.0))
}

fn loaded_widget() -> impl Widget<Vector<Arc<Album>>> {
    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(section_label_widget("Albums"))
        .with_default_spacer()
        .with_child(List::new(album::album_card_widget).with_spacing(theme::grid(1.0)))
        .with_spacer(theme::grid(3.0))
        .with_child(section_label_widget("Recently Played"))
        .with_default_spacer()
        .with_child(
            List::new(album::recently_played_widget)
                .with_spacing(theme::grid(1.0))
                .lens(lens::Map::new(data::recently_played, |_, _| ())),
        )
        .padding((theme::grid(1.0), 0.0))
}

fn section_label_widget<T: Data>(text: &str) -> impl Widget<T> {
    Label::new(text)
        .with_font(theme::UI_FONT_MEDIUM)
        .with_text_size(theme::TEXT_SIZE_LARGE)
}
