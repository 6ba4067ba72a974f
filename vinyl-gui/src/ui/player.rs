use std::sync::Arc;

use druid::{
    lens,
    widget::{CrossAxisAlignment, Flex, Label, LineBreaking, Maybe},
    LensExt, RoundedRectRadii, Widget, WidgetExt,
};

use crate::{
    data::{Album, AppState},
    ui::{album, theme},
    widget::icons,
};

/// Persistent bottom bar summarizing the currently relevant album.  Pure
/// projection of the app state; it performs no playback.
pub fn panel_widget() -> impl Widget<AppState> {
    Maybe::or_empty(mini_player_widget).lens(lens::Map::new(
        |state: &AppState| state.playing_album(),
        |_, _| (),
    ))
}

fn mini_player_widget() -> impl Widget<Arc<Album>> {
    let album_title = Label::raw()
        .with_font(theme::UI_FONT_MEDIUM)
        .with_line_break_mode(LineBreaking::Clip)
        .lens(Album::title.in_arc());

    let album_artist = Label::raw()
        .with_text_size(theme::TEXT_SIZE_SMALL)
        .with_text_color(theme::PLACEHOLDER_COLOR)
        .with_line_break_mode(LineBreaking::Clip)
        .lens(Album::artist.in_arc());

    let info = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(album_title)
        .with_spacer(theme::grid(0.25))
        .with_child(album_artist);

    Flex::row()
        .must_fill_main_axis(true)
        .with_child(album::rounded_cover_widget(theme::grid(6.0)))
        .with_default_spacer()
        .with_flex_child(info, 1.0)
        .with_child(icons::PLAY.scale((theme::grid(4.0), theme::grid(4.0))))
        .padding(theme::grid(1.0))
        .background(theme::CARD_COLOR)
        .rounded(RoundedRectRadii::from(theme::grid(1.5)))
        .padding(theme::grid(1.0))
}
