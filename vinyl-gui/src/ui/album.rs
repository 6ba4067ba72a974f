use std::sync::Arc;

use druid::{
    lens,
    widget::{CrossAxisAlignment, Flex, Label, LineBreaking, List},
    Data, LensExt, RoundedRectRadii, Selector, Size, Widget, WidgetExt,
};

use crate::{
    cmd,
    data::{track_slots, Album, AlbumDetail, AlbumLink, AppState, Nav, TrackSlot},
    ui::{
        theme,
        utils::{error_widget, placeholder_widget, spinner_widget},
    },
    webapi::WebApi,
    widget::{icons, Async, Clip, MyWidgetExt, RemoteImage},
};

pub const LOAD_DETAIL: Selector<AlbumLink> = Selector::new("app.album.load-detail");

pub fn detail_widget(api: &Arc<WebApi>) -> impl Widget<AppState> {
    let api = api.clone();
    Async::new(spinner_widget, loaded_detail_widget, error_widget)
        .lens(AppState::album_detail.then(AlbumDetail::album))
        .on_command_async(
            LOAD_DETAIL,
            move |link: AlbumLink| api.get_album(&link.id),
            |_, data, d| data.album_detail.album.defer(d),
            |_, data, r| data.album_detail.album.update(r),
        )
}

fn loaded_detail_widget() -> impl Widget<Arc<Album>> {
    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(header_widget())
        .with_default_spacer()
        .with_child(about_widget())
        .with_default_spacer()
        .with_child(artist_chip_widget())
        .with_spacer(theme::grid(2.0))
        .with_child(List::new(track_widget).lens(lens::Map::new(track_slots, |_, _| ())))
}

fn header_widget() -> impl Widget<Arc<Album>> {
    let album_title = Label::raw()
        .with_font(theme::UI_FONT_MEDIUM)
        .with_text_size(theme::TEXT_SIZE_LARGE)
        .with_line_break_mode(LineBreaking::WordWrap)
        .lens(Album::title.in_arc());

    let album_artist = Label::raw()
        .with_text_color(theme::PLACEHOLDER_COLOR)
        .lens(Album::artist.in_arc());

    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(rounded_cover_widget(theme::grid(20.0)))
        .with_default_spacer()
        .with_child(album_title)
        .with_spacer(theme::grid(0.5))
        .with_child(album_artist)
        .with_default_spacer()
        .with_child(play_button_widget())
        .padding(theme::grid(1.0))
}

fn play_button_widget<T: Data>() -> impl Widget<T> {
    Flex::row()
        .with_child(icons::PLAY.scale(theme::ICON_SIZE).with_color(theme::WHITE))
        .with_default_spacer()
        .with_child(
            Label::new("Play")
                .with_font(theme::UI_FONT_MEDIUM)
                .with_text_color(theme::WHITE),
        )
        .padding((theme::grid(2.0), theme::grid(1.0)))
        .background(theme::PRIMARY_DARK)
        .rounded(RoundedRectRadii::from(f64::INFINITY))
}

fn about_widget() -> impl Widget<Arc<Album>> {
    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(Label::new("About this album").with_font(theme::UI_FONT_MEDIUM))
        .with_default_spacer()
        .with_child(
            Label::dynamic(|album: &Arc<Album>, _| album.about().to_string())
                .with_line_break_mode(LineBreaking::WordWrap)
                .with_text_size(theme::TEXT_SIZE_SMALL),
        )
        .padding(theme::grid(2.0))
        .background(theme::CARD_COLOR)
        .rounded(RoundedRectRadii::from(theme::grid(1.0)))
        .padding((theme::grid(1.0), 0.0))
}

fn artist_chip_widget() -> impl Widget<Arc<Album>> {
    Label::dynamic(|album: &Arc<Album>, _| format!("Artist: {}", album.artist))
        .with_text_size(theme::TEXT_SIZE_SMALL)
        .padding((theme::grid(1.5), theme::grid(0.75)))
        .background(theme::CARD_COLOR)
        .rounded(RoundedRectRadii::from(f64::INFINITY))
        .padding((theme::grid(1.0), 0.0))
}

// The API serves no track listing, so the detail screen renders a fixed
// set of placeholder rows derived from the album.
fn track_widget() -> impl Widget<TrackSlot> {
    let cover = Clip::new(
        Size::new(theme::grid(6.0), theme::grid(6.0)).to_rounded_rect(4.0),
        RemoteImage::new(placeholder_widget(), |slot: &TrackSlot, _| {
            Some(slot.album.cover_url.clone())
        })
        .fix_size(theme::grid(6.0), theme::grid(6.0)),
    );

    let title = Label::dynamic(|slot: &TrackSlot, _| {
        format!("{} • Track {}", slot.album.title, slot.number)
    })
    .with_line_break_mode(LineBreaking::Clip);

    let artist = Label::dynamic(|slot: &TrackSlot, _| slot.album.artist.to_string())
        .with_text_size(theme::TEXT_SIZE_SMALL)
        .with_text_color(theme::PLACEHOLDER_COLOR);

    let info = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(title)
        .with_spacer(theme::grid(0.25))
        .with_child(artist);

    Flex::row()
        .with_child(cover)
        .with_default_spacer()
        .with_flex_child(info, 1.0)
        .padding((theme::grid(1.0), theme::grid(0.5)))
}

pub fn album_card_widget() -> impl Widget<Arc<Album>> {
    let album_title = Label::raw()
        .with_font(theme::UI_FONT_MEDIUM)
        .with_line_break_mode(LineBreaking::Clip)
        .lens(Album::title.in_arc());

    let album_artist = Label::raw()
        .with_text_size(theme::TEXT_SIZE_SMALL)
        .with_text_color(theme::PLACEHOLDER_COLOR)
        .with_line_break_mode(LineBreaking::Clip)
        .lens(Album::artist.in_arc());

    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(rounded_cover_widget(theme::grid(16.0)))
        .with_default_spacer()
        .with_child(album_title)
        .with_spacer(theme::grid(0.25))
        .with_child(album_artist)
        .padding(theme::grid(1.0))
        .link()
        .rounded(RoundedRectRadii::from(theme::grid(1.0)))
        .on_click(open_album)
}

pub fn recently_played_widget() -> impl Widget<Arc<Album>> {
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
        .with_child(rounded_cover_widget(theme::grid(6.0)))
        .with_default_spacer()
        .with_flex_child(info, 1.0)
        .padding(theme::grid(1.0))
        .link()
        .rounded(RoundedRectRadii::from(theme::grid(1.0)))
        .on_click(open_album)
}

fn open_album(ctx: &mut druid::EventCtx, album: &mut Arc<Album>, _env: &druid::Env) {
    ctx.submit_command(cmd::NAVIGATE.with(Nav::AlbumDetail(album.link())));
}

fn cover_widget(size: f64) -> impl Widget<Arc<Album>> {
    RemoteImage::new(placeholder_widget(), move |album: &Arc<Album>, _| {
        Some(album.cover_url.clone())
    })
    .fix_size(size, size)
}

pub fn rounded_cover_widget(size: f64) -> impl Widget<Arc<Album>> {
    Clip::new(
        Size::new(size, size).to_rounded_rect(4.0),
        cover_widget(size),
    )
}
