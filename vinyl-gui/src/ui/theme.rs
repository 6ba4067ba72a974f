pub use druid::theme::*;
use druid::{Color, Env, FontDescriptor, FontFamily, FontWeight, Key};

use crate::{
    data::{AppState, Theme},
    widget::icons,
};

pub fn grid(m: f64) -> f64 {
    GRID * m
}

pub const GRID: f64 = 8.0;

pub const ICON_SIZE: (f64, f64) = (GRID * 2.0, GRID * 2.0);

pub const WHITE: Color = Color::WHITE;
pub const BLACK: Color = Color::BLACK;
pub const PURPLE: Color = Color::rgb8(0x6a, 0x3a, 0x9f);
pub const PURPLE_LIGHT: Color = Color::rgb8(0x8b, 0x5c, 0xc4);
pub const DARK_900: Color = Color::grey8(0x14);
pub const DARK_800: Color = Color::grey8(0x1e);
pub const DARK_700: Color = Color::grey8(0x2e);

pub const UI_FONT_MEDIUM: Key<FontDescriptor> = Key::new("app.ui-font-medium");
pub const TEXT_SIZE_SMALL: Key<f64> = Key::new("app.text-size-small");

pub const GREY_400: Key<Color> = Key::new("app.grey-400");
pub const GREY_500: Key<Color> = Key::new("app.grey-500");

pub const LINK_HOT_COLOR: Key<Color> = Key::new("app.link-hot-color");
pub const LINK_COLD_COLOR: Key<Color> = Key::new("app.link-cold-color");

pub const CARD_COLOR: Key<Color> = Key::new("app.card-color");

pub fn setup(env: &mut Env, state: &AppState) {
    match state.config.theme {
        Theme::Dark => setup_dark(env),
        Theme::Light => setup_light(env),
    }
    setup_common(env);
}

fn setup_dark(env: &mut Env) {
    env.set(WINDOW_BACKGROUND_COLOR, DARK_800);
    env.set(TEXT_COLOR, WHITE);
    env.set(icons::ICON_COLOR, WHITE);
    env.set(PLACEHOLDER_COLOR, Color::grey8(0xa0));
    env.set(PRIMARY_LIGHT, PURPLE_LIGHT);
    env.set(PRIMARY_DARK, PURPLE);

    env.set(BACKGROUND_LIGHT, DARK_700);
    env.set(BACKGROUND_DARK, DARK_900);
    env.set(FOREGROUND_LIGHT, WHITE);
    env.set(FOREGROUND_DARK, Color::grey8(0xd0));

    env.set(BUTTON_DARK, PURPLE);
    env.set(BUTTON_LIGHT, PURPLE_LIGHT);

    env.set(BORDER_DARK, Color::grey8(0x33));
    env.set(BORDER_LIGHT, Color::grey8(0x44));

    env.set(CURSOR_COLOR, WHITE);

    env.set(GREY_400, Color::grey8(0xbd));
    env.set(GREY_500, Color::grey8(0x62));

    env.set(LINK_HOT_COLOR, Color::rgba(1.0, 1.0, 1.0, 0.06));
    env.set(LINK_COLD_COLOR, Color::rgba(1.0, 1.0, 1.0, 0.0));

    env.set(CARD_COLOR, Color::rgba(1.0, 1.0, 1.0, 0.1));
}

fn setup_light(env: &mut Env) {
    env.set(WINDOW_BACKGROUND_COLOR, WHITE);
    env.set(TEXT_COLOR, Color::grey8(0x21));
    env.set(icons::ICON_COLOR, Color::grey8(0x21));
    env.set(PLACEHOLDER_COLOR, Color::grey8(0x82));
    env.set(PRIMARY_LIGHT, PURPLE_LIGHT);
    env.set(PRIMARY_DARK, PURPLE);

    env.set(BACKGROUND_LIGHT, WHITE);
    env.set(BACKGROUND_DARK, Color::grey8(0xf2));
    env.set(FOREGROUND_LIGHT, Color::grey8(0x21));
    env.set(FOREGROUND_DARK, BLACK);

    env.set(BUTTON_DARK, PURPLE);
    env.set(BUTTON_LIGHT, PURPLE_LIGHT);

    env.set(BORDER_DARK, Color::grey8(0xe0));
    env.set(BORDER_LIGHT, Color::grey8(0xf2));

    env.set(CURSOR_COLOR, BLACK);

    env.set(GREY_400, Color::grey8(0x82));
    env.set(GREY_500, Color::grey8(0xbd));

    env.set(LINK_HOT_COLOR, Color::rgba(0.0, 0.0, 0.0, 0.05));
    env.set(LINK_COLD_COLOR, Color::rgba(0.0, 0.0, 0.0, 0.0));

    env.set(CARD_COLOR, Color::rgba(0.0, 0.0, 0.0, 0.08));
}

fn setup_common(env: &mut Env) {
    env.set(
        UI_FONT,
        FontDescriptor::new(FontFamily::SYSTEM_UI).with_size(14.0),
    );
    env.set(
        UI_FONT_MEDIUM,
        FontDescriptor::new(FontFamily::SYSTEM_UI)
            .with_size(14.0)
            .with_weight(FontWeight::MEDIUM),
    );
    env.set(TEXT_SIZE_SMALL, 12.0);
    env.set(TEXT_SIZE_NORMAL, 14.0);
    env.set(TEXT_SIZE_LARGE, 18.0);

    env.set(BUTTON_BORDER_RADIUS, 4.0);
    env.set(BUTTON_BORDER_WIDTH, 1.0);
    env.set(BASIC_WIDGET_HEIGHT, grid(3.0));

    env.set(SCROLLBAR_COLOR, Color::grey8(0xff));
    env.set(SCROLLBAR_BORDER_COLOR, Color::grey8(0x77));
    env.set(SCROLLBAR_MAX_OPACITY, 0.7);
    env.set(SCROLLBAR_FADE_DELAY, 1500u64);
    env.set(SCROLLBAR_WIDTH, 8.0);
    env.set(SCROLLBAR_PAD, 2.0);
    env.set(SCROLLBAR_RADIUS, 5.0);
    env.set(SCROLLBAR_EDGE_WIDTH, 1.0);

    env.set(WIDGET_PADDING_VERTICAL, grid(1.0));
    env.set(WIDGET_PADDING_HORIZONTAL, grid(1.0));
}
