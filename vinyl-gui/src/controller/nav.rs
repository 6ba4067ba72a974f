use druid::widget::{prelude::*, Controller};

use crate::{
    cmd,
    data::{AppState, Nav},
    ui::{album, home},
};

pub struct NavController;

impl NavController {
    fn load_route_data(&self, ctx: &mut EventCtx, data: &mut AppState) {
        match &data.route {
            Nav::Home => {
                if !data.home.albums.is_resolved() {
                    ctx.submit_command(home::LOAD_ALBUMS);
                }
            }
            Nav::AlbumDetail(link) => {
                // Entering the detail screen always starts a fresh fetch,
                // even for an album that was shown before.
                ctx.submit_command(album::LOAD_DETAIL.with(link.to_owned()));
            }
        }
    }
}

impl<W> Controller<AppState, W> for NavController
where
    W: Widget<AppState>,
{
    fn event(
        &mut self,
        child: &mut W,
        ctx: &mut EventCtx,
        event: &Event,
        data: &mut AppState,
        env: &Env,
    ) {
        match event {
            Event::Command(cmd) if cmd.is(cmd::NAVIGATE) => {
                let nav = cmd.get_unchecked(cmd::NAVIGATE);
                data.navigate(nav);
                ctx.set_handled();
                self.load_route_data(ctx, data);
            }
            Event::Command(cmd) if cmd.is(cmd::NAVIGATE_BACK) => {
                data.navigate_back();
                ctx.set_handled();
                self.load_route_data(ctx, data);
            }
            _ => {
                child.event(ctx, event, data, env);
            }
        }
    }

    fn lifecycle(
        &mut self,
        child: &mut W,
        ctx: &mut LifeCycleCtx,
        event: &LifeCycle,
        data: &AppState,
        env: &Env,
    ) {
        if let LifeCycle::WidgetAdded = event {
            // The album list loads once at startup, before any navigation.
            ctx.submit_command(home::LOAD_ALBUMS);
            if let Some(route) = &data.config.last_route {
                ctx.submit_command(cmd::NAVIGATE.with(route.to_owned()));
            }
        }
        child.lifecycle(ctx, event, data, env)
    }
}
