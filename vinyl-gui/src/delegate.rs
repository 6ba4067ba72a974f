use std::sync::Arc;

use druid::{AppDelegate, Command, DelegateCtx, Env, Handled, Target, WindowId};
use threadpool::ThreadPool;

use crate::{data::AppState, webapi::WebApi, widget::remote_image};

pub struct Delegate {
    main_window: Option<WindowId>,
    image_pool: ThreadPool,
    api: Arc<WebApi>,
}

impl Delegate {
    pub fn with_main(main_window: WindowId, api: Arc<WebApi>) -> Self {
        const MAX_IMAGE_THREADS: usize = 8;

        Self {
            main_window: Some(main_window),
            image_pool: ThreadPool::with_name("image_loading".into(), MAX_IMAGE_THREADS),
            api,
        }
    }
}

impl AppDelegate<AppState> for Delegate {
    fn command(
        &mut self,
        ctx: &mut DelegateCtx,
        target: Target,
        cmd: &Command,
        data: &mut AppState,
        _env: &Env,
    ) -> Handled {
        self.command_image(ctx, target, cmd, data)
    }

    fn window_removed(
        &mut self,
        id: WindowId,
        data: &mut AppState,
        _env: &Env,
        _ctx: &mut DelegateCtx,
    ) {
        if self.main_window == Some(id) {
            self.main_window.take();
            data.config.save();
        }
    }
}

impl Delegate {
    fn command_image(
        &mut self,
        ctx: &mut DelegateCtx,
        target: Target,
        cmd: &Command,
        _data: &mut AppState,
    ) -> Handled {
        if let Some(location) = cmd.get(remote_image::REQUEST_DATA).cloned() {
            let sink = ctx.get_external_handle();
            if let Some(image_buf) = self.api.get_cached_image(&location) {
                let payload = remote_image::ImagePayload {
                    location,
                    image_buf,
                };
                sink.submit_command(remote_image::PROVIDE_DATA, payload, target)
                    .unwrap();
            } else {
                let api = self.api.clone();
                self.image_pool.execute(move || match api.get_image(location.clone()) {
                    Ok(image_buf) => {
                        let payload = remote_image::ImagePayload {
                            location,
                            image_buf,
                        };
                        sink.submit_command(remote_image::PROVIDE_DATA, payload, target)
                            .unwrap();
                    }
                    Err(err) => {
                        log::warn!("failed to load image {}: {}", location, err);
                    }
                });
            }
            Handled::Yes
        } else {
            Handled::No
        }
    }
}
