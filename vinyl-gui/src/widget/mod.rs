mod dispatcher;
pub mod icons;
mod link;
mod promise;
pub mod remote_image;
mod utils;

use std::sync::Arc;

use druid::{Data, EventCtx, Selector, Widget};

pub use dispatcher::ViewDispatcher;
pub use link::Link;
pub use promise::Async;
pub use remote_image::RemoteImage;
pub use utils::Clip;

use crate::controller::OnCmdAsync;

pub trait MyWidgetExt<T: Data>: Widget<T> + Sized + 'static {
    fn link(self) -> Link<T> {
        Link::new(self)
    }

    fn on_command_async<U, V>(
        self,
        selector: Selector<U>,
        request: impl Fn(U) -> V + Sync + Send + 'static,
        preflight: impl Fn(&mut EventCtx, &mut T, U) + 'static,
        response: impl Fn(&mut EventCtx, &mut T, (U, V)) + 'static,
    ) -> OnCmdAsync<Self, T, U, V>
    where
        U: Send + Clone + 'static,
        V: Send + 'static,
    {
        OnCmdAsync::new(
            self,
            selector,
            Box::new(preflight),
            Arc::new(request),
            Box::new(response),
        )
    }
}

impl<T: Data, W: Widget<T> + 'static> MyWidgetExt<T> for W {}
