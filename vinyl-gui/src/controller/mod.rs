mod nav;
mod on_cmd_async;

pub use nav::NavController;
pub use on_cmd_async::OnCmdAsync;
