use druid::Selector;

use crate::data::Nav;

// Navigation

pub const NAVIGATE: Selector<Nav> = Selector::new("app.navigate");
pub const NAVIGATE_BACK: Selector = Selector::new("app.navigate-back");
