//! Layout component generators (the `el-*` set) and the heroicon loader.
//!
//! The `el-*` components are the "every layout" primitives: small composable
//! flex/grid recipes parameterized over one theme scale each. They differ
//! from the utility units only in ambition; the mechanics (pure function
//! over the theme, nested `&` blocks for child selectors) are identical.

mod el_box;
mod el_center;
mod el_cluster;
mod el_cover;
mod el_frame;
mod el_grid;
mod el_icon;
mod el_imposter;
mod el_reel;
mod el_sidebar;
mod el_stack;
mod el_switcher;
mod heroicons;

pub use crate::el_box::el_box;
pub use crate::el_center::el_center;
pub use crate::el_cluster::el_cluster;
pub use crate::el_cover::el_cover;
pub use crate::el_frame::el_frame;
pub use crate::el_grid::el_grid;
pub use crate::el_icon::el_icon;
pub use crate::el_imposter::el_imposter;
pub use crate::el_reel::el_reel;
pub use crate::el_sidebar::el_sidebar;
pub use crate::el_stack::el_stack;
pub use crate::el_switcher::el_switcher;
pub use crate::heroicons::heroicons;

use rules::Config;

/// Register every component unit on a configuration, in declaration order.
/// The heroicon unit is registered separately since it needs an asset root.
pub fn install(config: Config) -> Config {
    config
        .unit("el-box", el_box)
        .unit("el-center", el_center)
        .unit("el-cluster", el_cluster)
        .unit("el-cover", el_cover)
        .unit("el-frame", el_frame)
        .unit("el-grid", el_grid)
        .unit("el-icon", el_icon)
        .unit("el-imposter", el_imposter)
        .unit("el-reel", el_reel)
        .unit("el-sidebar", el_sidebar)
        .unit("el-stack", el_stack)
        .unit("el-switcher", el_switcher)
}
