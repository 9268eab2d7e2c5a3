//! Flow-relative utility generators.
//!
//! One module per unit, each a pure function over the theme. Every physical
//! property is re-expressed through its logical (writing-mode-relative)
//! equivalent: `mbs` sets `margin-block-start`, never `margin-top`.

mod block_size;
mod border_color;
mod border_radius;
mod border_width;
mod caption_side;
mod divide_width;
mod gap;
mod inline_size;
mod inset;
mod margin;
mod overflow;
mod overscroll_behavior;
mod padding;
mod resize;
mod scroll_margin;
mod scroll_padding;
mod scroll_snap_type;
mod space;

pub use crate::block_size::block_size;
pub use crate::border_color::border_color;
pub use crate::border_radius::border_radius;
pub use crate::border_width::border_width;
pub use crate::caption_side::caption_side;
pub use crate::divide_width::divide_width;
pub use crate::gap::gap;
pub use crate::inline_size::inline_size;
pub use crate::inset::inset;
pub use crate::margin::margin;
pub use crate::overflow::overflow;
pub use crate::overscroll_behavior::overscroll_behavior;
pub use crate::padding::padding;
pub use crate::resize::resize;
pub use crate::scroll_margin::scroll_margin;
pub use crate::scroll_padding::scroll_padding;
pub use crate::scroll_snap_type::scroll_snap_type;
pub use crate::space::space;

use rules::Config;

/// Register every utility unit on a configuration, in declaration order.
pub fn install(config: Config) -> Config {
    config
        .unit("block-size", block_size)
        .unit("border-color", border_color)
        .unit("border-radius", border_radius)
        .unit("border-width", border_width)
        .unit("caption-side", caption_side)
        .unit("divide-width", divide_width)
        .unit("gap", gap)
        .unit("inline-size", inline_size)
        .unit("inset", inset)
        .unit("margin", margin)
        .unit("overflow", overflow)
        .unit("overscroll-behavior", overscroll_behavior)
        .unit("padding", padding)
        .unit("resize", resize)
        .unit("scroll-margin", scroll_margin)
        .unit("scroll-padding", scroll_padding)
        .unit("scroll-snap-type", scroll_snap_type)
        .unit("space", space)
}
