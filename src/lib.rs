pub mod mode;
pub mod theme;


pub use duotone_core::{color, hex, re_export, settings};
pub use duotone_macros::{color, hex_color};

pub use duotone_core::{Color, ThemeColors};
pub use mode::ThemeMode;
pub use theme::*;

/// items only for consumption by macros. no user code should depend directly on
/// this
pub mod _macro_api {
    pub use duotone_core::_macro_api::*;
}
