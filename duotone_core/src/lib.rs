pub mod color;
pub mod hex;
pub mod re_export;
pub mod settings;

/// items only for consumption by macros. no user code should depend directly on
/// this
pub mod _macro_api {
    pub use super::color::{rgb, Color};
}

pub use color::{parse_color, rgb, to_hex, Color};
pub use hex::{format_rgb8, is_hex_color, parse_rgb8};
pub use settings::ThemeColors;
