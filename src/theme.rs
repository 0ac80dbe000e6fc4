use crate::ThemeColors;
use duotone_macros::hex_color;

pub const LIGHT_PRIMARY: &str = hex_color!("#7e4a3b");
pub const LIGHT_ACCENT: &str = hex_color!("#e45325");
pub const DARK_PRIMARY: &str = hex_color!("#ff5722");
pub const DARK_ACCENT: &str = hex_color!("#ff8a50");

pub static DARK_COLORS: ThemeColors = ThemeColors::new(DARK_PRIMARY, DARK_ACCENT);

pub static LIGHT_COLORS: ThemeColors = ThemeColors::new(LIGHT_PRIMARY, LIGHT_ACCENT);
