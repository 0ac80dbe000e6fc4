pub use palette;
pub use serde;

pub type Color = palette::Srgba;
