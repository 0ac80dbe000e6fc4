use crate::color::{parse_color, Color};
use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// The two colors making up a theme, stored as `#rrggbb` strings.
///
/// The builtin themes are `const` and borrow their strings, user provided
/// values (e.g. deserialized from the settings payload) own them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: Cow<'static, str>,
    pub accent: Cow<'static, str>,
}

impl ThemeColors {
    pub const fn new(primary: &'static str, accent: &'static str) -> Self {
        ThemeColors { primary: Cow::Borrowed(primary), accent: Cow::Borrowed(accent) }
    }

    pub fn primary_color(&self) -> Result<Color> {
        parse_color(&self.primary).context("invalid primary color")
    }
    pub fn accent_color(&self) -> Result<Color> {
        parse_color(&self.accent).context("invalid accent color")
    }

    pub fn validate(&self) -> Result<()> {
        self.primary_color()?;
        self.accent_color()?;
        Ok(())
    }

    /// Keeps `self` if both colors are valid, otherwise falls back.
    pub fn or_fallback(self, fallback: &ThemeColors) -> ThemeColors {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                warn!("discarding theme colors {:?}: {:#}", self, e);
                fallback.clone()
            }
        }
    }
}
