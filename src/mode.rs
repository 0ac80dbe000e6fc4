use crate::{ThemeColors, DARK_COLORS, LIGHT_COLORS};
use anyhow::{bail, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl Default for ThemeMode {
    fn default() -> Self { ThemeMode::Light }
}

impl ThemeMode {
    pub fn default_colors(self) -> &'static ThemeColors {
        match self {
            ThemeMode::Light => &LIGHT_COLORS,
            ThemeMode::Dark => &DARK_COLORS,
        }
    }

    /// The colors to use for this mode: `custom` if given and valid, the
    /// builtin ones otherwise.
    pub fn resolve(self, custom: Option<&ThemeColors>) -> ThemeColors {
        let colors = match custom {
            Some(custom) => custom.clone().or_fallback(self.default_colors()),
            None => self.default_colors().clone(),
        };
        debug!("using {} theme colors {:?}", self, colors);
        colors
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        })
    }
}

impl FromStr for ThemeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => bail!("unknown theme mode {:?}, expected \"light\" or \"dark\"", s),
        }
    }
}

#[cfg(test)]
mod test_mode {
    use super::*;

    fn init_logger() { let _ = env_logger::builder().is_test(true).try_init(); }

    #[test]
    fn test_default_colors() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.default_colors(), &LIGHT_COLORS);
        assert_eq!(ThemeMode::Dark.default_colors(), &DARK_COLORS);
    }

    #[test]
    fn test_resolve_without_custom() {
        init_logger();
        assert_eq!(ThemeMode::Dark.resolve(None), DARK_COLORS);
    }

    #[test]
    fn test_resolve_keeps_valid_custom() {
        init_logger();
        let custom = ThemeColors { primary: "#123456".into(), accent: "#ABCDEF".into() };
        assert_eq!(ThemeMode::Light.resolve(Some(&custom)), custom);
    }

    #[test]
    fn test_resolve_replaces_invalid_custom() {
        init_logger();
        let custom = ThemeColors { primary: "#123456".into(), accent: "abcdef".into() };
        assert_eq!(ThemeMode::Light.resolve(Some(&custom)), LIGHT_COLORS);
        assert_eq!(ThemeMode::Dark.resolve(Some(&custom)), DARK_COLORS);
    }

    #[test]
    fn test_parse() {
        assert_eq!("light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert_eq!("Dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert!("sepia".parse::<ThemeMode>().is_err());
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.to_string().parse::<ThemeMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        assert_eq!(serde_json::from_str::<ThemeMode>("\"light\"").unwrap(), ThemeMode::Light);
    }
}
