use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    Light,
    #[default]
    Dark,
}

impl ColorMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other mode. Applying it twice gives back `self`.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown color mode {0:?}")]
pub struct UnknownColorMode(pub String);

impl FromStr for ColorMode {
    type Err = UnknownColorMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownColorMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_an_involution() {
        for mode in [ColorMode::Light, ColorMode::Dark] {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn default_is_dark() {
        assert_eq!(ColorMode::default(), ColorMode::Dark);
    }

    #[test]
    fn parses_stored_strings() {
        assert_eq!("light".parse::<ColorMode>(), Ok(ColorMode::Light));
        assert_eq!("dark".parse::<ColorMode>(), Ok(ColorMode::Dark));
        assert_eq!(" dark\n".parse::<ColorMode>(), Ok(ColorMode::Dark));
        assert!("Dark".parse::<ColorMode>().is_err());
        assert!("".parse::<ColorMode>().is_err());
    }

    #[test]
    fn stored_form_parses_back() {
        for mode in [ColorMode::Light, ColorMode::Dark] {
            assert_eq!(mode.to_string().parse::<ColorMode>(), Ok(mode));
        }
    }

    #[test]
    fn system_preference_maps_to_mode() {
        assert_eq!(ColorMode::from_prefers_dark(true), ColorMode::Dark);
        assert_eq!(ColorMode::from_prefers_dark(false), ColorMode::Light);
    }
}
