use super::ColorMode;

pub const PRIMARY: &str = "#764ba2";
pub const SECONDARY: &str = "#667eea";
pub const BRAND_GRADIENT: &str = "linear-gradient(135deg, #667eea 0%, #764ba2 100%)";
pub const SURFACE_TRANSITION: &str = "background-color 0.3s ease, color 0.3s ease";

/// Everything on the page that depends on the color mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub mode: ColorMode,
    pub background: &'static str,
    pub paper: &'static str,
    pub section_alt: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub divider: &'static str,
    pub hover: &'static str,
    pub app_bar: &'static str,
    pub chip: &'static str,
    pub shadow: &'static str,
}

impl Palette {
    pub const fn for_mode(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Dark => Self {
                mode,
                background: "#121212",
                paper: "#1e1e1e",
                section_alt: "#181818",
                text_primary: "#ffffff",
                text_secondary: "rgba(255, 255, 255, 0.7)",
                divider: "rgba(255, 255, 255, 0.12)",
                hover: "rgba(255, 255, 255, 0.08)",
                app_bar: "#272727",
                chip: "rgba(255, 255, 255, 0.16)",
                shadow: "rgba(0, 0, 0, 0.5)",
            },
            ColorMode::Light => Self {
                mode,
                background: "#ffffff",
                paper: "#ffffff",
                section_alt: "#f5f7fa",
                text_primary: "rgba(0, 0, 0, 0.87)",
                text_secondary: "rgba(0, 0, 0, 0.6)",
                divider: "rgba(0, 0, 0, 0.12)",
                hover: "rgba(0, 0, 0, 0.04)",
                app_bar: "#f5f5f5",
                chip: "rgba(0, 0, 0, 0.08)",
                shadow: "rgba(0, 0, 0, 0.2)",
            },
        }
    }

    /// Icon on the toggle button: it shows the mode a click switches to.
    pub const fn toggle_icon(&self) -> &'static str {
        match self.mode {
            ColorMode::Dark => "☀",
            ColorMode::Light => "☾",
        }
    }

    /// Custom properties consumed by the page stylesheet.
    pub fn css_variables(&self) -> String {
        format!(
            "--primary: {}; --secondary: {}; --bg: {}; --paper: {}; --section-alt: {}; \
             --text: {}; --text-secondary: {}; --divider: {}; --hover: {}; --app-bar: {}; \
             --chip: {}; --shadow: {}; color-scheme: {};",
            PRIMARY,
            SECONDARY,
            self.background,
            self.paper,
            self.section_alt,
            self.text_primary,
            self.text_secondary,
            self.divider,
            self.hover,
            self.app_bar,
            self.chip,
            self.shadow,
            self.mode,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backgrounds_follow_mode() {
        assert_eq!(Palette::for_mode(ColorMode::Dark).background, "#121212");
        assert_eq!(Palette::for_mode(ColorMode::Dark).paper, "#1e1e1e");
        assert_eq!(Palette::for_mode(ColorMode::Light).background, "#ffffff");
        assert_eq!(Palette::for_mode(ColorMode::Light).paper, "#ffffff");
    }

    #[test]
    fn toggle_icon_points_at_the_other_mode() {
        assert_eq!(Palette::for_mode(ColorMode::Dark).toggle_icon(), "☀");
        assert_eq!(Palette::for_mode(ColorMode::Light).toggle_icon(), "☾");
    }

    #[test]
    fn hover_matches_toggle_button_overlay() {
        assert_eq!(Palette::for_mode(ColorMode::Dark).hover, "rgba(255, 255, 255, 0.08)");
        assert_eq!(Palette::for_mode(ColorMode::Light).hover, "rgba(0, 0, 0, 0.04)");
    }

    #[test]
    fn css_variables_carry_mode_values() {
        let css = Palette::for_mode(ColorMode::Light).css_variables();
        assert!(css.contains("--bg: #ffffff;"));
        assert!(css.contains("--primary: #764ba2;"));
        assert!(css.contains("color-scheme: light;"));
        assert!(!css.contains("#121212"));
    }
}
