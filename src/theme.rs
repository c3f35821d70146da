use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colors the scene renderer needs for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub glass: &'static str,
    pub text: &'static str,
    pub star: &'static str,
    pub cloud: &'static str,
}

const LIGHT: Palette = Palette {
    primary: "#0071c5",
    glass: "#ffffff",
    text: "#1f2937",
    star: "#94a3b8",
    cloud: "#e2e8f0",
};

const DARK: Palette = Palette {
    primary: "#0284c7",
    glass: "#1f2937",
    text: "#e5e7eb",
    star: "#f8fafc",
    cloud: "#334155",
};

impl Theme {
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class for the page root; tailwind `dark:` variants key off it.
    pub fn root_class(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}
