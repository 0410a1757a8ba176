/// The page palette. Session scoped, starts dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Class strings each section reads instead of branching on the theme.
#[derive(Debug, PartialEq, Eq)]
pub struct ThemeTokens {
    pub page: &'static str,
    pub body: &'static str,
    pub muted: &'static str,
    pub footer: &'static str,
    pub card: &'static str,
    pub card_title: &'static str,
    pub chip: &'static str,
    pub button: &'static str,
    pub color_scheme: &'static str,
}

static DARK: ThemeTokens = ThemeTokens {
    page: "bg-gray-950 text-gray-100",
    body: "text-gray-300",
    muted: "text-gray-400",
    footer: "text-gray-500",
    card: "bg-gray-800",
    card_title: "text-white",
    chip: "bg-gray-700 text-gray-300",
    button: "bg-white text-black",
    color_scheme: "dark",
};

static LIGHT: ThemeTokens = ThemeTokens {
    page: "bg-white text-gray-900",
    body: "text-gray-700",
    muted: "text-gray-600",
    footer: "text-gray-700",
    card: "bg-gray-200",
    card_title: "text-gray-900",
    chip: "bg-gray-300 text-gray-800",
    button: "bg-gray-900 text-white",
    color_scheme: "light",
};

impl Theme {
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn tokens(self) -> &'static ThemeTokens {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Switch to light theme",
            Theme::Light => "Switch to dark theme",
        }
    }
}
