use comfy_table::Color;

/// Table palette. Session-only; nothing about it is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn accent(self) -> Color {
        match self {
            Theme::Light => Color::Blue,
            Theme::Dark => Color::Cyan,
        }
    }

    pub fn muted(self) -> Color {
        match self {
            Theme::Light => Color::DarkGrey,
            Theme::Dark => Color::Grey,
        }
    }

    pub fn success(self) -> Color {
        match self {
            Theme::Light => Color::DarkGreen,
            Theme::Dark => Color::Green,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_use_distinct_accents() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_ne!(Theme::Light.accent(), Theme::Dark.accent());
        assert_ne!(Theme::Light.muted(), Theme::Dark.muted());
    }
}
