use crossterm::style::Color;

/// Design tokens for the Strata CLI.
///
/// Only these semantic colors and icons are used for output.
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
}

/// Success / error / warning icon for the terminal's charset.
pub fn icon(kind: IconKind, supports_unicode: bool) -> &'static str {
    match (kind, supports_unicode) {
        (IconKind::Success, true) => icons::SUCCESS,
        (IconKind::Error, true) => icons::ERROR,
        (IconKind::Warning, true) => icons::WARNING,
        (IconKind::Success, false) => icons_ascii::SUCCESS,
        (IconKind::Error, false) => icons_ascii::ERROR,
        (IconKind::Warning, false) => icons_ascii::WARNING,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Success,
    Error,
    Warning,
}
