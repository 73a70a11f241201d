use ratatui::style::Color;

use sq_core::Virtue;

/// Accent colour for a hero's screens.
pub fn accent(profile_id: Option<&str>) -> Color {
    match profile_id {
        Some("francis") => Color::Green,
        Some("carlo") => Color::Blue,
        _ => Color::Yellow,
    }
}

/// Badge colour for a virtue.
pub fn virtue_color(virtue: Virtue) -> Color {
    match virtue {
        Virtue::Faith => Color::Yellow,
        Virtue::Mercy => Color::Magenta,
        Virtue::Courage => Color::Red,
        Virtue::Wisdom => Color::Cyan,
    }
}
