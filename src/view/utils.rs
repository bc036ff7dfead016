//! Utility functions for rendering UI components

use ratatui::style::{Color, Modifier, Style};

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_width)
    } else {
        format!("{:<width$}", s, width = max_width)
    }
}

/// Style for a list row, highlighting the cursor and the playing item
pub fn row_style(is_selected: bool, is_playing: bool) -> Style {
    if is_selected {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else if is_playing {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    }
}

/// Five-star rating bar, e.g. "★★★★☆ 4.5"
pub fn rating_stars(rating: f64) -> String {
    let full = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{} {:.1}", "★".repeat(full), "☆".repeat(5 - full), rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_with_ellipsis_and_pads() {
        assert_eq!(truncate_string("Naija Stories", 8), "Naija...");
        assert_eq!(truncate_string("Lagos", 8), "Lagos   ");
    }

    #[test]
    fn stars_round_to_nearest() {
        assert_eq!(rating_stars(4.5), "★★★★★ 4.5");
        assert_eq!(rating_stars(4.4), "★★★★☆ 4.4");
        assert_eq!(rating_stars(0.0), "☆☆☆☆☆ 0.0");
    }
}
