//! UI components for the TUI.
//!
//! # Component Organization
//!
//! - `religion_picker` - Religion cards and the selection confirmation panel
//! - `review` - Summary of the choices before finishing
//! - `help_popup` - Help overlay with keybindings

mod help_popup;
mod religion_picker;
mod review;

pub use help_popup::render_help_popup;
pub use religion_picker::render_religion_picker;
pub use review::render_review;

/// Wrap text to fit within width, breaking at spaces. Words longer than the
/// width are split by character.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut result = vec![];
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        if current_len > 0 && current_len + 1 + word.len() > width {
            result.push(std::mem::take(&mut current));
            current_len = 0;
        }

        while word.len() > width {
            let rest = word.split_off(width);
            if current_len > 0 {
                result.push(std::mem::take(&mut current));
                current_len = 0;
            }
            result.push(word.into_iter().collect());
            word = rest;
        }

        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += word.len();
        current.extend(word);
    }

    if !current.is_empty() || result.is_empty() {
        result.push(current);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_at_spaces() {
        assert_eq!(
            wrap_text("choose your religious faith", 12),
            vec!["choose your", "religious", "faith"]
        );
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap_text("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }
}
