//! Picker trait definition
//!
//! A generic trait for keyboard navigation over a list of cards.

/// A generic picker trait for list navigation
///
/// The cursor marks which item is highlighted for the keyboard. It is
/// independent of what the user has actually chosen.
///
/// # Example
///
/// ```ignore
/// struct MyPicker {
///     items: Vec<String>,
///     cursor: usize,
/// }
///
/// impl Picker for MyPicker {
///     type Item = String;
///
///     fn items(&self) -> &[Self::Item] {
///         &self.items
///     }
///
///     fn cursor(&self) -> usize {
///         self.cursor
///     }
///
///     fn set_cursor(&mut self, index: usize) {
///         self.cursor = index;
///     }
/// }
/// ```
pub trait Picker {
    /// The type of items in the picker
    type Item;

    /// Get the list of items
    fn items(&self) -> &[Self::Item];

    /// Index of the highlighted item
    fn cursor(&self) -> usize;

    /// Move the highlight to `index`
    fn set_cursor(&mut self, index: usize);

    /// Get the number of items
    fn len(&self) -> usize {
        self.items().len()
    }

    /// Check if the picker is empty
    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Highlight the next item (wraps around)
    fn cursor_next(&mut self) {
        if !self.is_empty() {
            let next = (self.cursor() + 1) % self.len();
            self.set_cursor(next);
        }
    }

    /// Highlight the previous item (wraps around)
    fn cursor_prev(&mut self) {
        if !self.is_empty() {
            let prev = self.cursor().checked_sub(1).unwrap_or(self.len() - 1);
            self.set_cursor(prev);
        }
    }

    /// Move the highlight by `step` items, staying put if that would leave
    /// the list
    fn cursor_jump(&mut self, step: isize) {
        let target = self.cursor() as isize + step;
        if target >= 0 && (target as usize) < self.len() {
            self.set_cursor(target as usize);
        }
    }

    /// Get the highlighted item
    fn highlighted(&self) -> Option<&Self::Item> {
        self.items().get(self.cursor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Letters {
        items: Vec<char>,
        cursor: usize,
    }

    impl Picker for Letters {
        type Item = char;

        fn items(&self) -> &[char] {
            &self.items
        }

        fn cursor(&self) -> usize {
            self.cursor
        }

        fn set_cursor(&mut self, index: usize) {
            self.cursor = index;
        }
    }

    fn letters() -> Letters {
        Letters {
            items: vec!['a', 'b', 'c', 'd', 'e'],
            cursor: 0,
        }
    }

    #[test]
    fn test_wraps_both_ways() {
        let mut picker = letters();
        picker.cursor_prev();
        assert_eq!(picker.highlighted(), Some(&'e'));
        picker.cursor_next();
        assert_eq!(picker.highlighted(), Some(&'a'));
    }

    #[test]
    fn test_jump_stays_inside() {
        let mut picker = letters();
        picker.cursor_jump(3);
        assert_eq!(picker.cursor(), 3);
        picker.cursor_jump(3);
        assert_eq!(picker.cursor(), 3);
        picker.cursor_jump(-4);
        assert_eq!(picker.cursor(), 3);
        picker.cursor_jump(-3);
        assert_eq!(picker.cursor(), 0);
    }

    #[test]
    fn test_empty_picker_is_inert() {
        let mut picker = Letters {
            items: vec![],
            cursor: 0,
        };
        picker.cursor_next();
        picker.cursor_prev();
        assert_eq!(picker.highlighted(), None);
    }
}
