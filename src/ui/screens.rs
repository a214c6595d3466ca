use crate::models::Category;
use crate::view::SCROLL_VIEWPORT_ROWS;

/// The two screens of the app. Home hosts the rating form, Ratings shows the
/// grouped entries.
pub(crate) enum Screen {
    Home,
    Ratings(RatingsScreen),
}

impl Screen {
    pub(crate) fn title(&self) -> &'static str {
        match self {
            Screen::Home => "CineRate Pro",
            Screen::Ratings(_) => "Ratings",
        }
    }
}

/// Focus and scroll offsets for the ratings screen. Offsets only matter for
/// scrollable groups; static and empty groups always start at zero.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct RatingsScreen {
    pub(crate) focused: Category,
    offsets: [usize; 3],
}

impl RatingsScreen {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub(crate) fn focus_previous(&mut self) {
        self.focused = self.focused.previous();
    }

    pub(crate) fn offset(&self, category: Category) -> usize {
        self.offsets[category.index()]
    }

    /// Move the focused group's viewport by `step` cards, keeping a full
    /// viewport visible where possible.
    pub(crate) fn scroll(&mut self, step: isize, group_len: usize) {
        let max_offset = group_len.saturating_sub(SCROLL_VIEWPORT_ROWS) as isize;
        let offset = &mut self.offsets[self.focused.index()];
        *offset = (*offset as isize + step).clamp(0, max_offset) as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_clamps_to_last_full_viewport() {
        let mut screen = RatingsScreen::new();
        screen.focused = Category::Movie;
        screen.scroll(10, 5);
        assert_eq!(screen.offset(Category::Movie), 5 - SCROLL_VIEWPORT_ROWS);
        screen.scroll(-10, 5);
        assert_eq!(screen.offset(Category::Movie), 0);
        assert_eq!(screen.offset(Category::Anime), 0);
    }

    #[test]
    fn scroll_is_noop_for_short_groups() {
        let mut screen = RatingsScreen::new();
        screen.scroll(1, 1);
        assert_eq!(screen.offset(Category::Anime), 0);
    }

    #[test]
    fn focus_wraps() {
        let mut screen = RatingsScreen::new();
        screen.focus_previous();
        assert_eq!(screen.focused, Category::Show);
        screen.focus_next();
        assert_eq!(screen.focused, Category::Anime);
    }
}
