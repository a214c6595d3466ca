use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::view::{CategoryGroup, EntryCard, PresentationMode, SCROLL_VIEWPORT_ROWS};

/// Indent applied to the comment lines of a card.
const COMMENT_INDENT: &str = "  ";

/// Split `text` into pieces of at most `width` characters. Always yields at
/// least one (possibly empty) piece.
pub(crate) fn wrap_chars(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Render a card: the name (wrapped if needed) with the rating pushed to the
/// right edge of its last line, then the wrapped comment. When the rating
/// does not fit beside the name it gets a line of its own.
pub(crate) fn card_lines(card: &EntryCard<'_>, width: usize) -> Vec<Line<'static>> {
    let title_style = Style::default().add_modifier(Modifier::BOLD);
    let rating_style = Style::default().fg(Color::Yellow);
    let rating_len = card.rating_label.chars().count();

    let mut title_rows = wrap_chars(card.title, width);
    let last = title_rows.pop().unwrap_or_default();
    let mut lines: Vec<Line<'static>> = title_rows
        .into_iter()
        .map(|row| Line::from(Span::styled(row, title_style)))
        .collect();

    let last_len = last.chars().count();
    if last_len + 1 + rating_len <= width {
        let gap = width - last_len - rating_len;
        lines.push(Line::from(vec![
            Span::styled(last, title_style),
            Span::raw(" ".repeat(gap)),
            Span::styled(card.rating_label.clone(), rating_style),
        ]));
    } else {
        lines.push(Line::from(Span::styled(last, title_style)));
        let gap = width.saturating_sub(rating_len);
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(gap)),
            Span::styled(card.rating_label.clone(), rating_style),
        ]));
    }

    let comment_width = width.saturating_sub(COMMENT_INDENT.len());
    lines.extend(
        wrap_chars(card.comment_label, comment_width)
            .into_iter()
            .map(|row| {
                Line::from(Span::styled(
                    format!("{COMMENT_INDENT}{row}"),
                    Style::default().fg(Color::Gray),
                ))
            }),
    );
    lines
}

/// Inner height a section needs at `width`, excluding its border. Scrollable
/// groups get a fixed viewport tall enough for their tallest window of cards.
pub(crate) fn section_body_height(group: &CategoryGroup<'_>, width: usize) -> u16 {
    let heights: Vec<usize> = group
        .cards()
        .map(|card| card_lines(&card, width).len())
        .collect();
    let rows: usize = match group.mode {
        PresentationMode::Empty => 1,
        PresentationMode::Static => heights.iter().sum(),
        PresentationMode::Scrollable => heights
            .windows(SCROLL_VIEWPORT_ROWS.min(heights.len()).max(1))
            .map(|window| window.iter().sum::<usize>())
            .max()
            .unwrap_or_default(),
    };
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Lines for a section body, honoring the scroll offset for scrollable groups.
pub(crate) fn section_lines(
    group: &CategoryGroup<'_>,
    offset: usize,
    width: usize,
) -> Vec<Line<'static>> {
    let (skip, take) = match group.mode {
        PresentationMode::Empty => {
            return vec![Line::from(Span::styled(
                group.empty_message(),
                Style::default().fg(Color::DarkGray),
            ))];
        }
        PresentationMode::Static => (0, group.len()),
        PresentationMode::Scrollable => (offset, SCROLL_VIEWPORT_ROWS),
    };

    group
        .cards()
        .skip(skip)
        .take(take)
        .flat_map(|card| card_lines(&card, width))
        .collect()
}

/// Section title, with the visible window for scrollable groups.
pub(crate) fn section_title(group: &CategoryGroup<'_>, offset: usize) -> String {
    match group.mode {
        PresentationMode::Scrollable => {
            let end = (offset + SCROLL_VIEWPORT_ROWS).min(group.len());
            format!(
                " {} ({}-{} of {}) ",
                group.category.label(),
                offset + 1,
                end,
                group.len()
            )
        }
        _ => format!(" {} ", group.category.label()),
    }
}

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, EntryCandidate};
    use crate::store::EntryStore;
    use crate::view::build_groups;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn entry_lines(name: &str, rating: u8, comment: &str, width: usize) -> Vec<String> {
        let mut store = EntryStore::new();
        let entry = store
            .try_add(EntryCandidate::new(name, rating, comment, Category::Movie))
            .expect("valid");
        card_lines(&EntryCard::from_entry(&entry), width)
            .iter()
            .map(line_text)
            .collect()
    }

    #[test]
    fn scrollable_section_shows_window() {
        let mut store = EntryStore::new();
        for name in ["One", "Two", "Three", "Four"] {
            store
                .try_add(EntryCandidate::new(name, 5, "", Category::Movie))
                .expect("valid");
        }
        let groups = build_groups(store.entries());
        let movies = groups.get(Category::Movie);

        let lines = section_lines(movies, 1, 30);
        assert_eq!(lines.len(), SCROLL_VIEWPORT_ROWS * 2);
        assert!(line_text(&lines[0]).starts_with("Two"));
        assert_eq!(section_title(movies, 1), " Movie (2-3 of 4) ");
        assert_eq!(
            section_body_height(movies, 30),
            SCROLL_VIEWPORT_ROWS as u16 * 2
        );
    }

    #[test]
    fn empty_section_shows_placeholder() {
        let groups = build_groups(&[]);
        let lines = section_lines(groups.get(Category::Show), 0, 30);
        assert_eq!(line_text(&lines[0]), "No show rated yet.");
        assert_eq!(section_body_height(groups.get(Category::Show), 30), 1);
    }

    #[test]
    fn card_right_aligns_rating() {
        let lines = entry_lines("Heat", 9, "", 20);
        let expected = [
            format!("Heat{}9 / 10", " ".repeat(10)),
            "  No comment".to_string(),
        ];
        assert_eq!(lines, expected);
    }

    #[test]
    fn long_name_moves_rating_to_its_own_line() {
        let name = "n".repeat(36);
        let lines = entry_lines(&name, 7, "", 20);
        assert_eq!(lines[0], "n".repeat(20));
        assert_eq!(lines[1], "n".repeat(16));
        assert_eq!(lines[2], format!("{}7 / 10", " ".repeat(14)));
        assert!(lines.iter().all(|line| line.chars().count() <= 20));
    }

    #[test]
    fn long_comment_wraps_within_width() {
        let comment = "c".repeat(100);
        let lines = entry_lines("Heat", 9, &comment, 40);
        let comment_rows: Vec<&String> = lines.iter().skip(1).collect();
        assert_eq!(comment_rows.len(), 3);
        let shown: usize = comment_rows
            .iter()
            .map(|row| row.trim_start().chars().count())
            .sum();
        assert_eq!(shown, 100);
        assert!(lines.iter().all(|line| line.chars().count() <= 40));
    }

    #[test]
    fn wrap_chars_handles_empty_and_zero_width() {
        assert_eq!(wrap_chars("", 10), [String::new()]);
        assert_eq!(wrap_chars("abc", 0), ["a", "b", "c"]);
    }
}
