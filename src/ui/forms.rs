use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::{
    Category, EntryCandidate, MAX_COMMENT_CHARS, MAX_RATING, MIN_RATING, UNSET_RATING,
};

/// Transient state of the rating form on the home screen.
#[derive(Default, Clone)]
pub(crate) struct EntryForm {
    pub(crate) category: Category,
    pub(crate) name: String,
    pub(crate) rating: u8,
    pub(crate) comment: String,
    pub(crate) active: EntryField,
}

/// Fields in focus order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum EntryField {
    Category,
    Name,
    Rating,
    Comment,
}

impl Default for EntryField {
    fn default() -> Self {
        EntryField::Name
    }
}

impl EntryField {
    const ORDER: [EntryField; 4] = [
        EntryField::Category,
        EntryField::Name,
        EntryField::Rating,
        EntryField::Comment,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|field| *field == self)
            .unwrap_or_default()
    }

    fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn previous(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

impl EntryForm {
    pub(crate) fn next_field(&mut self) {
        self.active = self.active.next();
    }

    pub(crate) fn previous_field(&mut self) {
        self.active = self.active.previous();
    }

    /// Apply a typed character to the active field. Returns `false` when the
    /// field refused it.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        match self.active {
            EntryField::Category => false,
            EntryField::Name => {
                if ch.is_control() {
                    return false;
                }
                self.name.push(ch);
                true
            }
            EntryField::Rating => match ch.to_digit(10) {
                Some(0) => {
                    self.rating = MAX_RATING;
                    true
                }
                Some(digit) => {
                    self.rating = digit as u8;
                    true
                }
                None => false,
            },
            EntryField::Comment => {
                if ch.is_control() || self.comment.chars().count() >= MAX_COMMENT_CHARS {
                    return false;
                }
                self.comment.push(ch);
                true
            }
        }
    }

    /// Remove the last character, or unset the rating.
    pub(crate) fn backspace(&mut self) {
        match self.active {
            EntryField::Category => {}
            EntryField::Name => {
                self.name.pop();
            }
            EntryField::Rating => self.rating = UNSET_RATING,
            EntryField::Comment => {
                self.comment.pop();
            }
        }
    }

    /// Left/Right handling for the picker-style fields.
    pub(crate) fn adjust(&mut self, step: i8) {
        match self.active {
            EntryField::Category => {
                self.category = if step < 0 {
                    self.category.previous()
                } else {
                    self.category.next()
                };
            }
            EntryField::Rating => {
                self.rating = if self.rating == UNSET_RATING {
                    if step < 0 {
                        MAX_RATING
                    } else {
                        MIN_RATING
                    }
                } else {
                    (self.rating as i16 + step as i16).clamp(MIN_RATING as i16, MAX_RATING as i16)
                        as u8
                };
            }
            EntryField::Name | EntryField::Comment => {}
        }
    }

    pub(crate) fn candidate(&self) -> EntryCandidate {
        EntryCandidate::new(
            self.name.clone(),
            self.rating,
            self.comment.clone(),
            self.category,
        )
    }

    /// Clear what was just submitted but keep the chosen category so several
    /// items of the same kind can be entered in a row.
    pub(crate) fn reset_after_submit(&mut self) {
        self.name.clear();
        self.rating = UNSET_RATING;
        self.comment.clear();
        self.active = EntryField::Name;
    }

    pub(crate) fn name_placeholder(&self) -> String {
        format!("Enter {} name...", self.category)
    }

    pub(crate) fn comment_counter(&self) -> String {
        format!("{}/{}", self.comment.chars().count(), MAX_COMMENT_CHARS)
    }

    pub(crate) fn submit_label(&self) -> String {
        format!("+ Add {}", self.category)
    }

    /// Character count for the requested text field.
    pub(crate) fn value_len(&self, field: EntryField) -> usize {
        match field {
            EntryField::Name => self.name.chars().count(),
            EntryField::Comment => self.comment.chars().count(),
            EntryField::Category | EntryField::Rating => 0,
        }
    }

    fn label_style(&self, field: EntryField) -> Style {
        if self.active == field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        }
    }

    pub(crate) fn category_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(
            "Category: ",
            self.label_style(EntryField::Category),
        )];
        for category in Category::ALL {
            let style = if category == self.category {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} ", category.label()), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    /// Render a text field, falling back to a dimmed placeholder when empty.
    pub(crate) fn text_line(&self, field_name: &str, field: EntryField) -> Line<'static> {
        let (value, placeholder) = match field {
            EntryField::Name => (&self.name, self.name_placeholder()),
            EntryField::Comment => (&self.comment, "Write a short review...".to_string()),
            EntryField::Category | EntryField::Rating => return Line::from(""),
        };

        let value_span = if value.is_empty() {
            Span::styled(placeholder, Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(value.clone())
        };

        Line::from(vec![
            Span::styled(format!("{field_name}: "), self.label_style(field)),
            value_span,
        ])
    }

    pub(crate) fn rating_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(
            "Rating: ",
            self.label_style(EntryField::Rating),
        )];
        for value in MIN_RATING..=MAX_RATING {
            let style = if value == self.rating {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {value} "), style));
        }
        Line::from(spans)
    }
}
