use thiserror::Error;

use crate::models::Category;

/// Why a candidate was not admitted. None of these are fatal; the user fixes
/// the input and tries again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// Blank name or unset rating. Front ends refuse silently.
    #[error("name and rating are required")]
    Incomplete,
    /// The same normalized name already exists in this category.
    #[error("This {} has already been rated.", .category.lowercase())]
    Duplicate { category: Category },
    #[error("Comment must be 100 characters or less.")]
    CommentTooLong,
}

/// Title and body for a blocking alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub message: String,
}

impl RejectionReason {
    /// `true` when the rejection should not be surfaced to the user at all.
    pub fn is_silent(&self) -> bool {
        matches!(self, RejectionReason::Incomplete)
    }

    /// Build the alert a front end should show, or `None` for silent refusals.
    pub fn alert(&self) -> Option<Alert> {
        let title = match self {
            RejectionReason::Incomplete => return None,
            RejectionReason::Duplicate { .. } => "Duplicate Entry",
            RejectionReason::CommentTooLong => "Too Long",
        };
        Some(Alert {
            title,
            message: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_alert_interpolates_lowercased_category() {
        let alert = RejectionReason::Duplicate {
            category: Category::Show,
        }
        .alert()
        .expect("duplicate is surfaced");
        assert_eq!(alert.title, "Duplicate Entry");
        assert_eq!(alert.message, "This show has already been rated.");
    }

    #[test]
    fn comment_too_long_alert_has_fixed_message() {
        let alert = RejectionReason::CommentTooLong.alert().expect("surfaced");
        assert_eq!(alert.title, "Too Long");
        assert_eq!(alert.message, "Comment must be 100 characters or less.");
    }

    #[test]
    fn incomplete_is_silent() {
        assert!(RejectionReason::Incomplete.is_silent());
        assert_eq!(RejectionReason::Incomplete.alert(), None);
    }
}
