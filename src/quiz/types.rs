use crate::store::types::CategoryId;

/// Id the game front end sends when the player picks "All".
pub const ALL_CATEGORIES_ID: CategoryId = 0;

/// Which questions a quiz round draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    All,
    Category(CategoryId),
}

impl QuizCategory {
    /// Maps a wire category id to a quiz category; `0` means every category.
    pub fn from_id(id: CategoryId) -> Self {
        if id == ALL_CATEGORIES_ID {
            QuizCategory::All
        } else {
            QuizCategory::Category(id)
        }
    }
}
