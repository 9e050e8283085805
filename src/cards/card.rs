//! Card value type.
//!
//! A card is a (rank, category) pair. Ranks 2..=10 carry points; rank -1 is
//! the investment card, which scores nothing itself but multiplies the
//! expedition it sits in.

use serde::{Deserialize, Serialize};

use crate::core::EngineError;

/// Number of card categories (and of expeditions and discard piles).
pub const CATEGORY_COUNT: usize = 5;

/// Rank of an investment card.
pub const INVESTMENT_RANK: i32 = -1;

/// Lowest point-carrying rank.
pub const MIN_RANK: i32 = 2;

/// Highest point-carrying rank.
pub const MAX_RANK: i32 = 10;

/// Card category, 0..5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct Category(u8);

impl Category {
    /// Create a category.
    ///
    /// Panics if `index` is not below `CATEGORY_COUNT`.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < CATEGORY_COUNT, "Category must be below 5");
        Self(index)
    }

    /// Get the raw category index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All categories in index order.
    pub fn all() -> impl Iterator<Item = Category> {
        (0..CATEGORY_COUNT as u8).map(Category)
    }
}

impl TryFrom<u8> for Category {
    type Error = EngineError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if (index as usize) < CATEGORY_COUNT {
            Ok(Self(index))
        } else {
            Err(EngineError::CategoryOutOfRange { index })
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// An immutable card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: i32,
    category: Category,
}

impl Card {
    /// Create a card. Any rank is accepted so the rules can be exercised
    /// with values the deck never produces.
    #[must_use]
    pub const fn new(rank: i32, category: Category) -> Self {
        Self { rank, category }
    }

    /// Create an investment card.
    #[must_use]
    pub const fn investment(category: Category) -> Self {
        Self::new(INVESTMENT_RANK, category)
    }

    #[must_use]
    pub const fn rank(self) -> i32 {
        self.rank
    }

    #[must_use]
    pub const fn category(self) -> Category {
        self.category
    }

    /// Is this an investment card?
    #[must_use]
    pub const fn is_investment(self) -> bool {
        self.rank == INVESTMENT_RANK
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_investment() {
            write!(f, "inv-{}", self.category)
        } else {
            write!(f, "{}-{}", self.rank, self.category)
        }
    }
}
