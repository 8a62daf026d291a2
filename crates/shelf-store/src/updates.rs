//! Partial update for a book record.
//!
//! Only `Some` fields are applied. `published_year` is doubly optional so that
//! "leave as is" (`None`) and "clear the year" (`Some(None)`) stay distinct.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub published_year: Option<Option<i32>>,
}

impl BookUpdate {
    /// True when applying this update would change nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.published_year.is_none()
    }
}

#[derive(Debug, Default)]
pub struct BookUpdateBuilder(BookUpdate);

impl BookUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, val: impl Into<String>) -> Self {
        self.0.title = Some(val.into());
        self
    }

    #[must_use]
    pub fn author(mut self, val: impl Into<String>) -> Self {
        self.0.author = Some(val.into());
        self
    }

    #[must_use]
    pub const fn published_year(mut self, val: Option<i32>) -> Self {
        self.0.published_year = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> BookUpdate {
        self.0
    }
}
