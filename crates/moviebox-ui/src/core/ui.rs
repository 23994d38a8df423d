//! UI primitives shared across the crate (layout and ordering toggles).

/// Layout toggle for the browse view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Poster card grid.
    #[default]
    Grid,
    /// Dense table rows.
    List,
}

impl ViewMode {
    /// All supported layouts for toggle controls.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Grid, Self::List]
    }

    /// Button label for the layout.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Grid => "Grid View",
            Self::List => "List View",
        }
    }
}

/// Sort orderings offered by the browse view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Title, A to Z.
    #[default]
    Title,
    /// Release year, newest first.
    Year,
    /// Rating, highest first.
    Rating,
    /// Runtime, longest first.
    Runtime,
}

impl SortKey {
    /// All supported orderings in display order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Title, Self::Year, Self::Rating, Self::Runtime]
    }

    /// Stable code used as the `<select>` option value.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Year => "year",
            Self::Rating => "rating",
            Self::Runtime => "runtime",
        }
    }

    /// Dropdown label for the ordering.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Name (A-Z)",
            Self::Year => "Year (Newest)",
            Self::Rating => "Rating (Highest)",
            Self::Runtime => "Runtime (Longest)",
        }
    }

    /// Map a `<select>` option value back to an ordering.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|key| key.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_codes_round_trip() {
        for key in SortKey::all() {
            assert_eq!(SortKey::from_code(key.code()), Some(key));
        }
        assert_eq!(SortKey::from_code("bogus"), None);
    }

    #[test]
    fn defaults_match_first_run_view() {
        assert_eq!(ViewMode::default(), ViewMode::Grid);
        assert_eq!(SortKey::default(), SortKey::Title);
    }
}
