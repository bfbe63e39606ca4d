//! Fix categories and the requested-category set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;

/// The coarse class of fix a formatter belongs to.
///
/// Each formatter declares exactly one category at registration; callers
/// request a set of categories per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixCategory {
    /// Whitespace-only rewrites (trailing whitespace, blank-line hygiene).
    Whitespace,
    /// Diagnostic-driven code-style rewrites (import removal and friends).
    CodeStyle,
}

impl FixCategory {
    pub const ALL: [FixCategory; 2] = [FixCategory::Whitespace, FixCategory::CodeStyle];

    fn bit(self) -> u8 {
        match self {
            FixCategory::Whitespace => 1 << 0,
            FixCategory::CodeStyle => 1 << 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FixCategory::Whitespace => "whitespace",
            FixCategory::CodeStyle => "code_style",
        }
    }
}

impl fmt::Display for FixCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of requested fix categories.
///
/// Membership here is evaluated strictly before any severity consideration: a
/// formatter whose category is absent from the set is never even probed
/// against configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FixCategories(u8);

impl FixCategories {
    pub const EMPTY: FixCategories = FixCategories(0);

    pub fn of(category: FixCategory) -> Self {
        FixCategories(category.bit())
    }

    #[must_use]
    pub fn with(self, category: FixCategory) -> Self {
        FixCategories(self.0 | category.bit())
    }

    pub fn contains(self, category: FixCategory) -> bool {
        self.0 & category.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = FixCategory> {
        FixCategory::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl From<FixCategory> for FixCategories {
    fn from(category: FixCategory) -> Self {
        FixCategories::of(category)
    }
}

impl FromIterator<FixCategory> for FixCategories {
    fn from_iter<I: IntoIterator<Item = FixCategory>>(iter: I) -> Self {
        iter.into_iter().fold(FixCategories::EMPTY, FixCategories::with)
    }
}

impl BitOr for FixCategory {
    type Output = FixCategories;

    fn bitor(self, rhs: FixCategory) -> FixCategories {
        FixCategories::of(self).with(rhs)
    }
}

impl BitOr<FixCategory> for FixCategories {
    type Output = FixCategories;

    fn bitor(self, rhs: FixCategory) -> FixCategories {
        self.with(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_contains_nothing() {
        for category in FixCategory::ALL {
            assert!(!FixCategories::EMPTY.contains(category));
        }
        assert!(FixCategories::EMPTY.is_empty());
    }

    #[test]
    fn bitor_builds_the_union() {
        let set = FixCategory::Whitespace | FixCategory::CodeStyle;
        assert!(set.contains(FixCategory::Whitespace));
        assert!(set.contains(FixCategory::CodeStyle));
    }

    #[test]
    fn single_category_set_excludes_the_other() {
        let set = FixCategories::of(FixCategory::Whitespace);
        assert!(set.contains(FixCategory::Whitespace));
        assert!(!set.contains(FixCategory::CodeStyle));
    }

    #[test]
    fn iter_yields_members_in_declared_order() {
        let set = FixCategory::CodeStyle | FixCategory::Whitespace;
        let members: Vec<_> = set.iter().collect();
        assert_eq!(members, vec![FixCategory::Whitespace, FixCategory::CodeStyle]);
    }
}
