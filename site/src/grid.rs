//! Responsive grid placement for three-wide gallery rows.
//!
//! DESIGN
//! ======
//! Items sit on a 12-unit column system, four units each. Full rows of three
//! take the plain class; a trailing partial row is centred by offsetting its
//! first item. The rule order matters: full rows short-circuit before the
//! remainder shape is inspected.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

/// Items per visual row.
pub const ROW_WIDTH: usize = 3;

/// Column classes an item can receive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutTag {
    /// Plain one-third width.
    OneThird,
    /// One-third width pushed right by one third; centres a lone item.
    OffsetOneColumn,
    /// One-third width pushed right by one sixth; centres a pair.
    OffsetTwoThirds,
}

impl LayoutTag {
    /// CSS class list for the tag.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::OneThird => "col-md-4",
            Self::OffsetOneColumn => "col-md-offset-4 col-md-4",
            Self::OffsetTwoThirds => "col-md-offset-2 col-md-4",
        }
    }
}

/// Choose the column class for item `index` of `total_count`.
///
/// Callers must uphold `index < total_count`; an empty list has nothing to
/// place. The precondition is checked in debug builds only.
pub fn placement_class(total_count: usize, index: usize) -> LayoutTag {
    debug_assert!(
        index < total_count,
        "placement index {index} out of range for {total_count} items"
    );
    if index < ROW_WIDTH * (total_count / ROW_WIDTH) {
        LayoutTag::OneThird
    } else if total_count % ROW_WIDTH == 1 {
        LayoutTag::OffsetOneColumn
    } else if index % ROW_WIDTH == 0 {
        LayoutTag::OffsetTwoThirds
    } else {
        LayoutTag::OneThird
    }
}

/// Placement tags for every item of a list of `total_count` items.
pub fn placements(total_count: usize) -> Vec<LayoutTag> {
    (0..total_count)
        .map(|index| placement_class(total_count, index))
        .collect()
}
