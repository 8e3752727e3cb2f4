use serde::{Deserialize, Serialize};

use crate::core::Dimension;
use crate::render::GridBlock;

use super::BoolOr;

pub const DEFAULT_GRID: GridBlock = GridBlock {
    left: Dimension::Percent(3.0),
    right: Dimension::Percent(4.0),
    top: Dimension::Percent(15.0),
    bottom: Dimension::Percent(10.0),
    contain_label: true,
};

/// Partial grid override; unset fields keep their default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    pub left: Option<Dimension>,
    pub right: Option<Dimension>,
    pub top: Option<Dimension>,
    pub bottom: Option<Dimension>,
    pub contain_label: Option<bool>,
}

impl GridConfig {
    /// Field-level merge over `DEFAULT_GRID`.
    #[must_use]
    pub fn merged(self) -> GridBlock {
        GridBlock {
            left: self.left.unwrap_or(DEFAULT_GRID.left),
            right: self.right.unwrap_or(DEFAULT_GRID.right),
            top: self.top.unwrap_or(DEFAULT_GRID.top),
            bottom: self.bottom.unwrap_or(DEFAULT_GRID.bottom),
            contain_label: self.contain_label.unwrap_or(DEFAULT_GRID.contain_label),
        }
    }
}

#[must_use]
pub fn build_grid(grid: &BoolOr<GridConfig>) -> Option<GridBlock> {
    grid.resolve().map(GridConfig::merged)
}
