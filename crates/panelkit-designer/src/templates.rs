//! # Layout Templates
//!
//! Fixed generators that produce the initial panel set of a page. Every
//! generated panel gets a fresh identifier and a correct drop zone; every
//! rectangle is emitted in top-left, top-right, bottom-right, bottom-left
//! order.
//!
//! Templates are referred to by stable kebab-case names in configuration
//! files and on the command line.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use panelkit_core::{LayoutError, Result};

use crate::model::{BoundingBox, PageSize, Panel, Point};
use crate::polygon;

/// Outer margin and inter-panel gutter used by the templates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutSpacing {
    pub margin: f64,
    pub gutter: f64,
}

impl LayoutSpacing {
    pub fn new(margin: f64, gutter: f64) -> Self {
        Self { margin, gutter }
    }
}

impl Default for LayoutSpacing {
    fn default() -> Self {
        Self::new(20.0, 10.0)
    }
}

/// Page layout generators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutTemplate {
    /// One full-bleed panel covering the page
    FullPage,
    /// Two stacked full-width panels
    TwoRows,
    /// Two side-by-side full-height panels
    TwoColumns,
    /// Three stacked full-width panels
    ThreeRows,
    /// Four equal panels
    Grid2x2,
    /// Six equal panels, three rows of two
    Grid2x3,
    /// One wide panel over two
    WideTopTwoBottom,
    /// Two panels over one wide panel
    TwoTopWideBottom,
    /// Two panels split by a slanted gutter
    DiagonalSplit,
}

impl LayoutTemplate {
    pub fn all() -> &'static [LayoutTemplate] {
        &[
            LayoutTemplate::FullPage,
            LayoutTemplate::TwoRows,
            LayoutTemplate::TwoColumns,
            LayoutTemplate::ThreeRows,
            LayoutTemplate::Grid2x2,
            LayoutTemplate::Grid2x3,
            LayoutTemplate::WideTopTwoBottom,
            LayoutTemplate::TwoTopWideBottom,
            LayoutTemplate::DiagonalSplit,
        ]
    }

    /// Get template name as string
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutTemplate::FullPage => "full-page",
            LayoutTemplate::TwoRows => "two-rows",
            LayoutTemplate::TwoColumns => "two-columns",
            LayoutTemplate::ThreeRows => "three-rows",
            LayoutTemplate::Grid2x2 => "grid-2x2",
            LayoutTemplate::Grid2x3 => "grid-2x3",
            LayoutTemplate::WideTopTwoBottom => "wide-top-two-bottom",
            LayoutTemplate::TwoTopWideBottom => "two-top-wide-bottom",
            LayoutTemplate::DiagonalSplit => "diagonal-split",
        }
    }

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.as_str() == s)
    }

    pub fn description(&self) -> &'static str {
        match self {
            LayoutTemplate::FullPage => "Single full-bleed panel",
            LayoutTemplate::TwoRows => "Two stacked panels",
            LayoutTemplate::TwoColumns => "Two side-by-side panels",
            LayoutTemplate::ThreeRows => "Three stacked panels",
            LayoutTemplate::Grid2x2 => "Four-panel grid",
            LayoutTemplate::Grid2x3 => "Six-panel grid",
            LayoutTemplate::WideTopTwoBottom => "Wide establishing panel over two",
            LayoutTemplate::TwoTopWideBottom => "Two panels over a wide closer",
            LayoutTemplate::DiagonalSplit => "Two panels with a slanted gutter",
        }
    }

    pub fn panel_count(&self) -> usize {
        match self {
            LayoutTemplate::FullPage => 1,
            LayoutTemplate::TwoRows | LayoutTemplate::TwoColumns | LayoutTemplate::DiagonalSplit => 2,
            LayoutTemplate::ThreeRows
            | LayoutTemplate::WideTopTwoBottom
            | LayoutTemplate::TwoTopWideBottom => 3,
            LayoutTemplate::Grid2x2 => 4,
            LayoutTemplate::Grid2x3 => 6,
        }
    }

    /// Generates the panels for a page.
    ///
    /// Fails when the page size is not positive or the spacing leaves no room
    /// for the panels.
    pub fn generate(&self, page: PageSize, spacing: LayoutSpacing) -> Result<Vec<Panel>> {
        if !page.is_valid() {
            return Err(LayoutError::InvalidPageSize {
                width: page.width,
                height: page.height,
            }
            .into());
        }

        let panels = match self {
            LayoutTemplate::FullPage => vec![Panel::with_generated_id(polygon::rectangle_points(
                &page.bounds(),
            ))],
            LayoutTemplate::TwoRows => rows_layout(page, spacing, &[1, 1])?,
            LayoutTemplate::TwoColumns => rows_layout(page, spacing, &[2])?,
            LayoutTemplate::ThreeRows => rows_layout(page, spacing, &[1, 1, 1])?,
            LayoutTemplate::Grid2x2 => rows_layout(page, spacing, &[2, 2])?,
            LayoutTemplate::Grid2x3 => rows_layout(page, spacing, &[2, 2, 2])?,
            LayoutTemplate::WideTopTwoBottom => rows_layout(page, spacing, &[1, 2])?,
            LayoutTemplate::TwoTopWideBottom => rows_layout(page, spacing, &[2, 1])?,
            LayoutTemplate::DiagonalSplit => diagonal_split(page, spacing)?,
        };
        Ok(panels)
    }
}

impl fmt::Display for LayoutTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutTemplate {
    type Err = LayoutError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| LayoutError::UnknownTemplate {
            name: s.to_string(),
        })
    }
}

/// Area left for panels once margins are removed.
fn inner_area(page: PageSize, spacing: LayoutSpacing) -> Result<BoundingBox> {
    let inner = BoundingBox::new(
        spacing.margin,
        spacing.margin,
        page.width - 2.0 * spacing.margin,
        page.height - 2.0 * spacing.margin,
    );
    if inner.width <= 0.0 || inner.height <= 0.0 || spacing.gutter < 0.0 {
        return Err(LayoutError::InvalidPageSize {
            width: page.width,
            height: page.height,
        }
        .into());
    }
    Ok(inner)
}

/// Equal-height rows, each split into `columns_per_row[i]` equal panels.
fn rows_layout(
    page: PageSize,
    spacing: LayoutSpacing,
    columns_per_row: &[usize],
) -> Result<Vec<Panel>> {
    let inner = inner_area(page, spacing)?;
    let gutter = spacing.gutter;
    let rows = columns_per_row.len() as f64;
    let row_height = (inner.height - gutter * (rows - 1.0)) / rows;

    let mut panels = Vec::new();
    for (r, &cols) in columns_per_row.iter().enumerate() {
        let cols_f = cols as f64;
        let col_width = (inner.width - gutter * (cols_f - 1.0)) / cols_f;
        if row_height <= 0.0 || col_width <= 0.0 {
            return Err(LayoutError::InvalidPageSize {
                width: page.width,
                height: page.height,
            }
            .into());
        }

        let top = inner.top + r as f64 * (row_height + gutter);
        for c in 0..cols {
            let left = inner.left + c as f64 * (col_width + gutter);
            panels.push(Panel::with_generated_id(polygon::rectangle_points(
                &BoundingBox::new(left, top, col_width, row_height),
            )));
        }
    }
    Ok(panels)
}

fn diagonal_split(page: PageSize, spacing: LayoutSpacing) -> Result<Vec<Panel>> {
    let inner = inner_area(page, spacing)?;
    let half_gutter = spacing.gutter / 2.0;
    // Both seam ends must leave each panel some height on either side.
    if inner.height * 0.4 <= half_gutter {
        return Err(LayoutError::InvalidPageSize {
            width: page.width,
            height: page.height,
        }
        .into());
    }
    let seam_left = inner.top + inner.height * 0.6;
    let seam_right = inner.top + inner.height * 0.4;

    let top = vec![
        Point::new(inner.left, inner.top),
        Point::new(inner.right(), inner.top),
        Point::new(inner.right(), seam_right - half_gutter),
        Point::new(inner.left, seam_left - half_gutter),
    ];
    let bottom = vec![
        Point::new(inner.left, seam_left + half_gutter),
        Point::new(inner.right(), seam_right + half_gutter),
        Point::new(inner.right(), inner.bottom()),
        Point::new(inner.left, inner.bottom()),
    ];
    Ok(vec![
        Panel::with_generated_id(top),
        Panel::with_generated_id(bottom),
    ])
}
