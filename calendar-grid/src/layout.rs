use std::ops::Range;

use crate::error::{Error, Result};
use crate::month::MonthSegment;

/// Number of columns of the grid.
pub const COLUMNS: usize = 7;

/// Drawing priority of cells.
pub const CELL_Z_INDEX: i32 = 0;

/// Drawing priority of month backgrounds, above cells.
pub const MONTH_BACKGROUND_Z_INDEX: i32 = 1;

/// Drawing priority of month labels, above backgrounds.
pub const MONTH_LABEL_Z_INDEX: i32 = 2;

// --
// -- Geometry primitives
// --

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

// --
// -- Attributes
// --

/// Position of an element of the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayoutAttribute {
    /// A day of the grid
    Cell { index: usize, frame: Rect },
    /// Background of a month overlay, `segment` is an index in the list of
    /// month segments
    MonthBackground { segment: usize, frame: Rect },
    /// Label of a month overlay
    MonthLabel { segment: usize, frame: Rect },
}

impl LayoutAttribute {
    pub fn frame(&self) -> Rect {
        match self {
            Self::Cell { frame, .. }
            | Self::MonthBackground { frame, .. }
            | Self::MonthLabel { frame, .. } => *frame,
        }
    }

    pub fn z_index(&self) -> i32 {
        match self {
            Self::Cell { .. } => CELL_Z_INDEX,
            Self::MonthBackground { .. } => MONTH_BACKGROUND_Z_INDEX,
            Self::MonthLabel { .. } => MONTH_LABEL_Z_INDEX,
        }
    }
}

// --
// -- GridLayout
// --

/// Pixel geometry of a grid of fixed width and row height.
///
/// This is cheap to build and all queries are pure: it is meant to be
/// rebuilt whenever the viewport width changes.
#[derive(Clone, Copy, Debug)]
pub struct GridLayout<'s> {
    cell_count: usize,
    segments: &'s [MonthSegment],
    width: f64,
    row_height: f64,
    overlays_visible: bool,
}

impl<'s> GridLayout<'s> {
    /// Layout of a grid of `cell_count` cells, with month overlays hidden.
    pub fn new(cell_count: usize, segments: &'s [MonthSegment], width: f64, row_height: f64) -> Self {
        Self { cell_count, segments, width, row_height, overlays_visible: false }
    }

    /// Show or hide month overlays.
    pub fn with_overlays(self, overlays_visible: bool) -> Self {
        Self { overlays_visible, ..self }
    }

    pub fn overlays_visible(&self) -> bool {
        self.overlays_visible
    }

    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    pub fn row_count(&self) -> usize {
        self.cell_count.div_ceil(COLUMNS)
    }

    /// Size of a single cell.
    pub fn item_size(&self) -> Size {
        Size::new(self.width / COLUMNS as f64, self.row_height)
    }

    /// Size of the whole scrollable grid.
    ///
    /// ```
    /// use calendar_grid::GridLayout;
    ///
    /// let layout = GridLayout::new(35, &[], 350.0, 60.0);
    /// assert_eq!(layout.content_size().height, 300.0);
    /// ```
    pub fn content_size(&self) -> Size {
        Size::new(self.width, self.row_count() as f64 * self.row_height)
    }

    /// Frame of a cell.
    ///
    /// Horizontal positions are rounded to avoid sub-pixel drift between
    /// columns, rows keep their exact height.
    ///
    /// ```
    /// use calendar_grid::{GridLayout, Rect};
    ///
    /// let layout = GridLayout::new(35, &[], 320.0, 60.0);
    /// let frame = layout.cell_frame(9).unwrap();
    /// assert_eq!(frame.x, 91.0);
    /// assert_eq!(frame.y, 60.0);
    /// assert!(layout.cell_frame(35).is_err());
    /// ```
    pub fn cell_frame(&self, index: usize) -> Result<Rect> {
        if index >= self.cell_count {
            return Err(Error::IndexOutOfRange { index, len: self.cell_count });
        }

        let size = self.item_size();
        let x = ((index % COLUMNS) as f64 * size.width).round();
        let y = (index / COLUMNS) as f64 * size.height;
        Ok(Rect::new(x, y, size.width, size.height))
    }

    /// Frame covering all the rows of a month segment.
    pub fn segment_frame(&self, segment: &MonthSegment) -> Rect {
        Rect::new(
            0.0,
            segment.start_row as f64 * self.row_height,
            self.width,
            segment.row_span as f64 * self.row_height,
        )
    }

    fn has_rows(&self) -> bool {
        self.row_height > 0.0 && self.row_height.is_finite()
    }

    /// Row displayed at given vertical position.
    pub fn row_at(&self, y: f64) -> Option<usize> {
        if !self.has_rows() || y < 0.0 {
            return None;
        }

        let row = (y / self.row_height).floor() as usize;
        (row < self.row_count()).then_some(row)
    }

    /// Rows intersecting a rectangle, or `None` if the rectangle is empty or
    /// outside of the grid.
    pub fn visible_rows(&self, rect: &Rect) -> Option<Range<usize>> {
        if !self.has_rows() {
            return None;
        }

        // Negative values saturate to 0
        let top = (rect.min_y().max(0.0) / self.row_height).floor() as usize;
        let bottom = ((rect.max_y() / self.row_height).ceil() as usize).min(self.row_count());

        if top > bottom {
            return None;
        }

        Some(top..bottom)
    }

    /// Attributes of all elements displayed in a rectangle: cells of all
    /// intersecting rows, followed by the background and label of every
    /// intersecting month if overlays are visible.
    ///
    /// ```
    /// use calendar_grid::{GridLayout, Rect};
    ///
    /// let layout = GridLayout::new(35, &[], 350.0, 60.0);
    /// let attributes = layout.visible_attributes(&Rect::new(0.0, 120.0, 350.0, 180.0));
    /// assert_eq!(attributes.len(), 21);
    /// assert!(layout.visible_attributes(&Rect::new(0.0, 400.0, 350.0, 60.0)).is_empty());
    /// ```
    pub fn visible_attributes(&self, rect: &Rect) -> Vec<LayoutAttribute> {
        let Some(rows) = self.visible_rows(rect) else {
            return Vec::new();
        };

        let cells = (rows.start * COLUMNS)..(rows.end * COLUMNS).min(self.cell_count);

        let mut attributes: Vec<_> = cells
            .filter_map(|index| {
                let frame = self.cell_frame(index).ok()?;
                Some(LayoutAttribute::Cell { index, frame })
            })
            .collect();

        if self.overlays_visible {
            for (segment, month) in self.segments.iter().enumerate() {
                if month.intersects_rows(&rows) {
                    let frame = self.segment_frame(month);
                    attributes.push(LayoutAttribute::MonthBackground { segment, frame });
                    attributes.push(LayoutAttribute::MonthLabel { segment, frame });
                }
            }
        }

        attributes
    }
}
