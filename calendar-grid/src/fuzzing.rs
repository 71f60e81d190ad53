//! Development module that shares grid invariants between unit tests and
//! the fuzz targets.

use std::fmt::Debug;

use arbitrary::Arbitrary;
use chrono::{Datelike, NaiveDate};

use crate::config::weekday_from_sunday_number;
use crate::grid::{DateGrid, RecordRange};
use crate::layout::{GridLayout, LayoutAttribute, Rect};

#[derive(Arbitrary, Clone)]
pub struct Data {
    /// Today, in days since 1st of January of year 1
    pub today_days: i32,
    /// Days between the first record and today
    pub records_before_today: u16,
    pub week_start_day: u8,
    pub default_weeks: u8,
    /// Width and height of the visible part of the grid
    pub viewport: [u16; 2],
}

impl Data {
    fn today(&self) -> Option<NaiveDate> {
        NaiveDate::from_num_days_from_ce_opt(self.today_days)
    }
}

impl Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("Data");

        if let Some(today) = self.today() {
            debug.field("today", &today);
        }

        debug
            .field("records_before_today", &self.records_before_today)
            .field("week_start_day", &self.week_start_day)
            .field("default_weeks", &self.default_weeks)
            .field("viewport", &self.viewport)
            .finish()
    }
}

/// Build a grid from arbitrary inputs and check all of its invariants.
/// Returns `false` if the input is not relevant.
pub fn run_fuzz_grid(data: Data) -> bool {
    let Some(today) = data.today() else {
        return false;
    };

    if today.year() < 1 || today.year() > 9999 {
        return false;
    }

    let Some(week_start) = weekday_from_sunday_number(data.week_start_day) else {
        return false;
    };

    let Some(first_record) = today.checked_sub_days(chrono::Days::new(
        data.records_before_today.into(),
    )) else {
        return false;
    };

    let config = crate::CalendarConfig::new().with_week_start(week_start);
    let records = RecordRange::new(first_record, today).expect("invalid record range");

    let grid = DateGrid::new(&config, &records, today, data.default_weeks.into())
        .expect("failed to build grid");

    let range = grid.display_range();

    // Display range bounds
    assert!(range.first() <= today && today <= range.last());
    assert!(range.first() <= first_record);
    assert_eq!(range.first().weekday(), week_start);
    assert_eq!(range.last().weekday(), week_start.pred());
    assert_eq!(grid.cell_count() % 7, 0);

    // Cells mapping
    for index in [0, grid.cell_count() / 2, grid.cell_count() - 1] {
        let day = grid.day_for_cell_index(index).expect("missing cell");
        assert_eq!(grid.cell_index_for_day(day), Ok(index));
    }

    // Month segments
    let segments = grid.month_segments().expect("failed to split months");
    let mut next_cell = 0;

    for (month, next) in segments.iter().zip(segments.iter().skip(1)) {
        assert!(next.start_row == month.rows().end || next.start_row + 1 == month.rows().end);
    }

    for month in &segments {
        assert_eq!(month.start_cell_index, next_cell);
        assert_eq!(month.start_row, month.start_cell_index / 7);
        next_cell = month.end_cell_index;
    }

    assert_eq!(next_cell, grid.cell_count());
    assert_eq!(segments.last().map(|month| month.rows().end), Some(grid.row_count()));

    // Layout
    let [width, height] = data.viewport.map(f64::from);
    let layout = GridLayout::new(grid.cell_count(), &segments, width, 60.0).with_overlays(true);
    let rect = Rect::new(0.0, f64::from(data.records_before_today), width, height);

    for attribute in layout.visible_attributes(&rect) {
        if let LayoutAttribute::Cell { index, .. } = attribute {
            assert!(index < grid.cell_count());
        }
    }

    true
}
