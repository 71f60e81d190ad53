use std::collections::HashMap;

use chrono::{Locale, NaiveDate, TimeZone};

use crate::config::CalendarConfig;
use crate::error::{Error, Result};
use crate::grid::{DateGrid, DisplayRange, RecordRange};
use crate::layout::GridLayout;
use crate::localization::section_title;
use crate::month::MonthSegment;
use crate::provider::RecordProvider;

/// Everything a calendar view displays, computed at once from a
/// configuration and a record provider.
///
/// A derived grid is never updated: reloading a view builds a new one which
/// replaces the previous one as a whole.
#[derive(Clone, Debug)]
pub struct DerivedGrid<R> {
    grid: DateGrid,
    segments: Vec<MonthSegment>,
    unique_days: Vec<NaiveDate>,
    records: HashMap<NaiveDate, Vec<R>>,
    locale: Locale,
}

impl<R> DerivedGrid<R> {
    /// Query the provider and compute the grid, its month segments and the
    /// sections of the record list.
    pub fn build<Tz, P>(
        config: &CalendarConfig<Tz>,
        provider: &P,
        today: NaiveDate,
        default_weeks: usize,
    ) -> Result<Self>
    where
        Tz: TimeZone,
        P: RecordProvider<Record = R>,
    {
        let record_range = provider
            .record_range(config)
            .unwrap_or_else(|| RecordRange::single(today));
        let grid = DateGrid::new(config, &record_range, today, default_weeks)?;
        let segments = grid.month_segments()?;

        let unique_days =
            grid.unique_days_with_today_injected(provider.unique_days_of_record(config));

        let mut records = HashMap::with_capacity(unique_days.len());

        for &day in &unique_days {
            records
                .entry(day)
                .or_insert_with(|| provider.records_of(day, config));
        }

        #[cfg(feature = "log")]
        {
            let range = grid.display_range();

            if record_range.last() > range.last() {
                log::warn!(
                    "Records until {} are not displayed after {}",
                    record_range.last(),
                    range.last(),
                );
            }

            if !is_monotonic(&unique_days) {
                log::debug!("Days of record are not sorted, sections keep provider order");
            }

            log::debug!(
                cells = grid.cell_count(),
                months = segments.len(),
                sections = unique_days.len();
                "Reloaded calendar grid for {range}",
            );
        }

        Ok(Self { grid, segments, unique_days, records, locale: config.locale })
    }

    // --
    // -- Calendar
    // --

    pub fn grid(&self) -> &DateGrid {
        &self.grid
    }

    pub fn display_range(&self) -> DisplayRange {
        self.grid.display_range()
    }

    pub fn today(&self) -> NaiveDate {
        self.grid.today()
    }

    pub fn cell_count(&self) -> usize {
        self.grid.cell_count()
    }

    pub fn row_count(&self) -> usize {
        self.grid.row_count()
    }

    pub fn segments(&self) -> &[MonthSegment] {
        &self.segments
    }

    pub fn day_for_cell_index(&self, index: usize) -> Result<NaiveDate> {
        self.grid.day_for_cell_index(index)
    }

    pub fn cell_index_for_day(&self, day: NaiveDate) -> Result<usize> {
        self.grid.cell_index_for_day(day)
    }

    /// Records displayed in the cell of a day, empty for days that were not
    /// listed by the provider.
    pub fn records_of(&self, day: NaiveDate) -> &[R] {
        self.records.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    /// Label of a month segment.
    pub fn month_label(&self, segment: usize) -> Result<String> {
        let month = self
            .segments
            .get(segment)
            .ok_or(Error::IndexOutOfRange { index: segment, len: self.segments.len() })?;

        Ok(month.label(self.locale))
    }

    /// Geometry of this grid for a view of given width.
    pub fn layout(&self, width: f64, row_height: f64) -> GridLayout<'_> {
        GridLayout::new(self.cell_count(), &self.segments, width, row_height)
    }

    // --
    // -- Record list
    // --

    /// Days of the sections of the record list, today is always included.
    pub fn unique_days(&self) -> &[NaiveDate] {
        &self.unique_days
    }

    pub fn number_of_sections(&self) -> usize {
        self.unique_days.len()
    }

    pub fn day_of_section(&self, section: usize) -> Result<NaiveDate> {
        self.unique_days
            .get(section)
            .copied()
            .ok_or(Error::IndexOutOfRange { index: section, len: self.unique_days.len() })
    }

    /// First section displaying records of a day.
    pub fn section_for_day(&self, day: NaiveDate) -> Option<usize> {
        self.unique_days.iter().position(|&section_day| section_day == day)
    }

    /// Number of rows of a section. The first section always has at least
    /// one row, which is a placeholder when today has no record.
    pub fn number_of_rows(&self, section: usize) -> Result<usize> {
        let count = self.records_of(self.day_of_section(section)?).len();

        if section == 0 {
            Ok(count.max(1))
        } else {
            Ok(count)
        }
    }

    /// Record displayed in a row of the record list, `None` for the
    /// placeholder row of a day without records.
    pub fn record_at(&self, section: usize, row: usize) -> Result<Option<&R>> {
        let records = self.records_of(self.day_of_section(section)?);

        if records.is_empty() && row < self.number_of_rows(section)? {
            return Ok(None);
        }

        records
            .get(row)
            .map(Some)
            .ok_or(Error::IndexOutOfRange { index: row, len: records.len() })
    }

    /// Header of a section of the record list.
    pub fn section_title(&self, section: usize) -> Result<String> {
        Ok(section_title(self.day_of_section(section)?, self.locale))
    }
}

#[cfg(feature = "log")]
fn is_monotonic(days: &[NaiveDate]) -> bool {
    days.windows(2).all(|w| w[0] <= w[1]) || days.windows(2).all(|w| w[0] >= w[1])
}
