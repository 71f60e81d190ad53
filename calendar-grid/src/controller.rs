//! Keeps the calendar and the record list of a view in sync.
//!
//! The host forwards scroll and selection events of both views to a
//! [`CalendarRecordList`], which answers with the [`SyncAction`]s that the
//! views must perform.

use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc};

use crate::config::{CalendarConfig, GridMetrics};
use crate::derived::DerivedGrid;
use crate::error::{Error, Result};
use crate::layout::{GridLayout, LayoutAttribute, Rect, Size};
use crate::provider::RecordProvider;

/// The view an event originates from.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum ScrollSource {
    Calendar,
    RecordList,
}

/// Update a host must apply to its views.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SyncAction {
    /// Resize the calendar to a new height
    SetCalendarHeight(f64),
    /// Scroll the calendar to given vertical content offset
    ScrollCalendarTo { offset_y: f64 },
    /// Scroll the record list to the top of a row
    ScrollRecordListTo { section: usize, row: usize },
    /// Show or hide month overlays, the calendar layout must be invalidated
    SetOverlaysVisible(bool),
}

/// State of a calendar paired with a record list.
///
/// The derived grid is shared through an `Arc` so that a host can keep
/// rendering a snapshot while a reload builds the next one. A failed reload
/// leaves the current snapshot untouched.
pub struct CalendarRecordList<P: RecordProvider, Tz: TimeZone = Utc> {
    config: CalendarConfig<Tz>,
    provider: P,
    metrics: GridMetrics,
    snapshot: Option<Arc<DerivedGrid<P::Record>>>,
    bounds: Size,
    calendar_height: f64,
    calendar_offset_y: f64,
    overlays_visible: bool,
}

impl<P: RecordProvider> CalendarRecordList<P, Utc> {
    /// Create a view state with default calendar and metrics, nothing is
    /// computed before the first reload.
    pub fn new(provider: P) -> Self {
        Self::with_config(CalendarConfig::default(), provider)
    }
}

impl<P: RecordProvider, Tz: TimeZone> CalendarRecordList<P, Tz> {
    pub fn with_config(config: CalendarConfig<Tz>, provider: P) -> Self {
        Self {
            config,
            provider,
            metrics: GridMetrics::default(),
            snapshot: None,
            bounds: Size::default(),
            calendar_height: 0.0,
            calendar_offset_y: 0.0,
            overlays_visible: false,
        }
    }

    pub fn with_metrics(self, metrics: GridMetrics) -> Self {
        Self { metrics, ..self }
    }

    pub fn config(&self) -> &CalendarConfig<Tz> {
        &self.config
    }

    pub fn metrics(&self) -> &GridMetrics {
        &self.metrics
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Latest grid computed by a successful reload.
    pub fn snapshot(&self) -> Option<&Arc<DerivedGrid<P::Record>>> {
        self.snapshot.as_ref()
    }

    pub fn calendar_height(&self) -> f64 {
        self.calendar_height
    }

    pub fn calendar_offset_y(&self) -> f64 {
        self.calendar_offset_y
    }

    pub fn overlays_visible(&self) -> bool {
        self.overlays_visible
    }

    // --
    // -- Reload
    // --

    /// Recompute everything displayed from the provider.
    pub fn reload(&mut self, today: NaiveDate) -> Result<Arc<DerivedGrid<P::Record>>> {
        let default_weeks = self.metrics.default_weeks(self.bounds.height);
        let derived = DerivedGrid::build(&self.config, &self.provider, today, default_weeks)?;
        let derived = Arc::new(derived);
        self.snapshot = Some(derived.clone());
        Ok(derived)
    }

    /// Replace the calendar configuration and reload. The configuration is
    /// kept unchanged if the reload fails.
    pub fn set_config(
        &mut self,
        config: CalendarConfig<Tz>,
        today: NaiveDate,
    ) -> Result<Arc<DerivedGrid<P::Record>>> {
        let previous = std::mem::replace(&mut self.config, config);

        self.reload(today).inspect_err(|_| {
            self.config = previous;
        })
    }

    /// Replace the source of records and reload. The provider is kept
    /// unchanged if the reload fails, in which case the rejected one is
    /// returned with the error.
    pub fn set_provider(
        &mut self,
        provider: P,
        today: NaiveDate,
    ) -> std::result::Result<Arc<DerivedGrid<P::Record>>, (Error, P)> {
        let previous = std::mem::replace(&mut self.provider, provider);

        match self.reload(today) {
            Ok(derived) => Ok(derived),
            Err(err) => {
                let rejected = std::mem::replace(&mut self.provider, previous);
                Err((err, rejected))
            }
        }
    }

    // --
    // -- Layout
    // --

    /// Update the size of the whole view. The calendar gets its default
    /// height the first time bounds are known.
    pub fn set_bounds(&mut self, bounds: Size) -> Option<SyncAction> {
        self.bounds = bounds;

        if self.calendar_height == 0.0 {
            self.calendar_height = self.metrics.expanded_height(bounds.height);
            return Some(SyncAction::SetCalendarHeight(self.calendar_height));
        }

        None
    }

    /// Geometry of the calendar, available after the first reload.
    pub fn layout(&self) -> Option<GridLayout<'_>> {
        let derived = self.snapshot.as_ref()?;

        let layout = derived
            .layout(self.bounds.width, self.metrics.cell_height)
            .with_overlays(self.overlays_visible);

        Some(layout)
    }

    /// Elements of the calendar displayed in a rectangle of its content.
    pub fn visible_attributes(&self, rect: &Rect) -> Vec<LayoutAttribute> {
        self.layout()
            .map(|layout| layout.visible_attributes(rect))
            .unwrap_or_default()
    }

    // --
    // -- Scroll events
    // --

    /// The host reports the current scroll position of the calendar.
    pub fn did_scroll_calendar(&mut self, offset_y: f64) {
        self.calendar_offset_y = offset_y;
    }

    /// Scrolling the record list shrinks the calendar, scrolling the calendar
    /// expands it and shows month overlays.
    pub fn will_begin_dragging(&mut self, source: ScrollSource) -> Vec<SyncAction> {
        match source {
            ScrollSource::RecordList => self.shrink(),
            ScrollSource::Calendar => {
                let mut actions = self.expand();
                actions.extend(self.set_overlays_visible(true));
                actions
            }
        }
    }

    pub fn did_end_dragging(&mut self, source: ScrollSource, decelerate: bool) -> Vec<SyncAction> {
        if source == ScrollSource::Calendar && !decelerate {
            self.settle_calendar()
        } else {
            Vec::new()
        }
    }

    pub fn did_end_decelerating(&mut self, source: ScrollSource) -> Vec<SyncAction> {
        if source == ScrollSource::Calendar {
            self.settle_calendar()
        } else {
            Vec::new()
        }
    }

    /// A tap on the status bar brings the record list back to its first
    /// section, whichever view received it. The native scroll-to-top
    /// behavior must be cancelled.
    pub fn scroll_to_top(&self) -> SyncAction {
        SyncAction::ScrollRecordListTo { section: 0, row: 0 }
    }

    /// Scroll the calendar so that the week of today is at its bottom.
    pub fn scroll_calendar_to_today(&mut self) -> Option<SyncAction> {
        let content_height = self.layout()?.content_size().height;
        let offset_y = (content_height - self.calendar_height).max(0.0);
        Some(self.scroll_calendar_to(offset_y))
    }

    // --
    // -- Selection
    // --

    /// Selecting a day in the calendar scrolls the record list to the
    /// section of this day, if it has one.
    pub fn select_calendar_cell(&self, index: usize) -> Result<(NaiveDate, Option<SyncAction>)> {
        let Some(derived) = &self.snapshot else {
            return Err(Error::IndexOutOfRange { index, len: 0 });
        };

        let day = derived.day_for_cell_index(index)?;

        let action = derived
            .section_for_day(day)
            .map(|section| SyncAction::ScrollRecordListTo { section, row: 0 });

        Ok((day, action))
    }

    // --
    // -- Internals
    // --

    fn scroll_calendar_to(&mut self, offset_y: f64) -> SyncAction {
        self.calendar_offset_y = offset_y;
        SyncAction::ScrollCalendarTo { offset_y }
    }

    fn set_overlays_visible(&mut self, visible: bool) -> Option<SyncAction> {
        if self.overlays_visible == visible {
            return None;
        }

        self.overlays_visible = visible;
        Some(SyncAction::SetOverlaysVisible(visible))
    }

    fn shrink(&mut self) -> Vec<SyncAction> {
        let shrunk_height = self.metrics.shrunk_height();

        if !self.metrics.should_shrink(self.bounds.height) || self.calendar_height == shrunk_height
        {
            return Vec::new();
        }

        // Keep the last visible row at the bottom of the shrunk calendar
        let row_height = self.metrics.cell_height;
        let visible_bottom = self.calendar_offset_y + self.calendar_height;
        let last_row = ((visible_bottom / row_height).ceil() - 1.0).max(0.0);
        let offset_y = ((last_row + 1.0) * row_height - shrunk_height).max(0.0);

        self.calendar_height = shrunk_height;

        vec![
            SyncAction::SetCalendarHeight(shrunk_height),
            self.scroll_calendar_to(offset_y),
        ]
    }

    fn expand(&mut self) -> Vec<SyncAction> {
        let expanded_height = self.metrics.expanded_height(self.bounds.height);

        if !self.metrics.should_shrink(self.bounds.height)
            || self.calendar_height == expanded_height
        {
            return Vec::new();
        }

        self.calendar_height = expanded_height;
        vec![SyncAction::SetCalendarHeight(expanded_height)]
    }

    /// Align the calendar on the row at the top of the view and hide month
    /// overlays.
    fn settle_calendar(&mut self) -> Vec<SyncAction> {
        let mut actions = Vec::new();

        let decision_y = self.calendar_offset_y + self.metrics.cell_height / 2.0;
        let row = self.layout().and_then(|layout| layout.row_at(decision_y));

        if let Some(row) = row {
            let offset_y = row as f64 * self.metrics.cell_height;
            actions.push(self.scroll_calendar_to(offset_y));
        }

        actions.extend(self.set_overlays_visible(false));
        actions
    }
}
