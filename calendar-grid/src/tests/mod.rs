mod config;
mod derived;

#[cfg(feature = "fuzzing")]
mod fuzzing;

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

/// Build a grid with a Sunday-first calendar.
#[macro_export]
macro_rules! grid {
    (
        today = $today: expr,
        first_record = $first: expr
        $( , weeks = $weeks: expr )?
        $( , week_start = $week_start: expr )?
        $( , )?
    ) => {{
        use $crate::{date, CalendarConfig, DateGrid, RecordRange};

        #[allow(unused_mut, unused_assignments)]
        let mut weeks = 5;
        $( weeks = $weeks; )?

        let config = CalendarConfig::new()
            $( .with_week_start($week_start) )?;

        let records = RecordRange::new(date!($first), date!($today))?;
        DateGrid::new(&config, &records, date!($today), weeks)?
    }};
}
