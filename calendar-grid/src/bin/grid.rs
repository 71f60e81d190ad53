use std::collections::BTreeMap;
use std::env;

use chrono::{Datelike, Local, NaiveDate};

use calendar_grid::localization::weekday_header;
use calendar_grid::{CalendarConfig, DerivedGrid, GridMetrics};

const VIEW_HEIGHT: f64 = 640.0;

fn main() {
    let today = Local::now().date_naive();

    let first_record = match env::args().nth(1) {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .unwrap_or_else(|err| panic!("Usage: ./grid [FIRST_RECORD_DATE] [WEEK_START_DAY]: {err}")),
        None => today,
    };

    let week_start_day = env::args()
        .nth(2)
        .map(|raw| raw.parse().expect("week start day must be a number"))
        .unwrap_or(1);

    let config = CalendarConfig::new()
        .with_week_start_day(week_start_day)
        .unwrap_or_else(|err| panic!("{err}"));

    // A single record on the first day is enough to extend the grid
    let records = BTreeMap::from([(first_record, vec!["first record"])]);
    let default_weeks = GridMetrics::default().default_weeks(VIEW_HEIGHT);

    let derived = DerivedGrid::build(&config, &records, today, default_weeks)
        .unwrap_or_else(|err| panic!("{err}"));

    println!(" - today: {today}");
    println!(" - displayed: {}", derived.display_range());
    println!(" - cells: {}", derived.cell_count());
    println!("---");

    for label in weekday_header(config.week_start(), config.locale()) {
        print!("{:>5}", label.symbol);
    }

    println!();

    for row in 0..derived.row_count() {
        for column in 0..7 {
            let index = 7 * row + column;

            let Ok(day) = derived.day_for_cell_index(index) else {
                continue;
            };

            let mark = if day == today {
                '*'
            } else if !derived.records_of(day).is_empty() {
                '+'
            } else {
                ' '
            };

            print!("{:>4}{mark}", day.day());
        }

        let months: Vec<_> = derived
            .segments()
            .iter()
            .filter(|month| month.start_row == row)
            .map(|month| month.label(config.locale()))
            .collect();

        println!("  {}", months.join(" / "));
    }

    println!("---");

    for section in 0..derived.number_of_sections() {
        let title = derived.section_title(section).unwrap_or_default();
        let rows = derived.number_of_rows(section).unwrap_or_default();
        println!("{title} ({rows} row(s))");
    }
}
