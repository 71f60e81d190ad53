use std::collections::BTreeMap;

use chrono::{Locale, NaiveDate, TimeZone};

use crate::error::Error;
use crate::{date, CalendarConfig, DerivedGrid, RecordProvider, RecordRange};

fn records() -> BTreeMap<NaiveDate, Vec<&'static str>> {
    BTreeMap::from([
        (date!("2023-11-01"), vec!["walk"]),
        (date!("2024-01-03"), vec!["run"]),
        (date!("2024-01-08"), vec![]),
        (date!("2024-01-10"), vec!["swim", "bike"]),
    ])
}

/// Days of records are returned in a fixed order which is neither sorted nor
/// deduplicated.
struct Unsorted;

impl RecordProvider for Unsorted {
    type Record = u32;

    fn record_range<Tz: TimeZone>(&self, _config: &CalendarConfig<Tz>) -> Option<RecordRange> {
        Some(RecordRange::single(date!("2024-01-01")))
    }

    fn unique_days_of_record<Tz: TimeZone>(&self, _config: &CalendarConfig<Tz>) -> Vec<NaiveDate> {
        vec![date!("2024-01-05"), date!("2024-01-02"), date!("2024-01-09"), date!("2024-01-02")]
    }

    fn records_of<Tz: TimeZone>(&self, day: NaiveDate, _config: &CalendarConfig<Tz>) -> Vec<u32> {
        vec![day.format("%d").to_string().parse().expect("invalid day")]
    }
}

#[test]
fn grid_and_sections() -> Result<(), Error> {
    let derived = DerivedGrid::build(&CalendarConfig::new(), &records(), date!("2024-01-17"), 5)?;

    assert_eq!(derived.display_range().first(), date!("2023-10-29"));
    assert_eq!(derived.display_range().last(), date!("2024-01-20"));
    assert_eq!(derived.cell_count(), 84);
    assert_eq!(derived.row_count(), 12);
    assert_eq!(derived.segments().len(), 4);
    assert_eq!(derived.today(), date!("2024-01-17"));

    assert_eq!(
        derived.unique_days(),
        [date!("2024-01-17"), date!("2024-01-10"), date!("2024-01-03"), date!("2023-11-01")],
    );

    assert_eq!(derived.number_of_sections(), 4);
    Ok(())
}

#[test]
fn placeholder_row_for_today() -> Result<(), Error> {
    let derived = DerivedGrid::build(&CalendarConfig::new(), &records(), date!("2024-01-17"), 5)?;

    assert_eq!(derived.number_of_rows(0)?, 1);
    assert_eq!(derived.record_at(0, 0)?, None);
    assert!(derived.record_at(0, 1).is_err());

    assert_eq!(derived.number_of_rows(1)?, 2);
    assert_eq!(derived.record_at(1, 0)?, Some(&"swim"));
    assert_eq!(derived.record_at(1, 1)?, Some(&"bike"));
    assert_eq!(derived.record_at(1, 2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));

    assert_eq!(derived.number_of_rows(4), Err(Error::IndexOutOfRange { index: 4, len: 4 }));
    Ok(())
}

#[test]
fn today_with_records() -> Result<(), Error> {
    let derived = DerivedGrid::build(&CalendarConfig::new(), &records(), date!("2024-01-10"), 5)?;

    assert_eq!(derived.unique_days(), [date!("2024-01-10"), date!("2024-01-03"), date!("2023-11-01")]);
    assert_eq!(derived.number_of_rows(0)?, 2);
    assert_eq!(derived.record_at(0, 0)?, Some(&"swim"));
    Ok(())
}

#[test]
fn records_of_cells() -> Result<(), Error> {
    let derived = DerivedGrid::build(&CalendarConfig::new(), &records(), date!("2024-01-17"), 5)?;

    assert_eq!(derived.records_of(date!("2024-01-10")), ["swim", "bike"]);
    assert!(derived.records_of(date!("2024-01-08")).is_empty());
    assert!(derived.records_of(date!("2024-01-05")).is_empty());

    let index = derived.cell_index_for_day(date!("2024-01-03"))?;
    assert_eq!(derived.records_of(derived.day_for_cell_index(index)?), ["run"]);
    Ok(())
}

#[test]
fn section_of_days() -> Result<(), Error> {
    let derived = DerivedGrid::build(&CalendarConfig::new(), &records(), date!("2024-01-17"), 5)?;

    assert_eq!(derived.section_for_day(date!("2024-01-17")), Some(0));
    assert_eq!(derived.section_for_day(date!("2024-01-03")), Some(2));
    assert_eq!(derived.section_for_day(date!("2024-01-08")), None);
    assert_eq!(derived.day_of_section(3)?, date!("2023-11-01"));
    Ok(())
}

#[test]
fn provider_order_is_kept() -> Result<(), Error> {
    let derived = DerivedGrid::build(&CalendarConfig::new(), &Unsorted, date!("2024-01-17"), 5)?;

    assert_eq!(
        derived.unique_days(),
        [
            date!("2024-01-17"),
            date!("2024-01-05"),
            date!("2024-01-02"),
            date!("2024-01-09"),
            date!("2024-01-02"),
        ],
    );

    // Duplicated days display the same records
    assert_eq!(derived.section_for_day(date!("2024-01-02")), Some(2));
    assert_eq!(derived.record_at(2, 0)?, Some(&2));
    assert_eq!(derived.record_at(4, 0)?, Some(&2));
    Ok(())
}

#[test]
fn empty_provider() -> Result<(), Error> {
    let records: BTreeMap<NaiveDate, Vec<()>> = BTreeMap::new();
    let derived = DerivedGrid::build(&CalendarConfig::new(), &records, date!("2024-01-17"), 3)?;

    assert_eq!(derived.cell_count(), 21);
    assert_eq!(derived.unique_days(), [date!("2024-01-17")]);
    assert_eq!(derived.number_of_rows(0)?, 1);
    assert_eq!(derived.record_at(0, 0)?, None);
    Ok(())
}

#[test]
fn empty_provider_in_the_past() -> Result<(), Error> {
    let records: BTreeMap<NaiveDate, Vec<()>> = BTreeMap::new();
    assert_eq!(records.record_range(&CalendarConfig::new()), None);

    let derived = DerivedGrid::build(&CalendarConfig::new(), &records, date!("2001-06-13"), 3)?;
    assert_eq!(derived.display_range().first(), date!("2001-05-27"));
    assert_eq!(derived.display_range().last(), date!("2001-06-16"));
    assert_eq!(derived.unique_days(), [date!("2001-06-13")]);
    Ok(())
}

#[test]
fn empty_days_dont_extend_grid() -> Result<(), Error> {
    let records = BTreeMap::from([
        (date!("2023-06-01"), vec![]),
        (date!("2024-01-10"), vec!["swim"]),
        (date!("2024-03-01"), vec![]),
    ]);

    assert_eq!(
        records.record_range(&CalendarConfig::new()),
        Some(RecordRange::single(date!("2024-01-10"))),
    );

    let derived = DerivedGrid::build(&CalendarConfig::new(), &records, date!("2024-01-17"), 5)?;
    assert_eq!(derived.display_range().first(), date!("2023-12-17"));
    assert_eq!(derived.cell_count(), 35);
    assert_eq!(derived.unique_days(), [date!("2024-01-17"), date!("2024-01-10")]);
    Ok(())
}

/// Records exist on every day, but only some of them are listed.
struct Unlisted;

impl RecordProvider for Unlisted {
    type Record = &'static str;

    fn record_range<Tz: TimeZone>(&self, _config: &CalendarConfig<Tz>) -> Option<RecordRange> {
        RecordRange::new(date!("2024-01-08"), date!("2024-01-12")).ok()
    }

    fn unique_days_of_record<Tz: TimeZone>(&self, _config: &CalendarConfig<Tz>) -> Vec<NaiveDate> {
        vec![date!("2024-01-10")]
    }

    fn records_of<Tz: TimeZone>(
        &self,
        _day: NaiveDate,
        _config: &CalendarConfig<Tz>,
    ) -> Vec<&'static str> {
        vec!["note"]
    }
}

#[test]
fn unlisted_days_have_no_records() -> Result<(), Error> {
    let derived = DerivedGrid::build(&CalendarConfig::new(), &Unlisted, date!("2024-01-17"), 5)?;

    assert_eq!(derived.records_of(date!("2024-01-10")), ["note"]);
    assert!(derived.records_of(date!("2024-01-09")).is_empty());
    assert_eq!(derived.section_for_day(date!("2024-01-09")), None);

    // Today is always listed
    assert_eq!(derived.records_of(date!("2024-01-17")), ["note"]);
    Ok(())
}

#[test]
fn localized_texts() -> Result<(), Error> {
    let config = CalendarConfig::new().with_locale(Locale::fr_FR);
    let derived = DerivedGrid::build(&config, &records(), date!("2024-01-17"), 5)?;

    assert_eq!(derived.month_label(0)?, "octobre 2023");
    assert_eq!(derived.month_label(3)?, "janvier 2024");
    assert_eq!(derived.month_label(4), Err(Error::IndexOutOfRange { index: 4, len: 4 }));
    assert_eq!(derived.section_title(0)?, "mercredi 17 janvier 2024");
    Ok(())
}

#[test]
fn layout_matches_grid() -> Result<(), Error> {
    let derived = DerivedGrid::build(&CalendarConfig::new(), &records(), date!("2024-01-17"), 5)?;
    let layout = derived.layout(350.0, 60.0);

    assert_eq!(layout.row_count(), derived.row_count());
    assert_eq!(layout.content_size().height, 720.0);
    Ok(())
}
