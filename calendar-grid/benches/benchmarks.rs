use std::collections::BTreeMap;

use calendar_grid::month::compute_segments;
use calendar_grid::{CalendarConfig, DerivedGrid, GridLayout, Rect};

use chrono::{Days, NaiveDate, Weekday};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_records(today: NaiveDate, days: u64) -> BTreeMap<NaiveDate, Vec<u64>> {
    (0..days)
        .step_by(3)
        .map(|offset| (today - Days::new(offset), vec![offset; (offset % 4) as usize]))
        .collect()
}

fn criterion_benches(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
    let config = CalendarConfig::new().with_week_start(Weekday::Mon);

    let records_month = sample_records(today, 31);
    let records_decade = sample_records(today, 3653);

    c.bench_function("build one month", |b| {
        b.iter(|| DerivedGrid::build(&config, black_box(&records_month), today, 5).unwrap())
    });

    c.bench_function("build ten years", |b| {
        b.iter(|| DerivedGrid::build(&config, black_box(&records_decade), today, 5).unwrap())
    });

    let derived = DerivedGrid::build(&config, &records_decade, today, 5).unwrap();
    let range = derived.display_range();

    c.bench_function("segments ten years", |b| {
        b.iter(|| compute_segments(black_box(&range), Weekday::Mon).unwrap())
    });

    let layout = GridLayout::new(derived.cell_count(), derived.segments(), 375.0, 60.0)
        .with_overlays(true);

    let rect = Rect::new(0.0, layout.content_size().height / 2.0, 375.0, 300.0);

    c.bench_function("visible attributes", |b| {
        b.iter(|| black_box(&layout).visible_attributes(black_box(&rect)))
    });
}

criterion_group!(benches, criterion_benches);
criterion_main!(benches);
