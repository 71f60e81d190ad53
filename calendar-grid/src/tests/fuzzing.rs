use arbitrary::{Arbitrary, Unstructured};
use chrono::Datelike;

use crate::date;
use crate::fuzzing::{run_fuzz_grid, Data};

fn data(today: &str, records_before_today: u16, week_start_day: u8) -> Data {
    Data {
        today_days: date!(today).num_days_from_ce(),
        records_before_today,
        week_start_day,
        default_weeks: 5,
        viewport: [375, 300],
    }
}

#[test]
fn no_fuzz_before_year_1() {
    let mut input = data("2024-01-17", 0, 1);
    input.today_days = -10;
    assert!(!run_fuzz_grid(input));
}

#[test]
fn no_fuzz_with_invalid_week_start() {
    assert!(!run_fuzz_grid(data("2024-01-17", 0, 0)));
    assert!(!run_fuzz_grid(data("2024-01-17", 0, 8)));
}

#[test]
fn fuzz_known_inputs() {
    assert!(run_fuzz_grid(data("2024-01-17", 78, 1)));
    assert!(run_fuzz_grid(data("2024-02-29", 366, 2)));
    assert!(run_fuzz_grid(data("2023-12-31", 0, 7)));
    assert!(run_fuzz_grid(data("0001-01-07", 0, 1)));
}

#[test]
fn fuzz_from_raw_bytes() {
    let mut seed = 0x2545_f491_u32;
    let mut bytes = Vec::with_capacity(4096);

    for _ in 0..bytes.capacity() {
        // xorshift
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        bytes.push(seed as u8);
    }

    let mut relevant = 0;

    for chunk in bytes.chunks(16) {
        let Ok(input) = Data::arbitrary(&mut Unstructured::new(chunk)) else {
            continue;
        };

        if run_fuzz_grid(input) {
            relevant += 1;
        }
    }

    // Only checks that the harness runs, most random inputs are irrelevant
    assert!(relevant <= bytes.len() / 16);
}
