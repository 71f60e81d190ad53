#![no_main]
use calendar_grid::fuzzing::{run_fuzz_grid, Data};
use libfuzzer_sys::{fuzz_target, Corpus};

fuzz_target!(|data: Data| -> Corpus {
    if run_fuzz_grid(data) {
        Corpus::Keep
    } else {
        Corpus::Reject
    }
});
