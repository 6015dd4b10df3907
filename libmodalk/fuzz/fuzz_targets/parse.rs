#![no_main]

use libfuzzer_sys::{fuzz_target, Corpus};
use libmodalk::ParsedFormula;

fuzz_target!(|data: &str| -> Corpus {
    match ParsedFormula::new(data) {
        Ok(_) => Corpus::Keep,
        Err(_) => Corpus::Reject,
    }
});
