#![no_main]

use std::io::Cursor;

use libfuzzer_sys::{fuzz_target, Corpus};
use libmodalk::decode_kripke;

fuzz_target!(|data: &[u8]| -> Corpus {
    match decode_kripke(Cursor::new(data)) {
        Ok(_) => Corpus::Keep,
        Err(_) => Corpus::Reject,
    }
});
