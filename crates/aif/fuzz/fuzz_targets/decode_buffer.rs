#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    use aif::aif_core::bytestream::ZCursor;

    let mut decoder = aif::AifDecoder::new(ZCursor::new(data));
    let _ = decoder.decode();

    let _ = aif::AifDecoder::new(ZCursor::new(data)).inspect();
});
