#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    use aif::rle::{compress_row, decompress_row};

    if data.is_empty() {
        return;
    }
    let bpp = if data[0] & 1 == 0 { 1 } else { 3 };
    let row = &data[1..data.len() - (data.len() - 1) % bpp];

    let mut compressed = vec![];
    compress_row(row, bpp, &mut compressed);

    let mut decoded = vec![0; row.len()];
    let used = decompress_row(&compressed, &mut decoded, bpp).unwrap();

    assert_eq!(used, compressed.len());
    assert_eq!(decoded, row);
});
