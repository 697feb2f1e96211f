#![no_main]
use libfuzzer_sys::fuzz_target;
use xpress_huffman::{compress_into, max_compressed_len};

fuzz_target!(|data: &[u8]| {
    let mut output = vec![0u8; max_compressed_len(data.len())];
    let len = compress_into(data, &mut output).expect("buffer sized by max_compressed_len must suffice");
    assert!(len <= output.len());
});
