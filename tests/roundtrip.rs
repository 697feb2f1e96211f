use xpress_huffman::{compress, max_compressed_len, MIN_DATA};

mod support;
use support::decode;

#[test]
fn empty_input() {
    let compressed = compress(&[]).unwrap();
    assert_eq!(compressed.len(), MIN_DATA);
    assert_eq!(decode(&compressed), Vec::<u8>::new());
}

#[test]
fn single_byte() {
    let compressed = compress(b"Q").unwrap();
    assert_eq!(decode(&compressed), b"Q");
}

#[test]
fn all_byte_values_once() {
    let input: Vec<u8> = (0..=255u8).collect();
    let compressed = compress(&input).unwrap();
    assert!(compressed.len() <= max_compressed_len(input.len()));
    assert_eq!(decode(&compressed), input);
}

#[test]
fn single_chunk_of_repeated_bytes() {
    let input = vec![0x41u8; 65536];
    let compressed = compress(&input).unwrap();
    assert!(compressed.len() < input.len() / 10);
    assert_eq!(decode(&compressed), input);
}

#[test]
fn two_chunks_of_pseudo_random_bytes() {
    let mut input = Vec::with_capacity(131072);
    let mut seed = 0xC0FFEEu32;
    for _ in 0..131072 {
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        input.push((seed >> 16) as u8);
    }
    let compressed = compress(&input).unwrap();
    assert!(compressed.len() <= max_compressed_len(input.len()));
    assert_eq!(decode(&compressed), input);
}

#[test]
fn cross_chunk_repeat() {
    let mut input = Vec::with_capacity(100000);
    while input.len() < 100000 {
        input.extend_from_slice(b"ABCDEFGH");
    }
    input.truncate(100000);
    let compressed = compress(&input).unwrap();
    assert!(compressed.len() < input.len() / 4);
    assert_eq!(decode(&compressed), input);
}

#[test]
fn text_with_long_range_repetition() {
    let paragraph = b"the quick brown fox jumps over the lazy dog. ";
    let mut input = Vec::new();
    for _ in 0..3000 {
        input.extend_from_slice(paragraph);
    }
    input.extend_from_slice(b"a sentence that never appeared before this point in the stream.");
    let compressed = compress(&input).unwrap();
    assert_eq!(decode(&compressed), input);
}

#[test]
fn input_just_below_and_above_chunk_boundary() {
    for len in [65535usize, 65536, 65537, 131071, 131072, 131073] {
        let input: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
        let compressed = compress(&input).unwrap();
        assert_eq!(decode(&compressed), input);
    }
}

#[test]
fn compress_into_matches_compress() {
    let input = b"mirror mirror on the wall, who compresses best of all?".repeat(40);
    let vec_result = compress(&input).unwrap();

    let mut buf = vec![0u8; max_compressed_len(input.len())];
    let len = xpress_huffman::compress_into(&input, &mut buf).unwrap();
    buf.truncate(len);

    assert_eq!(vec_result, buf);
    assert_eq!(decode(&buf), input);
}
