use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::sort::stable_sort_by_key;

pub(crate) const NUM_SYMBOLS: usize = 512;
pub(crate) const MAX_CODE_LENGTH: u8 = 15;

/// Canonical Huffman code lengths and codes over the 512-symbol
/// alphabet. A symbol with `lengths[i] == 0` did not occur and has no
/// valid code.
pub(crate) struct HuffmanTable {
    pub(crate) lengths: [u8; NUM_SYMBOLS],
    pub(crate) codes: [u16; NUM_SYMBOLS],
}

fn active_symbols(counts: &[u32; NUM_SYMBOLS]) -> Vec<usize> {
    (0..NUM_SYMBOLS).filter(|&s| counts[s] > 0).collect()
}

fn degenerate(sym: Option<usize>) -> HuffmanTable {
    let mut lengths = [0u8; NUM_SYMBOLS];
    let mut codes = [0u16; NUM_SYMBOLS];
    if let Some(s) = sym {
        lengths[s] = 1;
        codes[s] = 0;
    }
    HuffmanTable { lengths, codes }
}

/// Assigns canonical codes given lengths for a subset of active symbols
/// (parallel to `active`), producing the full 512-entry table.
fn assign_canonical(active: &[usize], lengths_for_active: &[u8]) -> HuffmanTable {
    let mut lengths = [0u8; NUM_SYMBOLS];
    for (i, &sym) in active.iter().enumerate() {
        lengths[sym] = lengths_for_active[i];
    }
    assign_canonical_codes(lengths)
}

/// The canonical code assignment rule shared by both builders: iterate
/// lengths ascending, and within a length assign codes to symbols in
/// ascending symbol-index order, incrementing by one each time; at the
/// end of each length left-shift the running code by one.
fn assign_canonical_codes(lengths: [u8; NUM_SYMBOLS]) -> HuffmanTable {
    let mut codes = [0u16; NUM_SYMBOLS];
    let max_len = *lengths.iter().max().unwrap_or(&0);
    if max_len == 0 {
        return HuffmanTable { lengths, codes };
    }
    let mut code: u16 = 0;
    for len in 1..=max_len {
        for (sym, &l) in lengths.iter().enumerate() {
            if l == len {
                codes[sym] = code;
                code += 1;
            }
        }
        code <<= 1;
    }
    HuffmanTable { lengths, codes }
}

/// Fast heuristic length-limited code builder (Moffat-Katajainen
/// style): merges the two lowest-weight nodes of a min-heap, tracking a
/// running depth in the low byte of each weight, and restarts with
/// rescaled weights whenever a length would exceed 15. Always
/// terminates with valid lengths, so the caller never needs a fallback
/// for this step alone (see `build_optimal` for the separate,
/// compression-ratio-driven fallback).
pub(crate) fn build_fast(counts: &[u32; NUM_SYMBOLS]) -> HuffmanTable {
    let active = active_symbols(counts);
    if active.len() <= 1 {
        return degenerate(active.first().copied());
    }

    let mut leaf_weight: Vec<u32> = active.iter().map(|&s| counts[s].max(1) << 8).collect();

    loop {
        let lengths = moffat_katajainen_lengths(&leaf_weight);
        if lengths.iter().all(|&l| l <= MAX_CODE_LENGTH) {
            return assign_canonical(&active, &lengths);
        }
        for w in leaf_weight.iter_mut() {
            *w = (1 + (*w >> 9)) << 8;
        }
    }
}

fn moffat_katajainen_lengths(leaf_weight: &[u32]) -> Vec<u8> {
    let n = leaf_weight.len();
    let total_nodes = 2 * n - 1;
    let mut weight = vec![0u32; total_nodes];
    let mut parent = vec![-1i32; total_nodes];
    weight[..n].copy_from_slice(leaf_weight);

    let mut heap: BinaryHeap<Reverse<(u32, usize)>> = BinaryHeap::with_capacity(n);
    for i in 0..n {
        heap.push(Reverse((weight[i], i)));
    }

    let mut next = n;
    while heap.len() > 1 {
        let Reverse((w1, i1)) = heap.pop().unwrap();
        let Reverse((w2, i2)) = heap.pop().unwrap();
        let depth1 = w1 & 0xFF;
        let depth2 = w2 & 0xFF;
        let combined = (((w1 >> 8) + (w2 >> 8)) << 8) | (1 + depth1.max(depth2));
        weight[next] = combined;
        parent[i1] = next as i32;
        parent[i2] = next as i32;
        heap.push(Reverse((combined, next)));
        next += 1;
    }

    let mut lengths = vec![0u8; n];
    for (i, len) in lengths.iter_mut().enumerate() {
        let mut hops = 0u32;
        let mut cur = i;
        while parent[cur] != -1 {
            cur = parent[cur] as usize;
            hops += 1;
        }
        *len = hops as u8;
    }
    lengths
}

/// A package-merge "collection": the set of original symbols folded
/// into one coin, represented per the design's guidance as a dense
/// per-symbol inclusion count plus a running total weight, rather than
/// as an explicit symbol set.
#[derive(Clone)]
struct Collection {
    total: u64,
    counts: Vec<u16>,
}

fn package(a: &Collection, b: &Collection) -> Collection {
    let counts = a.counts.iter().zip(&b.counts).map(|(x, y)| x + y).collect();
    Collection { total: a.total + b.total, counts }
}

/// Guaranteed-optimal length-limited code builder via package-merge,
/// used as a worst-case guard when the fast builder's ratio is not good
/// enough to beat the uncompressible-data fallback threshold.
pub(crate) fn build_optimal(counts: &[u32; NUM_SYMBOLS]) -> HuffmanTable {
    let mut active = active_symbols(counts);
    if active.len() <= 1 {
        return degenerate(active.first().copied());
    }
    stable_sort_by_key(&mut active, |s| counts[s]);
    let n = active.len();

    let originals: Vec<Collection> = (0..n)
        .map(|i| {
            let mut c = vec![0u16; n];
            c[i] = 1;
            Collection { total: counts[active[i]] as u64, counts: c }
        })
        .collect();

    let mut level_list = originals.clone();
    for _ in 1..MAX_CODE_LENGTH {
        let mut packages = Vec::with_capacity(level_list.len() / 2);
        let mut i = 0;
        while i + 1 < level_list.len() {
            packages.push(package(&level_list[i], &level_list[i + 1]));
            i += 2;
        }
        let mut next_list = Vec::with_capacity(originals.len() + packages.len());
        next_list.extend(originals.iter().cloned());
        next_list.extend(packages);
        next_list.sort_by(|a, b| a.total.cmp(&b.total));
        level_list = next_list;
    }

    let take = 2 * n - 2;
    let mut lengths = vec![0u8; n];
    for item in level_list.iter().take(take) {
        for (len, &count) in lengths.iter_mut().zip(&item.counts) {
            *len += count as u8;
        }
    }

    assign_canonical(&active, &lengths)
}
