//! Regenerates the three benchmark CSVs consumed by the viewer:
//! `randomSorted.csv`, `nearlySorted.csv`, `reverseSorted.csv`.
//!
//! Runs six string-sorting algorithms over random, nearly-sorted and
//! reverse-sorted inputs of growing size, counting character comparisons,
//! and writes one row per (size, algorithm) with averaged results.

use std::cmp::Ordering;
use std::time::Instant;

use anyhow::{Context, Result};

const RADIX: usize = 256;
/// Below this slice length the hybrid radix sort falls back to quicksort.
const QUICKSORT_CUTOFF: usize = 74;
const TRIALS: u32 = 5;
const BASE_SIZE: usize = 3000;

// ---------------------------------------------------------------------------
// Deterministic PRNG (xoshiro256**)
// ---------------------------------------------------------------------------

struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform integer in `lo..=hi`.
    fn next_range(&mut self, lo: usize, hi: usize) -> usize {
        lo + (self.next_u64() % (hi - lo + 1) as u64) as usize
    }
}

// ---------------------------------------------------------------------------
// Input generation
// ---------------------------------------------------------------------------

struct StringGenerator {
    rng: SimpleRng,
    alphabet: Vec<u8>,
}

impl StringGenerator {
    fn new(seed: u64) -> Self {
        let mut alphabet: Vec<u8> = Vec::new();
        alphabet.extend(b'A'..=b'Z');
        alphabet.extend(b'a'..=b'z');
        alphabet.extend(b'0'..=b'9');
        alphabet.extend_from_slice(b"!@#%:;^&*()-.");
        StringGenerator {
            rng: SimpleRng::new(seed),
            alphabet,
        }
    }

    /// `n` random strings of length 10..=200.
    fn random(&mut self, n: usize) -> Vec<String> {
        (0..n)
            .map(|_| {
                let len = self.rng.next_range(10, 200);
                let bytes: Vec<u8> = (0..len)
                    .map(|_| {
                        let idx = self.rng.next_range(0, self.alphabet.len() - 1);
                        self.alphabet[idx]
                    })
                    .collect();
                String::from_utf8(bytes).expect("alphabet is ASCII")
            })
            .collect()
    }

    fn reverse_sorted(&self, src: &[String]) -> Vec<String> {
        let mut v = src.to_vec();
        v.sort_unstable();
        v.reverse();
        v
    }

    /// Sorted copy of `src` with `swaps` random transpositions.
    fn nearly_sorted(&mut self, src: &[String], swaps: usize) -> Vec<String> {
        let mut v = src.to_vec();
        v.sort_unstable();
        for _ in 0..swaps {
            let a = self.rng.next_range(0, v.len() - 1);
            let b = self.rng.next_range(0, v.len() - 1);
            v.swap(a, b);
        }
        v
    }
}

// ---------------------------------------------------------------------------
// Character-comparison counting
// ---------------------------------------------------------------------------

/// Counts individual character comparisons across a whole sort run.
#[derive(Default)]
struct CompareCounter {
    count: u64,
}

impl CompareCounter {
    /// Lexicographic comparison, counting one per inspected character pair
    /// plus one for the final length tie-break.
    fn compare(&mut self, a: &str, b: &str) -> Ordering {
        let (ab, bb) = (a.as_bytes(), b.as_bytes());
        let n = ab.len().min(bb.len());
        for i in 0..n {
            self.count += 1;
            if ab[i] != bb[i] {
                return ab[i].cmp(&bb[i]);
            }
        }
        self.count += 1;
        ab.len().cmp(&bb.len())
    }

    /// Character at depth `d`, or -1 past the end of the string. Every probe
    /// counts as one comparison.
    fn char_at(&mut self, s: &str, d: usize) -> i32 {
        self.count += 1;
        s.as_bytes().get(d).map(|&b| b as i32).unwrap_or(-1)
    }

    /// Length of the longest common prefix, counting each compared position.
    fn lcp(&mut self, a: &str, b: &str) -> usize {
        let (ab, bb) = (a.as_bytes(), b.as_bytes());
        let n = ab.len().min(bb.len());
        let mut lcp = 0;
        while lcp < n {
            self.count += 1;
            if ab[lcp] != bb[lcp] {
                break;
            }
            lcp += 1;
        }
        if lcp == n {
            self.count += 1;
        }
        lcp
    }
}

fn byte_at(s: &str, d: usize) -> i32 {
    s.as_bytes().get(d).map(|&b| b as i32).unwrap_or(-1)
}

// ---------------------------------------------------------------------------
// The six sorting algorithms
// ---------------------------------------------------------------------------

type SortFn = fn(&mut [String], &mut CompareCounter);

const ALGORITHMS: [(&str, SortFn); 6] = [
    ("stdQuickSort", std_quick_sort),
    ("stdMergeSort", std_merge_sort),
    ("strQuickSort", string_quick_sort),
    ("strMergeSort", string_merge_sort),
    ("radixSort", radix_sort),
    ("radixQuickSort", radix_quick_sort),
];

fn std_quick_sort(arr: &mut [String], cmp: &mut CompareCounter) {
    arr.sort_unstable_by(|a, b| cmp.compare(a, b));
}

fn std_merge_sort(arr: &mut [String], cmp: &mut CompareCounter) {
    arr.sort_by(|a, b| cmp.compare(a, b));
}

fn string_quick_sort(arr: &mut [String], cmp: &mut CompareCounter) {
    three_way_quick_sort(arr, 0, cmp);
}

/// Three-way radix quicksort, partitioning on the character at depth `d`.
fn three_way_quick_sort(arr: &mut [String], d: usize, cmp: &mut CompareCounter) {
    if arr.len() < 2 {
        return;
    }
    let pivot = cmp.char_at(&arr[0], d);
    let mut i = 0usize;
    let mut j = arr.len() - 1;
    let mut k = 0usize;
    while k <= j {
        let t = cmp.char_at(&arr[k], d);
        if t < pivot {
            arr.swap(i, k);
            i += 1;
            k += 1;
        } else if t > pivot {
            arr.swap(k, j);
            if j == 0 {
                break;
            }
            j -= 1;
        } else {
            k += 1;
        }
    }

    let (lt, rest) = arr.split_at_mut(i);
    three_way_quick_sort(lt, d, cmp);

    let (eq, gt) = rest.split_at_mut(j + 1 - i);
    // Strings exhausted at this depth are already in place.
    if cmp.char_at(&eq[0], d) != -1 {
        three_way_quick_sort(eq, d + 1, cmp);
    }
    three_way_quick_sort(gt, d, cmp);
}

fn string_merge_sort(arr: &mut [String], cmp: &mut CompareCounter) {
    let n = arr.len();
    if n < 2 {
        return;
    }
    let mid = n / 2;
    string_merge_sort(&mut arr[..mid], cmp);
    string_merge_sort(&mut arr[mid..], cmp);
    lcp_merge(arr, mid, cmp);
}

/// Merge two sorted halves, comparing only the first character after the
/// common prefix of the head elements.
fn lcp_merge(arr: &mut [String], mid: usize, cmp: &mut CompareCounter) {
    let mut temp = Vec::with_capacity(arr.len());
    let (mut i, mut j) = (0, mid);
    while i < mid && j < arr.len() {
        let lcp = cmp.lcp(&arr[i], &arr[j]);
        let ci = byte_at(&arr[i], lcp);
        let cj = byte_at(&arr[j], lcp);
        cmp.count += 1;
        if ci <= cj {
            temp.push(arr[i].clone());
            i += 1;
        } else {
            temp.push(arr[j].clone());
            j += 1;
        }
    }
    while i < mid {
        temp.push(arr[i].clone());
        i += 1;
    }
    while j < arr.len() {
        temp.push(arr[j].clone());
        j += 1;
    }
    for (dst, src) in arr.iter_mut().zip(temp) {
        *dst = src;
    }
}

fn radix_sort(arr: &mut [String], cmp: &mut CompareCounter) {
    msd_radix_sort(arr, 0, cmp);
}

fn msd_radix_sort(arr: &mut [String], d: usize, cmp: &mut CompareCounter) {
    if arr.len() < 2 {
        return;
    }
    radix_partition_pass(arr, d, cmp, msd_radix_sort);
}

fn radix_quick_sort(arr: &mut [String], cmp: &mut CompareCounter) {
    msd_radix_quick_sort(arr, 0, cmp);
}

fn msd_radix_quick_sort(arr: &mut [String], d: usize, cmp: &mut CompareCounter) {
    if arr.len() < 2 {
        return;
    }
    if arr.len() < QUICKSORT_CUTOFF {
        three_way_quick_sort(arr, d, cmp);
        return;
    }
    radix_partition_pass(arr, d, cmp, msd_radix_quick_sort);
}

/// One MSD counting-sort pass on the character at depth `d`, recursing into
/// each bucket of two or more strings via `recurse`.
fn radix_partition_pass(
    arr: &mut [String],
    d: usize,
    cmp: &mut CompareCounter,
    recurse: fn(&mut [String], usize, &mut CompareCounter),
) {
    // Bucket 0 holds strings exhausted at this depth (char -1).
    let mut count = vec![0usize; RADIX + 2];
    for s in arr.iter() {
        let c = (cmp.char_at(s, d) + 2) as usize;
        count[c] += 1;
    }
    for i in 0..=RADIX {
        count[i + 1] += count[i];
    }

    let mut aux = vec![String::new(); arr.len()];
    for s in arr.iter() {
        let c = (cmp.char_at(s, d) + 1) as usize;
        aux[count[c]] = s.clone();
        count[c] += 1;
    }
    for (dst, src) in arr.iter_mut().zip(aux) {
        *dst = src;
    }

    // After distribution count[i] is the start of the bucket for char i.
    for i in 0..RADIX {
        let (start, end) = (count[i], count[i + 1]);
        if end > start + 1 {
            recurse(&mut arr[start..end], d + 1, cmp);
        }
    }
}

// ---------------------------------------------------------------------------
// Measurement
// ---------------------------------------------------------------------------

/// Average wall time (ms) and comparison count over `trials` runs, each on a
/// fresh copy of the input.
fn measure(data: &[String], sort: SortFn, trials: u32) -> (f64, u64) {
    let mut total_ms = 0.0;
    let mut total_cmp = 0u64;
    for _ in 0..trials {
        let mut v = data.to_vec();
        let mut cmp = CompareCounter::default();
        let start = Instant::now();
        sort(&mut v, &mut cmp);
        total_ms += start.elapsed().as_secs_f64() * 1000.0;
        total_cmp += cmp.count;
    }
    (total_ms / trials as f64, total_cmp / u64::from(trials))
}

fn main() -> Result<()> {
    // Default to info so progress lines stay visible without RUST_LOG.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut gen = StringGenerator::new(42);
    let sizes: Vec<usize> = (1..=30).map(|i| i * 100).collect();

    let shape_files = ["randomSorted.csv", "nearlySorted.csv", "reverseSorted.csv"];
    let mut writers = Vec::with_capacity(shape_files.len());
    for file in shape_files {
        let mut w = csv::Writer::from_path(file)
            .with_context(|| format!("creating {file}"))?;
        w.write_record(["Size", "Alg", "Time(ms)", "Comparisons"])
            .context("writing header")?;
        writers.push(w);
    }

    let base = gen.random(BASE_SIZE);
    let mut total_rows = 0usize;

    for &n in &sizes {
        let shapes = [
            gen.random(BASE_SIZE),
            gen.nearly_sorted(&base, 10),
            gen.reverse_sorted(&base),
        ];

        for (shape_idx, full) in shapes.into_iter().enumerate() {
            let mut data = full;
            data.truncate(n);

            for (alg, sort) in ALGORITHMS {
                let (ms, comparisons) = measure(&data, sort, TRIALS);
                writers[shape_idx]
                    .write_record([
                        n.to_string(),
                        alg.to_string(),
                        ms.to_string(),
                        comparisons.to_string(),
                    ])
                    .with_context(|| format!("writing {}", shape_files[shape_idx]))?;
                total_rows += 1;
            }
        }
        log::info!("finished size {n}");
    }

    for mut w in writers {
        w.flush().context("flushing output")?;
    }

    println!(
        "Wrote {total_rows} rows across {} files ({} sizes x {} algorithms each)",
        shape_files.len(),
        sizes.len(),
        ALGORITHMS.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(n: usize) -> Vec<String> {
        StringGenerator::new(7).random(n)
    }

    fn reference_sorted(data: &[String]) -> Vec<String> {
        let mut v = data.to_vec();
        v.sort_unstable();
        v
    }

    #[test]
    fn every_algorithm_sorts_correctly() {
        let data = sample(300);
        let expected = reference_sorted(&data);
        for (name, sort) in ALGORITHMS {
            let mut v = data.clone();
            let mut cmp = CompareCounter::default();
            sort(&mut v, &mut cmp);
            assert_eq!(v, expected, "{name} produced a wrong ordering");
            assert!(cmp.count > 0, "{name} counted no comparisons");
        }
    }

    #[test]
    fn sorts_handle_duplicates_and_shared_prefixes() {
        let data: Vec<String> = ["abc", "ab", "abc", "abcd", "", "ab", "b"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let expected = reference_sorted(&data);
        for (name, sort) in ALGORITHMS {
            let mut v = data.clone();
            let mut cmp = CompareCounter::default();
            sort(&mut v, &mut cmp);
            assert_eq!(v, expected, "{name} failed on duplicates");
        }
    }

    #[test]
    fn sorts_handle_tiny_inputs() {
        for len in 0..3 {
            let data = sample(len);
            let expected = reference_sorted(&data);
            for (_, sort) in ALGORITHMS {
                let mut v = data.clone();
                sort(&mut v, &mut CompareCounter::default());
                assert_eq!(v, expected);
            }
        }
    }

    #[test]
    fn generated_strings_stay_in_bounds() {
        let mut gen = StringGenerator::new(1);
        for s in gen.random(200) {
            assert!((10..=200).contains(&s.len()));
            assert!(s.is_ascii());
        }
    }

    #[test]
    fn nearly_sorted_is_a_permutation_of_the_source() {
        let mut gen = StringGenerator::new(3);
        let src = gen.random(100);
        let nearly = gen.nearly_sorted(&src, 10);
        assert_eq!(reference_sorted(&nearly), reference_sorted(&src));
    }

    #[test]
    fn reverse_sorted_is_descending() {
        let mut gen = StringGenerator::new(5);
        let src = gen.random(50);
        let rev = gen.reverse_sorted(&src);
        assert!(rev.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn counting_comparator_matches_plain_ordering() {
        let mut cmp = CompareCounter::default();
        assert_eq!(cmp.compare("abc", "abd"), Ordering::Less);
        assert_eq!(cmp.compare("abc", "abc"), Ordering::Equal);
        assert_eq!(cmp.compare("abcd", "abc"), Ordering::Greater);
        assert!(cmp.count >= 9);
    }

    #[test]
    fn char_probe_returns_sentinel_past_the_end() {
        let mut cmp = CompareCounter::default();
        assert_eq!(cmp.char_at("ab", 0), i32::from(b'a'));
        assert_eq!(cmp.char_at("ab", 2), -1);
        assert_eq!(cmp.count, 2);
    }
}
