use rand::{rngs::StdRng, Rng, SeedableRng};

use range_hash_rs::{
    ContextConfig, FieldContext, HasherErr, ModularEngine, NarrowContext, NarrowHasher,
    NonRollingHash, RangeHash, WideContext, WideHasher,
};

const PANGRAMS: &str = "the quick brown fox jumps over the lazy dog; pack my box with five dozen \
liquor jugs. sphinx of black quartz, judge my vow! how vexingly quick daft zebras jump. \
a man, a plan, a canal: panama. never odd or even. was it a car or a cat i saw? step on no pets.";

fn _test_against_reference_once<H>(hasher: &H, reference: &NonRollingHash, l: usize, r: usize)
where
    H: RangeHash,
    H::Hash: Into<u64>,
{
    let forward: u64 = hasher.get_hash(l, r).unwrap().into();
    let backward: u64 = hasher.rev_hash(l, r).unwrap().into();
    assert_eq!(forward, reference.get_hash(l, r).unwrap(), "get_hash({}, {})", l, r);
    assert_eq!(backward, reference.rev_hash(l, r).unwrap(), "rev_hash({}, {})", l, r);
}

fn _test_all_ranges<H>(hasher: &H, reference: &NonRollingHash)
where
    H: RangeHash,
    H::Hash: Into<u64>,
{
    assert_eq!(hasher.len(), reference.len());
    for l in 0..hasher.len() {
        for r in l..hasher.len() {
            _test_against_reference_once(hasher, reference, l, r);
        }
    }
}

fn _test_sampled_ranges<H>(hasher: &H, reference: &NonRollingHash, rng: &mut StdRng, samples: usize)
where
    H: RangeHash,
    H::Hash: Into<u64>,
{
    let n = hasher.len();
    for _ in 0..samples {
        let l = rng.gen_range(0..n);
        let r = rng.gen_range(l..n);
        _test_against_reference_once(hasher, reference, l, r);
    }
}

fn random_data<E: ModularEngine>(ctx: &FieldContext<E>, rng: &mut StdRng, n: usize) -> Vec<i64> {
    assert!(n < ctx.max_len());
    (0..n).map(|_| rng.gen()).collect()
}

#[test]
fn test_wide_matches_reference_on_text() {
    let ctx = WideContext::new(&ContextConfig::seeded(2024));
    let text: Vec<char> = PANGRAMS.chars().take(120).collect();
    let hasher = WideHasher::new(&ctx, &text).unwrap();
    let reference = NonRollingHash::new(&ctx, &text).unwrap();
    _test_all_ranges(&hasher, &reference);
}

#[test]
fn test_narrow_matches_reference_on_text() {
    let ctx: NarrowContext = NarrowContext::new(&ContextConfig::default()).unwrap();
    let text: Vec<char> = PANGRAMS.chars().take(120).collect();
    let hasher = NarrowHasher::new(&ctx, &text).unwrap();
    let reference = NonRollingHash::new(ctx.field(), &text).unwrap();
    _test_all_ranges(&hasher, &reference);
}

#[test]
fn test_matches_reference_on_random_integers() {
    let mut rng = StdRng::seed_from_u64(7);

    let wide = WideContext::new(&ContextConfig::seeded(7));
    let data = random_data(&wide, &mut rng, 2_000);
    let hasher = WideHasher::new(&wide, &data).unwrap();
    let reference = NonRollingHash::new(&wide, &data).unwrap();
    _test_sampled_ranges(&hasher, &reference, &mut rng, 300);

    let config = ContextConfig::new(4_096, None, Some(997)).unwrap();
    let narrow = NarrowContext::<911_382_323>::new(&config).unwrap();
    let data = random_data(narrow.field(), &mut rng, 2_000);
    let hasher = NarrowHasher::new(&narrow, &data).unwrap();
    let reference = NonRollingHash::new(narrow.field(), &data).unwrap();
    _test_sampled_ranges(&hasher, &reference, &mut rng, 300);
}

#[test]
fn test_racecar() {
    let text: Vec<char> = "racecar".chars().collect();
    let h = WideHasher::build(&text).unwrap();
    assert_eq!(h.get_hash(0, 6).unwrap(), h.rev_hash(0, 6).unwrap());
    assert_eq!(h.get_hash(2, 4).unwrap(), h.rev_hash(2, 4).unwrap());
    assert_eq!(h.get_hash(1, 1).unwrap(), h.rev_hash(5, 5).unwrap());
    assert_ne!(h.get_hash(1, 1).unwrap(), h.rev_hash(5, 6).unwrap());
    assert_ne!(h.get_hash(1, 5).unwrap(), h.rev_hash(0, 4).unwrap());
}

#[test]
fn test_integer_palindrome() {
    let data = [1, 2, 3, 2, 1];
    let h = WideHasher::build(&data).unwrap();
    assert_eq!(h.get_hash(0, 4).unwrap(), h.rev_hash(0, 4).unwrap());
    assert_ne!(h.get_hash(0, 3).unwrap(), h.rev_hash(0, 3).unwrap());

    let ctx: NarrowContext = NarrowContext::new(&ContextConfig::default()).unwrap();
    let h = NarrowHasher::new(&ctx, &data).unwrap();
    assert_eq!(h.get_hash(0, 4).unwrap(), h.rev_hash(0, 4).unwrap());
    assert_ne!(h.get_hash(0, 3).unwrap(), h.rev_hash(0, 3).unwrap());
}

#[test]
fn test_longest_palindrome_by_binary_search() {
    // odd-length palindromes around each center are monotone in radius
    let text: Vec<char> = PANGRAMS.chars().collect();
    let h = WideHasher::build(&text).unwrap();

    let mut best = (0, 0);
    for center in 0..text.len() {
        let (mut lo, mut hi) = (0, center.min(text.len() - 1 - center));
        while lo < hi {
            let mid = (lo + hi + 1) / 2;
            if h.is_palindrome(center - mid, center + mid).unwrap() {
                lo = mid;
            } else {
                hi = mid - 1;
            }
        }
        if 2 * lo + 1 > best.1 - best.0 + 1 {
            best = (center - lo, center + lo);
        }
    }

    let found: String = text[best.0..=best.1].iter().collect();
    assert_eq!(found, "step on no pets");
}

#[test]
fn test_repeated_windows() {
    let text: Vec<char> = "abcxabcyabcz".chars().collect();
    let h = WideHasher::build(&text).unwrap();
    let abc = h.get_hash(0, 2).unwrap();
    let starts: Vec<usize> = h
        .window_hashes(3)
        .filter(|(hash, _)| *hash == abc)
        .map(|(_, start)| start)
        .collect();
    assert_eq!(starts, vec![0, 4, 8]);
}

#[test]
fn test_capacity_exceeded() {
    let config = ContextConfig::with_max_len(5).unwrap();
    let ctx = WideContext::new(&config);
    assert_eq!(
        WideHasher::from_text(&ctx, "hello").err(),
        Some(HasherErr::CapacityExceeded { len: 5, max_len: 5 })
    );
    assert!(WideHasher::from_text(&ctx, "hell").is_ok());
}
