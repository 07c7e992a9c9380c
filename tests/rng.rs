use fixed_dh::Error;
use fixed_dh::primitives::{U256, Uint};
use fixed_dh::rng::{
    EntropySource, HardwareRng, RETRY_LIMIT, RngWords, SourceUnavailable, SystemRng, WordSource,
    fill_words,
};

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Fails `failures` times before every word it yields.
struct Flaky {
    failures: u32,
    pending: u32,
    next: u64,
    calls: u32,
}

impl Flaky {
    fn new(failures: u32) -> Self {
        Self {
            failures,
            pending: failures,
            next: 1,
            calls: 0,
        }
    }
}

impl WordSource for Flaky {
    fn try_next_word(&mut self) -> Result<u64, SourceUnavailable> {
        self.calls += 1;

        if self.pending > 0 {
            self.pending -= 1;
            return Err(SourceUnavailable);
        }

        self.pending = self.failures;
        let word = self.next;
        self.next += 1;

        Ok(word)
    }
}

#[test]
fn transient_failures_are_retried() {
    let mut source = Flaky::new(3);
    let mut words = [0u64; 4];

    fill_words(&mut source, &mut words).unwrap();

    assert_eq!(words, [1, 2, 3, 4]);
    assert_eq!(source.calls, 4 * 4);
}

#[test]
fn retry_limit_is_inclusive() {
    let mut source = Flaky::new(RETRY_LIMIT);
    let mut words = [0u64; 2];

    fill_words(&mut source, &mut words).unwrap();
    assert_eq!(words, [1, 2]);
}

#[test]
fn persistent_failure_exhausts() {
    let mut source = Flaky::new(RETRY_LIMIT + 1);
    let mut words = [0u64; 2];

    assert_eq!(
        fill_words(&mut source, &mut words),
        Err(Error::RandomGenerationExhausted {
            attempts: RETRY_LIMIT + 1
        })
    );
    assert_eq!(source.calls, RETRY_LIMIT + 1);
}

#[test]
fn random_value_fails_on_exhaustion() {
    let mut source = Flaky::new(u32::MAX);

    assert_eq!(
        U256::random(&mut source),
        Err(Error::RandomGenerationExhausted {
            attempts: RETRY_LIMIT + 1
        })
    );
}

#[test]
fn seeded_generator_is_deterministic() {
    let a = U256::random(&mut RngWords(StdRng::seed_from_u64(99))).unwrap();
    let b = U256::random(&mut RngWords(StdRng::seed_from_u64(99))).unwrap();
    let c = U256::random(&mut RngWords(StdRng::seed_from_u64(100))).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn random_value_respects_width() {
    let mut source = RngWords(StdRng::seed_from_u64(5));

    for _ in 0..32 {
        let x = Uint::<100, 2>::random(&mut source).unwrap();
        assert_eq!(x.as_limbs()[1] >> 36, 0);
    }
}

#[test]
fn rng_words_returns_generator() {
    let words = RngWords(StdRng::seed_from_u64(1));
    let mut generator = words.into_inner();
    let mut again = StdRng::seed_from_u64(1);

    assert_eq!(
        rand::RngCore::next_u64(&mut generator),
        rand::RngCore::next_u64(&mut again)
    );
}

#[test]
fn system_source_yields_words() {
    let mut source = SystemRng;
    let mut words = [0u64; 8];

    fill_words(&mut source, &mut words).unwrap();
    assert!(words.iter().any(|&w| w != 0));
}

#[test]
fn default_source_yields_words() {
    let mut source = EntropySource::detect();
    let mut words = [0u64; 8];

    fill_words(&mut source, &mut words).unwrap();
    assert!(words.iter().any(|&w| w != 0));

    if let Some(mut hardware) = HardwareRng::new() {
        assert!(matches!(source, EntropySource::Hardware(_)));
        fill_words(&mut hardware, &mut words).unwrap();
    }
}
