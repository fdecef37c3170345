//! Test helpers: a table of edge-case values and a deterministic
//! pseudo-random generator.

/// Returns list of interesting values that various tests use to catch edge cases.
pub fn get_special_test_values() -> [f64; 20] {
    [
        -f64::NAN,
        f64::NAN,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::EPSILON,
        -f64::EPSILON,
        0.000000000000000000000000000000000000001,
        f64::MIN,
        f64::MAX,
        core::f64::consts::PI,
        core::f64::consts::LN_2,
        core::f64::consts::SQRT_2,
        core::f64::consts::E,
        0.0,
        -0.0,
        10.,
        -10.,
        -0.00001,
        0.1,
        355. / 113.,
    ]
}

// Linear-feedback shift register. We use this as a random number generator for
// tests.
pub struct Lfsr {
    state: u32,
}

impl Lfsr {
    /// Generate a new LFSR number generator.
    pub fn new() -> Lfsr {
        Lfsr { state: 0x13371337 }
    }

    fn step(&mut self) -> u32 {
        let taps = (self.state >> 24) ^ (self.state >> 23) ^ (self.state >> 22);
        let bit = (taps ^ (self.state >> 17) ^ 1) & 1;
        self.state = (self.state << 1) | bit;
        bit
    }

    fn get(&mut self) -> u32 {
        (0..32).fold(0, |acc, _| (acc << 1) | self.step())
    }

    /// Returns 64 random bits.
    pub fn get64(&mut self) -> u64 {
        ((self.get() as u64) << 32) | self.get() as u64
    }

    /// Returns a uniformly distributed value in [lo, hi).
    pub fn get_in_range(&mut self, lo: f64, hi: f64) -> f64 {
        let unit = (self.get64() >> 11) as f64 / (1u64 << 53) as f64;
        lo + (hi - lo) * unit
    }
}

#[test]
fn test_lfsr_balance() {
    let mut lfsr = Lfsr::new();
    let mut ones = 0;
    for _ in 0..10000 {
        ones += lfsr.get().count_ones();
    }
    let items = 10000. * 32.;
    // Make sure that we have around 50% 1s and 50% zeros.
    assert!((ones as f64) < 0.55 * items);
    assert!((ones as f64) > 0.45 * items);
}

#[test]
fn test_lfsr_range() {
    let mut lfsr = Lfsr::new();
    for _ in 0..1000 {
        let v = lfsr.get_in_range(-3., 5.);
        assert!((-3. ..5.).contains(&v));
    }
}
