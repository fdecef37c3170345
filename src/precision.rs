/// The default series index ceiling. Every series sums terms with an index
/// in `[0, SERIES_LIMIT)`.
pub const SERIES_LIMIT: usize = 150;

/// Controls how far the series and iterations of this library are evaluated.
///
/// A series stops as soon as adding another term does not change the sum, or
/// moves it by no more than `tolerance * |sum|`. The `limit` is a hard
/// ceiling on the term index and guarantees termination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Precision {
    /// The exclusive upper bound of the series term index.
    limit: usize,
    /// The relative tolerance that ends a series early.
    tolerance: f64,
}

impl Precision {
    /// The precision used by the free functions of this crate.
    pub const DEFAULT: Precision = Precision::new(SERIES_LIMIT, 0.);

    pub const fn new(limit: usize, tolerance: f64) -> Self {
        Precision { limit, tolerance }
    }

    /// Returns a copy of this precision with a different term limit.
    pub const fn with_limit(&self, limit: usize) -> Self {
        Precision::new(limit, self.tolerance)
    }

    /// Returns a copy of this precision with a different relative tolerance.
    pub const fn with_tolerance(&self, tolerance: f64) -> Self {
        Precision::new(self.limit, tolerance)
    }

    /// Returns the exclusive upper bound of the series term index.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the relative tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns true if the step from `prev` to `sum` is small enough to stop.
    pub(crate) fn converged(&self, prev: f64, sum: f64) -> bool {
        if prev == sum {
            return true;
        }
        let delta = crate::abs(sum - prev);
        self.tolerance > 0. && delta <= self.tolerance * crate::abs(sum)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[test]
fn test_precision_builders() {
    let p = Precision::default();
    assert_eq!(p, Precision::DEFAULT);
    assert_eq!(p.limit(), 150);
    assert_eq!(p.tolerance(), 0.);

    let q = p.with_limit(40).with_tolerance(1e-9);
    assert_eq!(q.limit(), 40);
    assert_eq!(q.tolerance(), 1e-9);
    assert_ne!(q, p);
}

#[test]
fn test_converged() {
    let exact = Precision::DEFAULT;
    assert!(exact.converged(1.5, 1.5));
    assert!(!exact.converged(1.5, 1.5 + 1e-12));
    // NaN is used as the initial `prev` and never compares equal.
    assert!(!exact.converged(f64::NAN, 0.));

    let loose = exact.with_tolerance(1e-6);
    assert!(loose.converged(1.0, 1.0 + 1e-9));
    assert!(!loose.converged(1.0, 1.1));
}
