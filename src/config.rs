/// Default significand width, in bits, of the arbitrary-precision path
pub const DEFAULT_PRECISION: u32 = 256;

/// How the engine chooses between the machine and arbitrary-precision paths
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Native `f64` first, re-run in arbitrary precision only on overflow
    #[default]
    Adaptive,
    /// Always normalize and accumulate in arbitrary precision
    ArbitraryPrecision,
}

/// Tunables of a correlation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrelationConfig {
    /// Significand width of the arbitrary-precision sums
    precision: u32,
    /// Path selection
    strategy: Strategy,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            strategy: Strategy::Adaptive,
        }
    }
}

impl CorrelationConfig {
    /// Returns the working precision of the arbitrary-precision path in bits
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// Sets the working precision, clamped to what the backend supports
    ///
    /// # Arguments
    ///
    /// * `precision` - Significand width in bits
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The config for method chaining
    pub fn set_precision(&mut self, precision: u32) -> &mut Self {
        self.precision = precision.clamp(rug::float::prec_min(), rug::float::prec_max());
        self
    }

    /// Returns the path selection strategy
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Sets the path selection strategy
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The config for method chaining
    pub const fn set_strategy(&mut self, strategy: Strategy) -> &mut Self {
        self.strategy = strategy;
        self
    }
}
