//! Solver configuration types.

use num_traits::Float;

/// Configuration for the implied-volatility solver.
///
/// Shared by both phases: Newton-Raphson and the regula-falsi fallback each
/// get the full `max_steps` budget.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for the precision (e.g., `f64`)
///
/// # Example
///
/// ```
/// use fxvol_models::solver::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.precision, 1e-5);
/// assert_eq!(config.max_steps, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<T: Float> {
    /// Convergence precision on the absolute price residual.
    ///
    /// A phase succeeds when `|market_price - value| < precision`.
    pub precision: T,

    /// Maximum number of iterations per phase.
    ///
    /// Acts as the only timeout surrogate; there is no other cancellation.
    pub max_steps: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default configuration: `precision = 1e-5`, `max_steps = 100`.
    fn default() -> Self {
        Self {
            precision: T::from(1e-5).unwrap(),
            max_steps: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Arguments
    ///
    /// * `precision` - Convergence precision (must be positive)
    /// * `max_steps` - Iteration budget per phase (must be > 0)
    ///
    /// # Panics
    ///
    /// Panics if `precision <= 0` or `max_steps == 0`.
    pub fn new(precision: T, max_steps: usize) -> Self {
        assert!(precision > T::zero(), "precision must be positive");
        assert!(max_steps > 0, "max_steps must be > 0");
        Self {
            precision,
            max_steps,
        }
    }
}
