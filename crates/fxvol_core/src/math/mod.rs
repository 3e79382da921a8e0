//! Mathematical primitives shared by the pricing engine and the solver.

pub mod distributions;

pub use distributions::{norm_cdf, norm_pdf};
