//! Exact symbolic expansion of associated Laguerre polynomials.
//!
//! The polynomial L_n^l(x) is built term by term from its defining sum with
//! arbitrary-precision rational coefficients, so no degree or order can
//! overflow. [`latex`] prints the expanded polynomial in canonical term
//! order and [`radial`] reuses the same coefficients for hydrogen-like
//! radial wavefunctions.

pub mod combinatorics;
pub mod laguerre;
pub mod latex;
pub mod polynomial;
pub mod radial;

pub use laguerre::{
    Expansion, LaguerreEvaluator, associated_laguerre, associated_laguerre_any_order,
};
pub use latex::to_latex;
pub use polynomial::RationalPolynomial;
pub use radial::{Orbital, RadialWavefunction};
