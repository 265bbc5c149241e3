//! Hydrogen-like radial wavefunctions in atomic units.
//!
//! R_nl(r) = N e^{-rho/2} rho^l L_{n-l-1}^{2l+1}(rho), rho = 2Zr/n,
//! N = sqrt((2Z/n)^3 (n-l-1)! / (2n (n+l)!)).

use std::fmt;
use std::str::FromStr;

use laguerre_model::{EvaluationConfig, EvaluationError, StudioError};
use num_rational::BigRational;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::combinatorics::factorial;
use crate::laguerre::associated_laguerre;
use crate::polynomial::horner_f64;

/// Spectroscopic letters for l = 0, 1, 2, ...
const ORBITAL_LETTERS: [char; 8] = ['s', 'p', 'd', 'f', 'g', 'h', 'i', 'k'];

/// Bound-state quantum numbers, `1s`, `2p`, `3d`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Orbital {
    pub n: u32,
    pub l: u32,
}

impl Orbital {
    pub fn new(n: u32, l: u32) -> Result<Self, StudioError> {
        if n == 0 {
            return Err(StudioError::InvalidQuantumNumbers {
                n,
                l,
                message: "n must be at least 1".to_string(),
            });
        }
        if l >= n {
            return Err(StudioError::InvalidQuantumNumbers {
                n,
                l,
                message: "l must be smaller than n".to_string(),
            });
        }
        Ok(Self { n, l })
    }

    /// The six orbitals plotted by default: 1s, 2s, 2p, 3s, 3p, 3d.
    pub fn defaults() -> Vec<Orbital> {
        [(1, 0), (2, 0), (2, 1), (3, 0), (3, 1), (3, 2)]
            .into_iter()
            .map(|(n, l)| Orbital { n, l })
            .collect()
    }
}

impl fmt::Display for Orbital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match ORBITAL_LETTERS.get(self.l as usize) {
            Some(letter) => write!(f, "{}{}", self.n, letter),
            None => write!(f, "{}(l={})", self.n, self.l),
        }
    }
}

impl FromStr for Orbital {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = |message: &str| StudioError::Config(format!("orbital {s:?}: {message}"));
        let letter = s
            .chars()
            .last()
            .ok_or_else(|| invalid("empty orbital label"))?;
        let digits = &s[..s.len() - letter.len_utf8()];
        let n: u32 = digits
            .parse()
            .map_err(|_| invalid("expected a principal number before the letter"))?;
        let l = ORBITAL_LETTERS
            .iter()
            .position(|c| *c == letter.to_ascii_lowercase())
            .ok_or_else(|| invalid("unknown orbital letter"))?;
        Orbital::new(n, l as u32)
    }
}

/// R_nl for one orbital with its Laguerre coefficients converted once.
#[derive(Debug, Clone)]
pub struct RadialWavefunction {
    orbital: Orbital,
    z: f64,
    norm: f64,
    laguerre: Vec<f64>,
}

impl RadialWavefunction {
    /// The principal number is held to the same degree budget as a
    /// polynomial expansion.
    pub fn new(orbital: Orbital, z: f64, config: &EvaluationConfig) -> Result<Self, StudioError> {
        let Orbital { n, l } = Orbital::new(orbital.n, orbital.l)?;
        if n > config.max_degree {
            return Err(EvaluationError::BudgetExceeded {
                degree: n,
                limit: config.max_degree,
            }
            .into());
        }
        if !(z.is_finite() && z > 0.0) {
            return Err(StudioError::InvalidQuantumNumbers {
                n,
                l,
                message: format!("nuclear charge must be positive (got {z})"),
            });
        }
        let ratio = BigRational::new(factorial(n - l - 1), factorial(n + l))
            .to_f64()
            .unwrap_or(0.0);
        let nf = f64::from(n);
        let norm = ((2.0 * z / nf).powi(3) * ratio / (2.0 * nf)).sqrt();
        let laguerre = associated_laguerre(n - l - 1, 2 * l + 1).to_f64_coefficients();
        Ok(Self {
            orbital,
            z,
            norm,
            laguerre,
        })
    }

    pub fn orbital(&self) -> Orbital {
        self.orbital
    }

    /// R_nl(r) with r in Bohr radii.
    pub fn eval(&self, r: f64) -> f64 {
        let rho = 2.0 * self.z * r / f64::from(self.orbital.n);
        let rho_l = rho.powi(self.orbital.l as i32);
        self.norm * (-rho / 2.0).exp() * rho_l * horner_f64(&self.laguerre, rho)
    }

    /// `samples` evenly spaced points on [0, r_max], inclusive.
    pub fn sample(&self, r_max: f64, samples: usize) -> Vec<(f64, f64)> {
        linspace(0.0, r_max, samples)
            .map(|r| (r, self.eval(r)))
            .collect()
    }
}

/// Evenly spaced values including both ends.
pub fn linspace(start: f64, end: f64, count: usize) -> impl Iterator<Item = f64> {
    let step = if count > 1 {
        (end - start) / (count - 1) as f64
    } else {
        0.0
    };
    (0..count).map(move |i| start + step * i as f64)
}
