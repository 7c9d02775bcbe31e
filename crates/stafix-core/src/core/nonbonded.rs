/// Lennard-Jones parameters of one atom-type group: the vdW size parameter
/// (radius or sigma, depending on the topology convention) and the well
/// depth epsilon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LjParams {
    pub size: f64,
    pub epsilon: f64,
}

impl LjParams {
    pub fn new(size: f64, epsilon: f64) -> Self {
        Self { size, epsilon }
    }
}

/// How a topology format stores the vdW size parameter. Amber topologies
/// combine per-type radii by summation, GROMACS comb-rule-2 topologies
/// combine sigmas by arithmetic mean. The two must never be mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeConvention {
    RadiusSum,
    SigmaMean,
}

impl SizeConvention {
    #[inline]
    fn combine(self, a: f64, b: f64) -> f64 {
        match self {
            SizeConvention::RadiusSum => a + b,
            SizeConvention::SigmaMean => 0.5 * (a + b),
        }
    }
}

#[inline]
pub fn scaled_epsilon(epsilon_a: f64, epsilon_b: f64, scale: f64) -> f64 {
    (epsilon_a * epsilon_b).sqrt() * scale
}

#[inline]
pub fn combine(a: LjParams, b: LjParams, scale: f64, convention: SizeConvention) -> LjParams {
    LjParams {
        size: convention.combine(a.size, b.size),
        epsilon: scaled_epsilon(a.epsilon, b.epsilon, scale),
    }
}

/// Enumerates every unordered pair over `n` groups, self-pairs included, in
/// the emission order both pipelines use: `(i, j)` with `j <= i`. Yields
/// exactly `n * (n + 1) / 2` pairs.
pub fn pair_indices(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(|i| (0..=i).map(move |j| (i, j)))
}
