/// Axis-aligned box bounds over a real vector space.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSpace {
    low: Vec<f32>,
    high: Vec<f32>,
}

impl BoxSpace {
    /// `[-bound, bound]` on every axis.
    #[must_use]
    pub fn symmetric(bound: f32, dim: usize) -> Self {
        Self { low: vec![-bound; dim], high: vec![bound; dim] }
    }

    /// `[-inf, inf]` on every axis.
    #[must_use]
    pub fn unbounded(dim: usize) -> Self {
        Self {
            low: vec![f32::NEG_INFINITY; dim],
            high: vec![f32::INFINITY; dim],
        }
    }

    #[must_use]
    pub fn dim(&self) -> usize {
        self.low.len()
    }

    #[must_use]
    pub fn low(&self) -> &[f32] {
        &self.low
    }

    #[must_use]
    pub fn high(&self) -> &[f32] {
        &self.high
    }

    /// Whether `point` has the right dimension and every component lies
    /// within bounds. NaN components never pass.
    #[must_use]
    pub fn contains(&self, point: &[f32]) -> bool {
        point.len() == self.dim()
            && point
                .iter()
                .zip(self.low.iter().zip(&self.high))
                .all(|(&p, (&lo, &hi))| p >= lo && p <= hi)
    }

    /// Uniform sample from the box. Only meaningful for finite bounds.
    #[must_use]
    pub fn sample(&self) -> Vec<f32> {
        self.low
            .iter()
            .zip(&self.high)
            .map(|(&lo, &hi)| lo + (hi - lo) * fastrand::f32())
            .collect()
    }
}
