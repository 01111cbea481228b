use tracing::warn;

/// Ideal edge lengths for every level of a hierarchy, coarsest first.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleSeries {
    values: Vec<f64>,
    gamma: f64,
}

impl ScaleSeries {
    /// Ratio between the ideal lengths of consecutive levels without weighted coarsening.
    pub const DEFAULT_DECAY: f64 = 0.75;

    /// Ideal length used when the coarsest layout has no usable edge length.
    pub const FALLBACK_IDEAL_LENGTH: f64 = 1.0;

    /// `levels` values starting at `coarsest` and multiplied by `gamma` at each finer level.
    pub fn new(coarsest: f64, gamma: f64, levels: usize) -> Self {
        let mut values: Vec<f64> = Vec::with_capacity(levels);
        let mut k = coarsest;
        for _ in 0..levels {
            values.push(k);
            k *= gamma;
        }
        Self { values, gamma }
    }

    /// Series for a hierarchy of `levels` levels whose coarsest initial layout has the given
    /// average edge length.
    pub fn for_hierarchy(
        coarsest_average_edge_length: f64,
        levels: usize,
        weighted_coarse: bool,
    ) -> Self {
        let gamma = if weighted_coarse {
            1.0
        } else {
            Self::DEFAULT_DECAY
        };
        Self::new(
            ideal_length_or_fallback(coarsest_average_edge_length),
            gamma,
            levels,
        )
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Ideal length at `level`, counted from the coarsest.
    pub fn get(&self, level: usize) -> Option<f64> {
        self.values.get(level).copied()
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// `avg` when it is a usable ideal length, otherwise [`ScaleSeries::FALLBACK_IDEAL_LENGTH`].
pub(crate) fn ideal_length_or_fallback(avg: f64) -> f64 {
    if avg.is_finite() && avg > 0.0 {
        return avg;
    }
    warn!(
        average_edge_length = avg,
        fallback = ScaleSeries::FALLBACK_IDEAL_LENGTH,
        "no usable edge length, using fallback ideal length"
    );
    ScaleSeries::FALLBACK_IDEAL_LENGTH
}

#[cfg(test)]
mod tests {
    use super::ScaleSeries;

    #[test]
    fn unweighted_series_decays_geometrically() {
        let s = ScaleSeries::for_hierarchy(8.0, 4, false);
        assert_eq!(s.values(), &[8.0, 6.0, 4.5, 3.375]);
        assert_eq!(s.gamma(), ScaleSeries::DEFAULT_DECAY);
        assert!(s.values().windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn weighted_series_is_constant() {
        let s = ScaleSeries::for_hierarchy(2.5, 3, true);
        assert_eq!(s.values(), &[2.5, 2.5, 2.5]);
        assert_eq!(s.get(2), Some(2.5));
        assert_eq!(s.get(3), None);
    }

    #[test]
    fn unusable_edge_length_falls_back() {
        for avg in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let s = ScaleSeries::for_hierarchy(avg, 2, false);
            assert_eq!(s.get(0), Some(ScaleSeries::FALLBACK_IDEAL_LENGTH));
        }
    }
}
