use crate::Cubic;

/// The shape of a monic cubic, as determined by its derivative `3x² + 2ax + b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// The derivative never changes sign, so the cubic crosses zero exactly once.
    Monotonic,
    /// Local maximum at `alpha` and local minimum at `beta`, with `alpha < beta`.
    ///
    /// The cubic has one or three real roots depending on the function
    /// values at the two extrema.
    TwoExtrema { alpha: f64, beta: f64 },
}

impl Cubic {
    /// Discriminant of the derivative, `4(a² − 3b)`.
    ///
    /// Positive exactly when the cubic has two distinct critical points.
    #[must_use]
    pub fn derivative_discriminant(&self) -> f64 {
        4.0 * (self.a * self.a - 3.0 * self.b)
    }

    /// Classifies the cubic by the critical points of its derivative.
    #[must_use]
    pub fn shape(&self) -> Shape {
        let discriminant = self.derivative_discriminant();
        if discriminant <= 0.0 {
            return Shape::Monotonic;
        }

        let half_sqrt = discriminant.sqrt() / 2.0;
        Shape::TwoExtrema {
            alpha: (-self.a - half_sqrt) / 3.0,
            beta: (-self.a + half_sqrt) / 3.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn strictly_increasing_cubic_is_monotonic() {
        // x³ + x + 1 has derivative 3x² + 1 > 0 everywhere.
        let f = Cubic::new(0.0, 1.0, 1.0);
        assert_relative_eq!(f.derivative_discriminant(), -12.0);
        assert_eq!(f.shape(), Shape::Monotonic);
    }

    #[test]
    fn repeated_critical_point_counts_as_monotonic() {
        // x³ has derivative 3x² with a double root at zero.
        let f = Cubic::new(0.0, 0.0, 0.0);
        assert_relative_eq!(f.derivative_discriminant(), 0.0);
        assert_eq!(f.shape(), Shape::Monotonic);
    }

    #[test]
    fn finds_ordered_extrema() {
        // (x−1)(x−2)(x−3) has extrema at 2 ∓ 1/√3.
        let f = Cubic::new(-6.0, 11.0, -6.0);

        let Shape::TwoExtrema { alpha, beta } = f.shape() else {
            panic!("expected two extrema");
        };

        let offset = 1.0 / 3.0_f64.sqrt();
        assert_relative_eq!(alpha, 2.0 - offset, epsilon = 1e-12);
        assert_relative_eq!(beta, 2.0 + offset, epsilon = 1e-12);
        assert!(alpha < beta);
    }

    #[test]
    fn extrema_bracket_the_max_and_min() {
        let f = Cubic::new(0.0, -3.0, 1.0);

        let Shape::TwoExtrema { alpha, beta } = f.shape() else {
            panic!("expected two extrema");
        };

        assert_relative_eq!(alpha, -1.0, epsilon = 1e-12);
        assert_relative_eq!(beta, 1.0, epsilon = 1e-12);
        // Local max above local min for a monic cubic.
        assert!(f.eval(alpha) > f.eval(beta));
    }
}
