//! End conditions for cubic splines.

use std::fmt;

use super::SecondDerivativeSystem;

/// Supplies the first and last rows of a [`SecondDerivativeSystem`].
///
/// The interior rows are already assembled when [`apply`](Self::apply)
/// runs, and the samples have been validated against
/// [`MIN_POINTS`](Self::MIN_POINTS). Entries may only be written within
/// [`BANDWIDTH`](Self::BANDWIDTH) diagonals of the main one.
///
/// Interior rows have entries of the order of the node spacing and the
/// solver's pivot test is relative to the largest entry, so end rows should
/// be scaled the same way.
pub trait BoundaryCondition: Default + fmt::Debug + Send + Sync {
    /// Short identifier used in logs.
    const NAME: &'static str;

    /// Smallest number of nodes the condition can be applied to.
    const MIN_POINTS: usize = 2;

    /// Half-bandwidth the end rows need.
    const BANDWIDTH: usize = 1;

    /// Writes the end rows into `system`.
    fn apply(&self, xs: &[f64], ys: &[f64], system: &mut SecondDerivativeSystem);
}

/// Zero second derivative at both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl BoundaryCondition for Natural {
    const NAME: &'static str = "natural";

    fn apply(&self, xs: &[f64], _ys: &[f64], system: &mut SecondDerivativeSystem) {
        let n = xs.len();
        system.set(0, 0, (xs[1] - xs[0]) / 3.0);
        system.set(n - 1, n - 1, (xs[n - 1] - xs[n - 2]) / 3.0);
    }
}

/// Zero first derivative at both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Clamped;

impl BoundaryCondition for Clamped {
    const NAME: &'static str = "clamped";

    fn apply(&self, xs: &[f64], ys: &[f64], system: &mut SecondDerivativeSystem) {
        let n = xs.len();

        let dx = xs[1] - xs[0];
        system.set(0, 0, dx / 3.0);
        system.set(0, 1, dx / 6.0);
        system.set_rhs(0, (ys[1] - ys[0]) / dx);

        let dx = xs[n - 1] - xs[n - 2];
        system.set(n - 1, n - 2, dx / 6.0);
        system.set(n - 1, n - 1, dx / 3.0);
        system.set_rhs(n - 1, -(ys[n - 1] - ys[n - 2]) / dx);
    }
}

/// Continuous third derivative at the second and penultimate nodes.
///
/// Each condition `(m1 - m0)/dx0 = (m2 - m1)/dx1` is multiplied through by
/// `dx0 * dx1` to keep the row on the same scale as the interior ones.
///
/// With three nodes both conditions would sit on the middle node; the last
/// row then asks for a zero third derivative on the final segment instead,
/// so the fit is the interpolating parabola.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotAKnot;

impl BoundaryCondition for NotAKnot {
    const NAME: &'static str = "not-a-knot";
    const MIN_POINTS: usize = 3;
    const BANDWIDTH: usize = 2;

    fn apply(&self, xs: &[f64], _ys: &[f64], system: &mut SecondDerivativeSystem) {
        let n = xs.len();

        let (dx0, dx1) = (xs[1] - xs[0], xs[2] - xs[1]);
        system.set(0, 0, -dx1);
        system.set(0, 1, dx0 + dx1);
        system.set(0, 2, -dx0);

        if n == 3 {
            // m2 - m1 = 0, scaled by dx1.
            system.set(2, 1, -dx1);
            system.set(2, 2, dx1);
            return;
        }

        let (dx0, dx1) = (xs[n - 2] - xs[n - 3], xs[n - 1] - xs[n - 2]);
        system.set(n - 1, n - 3, -dx1);
        system.set(n - 1, n - 2, dx0 + dx1);
        system.set(n - 1, n - 1, -dx0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn applied<B: BoundaryCondition>(xs: &[f64], ys: &[f64]) -> SecondDerivativeSystem {
        let mut system = SecondDerivativeSystem::assemble(xs, ys, B::BANDWIDTH);
        B::default().apply(xs, ys, &mut system);
        system
    }

    #[test]
    fn test_natural_rows() {
        let system = applied::<Natural>(&[0.0, 3.0, 4.5], &[0.0, 3.0, 1.0]);
        let m = system.matrix();
        assert_relative_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(0, 1), 0.0);
        assert_relative_eq!(m.get(2, 2), 0.5);
        assert_eq!(system.rhs()[0], 0.0);
        assert_eq!(system.rhs()[2], 0.0);
    }

    #[test]
    fn test_clamped_rows() {
        let system = applied::<Clamped>(&[0.0, 3.0, 4.0], &[0.0, 6.0, 4.0]);
        let m = system.matrix();
        assert_relative_eq!(m.get(0, 0), 1.0);
        assert_relative_eq!(m.get(0, 1), 0.5);
        assert_relative_eq!(system.rhs()[0], 2.0);
        assert_relative_eq!(m.get(2, 1), 1.0 / 6.0);
        assert_relative_eq!(m.get(2, 2), 1.0 / 3.0);
        assert_relative_eq!(system.rhs()[2], 2.0);
    }

    #[test]
    fn test_not_a_knot_rows() {
        let xs = [0.0, 1.0, 3.0, 4.0, 6.0];
        let system = applied::<NotAKnot>(&xs, &[0.0; 5]);
        let m = system.matrix();
        assert_eq!(m.lower_bandwidth(), 2);
        assert_relative_eq!(m.get(0, 0), -2.0);
        assert_relative_eq!(m.get(0, 1), 3.0);
        assert_relative_eq!(m.get(0, 2), -1.0);
        assert_relative_eq!(m.get(4, 2), -2.0);
        assert_relative_eq!(m.get(4, 3), 3.0);
        assert_relative_eq!(m.get(4, 4), -1.0);
    }

    #[test]
    fn test_not_a_knot_three_point_rows() {
        let system = applied::<NotAKnot>(&[0.0, 1.0, 3.0], &[0.0; 3]);
        let m = system.matrix();
        assert_relative_eq!(m.get(2, 0), 0.0);
        assert_relative_eq!(m.get(2, 1), -2.0);
        assert_relative_eq!(m.get(2, 2), 2.0);
    }

    #[test]
    fn test_end_rows_scale_with_spacing() {
        let xs = [0.0, 1.0, 2.5, 3.0, 4.5];
        let scaled = xs.map(|x| x * 1e9);
        let ys = [0.0; 5];

        let unit = applied::<NotAKnot>(&xs, &ys);
        let wide = applied::<NotAKnot>(&scaled, &ys);
        for (row, col) in [(0, 0), (0, 1), (0, 2), (4, 2), (4, 3), (4, 4), (2, 2)] {
            assert_relative_eq!(
                wide.matrix().get(row, col),
                1e9 * unit.matrix().get(row, col),
                max_relative = 1e-12
            );
        }

        let unit = applied::<Natural>(&xs, &ys);
        let wide = applied::<Natural>(&scaled, &ys);
        for i in [0, 4] {
            assert_relative_eq!(
                wide.matrix().get(i, i),
                1e9 * unit.matrix().get(i, i),
                max_relative = 1e-12
            );
        }
    }
}
