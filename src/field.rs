// field.rs
// Electrostatic field and potential evaluation by superposition over point
// charges. Everything here is a pure function: charges and points in,
// index-aligned samples out, no state between calls.

use crate::charge::Charge;
use crate::config::{COULOMB_CONSTANT, MIN_DISTANCE};
use crate::grid::Grid;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use ultraviolet::DVec2;

/// Result of sampling the field solver at a single point.
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldSample {
    pub field: DVec2,
    pub potential: f64,
}

/// Field of one charge at `point`: k·q·r_vec/r³ with r_vec = point - charge
/// position. Inside `MIN_DISTANCE` of the charge the contribution is the zero
/// vector, which keeps the superposition finite on top of a source.
pub fn field_from_charge(charge: &Charge, point: DVec2) -> DVec2 {
    let r_vec = point - charge.pos;
    let r = r_vec.mag();
    if r < MIN_DISTANCE {
        return DVec2::zero();
    }
    r_vec * (COULOMB_CONSTANT * charge.q / (r * r * r))
}

/// Potential of one charge at `point`: k·q/r with r clamped to `MIN_DISTANCE`,
/// so evaluation on top of a source saturates at k·q/MIN_DISTANCE instead of
/// diverging.
pub fn potential_from_charge(charge: &Charge, point: DVec2) -> f64 {
    let r = (point - charge.pos).mag().max(MIN_DISTANCE);
    COULOMB_CONSTANT * charge.q / r
}

/// Superposed field vector at every point, index-aligned with `points`.
/// Charge order does not matter beyond floating-point summation order.
pub fn field_at(charges: &[Charge], points: &[DVec2]) -> Vec<DVec2> {
    points
        .par_iter()
        .map(|&p| {
            charges
                .iter()
                .fold(DVec2::zero(), |acc, c| acc + field_from_charge(c, p))
        })
        .collect()
}

/// Superposed scalar potential at every point, index-aligned with `points`.
pub fn potential_at(charges: &[Charge], points: &[DVec2]) -> Vec<f64> {
    points
        .par_iter()
        .map(|&p| charges.iter().map(|c| potential_from_charge(c, p)).sum())
        .collect()
}

/// Field and potential in one pass, for consumers that want both.
pub fn sample_at(charges: &[Charge], points: &[DVec2]) -> Vec<FieldSample> {
    points
        .par_iter()
        .map(|&p| {
            let mut sample = FieldSample::default();
            for c in charges {
                sample.field += field_from_charge(c, p);
                sample.potential += potential_from_charge(c, p);
            }
            sample
        })
        .collect()
}

/// Flattened field and potential arrays sampled over a grid, row-major with y
/// as the outer index. The renderer reshapes these to (ny, nx) for
/// streamlines and contours.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FieldMap {
    pub grid: Grid,
    pub ex: Vec<f64>,
    pub ey: Vec<f64>,
    pub potential: Vec<f64>,
    pub magnitude: Vec<f64>,
}

impl FieldMap {
    pub fn sample(charges: &[Charge], grid: &Grid) -> Self {
        let points = grid.points();
        let samples = sample_at(charges, &points);

        let mut ex = Vec::with_capacity(samples.len());
        let mut ey = Vec::with_capacity(samples.len());
        let mut potential = Vec::with_capacity(samples.len());
        let mut magnitude = Vec::with_capacity(samples.len());
        for s in &samples {
            ex.push(s.field.x);
            ey.push(s.field.y);
            potential.push(s.potential);
            magnitude.push(s.field.mag());
        }

        Self {
            grid: grid.clone(),
            ex,
            ey,
            potential,
            magnitude,
        }
    }

    pub fn max_field_magnitude(&self) -> f64 {
        self.magnitude.iter().cloned().fold(0.0, f64::max)
    }

    /// (min, max) of the sampled potential; (0, 0) for an empty map.
    pub fn potential_range(&self) -> (f64, f64) {
        if self.potential.is_empty() {
            return (0.0, 0.0);
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in &self.potential {
            min = min.min(v);
            max = max.max(v);
        }
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const Q_TEST: f64 = 2.0e-9;

    fn dipole() -> Vec<Charge> {
        vec![
            Charge::with_label(Q_TEST, -0.5, 0.0, "q+"),
            Charge::with_label(-Q_TEST, 0.5, 0.0, "q-"),
        ]
    }

    fn assert_close(a: f64, b: f64, tol: f64) {
        assert!((a - b).abs() <= tol, "{} vs {} (tol {})", a, b, tol);
    }

    #[test]
    fn superposition_is_linear() {
        let charges = dipole();
        let points = [
            DVec2::new(0.3, 0.7),
            DVec2::new(-1.1, 0.2),
            DVec2::new(0.0, -0.4),
        ];

        let combined = field_at(&charges, &points);
        let first = field_at(&charges[..1], &points);
        let second = field_at(&charges[1..], &points);

        for i in 0..points.len() {
            let sum = first[i] + second[i];
            assert_close(combined[i].x, sum.x, 1e-6);
            assert_close(combined[i].y, sum.y, 1e-6);
        }
    }

    #[test]
    fn charge_order_does_not_matter() {
        let charges = vec![
            Charge::new(1.0e-9, -0.4, 0.3),
            Charge::new(-2.0e-9, 0.6, -0.1),
            Charge::new(0.5e-9, 0.0, 0.9),
        ];
        let mut reversed = charges.clone();
        reversed.reverse();
        let points = [DVec2::new(0.2, 0.2), DVec2::new(-0.7, -0.5)];

        let forward = field_at(&charges, &points);
        let backward = field_at(&reversed, &points);
        let v_forward = potential_at(&charges, &points);
        let v_backward = potential_at(&reversed, &points);

        for i in 0..points.len() {
            assert_close(forward[i].x, backward[i].x, 1e-6);
            assert_close(forward[i].y, backward[i].y, 1e-6);
            assert_close(v_forward[i], v_backward[i], 1e-6);
        }
    }

    #[test]
    fn zero_charge_contributes_nothing() {
        let neutral = Charge::new(0.0, 0.1, -0.2);
        let point = DVec2::new(0.5, 0.5);
        assert_eq!(field_from_charge(&neutral, point), DVec2::zero());
        assert_eq!(potential_from_charge(&neutral, point), 0.0);
    }

    #[test]
    fn evaluation_on_top_of_a_charge_stays_finite() {
        let charge = Charge::new(Q_TEST, 0.25, -0.75);
        let on_top = [charge.pos];

        // Field contribution is zeroed inside the regularization radius
        let e = field_at(std::slice::from_ref(&charge), &on_top);
        assert_eq!(e[0], DVec2::zero());

        // Potential is clamped to the value at MIN_DISTANCE
        let v = potential_at(std::slice::from_ref(&charge), &on_top);
        assert!(v[0].is_finite());
        assert_close(v[0], COULOMB_CONSTANT * Q_TEST / MIN_DISTANCE, 1e-3);
    }

    #[test]
    fn dipole_field_and_potential_at_origin() {
        let charges = dipole();
        let origin = [DVec2::zero()];

        let e = field_at(&charges, &origin);
        let v = potential_at(&charges, &origin);

        // Both contributions point from the positive charge (left) toward the
        // negative charge (right), so the net field is +x with no y part.
        assert!(e[0].x > 0.0, "expected +x field, got {:?}", e[0]);
        assert_close(e[0].y, 0.0, 1e-9);

        // Equal and opposite contributions at equal distance cancel exactly.
        assert_close(v[0], 0.0, 1e-9);

        // Magnitude check: each charge contributes k*q/r^2 at r = 0.5.
        let expected = 2.0 * COULOMB_CONSTANT * Q_TEST / 0.25;
        assert_close(e[0].x, expected, expected * 1e-12);
    }

    #[test]
    fn field_magnitude_follows_inverse_square_decay() {
        let charge = Charge::new(1.0e-9, 0.0, 0.0);
        let points = [DVec2::new(0.5, 0.0), DVec2::new(1.0, 0.0)];
        let e = field_at(std::slice::from_ref(&charge), &points);
        let ratio = e[0].mag() / e[1].mag();
        assert_close(ratio, 4.0, 1e-9);
    }

    #[test]
    fn field_points_radially_away_from_a_positive_charge() {
        let charge = Charge::new(1.0e-9, 0.0, 0.0);
        let compass = [
            DVec2::new(1.0, 0.0),
            DVec2::new(0.0, 1.0),
            DVec2::new(-1.0, 0.0),
            DVec2::new(0.0, -1.0),
        ];
        for &p in &compass {
            let e = field_from_charge(&charge, p);
            let dot = e.normalized().dot(p.normalized());
            assert_close(dot, 1.0, 1e-12);
        }
    }

    #[test]
    fn degenerate_inputs_yield_shaped_results() {
        let points = [DVec2::new(0.1, 0.2), DVec2::new(-0.3, 0.4)];

        let e = field_at(&[], &points);
        assert_eq!(e, vec![DVec2::zero(); 2]);
        let v = potential_at(&[], &points);
        assert_eq!(v, vec![0.0; 2]);

        let charges = dipole();
        assert!(field_at(&charges, &[]).is_empty());
        assert!(potential_at(&charges, &[]).is_empty());
    }

    #[test]
    fn sampled_map_aligns_with_grid_order() {
        let charges = dipole();
        let grid = Grid::new(-1.0, 1.0, -1.0, 1.0, 4, 3).unwrap();
        let map = FieldMap::sample(&charges, &grid);

        assert_eq!(map.ex.len(), grid.len());
        assert_eq!(map.potential.len(), grid.len());

        let points = grid.points();
        let e = field_at(&charges, &points);
        let v = potential_at(&charges, &points);
        for i in 0..grid.len() {
            assert_eq!(map.ex[i], e[i].x);
            assert_eq!(map.ey[i], e[i].y);
            assert_eq!(map.potential[i], v[i]);
            assert_close(map.magnitude[i], e[i].mag(), 1e-12);
        }
    }
}
