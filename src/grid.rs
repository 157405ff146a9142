// grid.rs
// Regular 2D evaluation lattice. A bounding box plus a resolution expands into
// the flattened point list the evaluator samples and the renderer reshapes.

use crate::config;
use serde::{Deserialize, Serialize};
use ultraviolet::DVec2;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
    pub nx: usize,
    pub ny: usize,
}

impl Grid {
    pub fn new(
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
        nx: usize,
        ny: usize,
    ) -> Result<Self, String> {
        if nx == 0 || ny == 0 {
            return Err(format!(
                "Grid resolution must be at least 1x1, got {}x{}",
                nx, ny
            ));
        }
        if xmin >= xmax || ymin >= ymax {
            return Err(format!(
                "Grid bounds must satisfy xmin < xmax and ymin < ymax, got x [{}, {}] y [{}, {}]",
                xmin, xmax, ymin, ymax
            ));
        }
        Ok(Self {
            xmin,
            xmax,
            ymin,
            ymax,
            nx,
            ny,
        })
    }

    pub fn len(&self) -> usize {
        self.nx * self.ny
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lattice shape as (nx, ny); the flattened arrays reshape to ny rows of
    /// nx columns.
    pub fn shape(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    /// Sample positions along the x axis, both endpoints included.
    pub fn x_coords(&self) -> Vec<f64> {
        linspace(self.xmin, self.xmax, self.nx)
    }

    /// Sample positions along the y axis, both endpoints included.
    pub fn y_coords(&self) -> Vec<f64> {
        linspace(self.ymin, self.ymax, self.ny)
    }

    /// The flattened lattice, row-major with y as the outer index:
    /// index = iy * nx + ix.
    pub fn points(&self) -> Vec<DVec2> {
        let xs = self.x_coords();
        let ys = self.y_coords();
        let mut points = Vec::with_capacity(self.len());
        for &y in &ys {
            for &x in &xs {
                points.push(DVec2::new(x, y));
            }
        }
        points
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            xmin: config::DEFAULT_XMIN,
            xmax: config::DEFAULT_XMAX,
            ymin: config::DEFAULT_YMIN,
            ymax: config::DEFAULT_YMAX,
            nx: config::DEFAULT_NX,
            ny: config::DEFAULT_NY,
        }
    }
}

/// Evenly spaced samples including both endpoints. A single sample sits at
/// `start`.
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![start];
    }
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}
