//! Barnes-Hut space partitioning over `dim`-dimensional orthants.

use crate::positions::Positions;

/// Cells narrower than this are never split further, whatever the depth budget.
const MIN_CELL_SIDE: f64 = 1e-12;

#[derive(Debug, Clone)]
struct Cell {
    side: f64,
    mass: f64,
    /// Non-empty child cells; empty for leaves.
    children: Vec<usize>,
    /// Points stored in a leaf.
    points: Vec<usize>,
}

/// Orthant tree (quadtree in 2D, octree in 3D) with per-cell mass and centre of mass.
///
/// Cell `i` owns `centres[i * dim..(i + 1) * dim]` (geometric centre) and the same slice of
/// `mass_centres`.
#[derive(Debug, Clone)]
pub(crate) struct OrthantTree {
    dim: usize,
    cells: Vec<Cell>,
    centres: Vec<f64>,
    mass_centres: Vec<f64>,
}

/// Forces received by a point from a set of masses.
pub(crate) trait Repulsion {
    /// Adds to `force` the push exerted on a body of weight `weight_v` at `x` by a mass
    /// `weight_u` located at `y`.
    fn accumulate(&self, x: &[f64], weight_v: f64, y: &[f64], weight_u: f64, force: &mut [f64]);

    /// Adds the push between two bodies at the same location. `away` is `1.0` or `-1.0` and has
    /// opposite signs for the two members of a pair.
    fn coincident(&self, weight_v: f64, weight_u: f64, away: f64, force: &mut [f64]);
}

impl OrthantTree {
    /// Builds the tree over every position. `weights[v]` is the mass of vertex `v`.
    pub(crate) fn build(positions: &Positions, weights: &[f64], max_level: usize) -> Self {
        let dim = positions.dim();
        let mut tree = Self {
            dim,
            cells: Vec::new(),
            centres: Vec::new(),
            mass_centres: Vec::new(),
        };
        if positions.is_empty() {
            return tree;
        }

        let mut lo = vec![f64::INFINITY; dim];
        let mut hi = vec![f64::NEG_INFINITY; dim];
        for row in positions.iter() {
            for i in 0..dim {
                lo[i] = lo[i].min(row[i]);
                hi[i] = hi[i].max(row[i]);
            }
        }
        let side = lo
            .iter()
            .zip(&hi)
            .map(|(l, h)| h - l)
            .fold(0.0_f64, f64::max)
            .max(MIN_CELL_SIDE);
        let centre: Vec<f64> = lo.iter().zip(&hi).map(|(l, h)| 0.5 * (l + h)).collect();

        let points: Vec<usize> = (0..positions.len()).collect();
        tree.build_cell(positions, weights, points, &centre, side, 0, max_level);
        tree
    }

    #[allow(clippy::too_many_arguments)]
    fn build_cell(
        &mut self,
        positions: &Positions,
        weights: &[f64],
        points: Vec<usize>,
        centre: &[f64],
        side: f64,
        level: usize,
        max_level: usize,
    ) -> usize {
        let dim = self.dim;
        let idx = self.cells.len();

        let mut mass = 0.0;
        let mut weighted = vec![0.0; dim];
        let mut plain = vec![0.0; dim];
        for &v in &points {
            let w = weights[v];
            mass += w;
            for (i, &x) in positions.get(v).iter().enumerate() {
                weighted[i] += w * x;
                plain[i] += x;
            }
        }
        let mass_centre: Vec<f64> = if mass > 0.0 {
            weighted.iter().map(|s| s / mass).collect()
        } else {
            plain.iter().map(|s| s / points.len() as f64).collect()
        };

        self.cells.push(Cell {
            side,
            mass,
            children: Vec::new(),
            points: Vec::new(),
        });
        self.centres.extend_from_slice(centre);
        self.mass_centres.extend_from_slice(&mass_centre);

        if points.len() <= 1 || level >= max_level || side <= MIN_CELL_SIDE {
            self.cells[idx].points = points;
            return idx;
        }

        let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); 1usize << dim];
        for &v in &points {
            let mut orthant = 0usize;
            for (i, &x) in positions.get(v).iter().enumerate() {
                if x >= centre[i] {
                    orthant |= 1 << i;
                }
            }
            buckets[orthant].push(v);
        }

        let half = side / 2.0;
        let mut children: Vec<usize> = Vec::new();
        for (orthant, bucket) in buckets.into_iter().enumerate() {
            if bucket.is_empty() {
                continue;
            }
            let child_centre: Vec<f64> = (0..dim)
                .map(|i| {
                    if orthant & (1 << i) != 0 {
                        centre[i] + half / 2.0
                    } else {
                        centre[i] - half / 2.0
                    }
                })
                .collect();
            children.push(self.build_cell(
                positions,
                weights,
                bucket,
                &child_centre,
                half,
                level + 1,
                max_level,
            ));
        }
        self.cells[idx].children = children;
        idx
    }

    #[cfg(test)]
    fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[cfg(test)]
    fn depth(&self) -> usize {
        if self.cells.is_empty() {
            return 0;
        }
        let mut deepest = 0;
        let mut stack: Vec<(usize, usize)> = vec![(0, 0)];
        while let Some((cell, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            for &child in &self.cells[cell].children {
                stack.push((child, depth + 1));
            }
        }
        deepest
    }

    fn contains(&self, cell: usize, x: &[f64]) -> bool {
        let half = self.cells[cell].side / 2.0;
        let centre = &self.centres[cell * self.dim..(cell + 1) * self.dim];
        centre.iter().zip(x).all(|(c, xi)| (xi - c).abs() <= half)
    }

    /// Accumulates into `force` the repulsion felt by vertex `v`.
    ///
    /// A cell not containing `v` is collapsed into its centre of mass once `side / distance` drops
    /// below `theta`; leaves interact point by point.
    pub(crate) fn repulsion_on<R: Repulsion>(
        &self,
        v: usize,
        positions: &Positions,
        weights: &[f64],
        theta: f64,
        model: &R,
        force: &mut [f64],
    ) {
        if self.cells.is_empty() {
            return;
        }
        let dim = self.dim;
        let x = positions.get(v);
        let wv = weights[v];

        let mut stack: Vec<usize> = vec![0];
        while let Some(cell) = stack.pop() {
            let c = &self.cells[cell];
            if c.children.is_empty() {
                for &u in &c.points {
                    if u == v {
                        continue;
                    }
                    let y = positions.get(u);
                    if x == y {
                        let away = if v < u { -1.0 } else { 1.0 };
                        model.coincident(wv, weights[u], away, force);
                    } else {
                        model.accumulate(x, wv, y, weights[u], force);
                    }
                }
                continue;
            }

            let mass_centre = &self.mass_centres[cell * dim..(cell + 1) * dim];
            let dist = mass_centre
                .iter()
                .zip(x)
                .map(|(a, b)| (a - b) * (a - b))
                .sum::<f64>()
                .sqrt();
            if dist > 0.0 && c.side / dist < theta && !self.contains(cell, x) {
                model.accumulate(x, wv, mass_centre, c.mass, force);
                continue;
            }
            stack.extend_from_slice(&c.children);
        }
    }
}
