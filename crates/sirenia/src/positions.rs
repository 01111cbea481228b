use crate::error::{Error, Result};
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Per-vertex coordinates with a fixed dimension.
///
/// Stored row-major in a flat buffer: vertex `v` owns `coords[v * dim..(v + 1) * dim]`.
/// Serializes as one coordinate array per vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Positions {
    dim: usize,
    len: usize,
    coords: Vec<f64>,
}

impl Positions {
    /// `len` vertices at the origin.
    pub fn zeros(len: usize, dim: usize) -> Self {
        Self {
            dim,
            len,
            coords: vec![0.0; len * dim],
        }
    }

    pub fn from_flat(dim: usize, coords: Vec<f64>) -> Result<Self> {
        if dim == 0 {
            return Err(Error::PositionDimension {
                expected: 1,
                got: 0,
            });
        }
        if coords.len() % dim != 0 {
            return Err(Error::LengthMismatch {
                what: "flat coordinates",
                expected: (coords.len() / dim + 1) * dim,
                got: coords.len(),
            });
        }
        Ok(Self {
            dim,
            len: coords.len() / dim,
            coords,
        })
    }

    pub fn from_rows<I, R>(dim: usize, rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[f64]>,
    {
        let mut coords: Vec<f64> = Vec::new();
        for row in rows {
            let row = row.as_ref();
            if row.len() != dim {
                return Err(Error::PositionDimension {
                    expected: dim,
                    got: row.len(),
                });
            }
            coords.extend_from_slice(row);
        }
        Self::from_flat(dim, coords)
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, v: usize) -> &[f64] {
        &self.coords[v * self.dim..(v + 1) * self.dim]
    }

    pub fn get_mut(&mut self, v: usize) -> &mut [f64] {
        &mut self.coords[v * self.dim..(v + 1) * self.dim]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.len).map(move |v| self.get(v))
    }

    pub fn as_flat(&self) -> &[f64] {
        &self.coords
    }

    /// Euclidean distance between two vertices.
    pub fn distance(&self, u: usize, v: usize) -> f64 {
        self.get(u)
            .iter()
            .zip(self.get(v))
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }
}

impl Serialize for Positions {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len))?;
        for row in self.iter() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct LayoutResult {
    pub positions: Positions,
}
