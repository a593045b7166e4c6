//! Named control point sets loaded from JSON.
//!
//! The expected document maps a shape name to an ordered list of `[x, y]` pairs:
//! ```json
//! { "heart": [[0, 0], [1, 1.5], [0, 3]], "wave": [[0, 0], [1, 1], [2, 0]] }
//! ```
//! Shapes keep the order in which they appear in the document.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::{debug, warn};
use thiserror::Error;

use crate::curve::{ControlPointSet, Point, SampledCurve};
use crate::error::SplineError;
use crate::options::CurveOptions;

#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("failed to read shapes from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed shapes document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("shapes document defines no shapes")]
    Empty,

    #[error("shape `{name}` has {count} points, at least 2 are required")]
    TooFewPoints { name: String, count: usize },

    #[error("shape `{name}` is invalid: {source}")]
    InvalidShape {
        name: String,
        #[source]
        source: SplineError,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSet {
    shapes: IndexMap<String, ControlPointSet>,
}

impl ShapeSet {
    pub fn from_json_str(json: &str) -> Result<Self, ShapeError> {
        let raw: IndexMap<String, Vec<Point>> = serde_json::from_str(json)?;
        if raw.is_empty() {
            return Err(ShapeError::Empty);
        }

        let mut shapes = IndexMap::with_capacity(raw.len());
        for (name, points) in raw {
            if points.len() < 2 {
                warn!("rejecting shape `{}` with {} points", name, points.len());
                return Err(ShapeError::TooFewPoints { name, count: points.len() });
            }
            match ControlPointSet::new(points) {
                Ok(set) => {
                    shapes.insert(name, set);
                }
                Err(source) => {
                    warn!("rejecting shape `{name}`: {source}");
                    return Err(ShapeError::InvalidShape { name, source });
                }
            }
        }
        debug!("loaded {} shapes", shapes.len());
        Ok(ShapeSet { shapes })
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ControlPointSet> {
        self.shapes.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.shapes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ControlPointSet)> {
        self.shapes.iter().map(|(name, set)| (name.as_str(), set))
    }

    /// Samples every shape, in document order.
    pub fn interpolate_all(
        &self,
        options: &CurveOptions,
    ) -> Result<IndexMap<String, SampledCurve>, ShapeError> {
        self.shapes
            .iter()
            .map(|(name, set)| match set.interpolate(options) {
                Ok(curve) => Ok((name.clone(), curve)),
                Err(source) => Err(ShapeError::InvalidShape { name: name.clone(), source }),
            })
            .collect()
    }
}

pub fn load_shapes(path: impl AsRef<Path>) -> Result<ShapeSet, ShapeError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| ShapeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ShapeSet::from_json_str(&json)
}
