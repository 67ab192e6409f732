//! Shape library - registry of named base shapes
//!
//! The built-in registry holds the seven tetrominoes. Each registered shape
//! keeps its four active (rotated and trimmed) forms, computed once when the
//! library is built, so looking up a preview or placement footprint never
//! recomputes the transform.

use std::sync::OnceLock;

use crate::shape::{ShapeError, ShapeMatrix};
use crate::types::Rotation;

/// Built-in tetromino definitions, in palette order
const TETROMINOES: [(&str, &[&[u8]]); 7] = [
    ("I", &[&[1, 1, 1, 1]]),
    ("O", &[&[1, 1], &[1, 1]]),
    ("T", &[&[1, 1, 1], &[0, 1, 0]]),
    ("S", &[&[0, 1, 1], &[1, 1, 0]]),
    ("Z", &[&[1, 1, 0], &[0, 1, 1]]),
    ("J", &[&[1, 0, 0], &[1, 1, 1]]),
    ("L", &[&[0, 0, 1], &[1, 1, 1]]),
];

/// A named base shape with its memoized active forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    name: String,
    base: ShapeMatrix,
    active: [ShapeMatrix; Rotation::COUNT],
}

impl Shape {
    fn new(name: String, base: ShapeMatrix) -> Result<Self, ShapeError> {
        if base.filled_count() == 0 {
            return Err(ShapeError::Blank(name));
        }
        let active = std::array::from_fn(|turns| base.active(Rotation::new(turns as u32)));
        Ok(Self { name, base, active })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unrotated definition
    pub fn base(&self) -> &ShapeMatrix {
        &self.base
    }

    /// Rotated-and-trimmed form for `rotation`
    pub fn active(&self, rotation: Rotation) -> &ShapeMatrix {
        &self.active[rotation.index()]
    }
}

/// Immutable set of shapes addressable by name or position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeLibrary {
    shapes: Vec<Shape>,
}

impl ShapeLibrary {
    /// Build a library from `(name, rows)` definitions
    ///
    /// Rejects ragged or blank matrices and duplicate names.
    pub fn new<N, R>(defs: impl IntoIterator<Item = (N, Vec<R>)>) -> Result<Self, ShapeError>
    where
        N: Into<String>,
        R: AsRef<[u8]>,
    {
        let mut shapes: Vec<Shape> = Vec::new();
        for (name, rows) in defs {
            let name = name.into();
            if shapes.iter().any(|s| s.name == name) {
                return Err(ShapeError::Duplicate(name));
            }
            let Some(base) = ShapeMatrix::from_rows(&rows) else {
                return Err(ShapeError::Ragged(name));
            };
            shapes.push(Shape::new(name, base)?);
        }
        Ok(Self { shapes })
    }

    /// The process-wide tetromino registry, built on first use
    pub fn builtin() -> &'static ShapeLibrary {
        static BUILTIN: OnceLock<ShapeLibrary> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            ShapeLibrary::new(TETROMINOES.iter().map(|&(name, rows)| (name, rows.to_vec())))
                .expect("built-in tetrominoes are rectangular and non-blank")
        })
    }

    /// Look a shape up by exact name
    pub fn lookup(&self, name: &str) -> Result<&Shape, ShapeError> {
        self.shapes
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| ShapeError::UnknownShape(name.to_string()))
    }

    /// Position of `name` in registry order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.shapes.iter().position(|s| s.name == name)
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> + '_ {
        self.shapes.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.shapes.iter().map(Shape::name)
    }
}
