//! Procedural point-shape geometry.
//!
//! Every generator is a pure function returning `Vec4` points with `w = 0`.
//! The `w` lane is left free for per-point data on the GPU side.
//!
//! Degenerate parameters (zero counts, zero subdivisions) produce empty or
//! minimal point sets. They never produce NaN coordinates.

mod cube;
mod kind;
mod morph;
mod pyramid;
mod sphere;
mod torus;

pub use cube::{cube, DEFAULT_CUBE_SIZE, DEFAULT_CUBE_SUBDIVISIONS};
pub use kind::{generate_shape, ParseShapeError, ShapeKind, DEFAULT_DETAIL};
pub use morph::{bounds, morph, resample};
pub use pyramid::{pyramid, DEFAULT_PYRAMID_SUBDIVISIONS, TETRAHEDRON};
pub use sphere::fibonacci_sphere;
pub use torus::{torus, TorusParams};
