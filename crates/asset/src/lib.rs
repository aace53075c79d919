//! Wavefront OBJ loading into triangle meshes.
//! Positions, normals and texture coordinates are resolved per face corner;
//! the index lists are dropped once the file has been read.

pub mod error;
pub mod mesh;
mod obj;

pub use error::{Axis, Directive, IndexKind, ObjError, ObjResult};
pub use mesh::Mesh;
pub use meshcore::{Bounds3, Face, FaceVertex, Position3, TexCoord2};
