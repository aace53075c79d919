//! Core mesh types: math re-exports, positions, texture coordinates, faces.

pub use glam::{DVec2, DVec3, dvec2, dvec3};

pub mod bounds;
pub mod face;

pub use bounds::Bounds3;
pub use face::{Face, FaceVertex};

/// Point in space. Also used for normals, which share the layout.
pub type Position3 = DVec3;

/// Texture coordinate (u, v stored as x, y).
pub type TexCoord2 = DVec2;
