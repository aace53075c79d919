//! Resolved triangle corners.

use crate::{Position3, TexCoord2};

/// One corner of a triangle with all attributes already looked up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FaceVertex {
    pub position: Position3,
    pub tex_coord: TexCoord2,
    pub normal: Position3,
}

impl FaceVertex {
    pub fn new(position: Position3, tex_coord: TexCoord2, normal: Position3) -> Self {
        Self {
            position,
            tex_coord,
            normal,
        }
    }
}

/// Triangle made of three resolved corners, in source order.
/// No raw indices are kept.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Face {
    pub vertices: [FaceVertex; 3],
}

impl Face {
    pub fn new(vertices: [FaceVertex; 3]) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn positions(&self) -> [Position3; 3] {
        self.vertices.map(|v| v.position)
    }

    #[inline]
    pub fn tex_coords(&self) -> [TexCoord2; 3] {
        self.vertices.map(|v| v.tex_coord)
    }

    #[inline]
    pub fn normals(&self) -> [Position3; 3] {
        self.vertices.map(|v| v.normal)
    }
}
