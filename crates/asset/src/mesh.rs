//! Triangle mesh produced by the OBJ loader.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
    slice,
};

use meshcore::{Bounds3, Face};

use crate::{error::ObjResult, obj};

/// Ordered list of fully resolved triangles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub faces: Vec<Face>,
}

impl Mesh {
    pub fn new(faces: Vec<Face>) -> Self {
        Self { faces }
    }

    /// Load an OBJ file.
    ///
    /// Understands `v`, `vn`, `vt` and `f` directives; every other line is
    /// skipped. Faces must be triangles written as `v/vt/vn` triplets with
    /// 1-based indices that refer to earlier lines; sub-fields after the
    /// third in a group are ignored. Only the first three
    /// vertex groups of a face are used: polygons are not triangulated, any
    /// further corners are dropped. The first malformed line aborts the load.
    pub fn load_from_path(path: impl AsRef<Path>) -> ObjResult<Self> {
        let path = path.as_ref();
        log::info!("Loading OBJ mesh from {}", path.display());
        let file = File::open(path)?;
        Self::load_from_reader(BufReader::new(file))
    }

    /// Load an OBJ mesh from any [`BufRead`] source, line by line.
    /// Same grammar and limits as [`Mesh::load_from_path`].
    pub fn load_from_reader<R: BufRead>(reader: R) -> ObjResult<Self> {
        obj::parse_obj(reader)
    }

    /// Convenience helper to parse OBJ text already in memory.
    pub fn load_from_str(contents: &str) -> ObjResult<Self> {
        Self::load_from_reader(io::Cursor::new(contents))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Face> {
        self.faces.iter()
    }

    pub fn into_faces(self) -> Vec<Face> {
        self.faces
    }

    /// Bounds of all face positions; `None` for an empty mesh.
    pub fn bounds(&self) -> Option<Bounds3> {
        Bounds3::from_faces(&self.faces)
    }
}

impl<'a> IntoIterator for &'a Mesh {
    type Item = &'a Face;
    type IntoIter = slice::Iter<'a, Face>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
