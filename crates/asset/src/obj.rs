//! Line-oriented OBJ parser for positions, normals, texture coordinates and
//! triangular faces.

use std::io::BufRead;

use meshcore::{Face, FaceVertex, Position3, TexCoord2, dvec2, dvec3};

use crate::{
    error::{Axis, Directive, IndexKind, ObjError, ObjResult},
    mesh::Mesh,
};

pub(crate) fn parse_obj<R: BufRead>(mut reader: R) -> ObjResult<Mesh> {
    let mut parser = ObjParser::default();
    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        // Bytes are not required to be UTF-8; bad sequences only matter in number tokens.
        parser.parse_line(&String::from_utf8_lossy(trim_line_ending(&buf)), line_no)?;
    }
    Ok(parser.finish())
}

fn trim_line_ending(raw: &[u8]) -> &[u8] {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    raw.strip_suffix(b"\r").unwrap_or(raw)
}

/// Accumulates the index lists while faces are being resolved.
#[derive(Default)]
struct ObjParser {
    positions: Vec<Position3>,
    normals: Vec<Position3>,
    tex_coords: Vec<TexCoord2>,
    faces: Vec<Face>,
}

impl ObjParser {
    fn parse_line(&mut self, line: &str, line_no: usize) -> ObjResult<()> {
        let tokens: Vec<&str> = line.split(' ').filter(|t| !t.is_empty()).collect();
        let Some((&tag, args)) = tokens.split_first() else {
            return Ok(());
        };

        match tag {
            "v" => {
                let [x, y, z] = parse_coords(args, Directive::Vertex, line_no)?;
                self.positions.push(dvec3(x, y, z));
            }
            "vn" => {
                let [x, y, z] = parse_coords(args, Directive::Normal, line_no)?;
                self.normals.push(dvec3(x, y, z));
            }
            "vt" => {
                let [u, v] = parse_coords(args, Directive::TexCoord, line_no)?;
                self.tex_coords.push(dvec2(u, v));
            }
            "f" => self.parse_face(args, line_no)?,
            other => log::trace!("Skipping '{}' directive on line {}", other, line_no),
        }
        Ok(())
    }

    fn parse_face(&mut self, groups: &[&str], line_no: usize) -> ObjResult<()> {
        let &[a, b, c, ..] = groups else {
            return Err(ObjError::MalformedDirective {
                line: line_no,
                directive: Directive::Face,
            });
        };
        if groups.len() > 3 {
            log::debug!(
                "Face on line {} has {} vertex groups; keeping the first three",
                line_no,
                groups.len()
            );
        }

        let vertices = [
            self.resolve_group(a, line_no)?,
            self.resolve_group(b, line_no)?,
            self.resolve_group(c, line_no)?,
        ];
        self.faces.push(Face::new(vertices));
        Ok(())
    }

    /// Resolve one `v/vt/vn` group. All three indices are parsed before any is
    /// looked up; sub-fields after the third are ignored.
    fn resolve_group(&self, group: &str, line_no: usize) -> ObjResult<FaceVertex> {
        let mut fields = group.split('/');
        let vi = parse_index(fields.next(), IndexKind::Vertex, line_no)?;
        let ti = parse_index(fields.next(), IndexKind::TexCoord, line_no)?;
        let ni = parse_index(fields.next(), IndexKind::Normal, line_no)?;

        Ok(FaceVertex::new(
            resolve(&self.positions, vi, IndexKind::Vertex, line_no)?,
            resolve(&self.tex_coords, ti, IndexKind::TexCoord, line_no)?,
            resolve(&self.normals, ni, IndexKind::Normal, line_no)?,
        ))
    }

    fn finish(self) -> Mesh {
        log::debug!(
            "Parsed OBJ: {} faces ({} positions, {} normals, {} texture coordinates)",
            self.faces.len(),
            self.positions.len(),
            self.normals.len(),
            self.tex_coords.len()
        );
        Mesh::new(self.faces)
    }
}

/// Parse the first `N` arguments as floats; extra arguments are ignored.
fn parse_coords<const N: usize>(
    args: &[&str],
    directive: Directive,
    line_no: usize,
) -> ObjResult<[f64; N]> {
    if args.len() < N {
        return Err(ObjError::MalformedDirective {
            line: line_no,
            directive,
        });
    }

    let mut out = [0.0; N];
    for ((slot, token), axis) in out.iter_mut().zip(args).zip(Axis::ALL) {
        *slot = token.parse::<f64>().map_err(|_| ObjError::InvalidNumber {
            line: line_no,
            directive,
            axis,
        })?;
    }
    Ok(out)
}

fn parse_index(token: Option<&str>, field: IndexKind, line_no: usize) -> ObjResult<i64> {
    let token = token.unwrap_or_default();
    token.parse::<i64>().map_err(|_| ObjError::InvalidIndex {
        line: line_no,
        field,
        token: token.to_owned(),
    })
}

/// 1-based lookup; anything outside `[1, list.len()]` is unresolved.
fn resolve<T: Copy>(list: &[T], id: i64, kind: IndexKind, line_no: usize) -> ObjResult<T> {
    usize::try_from(id)
        .ok()
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| list.get(i))
        .copied()
        .ok_or(ObjError::UnresolvedReference {
            line: line_no,
            id,
            list: kind,
        })
}
