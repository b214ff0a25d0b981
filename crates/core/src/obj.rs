//! OBJ mesh loader.
//!
//! Only the records a wireframe needs are understood:
//!
//! - `v x y z` adds a vertex (extra components such as `w` are ignored)
//! - `f a b c ...` adds a face; `/texcoord/normal` suffixes are ignored
//! - `l a b ...` adds an explicit polyline
//!
//! References are 1-based; negative references count back from the vertices
//! read so far (`-1` is the most recent). A reference of `0` is skipped.
//! Blank lines, `#` comments and every other record type are ignored.
//!
//! When a file has any `l` records those are the edges. Otherwise each face
//! contributes its cyclic vertex pairs, deduplicated so an edge shared by two
//! faces is drawn once.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::ModelError;
use crate::model::Model;
use crate::types::Point3D;

/// Raw records collected from an OBJ source, before edges are derived.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjData {
    pub vertices: Vec<Point3D>,
    /// Resolved 0-based vertex cycles, one per face with at least 3 references.
    pub faces: Vec<Vec<i64>>,
    /// Consecutive pairs from `l` records, in file order.
    pub line_edges: Vec<(i64, i64)>,
    /// Number of records with an unrecognized leading token.
    pub skipped_records: usize,
}

impl ObjData {
    /// Wireframe edges: explicit lines if any, else deduplicated face edges.
    pub fn edge_pairs(&self) -> Vec<(i64, i64)> {
        if !self.line_edges.is_empty() {
            return self.line_edges.clone();
        }

        let mut set = BTreeSet::new();
        for face in &self.faces {
            for (a, b) in face_cycle_pairs(face) {
                set.insert(if a <= b { (a, b) } else { (b, a) });
            }
        }
        set.into_iter().collect()
    }

    /// Build a normalized model from the collected records.
    pub fn into_model(self) -> Model {
        let pairs = self.edge_pairs();
        Model::normalized(self.vertices, pairs)
    }
}

/// Consecutive pairs around a face, wrapping from the last vertex back to
/// the first. Emits exactly `face.len()` pairs.
///
/// ```
/// use tui_wireframe_core::face_cycle_pairs;
///
/// let pairs: Vec<_> = face_cycle_pairs(&[0, 1, 2]).collect();
/// assert_eq!(pairs, vec![(0, 1), (1, 2), (2, 0)]);
/// ```
pub fn face_cycle_pairs(face: &[i64]) -> impl Iterator<Item = (i64, i64)> + '_ {
    let n = face.len();
    (0..n).map(move |i| (face[i], face[(i + 1) % n]))
}

/// Resolve one OBJ vertex reference against the vertices read so far.
///
/// Returns `None` for reference `0`, which OBJ does not define.
///
/// ```
/// use tui_wireframe_core::resolve_index;
///
/// assert_eq!(resolve_index(1, 8), Some(0));
/// assert_eq!(resolve_index(-1, 8), Some(7));
/// assert_eq!(resolve_index(0, 8), None);
/// ```
pub fn resolve_index(reference: i64, vertex_count: usize) -> Option<i64> {
    match reference {
        0 => None,
        r if r > 0 => Some(r - 1),
        r => Some(vertex_count as i64 + r),
    }
}

/// Parse OBJ text into raw records.
pub fn parse_obj(src: &str) -> Result<ObjData, ModelError> {
    let mut data = ObjData::default();

    for (i, line) in src.lines().enumerate() {
        let line_no = i + 1;
        let mut tokens = line.split_whitespace();
        let Some(kind) = tokens.next() else {
            continue;
        };
        if kind.starts_with('#') {
            continue;
        }

        match kind {
            "v" => {
                let mut coords = [0.0f32; 3];
                for c in &mut coords {
                    let tok = tokens.next().ok_or_else(|| {
                        parse_error(line_no, line, "vertex needs three coordinates")
                    })?;
                    *c = tok
                        .parse::<f32>()
                        .ok()
                        .filter(|v| v.is_finite())
                        .ok_or_else(|| parse_error(line_no, line, "invalid vertex coordinate"))?;
                }
                data.vertices.push(Point3D::new(coords[0], coords[1], coords[2]));
            }
            "f" => {
                let face = parse_references(tokens, data.vertices.len(), line_no, line)?;
                if face.len() >= 3 {
                    data.faces.push(face);
                } else {
                    debug!(line_no, "face with fewer than 3 vertices ignored");
                }
            }
            "l" => {
                let refs = parse_references(tokens, data.vertices.len(), line_no, line)?;
                data.line_edges.extend(refs.windows(2).map(|w| (w[0], w[1])));
            }
            _ => {
                data.skipped_records += 1;
            }
        }
    }

    Ok(data)
}

fn parse_references<'a>(
    tokens: impl Iterator<Item = &'a str>,
    vertex_count: usize,
    line_no: usize,
    line: &str,
) -> Result<Vec<i64>, ModelError> {
    let mut out = Vec::new();
    for tok in tokens {
        let head = tok.split('/').next().unwrap_or(tok);
        let reference = head
            .parse::<i64>()
            .map_err(|_| parse_error(line_no, line, "invalid vertex reference"))?;
        if let Some(idx) = resolve_index(reference, vertex_count) {
            out.push(idx);
        }
    }
    Ok(out)
}

fn parse_error(line_no: usize, line: &str, reason: &'static str) -> ModelError {
    ModelError::Parse {
        line_no,
        line: line.to_string(),
        reason,
    }
}

/// Load and normalize an OBJ file.
pub fn load_obj(path: impl AsRef<Path>) -> Result<Model, ModelError> {
    let path = path.as_ref();
    let src = fs::read_to_string(path).map_err(|source| ModelError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let data = parse_obj(&src)?;
    if data.vertices.is_empty() {
        return Err(ModelError::EmptyModel {
            path: path.to_path_buf(),
        });
    }
    if data.skipped_records > 0 {
        debug!(count = data.skipped_records, "ignored unsupported OBJ records");
    }

    Ok(data.into_model())
}

/// Load `path` if given, falling back to the built-in cube on any error.
///
/// Failures are reported through `tracing` and never propagated.
pub fn load_or_default(path: Option<&Path>) -> Model {
    let Some(path) = path else {
        info!("no OBJ file specified, using default cube");
        return Model::cube();
    };

    info!(path = %path.display(), "loading OBJ file");
    match load_obj(path) {
        Ok(model) => {
            info!(
                vertices = model.vertices().len(),
                edges = model.edges().len(),
                "loaded OBJ model"
            );
            model
        }
        Err(err) => {
            warn!(code = err.code(), error = %err, "failed to load OBJ file, using default cube");
            Model::cube()
        }
    }
}
