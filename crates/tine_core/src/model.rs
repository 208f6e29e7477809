//! Triangle mesh loaded from a Wavefront OBJ file.
//!
//! Geometry is read with `tobj`. Every line is checked first and malformed
//! records are dropped with a warning, so one bad line never fails the
//! whole file:
//!
//! - `v x y z` needs three numbers, `vt u v [w]` two and `vn x y z` three
//! - `f` needs at least three corners (`p`, `p/t`, `p//n` or `p/t/n`) whose
//!   1-based indices refer to existing records, with a texture index on
//!   every corner or on none
//!
//! Only `v`, `vt`, `vn` and `f` records are passed on. Groups, materials
//! and smoothing groups are not used. Polygons are split into a triangle
//! fan around their first corner.

use std::path::Path;

use thiserror::Error;
use tine_math::{Vec2f, Vec3f};

/// Errors that can occur while loading a model.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("OBJ error: {0}")]
    Obj(#[from] tobj::LoadError),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub type ModelResult<T> = Result<T, ModelError>;

/// One triangle: position indices plus optional texture-coordinate indices.
///
/// Texture topology is independent of position topology, so the two index
/// sets usually differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub vertices: [usize; 3],
    pub tex_coords: Option<[usize; 3]>,
}

/// Read-only mesh geometry.
///
/// Faces keep file order. Positions and texture coordinates that no face
/// refers to are not stored; the rest are numbered in the order faces
/// first use them.
#[derive(Debug, Clone, Default)]
pub struct Model {
    positions: Vec<Vec3f>,
    tex_coords: Vec<Vec3f>,
    faces: Vec<Face>,
}

/// Vertex data records a face corner can index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VertexData {
    Position,
    TexCoord,
    Normal,
}

/// Number of well-formed vertex data records of each kind.
#[derive(Debug, Default, Clone, Copy)]
struct RecordCounts {
    positions: usize,
    tex_coords: usize,
    normals: usize,
}

impl RecordCounts {
    fn add(&mut self, kind: VertexData) {
        match kind {
            VertexData::Position => self.positions += 1,
            VertexData::TexCoord => self.tex_coords += 1,
            VertexData::Normal => self.normals += 1,
        }
    }
}

impl Model {
    /// Build a model from already-parsed parts. Faces referring to missing
    /// positions or texture coordinates are dropped.
    pub fn from_parts(positions: Vec<Vec3f>, tex_coords: Vec<Vec3f>, faces: Vec<Face>) -> Self {
        let mut model = Self {
            positions,
            tex_coords,
            faces,
        };
        model.drop_invalid_faces();
        model
    }

    /// Load an OBJ file.
    ///
    /// Fails if the file cannot be read. Malformed records are skipped
    /// with a warning.
    pub fn load(path: impl AsRef<Path>) -> ModelResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let model = Self::parse(&content)?;

        log::info!(
            "Loaded {}: {} vertices, {} faces, {} texture coordinates",
            path.display(),
            model.vertex_count(),
            model.face_count(),
            model.tex_coord_count()
        );

        Ok(model)
    }

    /// Parse OBJ text. Malformed lines are logged and skipped.
    pub fn parse(content: &str) -> ModelResult<Self> {
        let obj = well_formed_records(content);
        let options = tobj::LoadOptions {
            single_index: false,
            triangulate: true,
            ..Default::default()
        };
        // Material records never reach tobj, so the loader is not called
        let (meshes, _materials) =
            tobj::load_obj_buf(&mut obj.as_bytes(), &options, |_| {
                Err(tobj::LoadError::OpenFileFailed)
            })?;

        let mut model = Self::default();
        for mesh in &meshes {
            model.append_mesh(&mesh.mesh);
        }
        model.drop_invalid_faces();
        Ok(model)
    }

    /// Append a tobj mesh, offsetting its indices past the records already
    /// stored.
    fn append_mesh(&mut self, mesh: &tobj::Mesh) {
        let vertex_base = self.positions.len();
        let tex_base = self.tex_coords.len();

        self.positions.extend(
            mesh.positions
                .chunks_exact(3)
                .map(|p| Vec3f::new(p[0], p[1], p[2])),
        );
        self.tex_coords.extend(
            mesh.texcoords
                .chunks_exact(2)
                .map(|t| Vec3f::new(t[0], t[1], 0.0)),
        );

        // Texture indices only line up with position indices when every
        // face has them
        let textured = mesh.texcoord_indices.len() == mesh.indices.len();
        if !textured && !mesh.texcoord_indices.is_empty() {
            log::warn!(
                "Mesh mixes faces with and without texture coordinates, \
                 ignoring its texture coordinates"
            );
        }

        let offset = |base: usize, tri: &[u32]| [0, 1, 2].map(|k| base + tri[k] as usize);
        for (f, tri) in mesh.indices.chunks_exact(3).enumerate() {
            let tex_coords =
                textured.then(|| offset(tex_base, &mesh.texcoord_indices[3 * f..3 * f + 3]));
            self.faces.push(Face {
                vertices: offset(vertex_base, tri),
                tex_coords,
            });
        }
    }

    /// Remove faces whose indices point past the stored records.
    fn drop_invalid_faces(&mut self) {
        let vertex_count = self.positions.len();
        let tex_count = self.tex_coords.len();

        self.faces.retain(|face| {
            let positions_ok = face.vertices.iter().all(|&i| i < vertex_count);
            let tex_ok = face
                .tex_coords
                .map_or(true, |t| t.iter().all(|&i| i < tex_count));

            if !(positions_ok && tex_ok) {
                log::warn!(
                    "Invalid face indices: {:?} / {:?}, vertex count: {}, \
                     texture coordinate count: {}",
                    face.vertices,
                    face.tex_coords,
                    vertex_count,
                    tex_count
                );
            }
            positions_ok && tex_ok
        });
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn tex_coord_count(&self) -> usize {
        self.tex_coords.len()
    }

    /// Vertex position `i` (0-based).
    pub fn vertex(&self, i: usize) -> Vec3f {
        self.positions[i]
    }

    /// Texture coordinate `i` (0-based). `z` is carried but unused.
    pub fn tex_coord(&self, i: usize) -> Vec3f {
        self.tex_coords[i]
    }

    /// Position indices of face `f`.
    pub fn face_vertex_indices(&self, f: usize) -> [usize; 3] {
        self.faces[f].vertices
    }

    /// Texture-coordinate indices of face `f`, if the file gave them.
    pub fn face_texture_indices(&self, f: usize) -> Option<[usize; 3]> {
        self.faces[f].tex_coords
    }

    /// World-space corners of face `f`.
    pub fn face_positions(&self, f: usize) -> [Vec3f; 3] {
        self.face_vertex_indices(f).map(|i| self.positions[i])
    }

    /// Texture coordinates at the corners of face `f`; `(0, 0)` when the
    /// face has none.
    pub fn face_uvs(&self, f: usize) -> [Vec2f; 3] {
        match self.face_texture_indices(f) {
            Some(indices) => indices.map(|i| self.tex_coords[i].xy()),
            None => [Vec2f::default(); 3],
        }
    }

    /// The summary line printed after loading: `# v# N f# N vt# N`.
    pub fn summary(&self) -> String {
        format!(
            "# v# {} f# {} vt# {}",
            self.vertex_count(),
            self.face_count(),
            self.tex_coord_count()
        )
    }
}

fn parse_error(line: usize, message: impl Into<String>) -> ModelError {
    ModelError::Parse {
        line,
        message: message.into(),
    }
}

/// Keep the well-formed `v`, `vt`, `vn` and `f` lines of an OBJ file.
///
/// Vertex data is checked first so face indices can be checked against the
/// final record counts.
fn well_formed_records(content: &str) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let mut counts = RecordCounts::default();
    let mut keep = vec![false; lines.len()];

    for (i, line) in lines.iter().enumerate() {
        match check_vertex_data(i + 1, line) {
            Ok(Some(kind)) => {
                counts.add(kind);
                keep[i] = true;
            }
            Ok(None) => {}
            Err(e) => log::warn!("Skipping record: {e}"),
        }
    }

    for (i, line) in lines.iter().enumerate() {
        if line.split_whitespace().next() != Some("f") {
            continue;
        }
        match check_face(i + 1, line, &counts) {
            Ok(()) => keep[i] = true,
            Err(e) => log::warn!("Skipping record: {e}"),
        }
    }

    lines
        .iter()
        .zip(keep)
        .filter_map(|(line, kept)| kept.then_some(*line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check a vertex data line. Returns its kind, or `None` for other tags.
fn check_vertex_data(line_num: usize, line: &str) -> ModelResult<Option<VertexData>> {
    let mut tokens = line.split_whitespace();
    let (kind, required) = match tokens.next() {
        Some("v") => (VertexData::Position, 3),
        Some("vt") => (VertexData::TexCoord, 2),
        Some("vn") => (VertexData::Normal, 3),
        _ => return Ok(None),
    };

    let values: Vec<&str> = tokens.take(required).collect();
    if values.len() < required {
        return Err(parse_error(
            line_num,
            format!("expected {} numbers, found {}", required, values.len()),
        ));
    }
    if let Some(bad) = values.iter().find(|t| t.parse::<f32>().is_err()) {
        return Err(parse_error(line_num, format!("invalid number '{bad}'")));
    }
    Ok(Some(kind))
}

/// Check that a 1-based index refers to one of `count` records.
fn check_index(line_num: usize, token: &str, count: usize) -> ModelResult<()> {
    let index: i64 = token
        .parse()
        .map_err(|_| parse_error(line_num, format!("invalid index '{token}'")))?;
    if index < 1 || index as usize > count {
        return Err(parse_error(
            line_num,
            format!("index {index} is outside 1..={count}"),
        ));
    }
    Ok(())
}

/// Check a face line against the vertex data it refers to.
fn check_face(line_num: usize, line: &str, counts: &RecordCounts) -> ModelResult<()> {
    let corners: Vec<&str> = line.split_whitespace().skip(1).collect();
    if corners.len() < 3 {
        return Err(parse_error(
            line_num,
            format!("face needs at least 3 corners, found {}", corners.len()),
        ));
    }

    let mut textured = 0;
    for corner in &corners {
        let mut parts = corner.split('/');
        check_index(line_num, parts.next().unwrap_or_default(), counts.positions)?;
        if let Some(t) = parts.next().filter(|t| !t.is_empty()) {
            check_index(line_num, t, counts.tex_coords)?;
            textured += 1;
        }
        if let Some(n) = parts.next().filter(|n| !n.is_empty()) {
            check_index(line_num, n, counts.normals)?;
        }
        if parts.next().is_some() {
            return Err(parse_error(
                line_num,
                format!("malformed face corner '{corner}'"),
            ));
        }
    }

    if textured != 0 && textured != corners.len() {
        return Err(parse_error(
            line_num,
            "face mixes corners with and without texture indices",
        ));
    }
    Ok(())
}
