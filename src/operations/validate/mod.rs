use std::collections::BTreeMap;

use thiserror::Error;

use crate::error::Result;
use crate::math::{canonical_pair, Point3, TOLERANCE};
use crate::topology::{SolidId, TopologyStore};

/// First defect found while validating a solid.
///
/// Locations name the solid by its nesting path (`outer`,
/// `outer/cavity 1`, ...) and faces/edges by zero-based index.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationIssue {
    #[error(
        "edge {edge} in face {face} of the {solid} solid caches length \
         {cached} but its endpoints measure {actual}"
    )]
    EdgeLengthMismatch {
        solid: String,
        face: usize,
        edge: usize,
        cached: f64,
        actual: f64,
    },

    #[error("collinear vertex triple starting at vertex {index} in face {face} of the {solid} solid")]
    CollinearVertices {
        solid: String,
        face: usize,
        index: usize,
    },

    #[error("vertex {index} of face {face} in the {solid} solid lies off the face plane")]
    NonPlanarFace {
        solid: String,
        face: usize,
        index: usize,
    },

    #[error(
        "edge between ({ax:.2}, {ay:.2}, {az:.2}) and ({bx:.2}, {by:.2}, {bz:.2}) \
         is shared by {count} faces instead of 2 in the {solid} solid"
    )]
    NonManifoldEdge {
        solid: String,
        ax: f64,
        ay: f64,
        az: f64,
        bx: f64,
        by: f64,
        bz: f64,
        count: usize,
    },
}

/// Outcome of a validation run: valid, or the first issue encountered.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    issue: Option<ValidationIssue>,
}

impl ValidationReport {
    /// Returns `true` if no defect was found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.issue.is_none()
    }

    /// Returns the first defect found, if any.
    #[must_use]
    pub fn issue(&self) -> Option<&ValidationIssue> {
        self.issue.as_ref()
    }
}

/// Validates the geometric and topological consistency of a solid.
///
/// Runs three checks per nesting level, short-circuiting on the first
/// failure, then recurses into every cavity:
///
/// 1. every edge's cached length matches its endpoint distance;
/// 2. no face has a collinear vertex triple or an off-plane vertex;
/// 3. every undirected edge is shared by exactly two face loops.
///
/// Downstream property and transform code assumes these invariants hold,
/// so a solid is validated once up front and then queried freely.
pub struct Validate {
    solid: SolidId,
}

impl Validate {
    /// Creates a new `Validate` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the validation.
    ///
    /// # Errors
    ///
    /// Returns an error only if a referenced entity is missing from the
    /// store; a geometrically invalid solid is a report, not an error.
    pub fn execute(&self, store: &TopologyStore) -> Result<ValidationReport> {
        let issue = check_solid(store, self.solid, "outer")?;
        Ok(ValidationReport { issue })
    }
}

fn check_solid(
    store: &TopologyStore,
    id: SolidId,
    path: &str,
) -> Result<Option<ValidationIssue>> {
    if let Some(issue) = check_edge_lengths(store, id, path)? {
        return Ok(Some(issue));
    }
    if let Some(issue) = check_faces(store, id, path)? {
        return Ok(Some(issue));
    }
    if let Some(issue) = check_manifold(store, id, path)? {
        return Ok(Some(issue));
    }

    let cavities = store.solid(id)?.cavities.clone();
    for (i, cavity) in cavities.iter().enumerate() {
        let cavity_path = format!("{path}/cavity {}", i + 1);
        if let Some(issue) = check_solid(store, *cavity, &cavity_path)? {
            return Ok(Some(issue));
        }
    }
    Ok(None)
}

fn check_edge_lengths(
    store: &TopologyStore,
    id: SolidId,
    path: &str,
) -> Result<Option<ValidationIssue>> {
    let solid = store.solid(id)?;
    for (i, &fid) in solid.faces.iter().enumerate() {
        let face = store.face(fid)?;
        for (j, &eid) in face.edges.iter().enumerate() {
            let edge = store.edge(eid)?;
            let a = store.vertex(edge.start)?.point;
            let b = store.vertex(edge.end)?.point;
            let actual = nalgebra::distance(&a, &b);
            if (actual - edge.length).abs() > TOLERANCE {
                return Ok(Some(ValidationIssue::EdgeLengthMismatch {
                    solid: path.to_owned(),
                    face: i,
                    edge: j,
                    cached: edge.length,
                    actual,
                }));
            }
        }
    }
    Ok(None)
}

fn check_faces(
    store: &TopologyStore,
    id: SolidId,
    path: &str,
) -> Result<Option<ValidationIssue>> {
    let solid = store.solid(id)?;
    for (i, &fid) in solid.faces.iter().enumerate() {
        let polygon = store.face_polygon(fid)?;
        if polygon.len() < 3 {
            // Too small to span a plane; the property engine skips it too.
            continue;
        }

        for k in 0..polygon.len() - 2 {
            if is_collinear(&polygon[k], &polygon[k + 1], &polygon[k + 2]) {
                return Ok(Some(ValidationIssue::CollinearVertices {
                    solid: path.to_owned(),
                    face: i,
                    index: k,
                }));
            }
        }

        let normal = (polygon[1] - polygon[0]).cross(&(polygon[2] - polygon[0]));
        for (k, point) in polygon.iter().enumerate().skip(3) {
            if normal.dot(&(point - polygon[0])).abs() > TOLERANCE {
                return Ok(Some(ValidationIssue::NonPlanarFace {
                    solid: path.to_owned(),
                    face: i,
                    index: k,
                }));
            }
        }
    }
    Ok(None)
}

fn is_collinear(a: &Point3, b: &Point3, c: &Point3) -> bool {
    (b - a).cross(&(c - b)).norm() < TOLERANCE
}

fn check_manifold(
    store: &TopologyStore,
    id: SolidId,
    path: &str,
) -> Result<Option<ValidationIssue>> {
    // Keys are quantized before ordering so that edges meeting at the same
    // position count together even with sub-tolerance coordinate noise.
    let mut occurrences: BTreeMap<([i64; 3], [i64; 3]), (usize, Point3, Point3)> = BTreeMap::new();

    let solid = store.solid(id)?;
    for &fid in &solid.faces {
        let face = store.face(fid)?;
        for &eid in &face.edges {
            let edge = store.edge(eid)?;
            let a = store.vertex(edge.start)?.point;
            let b = store.vertex(edge.end)?.point;
            let entry = occurrences
                .entry(canonical_pair(&a, &b))
                .or_insert((0, a, b));
            entry.0 += 1;
        }
    }

    for (count, a, b) in occurrences.values() {
        if *count != 2 {
            return Ok(Some(ValidationIssue::NonManifoldEdge {
                solid: path.to_owned(),
                ax: a.x,
                ay: a.y,
                az: a.z,
                bx: b.x,
                by: b.y,
                bz: b.z,
                count: *count,
            }));
        }
    }
    Ok(None)
}
