mod reflect;
mod rotate;
mod scale;
mod translate;

pub use reflect::Reflect;
pub use rotate::Rotate;
pub use scale::Scale;
pub use translate::Translate;

use crate::error::TopologyError;
use crate::math::Point3;
use crate::topology::{SolidId, TopologyStore};

/// Applies `map` to every vertex of a solid and, recursively, of its
/// cavities. Callers must refresh cached edge lengths afterwards.
pub(crate) fn map_vertices<F>(
    store: &mut TopologyStore,
    id: SolidId,
    map: &F,
) -> Result<(), TopologyError>
where
    F: Fn(Point3) -> Point3,
{
    let solid = store.solid(id)?.clone();
    for &vid in &solid.vertices {
        let vertex = store.vertex_mut(vid)?;
        vertex.point = map(vertex.point);
    }
    for &cavity in &solid.cavities {
        map_vertices(store, cavity, map)?;
    }
    Ok(())
}

/// Recomputes every cached edge length of a solid and its cavities from
/// the current vertex positions.
pub(crate) fn refresh_edge_lengths(
    store: &mut TopologyStore,
    id: SolidId,
) -> Result<(), TopologyError> {
    let solid = store.solid(id)?.clone();
    for &fid in &solid.faces {
        let edge_ids = store.face(fid)?.edges.clone();
        for eid in edge_ids {
            let (start, end) = {
                let edge = store.edge(eid)?;
                (edge.start, edge.end)
            };
            let a = store.vertex(start)?.point;
            let b = store.vertex(end)?.point;
            store.edge_mut(eid)?.length = nalgebra::distance(&a, &b);
        }
    }
    for &cavity in &solid.cavities {
        refresh_edge_lengths(store, cavity)?;
    }
    Ok(())
}
