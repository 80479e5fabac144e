use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet, VecDeque};

use spade::handles::{DirectedEdgeHandle, FixedFaceHandle, InnerTag};
use spade::{
    ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation,
};

use crate::error::{Result, TessellationError};
use crate::geometry::{Region, RegionFace};
use crate::math::{Point3, Vector3};

use super::{TessellationParams, TriangleMesh};

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// Triangulates a planar region into a mesh, leaving holes open.
///
/// Every face is triangulated independently with a constrained Delaunay
/// triangulation over its stroked boundary and hole loops. Vertices keep the
/// elevation of their loop.
pub struct TessellateRegion<'a> {
    region: &'a Region,
    params: TessellationParams,
}

impl<'a> TessellateRegion<'a> {
    /// Creates a new `TessellateRegion` operation.
    #[must_use]
    pub fn new(region: &'a Region, params: TessellationParams) -> Self {
        Self { region, params }
    }

    /// Executes the tessellation. An empty region yields an empty mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or a face cannot be
    /// triangulated.
    pub fn execute(&self) -> Result<TriangleMesh> {
        self.params.validate()?;
        let mut mesh = TriangleMesh::default();
        for face in self.region.faces() {
            tessellate_face(face, &self.params, &mut mesh)?;
        }
        tracing::trace!(
            faces = self.region.faces().len(),
            triangles = mesh.indices.len(),
            "tessellated region"
        );
        Ok(mesh)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn tessellate_face(
    face: &RegionFace,
    params: &TessellationParams,
    mesh: &mut TriangleMesh,
) -> Result<()> {
    let elevation = face.boundary().start_point().z;

    let mut cdt = Cdt::new();
    insert_constraint_loop(&mut cdt, &face.boundary().to_points(params))?;
    for hole in face.holes() {
        insert_constraint_loop(&mut cdt, &hole.to_points(params))?;
    }

    let interior_faces = classify_interior_faces(&cdt);
    let mut vertex_map: HashMap<usize, u32> = HashMap::new();

    for face_handle in cdt.inner_faces() {
        if !interior_faces.contains(&face_handle.fix().index()) {
            continue;
        }

        let mut tri = [0u32; 3];
        for (slot, vh) in tri.iter_mut().zip(face_handle.vertices()) {
            let idx = vh.fix().index();
            *slot = *vertex_map.entry(idx).or_insert_with(|| {
                let pos = vh.position();
                mesh.vertices.push(Point3::new(pos.x, pos.y, elevation));
                mesh.normals.push(Vector3::z());
                (mesh.vertices.len() - 1) as u32
            });
        }
        mesh.indices.push(tri);
    }

    Ok(())
}

/// Inserts a stroked ring as a cycle of constraint edges.
///
/// An edge that would cross an earlier constraint is left out instead of
/// splitting it.
fn insert_constraint_loop(cdt: &mut Cdt, ring: &[Point3]) -> Result<()> {
    if ring.len() < 3 {
        return Err(TessellationError::Failed(format!(
            "ring has {} vertices, need at least 3",
            ring.len()
        ))
        .into());
    }

    let handles = ring
        .iter()
        .map(|p| cdt.insert(SpadePoint2::new(p.x, p.y)))
        .collect::<std::result::Result<Vec<_>, InsertionError>>()
        .map_err(|e| TessellationError::Failed(format!("CDT insert: {e}")))?;

    for (&from, &to) in handles.iter().zip(handles.iter().cycle().skip(1)) {
        if from != to && cdt.can_add_constraint(from, to) {
            cdt.add_constraint(from, to);
        }
    }
    Ok(())
}

/// Returns the indices of inner faces enclosed by an odd number of
/// constraint rings.
///
/// Walks outward-in from the hull: stepping across a constraint edge flips
/// the inside flag.
fn classify_interior_faces(cdt: &Cdt) -> HashSet<usize> {
    let mut inside: HashMap<usize, bool> = HashMap::new();
    let mut pending: VecDeque<(FixedFaceHandle<InnerTag>, bool)> = VecDeque::new();

    let crosses = |edge: DirectedEdgeHandle<'_, _, _, _, _>| {
        cdt.is_constraint_edge(edge.as_undirected().fix())
    };

    let hull = cdt.outer_face().fix();
    for edge in cdt.directed_edges().filter(|e| e.face().fix() == hull) {
        let Some(face) = edge.rev().face().as_inner() else {
            continue;
        };
        if let Entry::Vacant(slot) = inside.entry(face.fix().index()) {
            let flag = crosses(edge);
            slot.insert(flag);
            pending.push_back((face.fix(), flag));
        }
    }

    while let Some((fix, flag)) = pending.pop_front() {
        for edge in cdt.face(fix).adjacent_edges() {
            let Some(next) = edge.rev().face().as_inner() else {
                continue;
            };
            let next_flag = flag ^ crosses(edge);
            if let Entry::Vacant(slot) = inside.entry(next.fix().index()) {
                slot.insert(next_flag);
                pending.push_back((next.fix(), next_flag));
            }
        }
    }

    inside
        .into_iter()
        .filter_map(|(idx, flag)| flag.then_some(idx))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Loop;

    fn square(x0: f64, y0: f64, size: f64, z: f64) -> Loop {
        Loop::polygon(&[
            Point3::new(x0, y0, z),
            Point3::new(x0 + size, y0, z),
            Point3::new(x0 + size, y0 + size, z),
            Point3::new(x0, y0 + size, z),
        ])
        .unwrap()
    }

    #[test]
    fn square_produces_2_triangles() {
        let region = Region::from(square(0.0, 0.0, 1.0, 2.5));
        let mesh = TessellateRegion::new(&region, TessellationParams::default())
            .execute()
            .unwrap();
        assert_eq!(mesh.indices.len(), 2);
        assert!((mesh.area() - 1.0).abs() < 1e-9);
        assert!(mesh.vertices.iter().all(|v| (v.z - 2.5).abs() < 1e-12));
    }

    #[test]
    fn face_with_hole_excludes_interior() {
        let face = RegionFace::new(square(0.0, 0.0, 4.0, 0.0), vec![square(1.0, 1.0, 2.0, 0.0)]);
        let region = Region::from_faces(vec![face]);
        let mesh = TessellateRegion::new(&region, TessellationParams::default())
            .execute()
            .unwrap();
        assert!((mesh.area() - 12.0).abs() < 1e-9, "area={}", mesh.area());
    }

    #[test]
    fn empty_region_yields_empty_mesh() {
        let mesh = TessellateRegion::new(&Region::empty(), TessellationParams::default())
            .execute()
            .unwrap();
        assert!(mesh.indices.is_empty());
    }
}
