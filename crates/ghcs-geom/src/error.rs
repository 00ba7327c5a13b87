#[derive(Debug, thiserror::Error)]
pub enum GeomError {
    #[error("convex polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("duplicate vertex at index {0}")]
    DuplicateVertex(usize),
    #[error("vertices are not wound counter-clockwise (signed area {signed_area} <= 0)")]
    NotCounterClockwise { signed_area: f32 },
    #[error("hull has {hull_planes} plane(s) but polygon has {polygon_vertices} vertex/vertices")]
    HullPolygonMismatch {
        hull_planes: usize,
        polygon_vertices: usize,
    },
    #[error("plane normal is not unit length: |n| = {length}")]
    NonUnitNormal { length: f32 },
    #[error("vertex {vertex_index} violates hull plane {plane_index}: n.p = {value} > d = {d}")]
    VertexOutsideHull {
        vertex_index: usize,
        plane_index: usize,
        value: f32,
        d: f32,
    },
}
