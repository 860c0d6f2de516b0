/// Error indicating that a polygon, or a vector, cannot be used by a geometric query.
///
/// Polygons are validated when they are built or edited, so queries on polygons obtained
/// through [`Polygon`](crate::shape::Polygon) constructors only fail on numerically
/// degenerate input. These errors are never recoverable by retrying the same query.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use sat2d::na::Point2;
/// use sat2d::query::QueryError;
/// use sat2d::shape::Polygon;
///
/// let segment = Polygon::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
/// assert_eq!(segment, Err(QueryError::NotEnoughVertices { count: 2 }));
/// # }
/// ```
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// A polygon must have at least three vertices.
    #[error("a polygon needs at least 3 vertices, found {count}.")]
    NotEnoughVertices {
        /// The number of vertices found.
        count: usize,
    },
    /// Found an edge with two identical endpoints.
    #[error("the edge {index} has a zero length.")]
    DegenerateEdge {
        /// The index of the first vertex of the edge.
        index: usize,
    },
    /// The vertices enclose no area, so they have no winding.
    #[error("the polygon has a zero area; its winding cannot be determined.")]
    DegenerateWinding,
    /// Attempted to normalize a vector with a zero length.
    #[error("cannot normalize a zero-length vector.")]
    ZeroLengthVector,
    /// Attempted to edit a vertex that doesn't exist.
    #[error("the vertex index {index} is out of bounds for a polygon with {len} vertices.")]
    VertexOutOfBounds {
        /// The index that was requested.
        index: usize,
        /// The number of vertices of the polygon.
        len: usize,
    },
}
