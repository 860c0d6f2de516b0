use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::query::QueryError;
use crate::shape::{Segment, Winding};
use crate::utils;

/// The plain-data form of a [`Polygon`], as stored by editors.
///
/// Converting it back into a [`Polygon`] validates it.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonData {
    /// The world-space offset added to every vertex.
    pub position: Vector<Real>,
    /// The local-space vertices, in winding order.
    pub vertices: Vec<Point<Real>>,
    /// A cosmetic tag (e.g. a display color). Never used by geometric queries.
    #[cfg_attr(feature = "serde-serialize", serde(default))]
    pub tag: String,
    /// The displacement of the polygon over one time unit.
    #[cfg_attr(feature = "serde-serialize", serde(default = "zero_vector"))]
    pub velocity: Vector<Real>,
}

#[cfg(feature = "serde-serialize")]
fn zero_vector() -> Vector<Real> {
    Vector::zeros()
}

/// A simple 2D polygon with a world-space position and a linear velocity.
///
/// The vertices are expressed in local-space: the absolute (world-space) position of a
/// vertex is its local position plus [`Polygon::position`]. Two consecutive vertices
/// determine an edge, and the last edge joins the last vertex to the first one.
///
/// A `Polygon` always has at least three vertices, no zero-length edge, and a non-zero
/// signed area from which its [`Winding`] is derived. Every constructor and mutator
/// checks these properties, and a failed mutation leaves the polygon untouched.
/// Edge normals are oriented toward the exterior of the polygon according to that winding.
///
/// Collision queries assume the polygon is convex (see [`Polygon::is_convex`]).
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(try_from = "PolygonData", into = "PolygonData")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point<Real>>,
    position: Vector<Real>,
    velocity: Vector<Real>,
    tag: String,
    winding: Winding,
}

impl Polygon {
    /// Builds a polygon at the origin, without velocity, from its local-space vertices.
    ///
    /// The vertices may be given in clockwise or counter-clockwise order.
    pub fn new(vertices: Vec<Point<Real>>) -> Result<Self, QueryError> {
        let winding = check_vertices(&vertices)?;

        Ok(Self {
            vertices,
            position: Vector::zeros(),
            velocity: Vector::zeros(),
            tag: String::new(),
            winding,
        })
    }

    /// Builds the axis-aligned rectangle with the given half-extents, centered at the
    /// local origin, with counter-clockwise vertices.
    pub fn rectangle(half_extents: Vector<Real>) -> Result<Self, QueryError> {
        let (hx, hy) = (half_extents.x, half_extents.y);
        Self::new(vec![
            Point::new(-hx, -hy),
            Point::new(hx, -hy),
            Point::new(hx, hy),
            Point::new(-hx, hy),
        ])
    }

    /// Rebuilds a polygon from its plain-data form.
    pub fn from_data(data: PolygonData) -> Result<Self, QueryError> {
        Ok(Self::new(data.vertices)?
            .with_position(data.position)
            .with_velocity(data.velocity)
            .with_tag(data.tag))
    }

    /// The plain-data form of this polygon.
    pub fn to_data(&self) -> PolygonData {
        PolygonData {
            position: self.position,
            vertices: self.vertices.clone(),
            tag: self.tag.clone(),
            velocity: self.velocity,
        }
    }

    /// Sets the world-space position of this polygon.
    #[must_use]
    pub fn with_position(mut self, position: Vector<Real>) -> Self {
        self.position = position;
        self
    }

    /// Sets the velocity of this polygon.
    #[must_use]
    pub fn with_velocity(mut self, velocity: Vector<Real>) -> Self {
        self.velocity = velocity;
        self
    }

    /// Sets the cosmetic tag of this polygon.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// The local-space vertices of this polygon.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The world-space offset of this polygon.
    #[inline]
    pub fn position(&self) -> &Vector<Real> {
        &self.position
    }

    /// The displacement of this polygon over one time unit.
    #[inline]
    pub fn velocity(&self) -> &Vector<Real> {
        &self.velocity
    }

    /// The cosmetic tag of this polygon.
    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The order of the vertices of this polygon.
    #[inline]
    pub fn winding(&self) -> Winding {
        self.winding
    }

    /// The world-space position of the `i`-th vertex.
    ///
    /// Panics if `i` is out of bounds.
    #[inline]
    pub fn absolute_vertex(&self, i: usize) -> Point<Real> {
        self.vertices[i] + self.position
    }

    /// The world-space vertices of this polygon.
    pub fn absolute_vertices(&self) -> impl ExactSizeIterator<Item = Point<Real>> + '_ {
        self.vertices.iter().map(move |pt| pt + self.position)
    }

    /// The world-space edges of this polygon, the `i`-th edge starting at the `i`-th vertex.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = Segment> + '_ {
        (0..self.vertices.len()).map(move |i| self.edge(i))
    }

    /// The `i`-th world-space edge of this polygon.
    ///
    /// Panics if `i` is out of bounds.
    pub fn edge(&self, i: usize) -> Segment {
        let j = (i + 1) % self.vertices.len();
        Segment::new(self.absolute_vertex(i), self.absolute_vertex(j))
    }

    /// The outward unit normal of the `i`-th edge.
    pub fn edge_normal(&self, i: usize) -> Result<UnitVector<Real>, QueryError> {
        let edge = self.edge(i);
        utils::outward_face_normal([&edge.a, &edge.b], self.winding)
            .ok_or(QueryError::DegenerateEdge { index: i })
    }

    /// Does every corner of this polygon turn in the direction of its winding?
    ///
    /// Corners with aligned edges are ignored.
    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();

        (0..n).all(|i| {
            let turn = Winding::of_corner(
                &self.vertices[i],
                &self.vertices[(i + 1) % n],
                &self.vertices[(i + 2) % n],
            );
            turn.map_or(true, |turn| turn == self.winding)
        })
    }

    /// Sets the world-space position of this polygon.
    pub fn set_position(&mut self, position: Vector<Real>) {
        self.position = position;
    }

    /// Moves this polygon by `shift`.
    pub fn translate(&mut self, shift: &Vector<Real>) {
        self.position += shift;
    }

    /// Sets the velocity of this polygon.
    pub fn set_velocity(&mut self, velocity: Vector<Real>) {
        self.velocity = velocity;
    }

    /// Sets the cosmetic tag of this polygon.
    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.tag = tag.into();
    }

    /// A copy of this polygon moved by `shift`.
    #[must_use]
    pub fn translated(&self, shift: &Vector<Real>) -> Self {
        let mut result = self.clone();
        result.translate(shift);
        result
    }

    /// A copy of this polygon moved by its velocity during `time`.
    #[must_use]
    pub fn advanced(&self, time: Real) -> Self {
        self.translated(&(self.velocity * time))
    }

    /// Replaces all the local-space vertices of this polygon.
    pub fn set_vertices(&mut self, vertices: Vec<Point<Real>>) -> Result<(), QueryError> {
        self.winding = check_vertices(&vertices)?;
        self.vertices = vertices;
        Ok(())
    }

    /// Moves the `i`-th local-space vertex to `pt`.
    pub fn set_vertex(&mut self, i: usize, pt: Point<Real>) -> Result<(), QueryError> {
        let len = self.vertices.len();
        let mut vertices = self.vertices.clone();
        *vertices
            .get_mut(i)
            .ok_or(QueryError::VertexOutOfBounds { index: i, len })? = pt;
        self.set_vertices(vertices)
    }

    /// Inserts a local-space vertex before the `index`-th vertex, or after the last
    /// vertex if `index` is `None`.
    pub fn insert_vertex(
        &mut self,
        index: Option<usize>,
        pt: Point<Real>,
    ) -> Result<(), QueryError> {
        let len = self.vertices.len();
        let index = index.unwrap_or(len);

        if index > len {
            return Err(QueryError::VertexOutOfBounds { index, len });
        }

        let mut vertices = self.vertices.clone();
        vertices.insert(index, pt);
        self.set_vertices(vertices)
    }

    /// Removes the `i`-th local-space vertex and returns it.
    pub fn remove_vertex(&mut self, i: usize) -> Result<Point<Real>, QueryError> {
        let len = self.vertices.len();

        if i >= len {
            return Err(QueryError::VertexOutOfBounds { index: i, len });
        }

        let mut vertices = self.vertices.clone();
        let removed = vertices.remove(i);
        self.set_vertices(vertices)?;
        Ok(removed)
    }

    /// Checks this polygon can be used by a collision query.
    pub(crate) fn check(&self) -> Result<(), QueryError> {
        check_vertices(&self.vertices).map(|_| ())
    }
}

impl TryFrom<PolygonData> for Polygon {
    type Error = QueryError;

    fn try_from(data: PolygonData) -> Result<Self, Self::Error> {
        Self::from_data(data)
    }
}

impl From<Polygon> for PolygonData {
    fn from(polygon: Polygon) -> Self {
        PolygonData {
            position: polygon.position,
            vertices: polygon.vertices,
            tag: polygon.tag,
            velocity: polygon.velocity,
        }
    }
}

fn check_vertices(vertices: &[Point<Real>]) -> Result<Winding, QueryError> {
    if vertices.len() < 3 {
        return Err(QueryError::NotEnoughVertices {
            count: vertices.len(),
        });
    }

    for (i, a) in vertices.iter().enumerate() {
        let b = &vertices[(i + 1) % vertices.len()];

        if (b - a).norm() <= DEFAULT_EPSILON {
            return Err(QueryError::DegenerateEdge { index: i });
        }
    }

    Winding::of_polyline(vertices).ok_or(QueryError::DegenerateWinding)
}
