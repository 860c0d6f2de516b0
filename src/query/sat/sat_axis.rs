use crate::math::{Point, Real, UnitVector, Vector};
use crate::query::QueryError;
use crate::shape::{Polygon, Segment};
use crate::utils::{Interval, WPerp};

/// Where a candidate separating axis comes from.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AxisSource {
    /// The outward normal of the given edge of the first polygon.
    Polygon1(usize),
    /// The outward normal of the given edge of the second polygon.
    Polygon2(usize),
    /// The direction perpendicular to the velocity of the first polygon relative to the second.
    Velocity,
}

impl AxisSource {
    /// Is this the normal of an edge of the first polygon?
    pub fn is_polygon1(self) -> bool {
        matches!(self, AxisSource::Polygon1(_))
    }

    /// Is this the normal of an edge of the second polygon?
    pub fn is_polygon2(self) -> bool {
        matches!(self, AxisSource::Polygon2(_))
    }
}

/// A candidate separating axis, with the projections of both polygons on it.
///
/// The projections and the overlap are computed at time 0. The entry and exit times
/// are only filled by swept queries.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SeparatingAxis {
    /// The projection direction.
    pub normal: UnitVector<Real>,
    /// The world-space edge this axis was generated from.
    ///
    /// For a velocity axis, this is the velocity itself anchored at the polygon it moves.
    pub edge: Segment,
    /// Where this axis comes from.
    pub source: AxisSource,
    /// The projection of the first polygon on `normal`.
    pub proj1: Interval<Real>,
    /// The projection of the second polygon on `normal`.
    pub proj2: Interval<Real>,
    /// The signed penetration of the second projection into the first one.
    ///
    /// See [`Interval::penetration`] for the sign convention. Zero if the projections are disjoint.
    pub overlap: Real,
    /// The time when the projections start overlapping, if they do within the swept motion.
    pub time_of_entry: Option<Real>,
    /// The time when the projections stop overlapping, if they ever do.
    pub time_of_exit: Option<Real>,
}

impl SeparatingAxis {
    /// A new axis along `normal`, with empty projections.
    pub fn new(normal: UnitVector<Real>, edge: Segment, source: AxisSource) -> Self {
        Self {
            normal,
            edge,
            source,
            proj1: Interval(0.0, 0.0),
            proj2: Interval(0.0, 0.0),
            overlap: 0.0,
            time_of_entry: None,
            time_of_exit: None,
        }
    }

    /// An axis perpendicular to `velocity`, anchored at `anchor`.
    ///
    /// Returns `None` if `velocity` is zero.
    pub fn from_velocity(anchor: Point<Real>, velocity: &Vector<Real>) -> Option<Self> {
        let normal = velocity.perpendicular().try_unit().ok()?;
        let edge = Segment::new(anchor, anchor + velocity);
        Some(Self::new(normal, edge, AxisSource::Velocity))
    }

    /// Projects both polygons on this axis and computes their overlap.
    pub fn project(&mut self, poly1: &Polygon, poly2: &Polygon) {
        self.proj1 = project_polygon(&self.normal, poly1);
        self.proj2 = project_polygon(&self.normal, poly2);
        self.overlap = self.proj1.penetration(&self.proj2);
    }

    /// Do the projections stored on this axis fail to overlap?
    pub fn is_separating(&self) -> bool {
        !self.proj1.intersects(&self.proj2)
    }
}

/// Projects the world-space vertices of `polygon` on the unit vector `axis`.
pub fn project_polygon(axis: &Vector<Real>, polygon: &Polygon) -> Interval<Real> {
    let mut dots = polygon.absolute_vertices().map(|pt| pt.coords.dot(axis));
    // Polygons always have at least three vertices.
    let first = dots.next().unwrap_or(0.0);
    dots.fold(Interval::splat(first), Interval::enclose)
}

/// Appends to `out` the outward normals of every edge of `polygon`.
///
/// `source` tags each axis with the index of its edge.
pub fn polygon_axes(
    polygon: &Polygon,
    source: impl Fn(usize) -> AxisSource,
    out: &mut Vec<SeparatingAxis>,
) -> Result<(), QueryError> {
    out.reserve(polygon.vertices().len());

    for (i, edge) in polygon.edges().enumerate() {
        let normal = polygon.edge_normal(i)?;
        out.push(SeparatingAxis::new(normal, edge, source(i)));
    }

    Ok(())
}

/// The axes of the edges of `poly1` followed by the axes of the edges of `poly2`.
pub fn polygon_pair_axes(
    poly1: &Polygon,
    poly2: &Polygon,
) -> Result<Vec<SeparatingAxis>, QueryError> {
    let mut axes = Vec::with_capacity(poly1.vertices().len() + poly2.vertices().len() + 1);
    polygon_axes(poly1, AxisSource::Polygon1, &mut axes)?;
    polygon_axes(poly2, AxisSource::Polygon2, &mut axes)?;
    Ok(axes)
}
