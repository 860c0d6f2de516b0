use crate::math::{Point, Real, UnitVector, Vector};
use crate::query::sat::SeparatingAxis;
use crate::query::{ContactFace, ContactManifold};
use crate::shape::Polygon;

/// The axis selected to describe the contact between two colliding polygons.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContactAxis {
    /// The index of this axis in [`CollisionResult::axes`].
    pub index: usize,
    /// The contact normal, pointing from the first polygon toward the second one.
    pub normal: UnitVector<Real>,
    /// The penetration depth along `normal`.
    ///
    /// Always zero for contacts found by a swept query at a non-zero time of impact.
    pub depth: Real,
}

impl ContactAxis {
    /// The translation `normal * depth`.
    ///
    /// Moving the second polygon by this vector, or the first one by its opposite,
    /// separates both polygons.
    pub fn translation(&self) -> Vector<Real> {
        self.normal.into_inner() * self.depth
    }
}

/// The result of a collision query between two polygons.
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionResult {
    /// Every axis tested, with its projections.
    ///
    /// The axes of the edges of the first polygon come first, then the axes of the
    /// edges of the second polygon, then the velocity axis for swept queries.
    pub axes: Vec<SeparatingAxis>,
    /// Are the polygons colliding?
    pub collide: bool,
    /// The contact axis, set only if `collide` is `true`.
    pub contact_axis: Option<ContactAxis>,
    /// The time of impact, in `[0, 1]`, for swept queries. `None` for static queries.
    pub time_of_impact: Option<Real>,
    /// The time when the polygons stop overlapping, for double-swept queries.
    ///
    /// `None` if they never do, or if the query doesn't compute it.
    pub time_of_exit: Option<Real>,
    /// The contact points and faces.
    pub manifold: ContactManifold,
}

impl CollisionResult {
    /// A result with no collision.
    pub fn separated(axes: Vec<SeparatingAxis>, time_of_impact: Option<Real>) -> Self {
        Self {
            axes,
            collide: false,
            contact_axis: None,
            time_of_impact,
            time_of_exit: None,
            manifold: ContactManifold::new(),
        }
    }

    /// The contact points.
    pub fn contacts(&self) -> &[Point<Real>] {
        &self.manifold.points
    }

    /// The reference face of the contact manifold.
    pub fn reference_face(&self) -> Option<&ContactFace> {
        self.manifold.reference_face.as_ref()
    }

    /// The incident face of the contact manifold.
    pub fn incident_face(&self) -> Option<&ContactFace> {
        self.manifold.incident_face.as_ref()
    }

    /// The axis the contact was found on.
    pub fn contact_separating_axis(&self) -> Option<&SeparatingAxis> {
        self.contact_axis.and_then(|axis| self.axes.get(axis.index))
    }

    /// Where `polygon` is at the time of impact, moving at its own velocity.
    ///
    /// This is the current position of `polygon` if there is no time of impact.
    pub fn preview_position(&self, polygon: &Polygon) -> Vector<Real> {
        polygon.position() + polygon.velocity() * self.time_of_impact.unwrap_or(0.0)
    }
}
