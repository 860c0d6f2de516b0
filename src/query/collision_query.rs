use crate::query::sat::sat_polygon_polygon;
use crate::query::sweep::{double_sweep_polygon_polygon, sweep_polygon_polygon};
use crate::query::{CollisionResult, QueryError};
use crate::shape::Polygon;

/// The kind of collision query run by [`collide`].
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum CollisionQuery {
    /// Both polygons are stationary, see [`sat_polygon_polygon`].
    #[default]
    #[cfg_attr(feature = "serde-serialize", serde(alias = "mtv"))]
    Static,
    /// Only the first polygon moves, see [`sweep_polygon_polygon`].
    Sweep,
    /// Both polygons move, see [`double_sweep_polygon_polygon`].
    DoubleSweep,
}

/// Runs the collision query `query` between two polygons.
///
/// The velocities stored on the polygons are used by the swept queries. The velocity of
/// `poly2` is ignored by [`CollisionQuery::Sweep`], and both are ignored by
/// [`CollisionQuery::Static`].
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use sat2d::na::Vector2;
/// use sat2d::query::{collide, CollisionQuery};
/// use sat2d::shape::Polygon;
///
/// let square = Polygon::rectangle(Vector2::new(0.5, 0.5)).unwrap();
/// let moving = square.clone().with_velocity(Vector2::new(4.0, 0.0));
/// let target = square.with_position(Vector2::new(3.0, 0.0));
///
/// let fixed = collide(CollisionQuery::Static, &moving, &target).unwrap();
/// let swept = collide(CollisionQuery::Sweep, &moving, &target).unwrap();
/// assert!(!fixed.collide);
/// assert!(swept.collide);
/// assert_eq!(swept.time_of_impact, Some(0.5));
/// # }
/// ```
pub fn collide(
    query: CollisionQuery,
    poly1: &Polygon,
    poly2: &Polygon,
) -> Result<CollisionResult, QueryError> {
    match query {
        CollisionQuery::Static => sat_polygon_polygon(poly1, poly2),
        CollisionQuery::Sweep => sweep_polygon_polygon(poly1, poly2, poly1.velocity()),
        CollisionQuery::DoubleSweep => double_sweep_polygon_polygon(
            poly1,
            poly2,
            Some(poly1.velocity()),
            Some(poly2.velocity()),
        ),
    }
}
