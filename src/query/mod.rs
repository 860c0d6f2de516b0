//! Non-persistent geometric queries between two polygons.
//!
//! # General cases
//! The most general method provided by this module is [`collide()`], which
//! runs one of the three collision queries selected by a [`CollisionQuery`]:
//!
//! * [`sat::sat_polygon_polygon()`] to determine if two stationary polygons collide, and the
//!   minimum translation that separates them.
//! * [`sweep::sweep_polygon_polygon()`] to determine when a moving polygon hits a stationary one.
//! * [`sweep::double_sweep_polygon_polygon()`] to determine when two moving polygons hit.
//!
//! All of them return a [`CollisionResult`], with the contact manifold of the polygons at
//! the time of impact.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are the building blocks of the queries
//! above: the clipping of a segment by a half-plane and the contact manifold computation.

pub use self::collision_query::{collide, CollisionQuery};
pub use self::collision_result::{CollisionResult, ContactAxis};
pub use self::contact_manifolds::{ContactFace, ContactManifold};
pub use self::error::QueryError;

pub(crate) use self::contact_manifolds::contact_manifold_polygon_polygon;

mod clip;
mod collision_query;
mod collision_result;
mod contact_manifolds;
mod error;
pub mod sat;
pub mod sweep;

/// Queries dedicated to specific steps of the collision queries.
pub mod details {
    pub use super::clip::*;
    pub use super::contact_manifolds::{contact_manifold_polygon_polygon, support_face};
}
