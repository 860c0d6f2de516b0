//! Contact manifold computation.

pub use self::contact_manifold::{ContactFace, ContactManifold};
pub use self::contact_manifolds_polygon_polygon::{
    contact_manifold_polygon_polygon, support_face,
};

mod contact_manifold;
mod contact_manifolds_polygon_polygon;
