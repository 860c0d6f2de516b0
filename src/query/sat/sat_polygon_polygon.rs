use crate::math::Real;
use crate::query::sat::{polygon_pair_axes, SeparatingAxis};
use crate::query::{contact_manifold_polygon_polygon, ContactAxis, CollisionResult, QueryError};
use crate::shape::Polygon;

/// Tests if two stationary polygons collide, using the Separating Axis Theorem.
///
/// Every edge normal of both polygons is tested, even after a separating axis has been
/// found, so that all the projections can be inspected. If no axis separates the polygons,
/// the contact axis is the one with the smallest penetration, oriented so that moving `poly2`
/// by [`ContactAxis::translation`] separates both polygons.
pub fn sat_polygon_polygon(
    poly1: &Polygon,
    poly2: &Polygon,
) -> Result<CollisionResult, QueryError> {
    poly1.check()?;
    poly2.check()?;

    let mut axes = polygon_pair_axes(poly1, poly2)?;

    for axis in &mut axes {
        axis.project(poly1, poly2);
    }

    if let Some(sep) = axes.iter().position(SeparatingAxis::is_separating) {
        log::trace!("Polygons separated by the axis {:?}.", axes[sep].source);
        return Ok(CollisionResult::separated(axes, None));
    }

    resolve_penetration(poly1, poly2, axes, None)
}

/// The index of the axis with the smallest absolute overlap.
///
/// The first one is selected if several axes have the same overlap.
pub(crate) fn minimum_translation_axis(axes: &[SeparatingAxis]) -> Option<usize> {
    let mut best = None;
    let mut best_depth = Real::MAX;

    for (i, axis) in axes.iter().enumerate() {
        let depth = axis.overlap.abs();

        if depth < best_depth {
            best_depth = depth;
            best = Some(i);
        }
    }

    best
}

/// Builds the collision result of two overlapping polygons from projected `axes`.
///
/// None of `axes` can be separating.
pub(crate) fn resolve_penetration(
    poly1: &Polygon,
    poly2: &Polygon,
    axes: Vec<SeparatingAxis>,
    time_of_impact: Option<Real>,
) -> Result<CollisionResult, QueryError> {
    let Some(index) = minimum_translation_axis(&axes) else {
        return Ok(CollisionResult::separated(axes, time_of_impact));
    };

    let axis = &axes[index];
    // The sign of the overlap tells which way `poly2` has to be pushed.
    let normal = if axis.overlap.is_sign_negative() {
        -axis.normal
    } else {
        axis.normal
    };
    let depth = axis.overlap.abs();
    log::trace!(
        "Polygons penetrating by {} along the axis {:?}.",
        depth,
        axis.source
    );

    let manifold = contact_manifold_polygon_polygon(poly1, poly2, &normal)?;

    Ok(CollisionResult {
        axes,
        collide: true,
        contact_axis: Some(ContactAxis {
            index,
            normal,
            depth,
        }),
        time_of_impact,
        time_of_exit: None,
        manifold,
    })
}
