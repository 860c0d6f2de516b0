use crate::math::{Point, Real, Vector};
use crate::query::sat::{self, polygon_pair_axes, SeparatingAxis};
use crate::query::sweep::SweepOptions;
use crate::query::{contact_manifold_polygon_polygon, CollisionResult, ContactAxis, QueryError};
use crate::shape::Polygon;
use crate::utils::Interval;

/// Computes when `poly1`, moving by `vel1` during one time unit, hits the stationary `poly2`.
///
/// See [`sweep_polygon_polygon_with_options`] for details.
pub fn sweep_polygon_polygon(
    poly1: &Polygon,
    poly2: &Polygon,
    vel1: &Vector<Real>,
) -> Result<CollisionResult, QueryError> {
    sweep_polygon_polygon_with_options(poly1, poly2, vel1, SweepOptions::default())
}

/// Computes when `poly1`, moving by `vel1` during one time unit, hits the stationary `poly2`.
///
/// The tested axes are the edge normals of both polygons followed by the axis perpendicular
/// to `vel1` (unless `vel1` is zero). On each axis, the time when the projection of `poly1`
/// starts overlapping the projection of `poly2` is recorded in
/// [`SeparatingAxis::time_of_entry`]. An axis where that never happens within the time unit
/// proves the polygons don't collide: the result then has `collide == false` and a time of
/// impact of 1.
///
/// Otherwise, the time of impact is the latest entry time among all axes. If it is 0, the
/// polygons are already penetrating and the result matches the one of
/// [`sat_polygon_polygon`](crate::query::sat::sat_polygon_polygon). If it is positive, the
/// contact manifold is computed between `poly2` and `poly1` advanced slightly past the time
/// of impact (see [`SweepOptions::overshoot`]), and the contact depth is 0.
pub fn sweep_polygon_polygon_with_options(
    poly1: &Polygon,
    poly2: &Polygon,
    vel1: &Vector<Real>,
    options: SweepOptions,
) -> Result<CollisionResult, QueryError> {
    debug_assert!(options.overshoot >= 1.0, "The sweep overshoot must be at least 1.");
    poly1.check()?;
    poly2.check()?;

    let mut axes = polygon_pair_axes(poly1, poly2)?;

    if let Some(axis) = SeparatingAxis::from_velocity(Point::from(*poly1.position()), vel1) {
        axes.push(axis);
    } else {
        log::debug!("Sweeping a polygon with a zero velocity: no velocity axis tested.");
    }

    let mut best: Option<(usize, Real)> = None;
    let mut separated = false;

    for (i, axis) in axes.iter_mut().enumerate() {
        axis.project(poly1, poly2);
        axis.time_of_entry = time_of_entry(&axis.proj1, &axis.proj2, axis.normal.dot(vel1));

        match axis.time_of_entry {
            Some(toi) => {
                if best.map_or(true, |(_, best_toi)| toi > best_toi) {
                    best = Some((i, toi));
                }
            }
            None => separated = true,
        }
    }

    let Some((index, toi)) = best.filter(|_| !separated) else {
        log::debug!("Swept polygons separated during the whole time unit.");
        return Ok(CollisionResult::separated(axes, Some(1.0)));
    };

    if toi == 0.0 {
        return sat::resolve_penetration(poly1, poly2, axes, Some(0.0));
    }

    let axis = &axes[index];
    let normal = if axis.normal.dot(vel1) < 0.0 {
        -axis.normal
    } else {
        axis.normal
    };
    log::trace!("Swept polygons hit at time {} along {:?}.", toi, axis.source);

    let advanced1 = poly1.translated(&(vel1 * (toi * options.overshoot)));
    let manifold = contact_manifold_polygon_polygon(&advanced1, poly2, &normal)?;

    Ok(CollisionResult {
        axes,
        collide: true,
        contact_axis: Some(ContactAxis {
            index,
            normal,
            depth: 0.0,
        }),
        time_of_impact: Some(toi),
        time_of_exit: None,
        manifold,
    })
}

/// The time when `proj1`, moving by `vel_dot` during one time unit, starts overlapping `proj2`.
///
/// Returns `None` if this doesn't happen within the time unit, so the result is never
/// greater than 1.
fn time_of_entry(proj1: &Interval<Real>, proj2: &Interval<Real>, vel_dot: Real) -> Option<Real> {
    if proj1.intersects(proj2) {
        return Some(0.0);
    }

    let distance = proj1.distance(proj2);

    if proj1.swept(vel_dot).intersects(proj2) && vel_dot.abs() >= distance.abs() {
        Some((distance / vel_dot).abs())
    } else {
        None
    }
}
