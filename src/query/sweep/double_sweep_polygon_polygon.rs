use crate::math::{Point, Real, Vector};
use crate::query::sat::{self, polygon_pair_axes, SeparatingAxis};
use crate::query::sweep::SweepOptions;
use crate::query::{contact_manifold_polygon_polygon, CollisionResult, ContactAxis, QueryError};
use crate::shape::Polygon;
use crate::utils::Interval;

/// Computes when `poly1` and `poly2`, moving by `vel1` and `vel2` during one time unit, hit.
///
/// A missing velocity is zero. See [`double_sweep_polygon_polygon_with_options`] for details.
pub fn double_sweep_polygon_polygon(
    poly1: &Polygon,
    poly2: &Polygon,
    vel1: Option<&Vector<Real>>,
    vel2: Option<&Vector<Real>>,
) -> Result<CollisionResult, QueryError> {
    double_sweep_polygon_polygon_with_options(poly1, poly2, vel1, vel2, SweepOptions::default())
}

/// Computes when `poly1` and `poly2`, moving by `vel1` and `vel2` during one time unit, hit.
///
/// A missing velocity is zero. The tested axes are the edge normals of both polygons followed
/// by the axis perpendicular to the relative velocity `vel1 - vel2`, unless it is zero.
///
/// On each axis, the projections of the polygons overlap during a time range
/// `[time_of_entry, time_of_exit]`, recorded on the [`SeparatingAxis`]. An axis where the
/// projections never start overlapping proves the polygons don't collide. The polygons
/// collide if the latest entry time is smaller than both the earliest exit time and 1.
///
/// If the time of impact is 0, the polygons are already penetrating and the contact axis and
/// manifold are the ones given by [`sat_polygon_polygon`](crate::query::sat::sat_polygon_polygon).
/// Otherwise, the contact manifold is computed between both polygons advanced slightly past
/// the time of impact (see [`SweepOptions::overshoot`]), and the contact depth is 0.
pub fn double_sweep_polygon_polygon_with_options(
    poly1: &Polygon,
    poly2: &Polygon,
    vel1: Option<&Vector<Real>>,
    vel2: Option<&Vector<Real>>,
    options: SweepOptions,
) -> Result<CollisionResult, QueryError> {
    debug_assert!(options.overshoot >= 1.0, "The sweep overshoot must be at least 1.");
    poly1.check()?;
    poly2.check()?;

    let vel1 = vel1.copied().unwrap_or_else(Vector::zeros);
    let vel2 = vel2.copied().unwrap_or_else(Vector::zeros);
    let rel_vel = vel1 - vel2;

    let mut axes = polygon_pair_axes(poly1, poly2)?;
    let anchor = Point::from(poly1.position() + vel1);

    if let Some(axis) = SeparatingAxis::from_velocity(anchor, &rel_vel) {
        axes.push(axis);
    } else {
        log::debug!("Sweeping polygons without relative velocity: no velocity axis tested.");
    }

    let mut best: Option<(usize, Real)> = None;
    let mut earliest_exit: Option<Real> = None;
    let mut separated = false;

    for (i, axis) in axes.iter_mut().enumerate() {
        axis.project(poly1, poly2);

        let Some((entry, exit)) =
            overlap_time_range(&axis.proj1, &axis.proj2, axis.normal.dot(&rel_vel))
        else {
            separated = true;
            continue;
        };

        axis.time_of_entry = Some(entry);
        axis.time_of_exit = exit;

        if best.map_or(true, |(_, best_entry)| entry > best_entry) {
            best = Some((i, entry));
        }

        if let Some(exit) = exit {
            earliest_exit = Some(earliest_exit.map_or(exit, |e| e.min(exit)));
        }
    }

    let Some((index, toi)) = best.filter(|(_, toi)| {
        !separated && *toi < 1.0 && earliest_exit.map_or(true, |exit| *toi < exit)
    }) else {
        log::debug!("Double-swept polygons separated during the whole time unit.");
        return Ok(CollisionResult::separated(axes, Some(1.0)));
    };

    if toi == 0.0 {
        let mut result = sat::resolve_penetration(poly1, poly2, axes, Some(0.0))?;
        result.time_of_exit = earliest_exit;
        return Ok(result);
    }

    let axis = &axes[index];
    let normal = if axis.normal.dot(&rel_vel) < 0.0 {
        -axis.normal
    } else {
        axis.normal
    };
    log::trace!(
        "Double-swept polygons hit at time {} along {:?}.",
        toi,
        axis.source
    );

    let shift = toi * options.overshoot;
    let advanced1 = poly1.translated(&(vel1 * shift));
    let advanced2 = poly2.translated(&(vel2 * shift));
    let manifold = contact_manifold_polygon_polygon(&advanced1, &advanced2, &normal)?;

    Ok(CollisionResult {
        axes,
        collide: true,
        contact_axis: Some(ContactAxis {
            index,
            normal,
            depth: 0.0,
        }),
        time_of_impact: Some(toi),
        time_of_exit: earliest_exit,
        manifold,
    })
}

/// The times when `proj1`, moving by `rel_vel` relative to `proj2`, starts and stops
/// overlapping `proj2`.
///
/// Returns `None` if they never start overlapping. The exit time is `None` if they
/// never stop overlapping.
fn overlap_time_range(
    proj1: &Interval<Real>,
    proj2: &Interval<Real>,
    rel_vel: Real,
) -> Option<(Real, Option<Real>)> {
    if proj1.intersects(proj2) {
        let exit = if rel_vel > 0.0 {
            Some((proj2.1 - proj1.0) / rel_vel)
        } else if rel_vel < 0.0 {
            Some((proj2.0 - proj1.1) / rel_vel)
        } else {
            None
        };

        Some((0.0, exit))
    } else if proj1.1 < proj2.0 {
        // `proj1` is below `proj2` and must move up.
        (rel_vel > 0.0).then(|| {
            let entry = (proj2.0 - proj1.1) / rel_vel;
            let exit = (proj2.1 - proj1.0) / rel_vel;
            (entry, Some(exit))
        })
    } else {
        // `proj1` is above `proj2` and must move down.
        (rel_vel < 0.0).then(|| {
            let entry = (proj2.1 - proj1.0) / rel_vel;
            let exit = (proj2.0 - proj1.1) / rel_vel;
            (entry, Some(exit))
        })
    }
}
