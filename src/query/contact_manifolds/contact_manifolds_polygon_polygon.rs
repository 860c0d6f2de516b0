use crate::math::{Real, UnitVector, Vector};
use crate::query::clip::clip_segment_halfspace;
use crate::query::{ContactFace, ContactManifold, QueryError};
use crate::shape::{Polygon, Segment};
use crate::utils::{self, WPerp};

/// The support vertex of `polygon` along `dir`, and its adjacent edge that is the most
/// perpendicular to `dir`.
///
/// If both adjacent edges are equally perpendicular to `dir`, the edge toward the next
/// vertex is selected.
pub fn support_face(polygon: &Polygon, dir: &Vector<Real>) -> Result<ContactFace, QueryError> {
    let n = polygon.vertices().len();
    let i = utils::point_cloud_support_point_id(dir, polygon.vertices());
    let iprev = (i + n - 1) % n;
    let inext = (i + 1) % n;

    let support = polygon.absolute_vertex(i);
    let prev = polygon.absolute_vertex(iprev);
    let next = polygon.absolute_vertex(inext);

    let left = (support - prev)
        .try_unit()
        .map_err(|_| QueryError::DegenerateEdge { index: iprev })?;
    let right = (support - next)
        .try_unit()
        .map_err(|_| QueryError::DegenerateEdge { index: i })?;

    let segment = if right.dot(dir).abs() <= left.dot(dir).abs() {
        Segment::new(next, support)
    } else {
        Segment::new(support, prev)
    };

    Ok(ContactFace { support, segment })
}

/// Computes the contact points between two polygons by clipping.
///
/// The `normal` must point from `poly1` toward `poly2`. The face of each polygon facing the
/// other one is found with [`support_face`]. The face more perpendicular to `normal` becomes
/// the reference face, the other one the incident face. The incident face is clipped by the
/// two side planes of the reference face, then only its points at least as deep as the
/// reference support vertex are kept.
///
/// The polygons are not required to actually overlap: if clipping discards the incident
/// face, the returned manifold has no contact point but still reports both faces.
pub fn contact_manifold_polygon_polygon(
    poly1: &Polygon,
    poly2: &Polygon,
    normal: &UnitVector<Real>,
) -> Result<ContactManifold, QueryError> {
    let normal = normal.into_inner();
    let face1 = support_face(poly1, &normal)?;
    let face2 = support_face(poly2, &-normal)?;

    let dir1 = face1.direction().ok_or(QueryError::ZeroLengthVector)?;
    let dir2 = face2.direction().ok_or(QueryError::ZeroLengthVector)?;
    let flipped = dir1.dot(&normal).abs() > dir2.dot(&normal).abs();

    let (reference, incident, ref_dir) = if flipped {
        (face2, face1, dir2)
    } else {
        (face1, face2, dir1)
    };

    let mut manifold = ContactManifold {
        points: Default::default(),
        reference_face: Some(reference),
        incident_face: Some(incident),
        flipped,
    };

    // Side planes of the reference face.
    let clipped = clip_segment_halfspace(
        &incident.segment,
        &ref_dir,
        ref_dir.dot(&reference.segment.a.coords),
    );

    if clipped.len() < 2 {
        log::debug!("Incident face clipped out by the first side plane of the reference face.");
        return Ok(manifold);
    }

    let clipped = clip_segment_halfspace(
        &Segment::new(clipped[0], clipped[1]),
        &-ref_dir.into_inner(),
        -ref_dir.dot(&reference.segment.b.coords),
    );

    if clipped.len() < 2 {
        log::debug!("Incident face clipped out by the second side plane of the reference face.");
        return Ok(manifold);
    }

    // Normal of the reference face pointing inside of its polygon.
    let toward_incident = if flipped { -normal } else { normal };
    let mut inward = ref_dir.perpendicular();
    if inward.dot(&toward_incident) >= 0.0 {
        inward = -inward;
    }

    let ref_depth = inward.dot(&reference.support.coords);
    manifold.points = clipped
        .into_iter()
        .filter(|pt| inward.dot(&pt.coords) - ref_depth >= 0.0)
        .collect();

    Ok(manifold)
}
