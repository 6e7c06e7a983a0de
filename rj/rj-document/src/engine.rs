//! Source-to-engine axis conversion.
//!
//! Source meshes use a right-handed, Z-up coordinate system; the consuming
//! game engine is Y-up with the opposite handedness. The conversion is the
//! fixed remap `(x, y, z) -> [x, z, -y]`.
//!
//! Every point or direction emitted into a document goes through exactly one
//! of these functions, exactly once: vertex positions, face normals,
//! attachment positions, and attachment normals. Nothing downstream remaps
//! axes again.

use rj_types::{Point3, Vector3};

/// Convert a position into engine space.
///
/// # Example
///
/// ```
/// use rj_document::engine_point;
/// use rj_types::Point3;
///
/// assert_eq!(engine_point(&Point3::new(1.0, 2.0, 3.0)), [1.0, 3.0, -2.0]);
/// ```
#[inline]
#[must_use]
pub fn engine_point(point: &Point3<f64>) -> [f64; 3] {
    [point.x, point.z, -point.y]
}

/// Convert a direction into engine space.
///
/// Same remap as [`engine_point`]; a separate entry point only because
/// positions and directions are distinct types at the call sites.
#[inline]
#[must_use]
pub fn engine_vector(vector: &Vector3<f64>) -> [f64; 3] {
    [vector.x, vector.z, -vector.y]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_remap() {
        assert_eq!(engine_point(&Point3::new(1.0, 2.0, 3.0)), [1.0, 3.0, -2.0]);
        assert_eq!(engine_point(&Point3::origin()), [0.0, -0.0, -0.0]);
    }

    #[test]
    fn vector_remap_matches_point_remap() {
        let v = Vector3::new(-4.0, 5.5, 0.25);
        let p = Point3::from(v);
        assert_eq!(engine_vector(&v), engine_point(&p));
    }

    #[test]
    fn up_axis_becomes_engine_up() {
        // Source up is +Z; engine up is the second component.
        assert_eq!(engine_vector(&Vector3::z()), [0.0, 1.0, -0.0]);
    }
}
