//! Frame math between the shared anchor frame and a session's local frame.
//!
//! Composition order is fixed: an anchor-relative offset is first rotated by the anchor
//! orientation, then translated by the anchor position. Rotations compose with the Hamilton
//! product (`anchor ⊗ local`). Scale is never touched by the anchor.

use nalgebra::{Isometry3, Translation3, UnitQuaternion, Vector3};

use crate::placement::Placement;

/// The anchor's pose in the local session's reference frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedPose {
    pub position: Vector3<f32>,
    pub orientation: UnitQuaternion<f32>,
}

impl Default for ResolvedPose {
    fn default() -> Self {
        Self::identity()
    }
}

impl ResolvedPose {
    pub fn new(position: Vector3<f32>, orientation: UnitQuaternion<f32>) -> Self {
        Self {
            position,
            orientation,
        }
    }

    pub fn identity() -> Self {
        Self::new(Vector3::zeros(), UnitQuaternion::identity())
    }

    pub fn isometry(&self) -> Isometry3<f32> {
        Isometry3::from_parts(Translation3::from(self.position), self.orientation)
    }

    pub fn from_isometry(iso: &Isometry3<f32>) -> Self {
        Self::new(iso.translation.vector, iso.rotation)
    }

    /// `self ∘ inner`: `inner` expressed in this pose's frame, mapped into the outer frame.
    pub fn compose(&self, inner: &ResolvedPose) -> ResolvedPose {
        Self::from_isometry(&(self.isometry() * inner.isometry()))
    }

    pub fn inverse(&self) -> ResolvedPose {
        Self::from_isometry(&self.isometry().inverse())
    }

    /// Maps an anchor-relative placement into this session's world frame.
    pub fn place(&self, placement: &Placement) -> WorldTransform {
        WorldTransform {
            translation: self.position + self.orientation * *placement.position(),
            rotation: self.orientation * *placement.rotation(),
            scale: *placement.scale(),
        }
    }

    /// Inverse of [`place`](Self::place) for translation and rotation: expresses a world
    /// transform relative to this pose.
    pub fn localize(&self, world: &WorldTransform) -> (Vector3<f32>, UnitQuaternion<f32>) {
        let inv = self.orientation.inverse();
        (
            inv * (world.translation - self.position),
            inv * world.rotation,
        )
    }
}

impl std::ops::Mul for ResolvedPose {
    type Output = ResolvedPose;

    fn mul(self, rhs: ResolvedPose) -> ResolvedPose {
        self.compose(&rhs)
    }
}

/// Final transform handed to the rendering engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldTransform {
    pub translation: Vector3<f32>,
    pub rotation: UnitQuaternion<f32>,
    pub scale: Vector3<f32>,
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self {
            translation: Vector3::zeros(),
            rotation: UnitQuaternion::identity(),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1.0e-5;

    fn placement(position: Vector3<f32>, rotation: UnitQuaternion<f32>) -> Placement {
        Placement::new(position, rotation, Vector3::new(2.0, 0.5, 1.0), "model.glb")
            .expect("valid placement")
    }

    // `angle_to` goes through `acos`, which is too coarse near identity in f32.
    fn same_rotation(a: &UnitQuaternion<f32>, b: &UnitQuaternion<f32>) -> bool {
        a.coords.dot(&b.coords).abs() > 1.0 - EPS
    }

    fn assert_close(a: &WorldTransform, b: &WorldTransform) {
        assert!((a.translation - b.translation).norm() < EPS, "{a:?} vs {b:?}");
        assert!(same_rotation(&a.rotation, &b.rotation), "{a:?} vs {b:?}");
        assert_eq!(a.scale, b.scale);
    }

    #[test]
    fn identity_pose_leaves_placement_unchanged() {
        let rot = UnitQuaternion::from_euler_angles(0.3, -1.1, 0.7);
        let p = placement(Vector3::new(1.0, -2.0, 3.5), rot);

        let world = ResolvedPose::identity().place(&p);

        assert!((world.translation - *p.position()).norm() < EPS);
        assert!(same_rotation(&world.rotation, p.rotation()));
        assert_eq!(world.scale, *p.scale());
    }

    #[test]
    fn offset_is_rotated_before_translation() {
        // Anchor at (10, 0, 0) turned a quarter turn about +Y: local +X maps to world -Z.
        let pose = ResolvedPose::new(
            Vector3::new(10.0, 0.0, 0.0),
            UnitQuaternion::from_axis_angle(&Vector3::y_axis(), FRAC_PI_2),
        );
        let p = placement(Vector3::new(1.0, 0.0, 0.0), UnitQuaternion::identity());

        let world = pose.place(&p);

        assert!((world.translation - Vector3::new(10.0, 0.0, -1.0)).norm() < EPS);
    }

    #[test]
    fn rotation_uses_hamilton_product() {
        let yaw = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), FRAC_PI_2);
        let pitch = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), FRAC_PI_2);
        let pose = ResolvedPose::new(Vector3::zeros(), yaw);
        let p = placement(Vector3::zeros(), pitch);

        let world = pose.place(&p);

        let expected = yaw * pitch;
        assert!(same_rotation(&world.rotation, &expected));

        // Component-wise products of these two quaternions would not even be unit length.
        let (a, b) = (yaw.into_inner(), pitch.into_inner());
        let componentwise = nalgebra::Quaternion::new(a.w * b.w, a.i * b.i, a.j * b.j, a.k * b.k);
        assert!((componentwise.norm() - 1.0).abs() > 0.1);
    }

    #[test]
    fn sequential_poses_match_single_composed_pose() {
        let r1 = ResolvedPose::new(
            Vector3::new(1.0, 2.0, 3.0),
            UnitQuaternion::from_euler_angles(0.2, 0.4, -0.6),
        );
        let r2 = ResolvedPose::new(
            Vector3::new(-4.0, 0.5, 2.0),
            UnitQuaternion::from_euler_angles(-1.0, 0.1, 0.9),
        );
        let p = placement(
            Vector3::new(0.5, 0.25, -1.0),
            UnitQuaternion::from_euler_angles(0.0, 1.2, 0.0),
        );

        // Place with r2 first, then treat the result as anchor-relative to r1.
        let inner = r2.place(&p);
        let stepwise = r1.place(
            &Placement::new(inner.translation, inner.rotation, inner.scale, "model.glb")
                .expect("valid placement"),
        );
        let single = (r1 * r2).place(&p);

        assert_close(&stepwise, &single);
    }

    #[test]
    fn scale_ignores_anchor_orientation() {
        let pose = ResolvedPose::new(
            Vector3::new(3.0, 3.0, 3.0),
            UnitQuaternion::from_euler_angles(0.9, 0.9, 0.9),
        );
        let p = placement(Vector3::zeros(), UnitQuaternion::identity());

        assert_eq!(pose.place(&p).scale, *p.scale());
    }

    #[test]
    fn localize_inverts_place() {
        let pose = ResolvedPose::new(
            Vector3::new(-2.0, 1.0, 4.0),
            UnitQuaternion::from_euler_angles(0.3, 0.2, 0.1),
        );
        let p = placement(
            Vector3::new(1.0, 2.0, 3.0),
            UnitQuaternion::from_euler_angles(0.5, 0.0, -0.5),
        );

        let (position, rotation) = pose.localize(&pose.place(&p));

        assert!((position - *p.position()).norm() < EPS);
        assert!(same_rotation(&rotation, p.rotation()));
    }

    #[test]
    fn inverse_composes_to_identity() {
        let pose = ResolvedPose::new(
            Vector3::new(5.0, -1.0, 0.5),
            UnitQuaternion::from_euler_angles(1.0, -0.4, 2.0),
        );
        let id = pose * pose.inverse();

        assert!(id.position.norm() < EPS);
        assert!(same_rotation(&id.orientation, &UnitQuaternion::identity()));
    }
}
