//! nalgebra (simulation) → bevy (render) value conversions.

use bevy::prelude::*;
use nalgebra::UnitQuaternion;
use tank_sim as sim;

pub fn vec3(v: &sim::Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

pub fn quat(q: &UnitQuaternion<f32>) -> Quat {
    let c = q.quaternion().coords;
    Quat::from_xyzw(c.x, c.y, c.z, c.w)
}

pub fn transform(pose: &sim::Iso, scale: &sim::Vec3) -> Transform {
    Transform {
        translation: vec3(&pose.translation.vector),
        rotation: quat(&pose.rotation),
        scale: vec3(scale),
    }
}

pub fn color(rgb: sim::Rgb) -> Color {
    Color::linear_rgb(rgb.r, rgb.g, rgb.b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn rotation_survives_conversion() {
        let q = UnitQuaternion::from_axis_angle(&nalgebra::Vector3::y_axis(), FRAC_PI_2);
        let rotated = quat(&q) * Vec3::NEG_Z;
        assert!((rotated - Vec3::NEG_X).length() < 1e-5);
    }

    #[test]
    fn transform_carries_scale() {
        let pose = sim::Iso::translation(1.0, 2.0, 3.0);
        let t = transform(&pose, &sim::Vec3::new(0.25, 0.25, 0.25));
        assert_eq!(t.translation, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.scale, Vec3::splat(0.25));
    }
}
