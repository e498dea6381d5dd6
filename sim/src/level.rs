//! Declarative description of the playable level.

use crate::constants::{KEY_MODEL_PATH, PROJECTILE_POOL_SIZE};
use crate::platform::LinearPath;
use crate::types::{Rgb, Vec3, vec3};

/// A box-shaped scenery object.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityDef {
    pub name: &'static str,
    pub origin: Vec3,
    pub half_extents: Vec3,
    /// 0 for fixed geometry.
    pub mass: f32,
    /// Render scale; for cubes this equals the half extents.
    pub scale: Vec3,
    pub color: Rgb,
}

impl EntityDef {
    /// Cube whose render scale matches its collision half extents.
    pub fn cube(name: &'static str, origin: Vec3, half_extents: Vec3, mass: f32, color: Rgb) -> Self {
        Self {
            name,
            origin,
            half_extents,
            mass,
            scale: half_extents,
            color,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeyDef {
    pub entity: EntityDef,
    pub model: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimatedDef {
    pub entity: EntityDef,
    pub path: LinearPath,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PartDef {
    pub position: Vec3,
    pub half_extents: Vec3,
    pub mass: f32,
    pub color: Rgb,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TankLayout {
    pub left_track: PartDef,
    pub right_track: PartDef,
    pub chassis: PartDef,
    pub turret: PartDef,
    pub cannon: PartDef,
    /// Hinge pivots in chassis space; the track side pivots at its own origin.
    pub left_hinge_anchor: Vec3,
    pub right_hinge_anchor: Vec3,
    /// Turret mount in chassis space.
    pub turret_frame: Vec3,
    /// Cannon mount in turret space.
    pub cannon_frame: Vec3,
    pub projectile_capacity: usize,
    pub projectile_scale: f32,
    pub projectile_mass: f32,
    pub projectile_color: Rgb,
}

impl Default for TankLayout {
    fn default() -> Self {
        let track_green = Rgb::new(0.216, 0.541, 0.243);
        let track = |x: f32| PartDef {
            position: vec3(x, 0.0, 0.0),
            half_extents: vec3(0.25, 0.25, 1.0),
            mass: 1.0,
            color: track_green,
        };
        Self {
            left_track: track(-1.2),
            right_track: track(1.2),
            chassis: PartDef {
                position: Vec3::zeros(),
                half_extents: vec3(1.0, 0.2, 1.0),
                mass: 1.0,
                color: Rgb::new(0.36, 0.541, 0.243),
            },
            turret: PartDef {
                position: vec3(0.0, 0.55, 0.0),
                half_extents: vec3(0.5, 0.2, 0.35),
                mass: 1.0,
                color: Rgb::new(0.255, 0.529, 0.278),
            },
            cannon: PartDef {
                position: vec3(0.0, 0.55, -2.0),
                half_extents: vec3(0.2, 0.1, 0.5),
                mass: 1.0,
                color: Rgb::new(0.255, 0.529, 0.378),
            },
            left_hinge_anchor: vec3(-1.2, 0.0, 0.0),
            right_hinge_anchor: vec3(1.2, 0.0, 0.0),
            turret_frame: vec3(0.0, 0.5, 0.0),
            cannon_frame: vec3(0.0, 0.0, -0.85),
            projectile_capacity: PROJECTILE_POOL_SIZE,
            projectile_scale: 0.25,
            projectile_mass: 1.0,
            projectile_color: Rgb::WHITE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LevelDef {
    pub scenery: Vec<EntityDef>,
    pub door: Option<AnimatedDef>,
    pub key: Option<KeyDef>,
    pub platform: Option<AnimatedDef>,
    pub tank: Option<TankLayout>,
}

/// The single playable level: two ground slabs split by a walled gap with a
/// door, four loose columns, a sliding platform, the key and the tank.
pub fn reference_level() -> LevelDef {
    let ground = Rgb::new(0.75, 0.75, 0.75);
    let wall = Rgb::new(0.541, 0.518, 0.435);
    let column = Rgb::new(0.216, 0.541, 0.243);
    let column_half = vec3(1.0, 5.0, 1.0);

    let scenery = vec![
        EntityDef::cube("ground", vec3(-10.0, -2.0, 0.0), vec3(15.0, 1.0, 25.0), 0.0, ground),
        EntityDef::cube("ground2", vec3(30.0, -2.0, 0.0), vec3(15.0, 1.0, 25.0), 0.0, ground),
        EntityDef::cube("wall", vec3(16.0, 3.0, 15.0), vec3(1.0, 5.0, 10.0), 0.0, wall),
        EntityDef::cube("wall2", vec3(16.0, 3.0, -15.0), vec3(1.0, 5.0, 10.0), 0.0, wall),
        EntityDef::cube("cube", vec3(40.0, 0.0, -20.0), column_half, 1.0, column),
        EntityDef::cube("cube2", vec3(40.0, 0.0, 20.0), column_half, 1.0, column),
        EntityDef::cube("cube3", vec3(20.0, 0.0, 20.0), column_half, 1.0, column),
        EntityDef::cube("cube4", vec3(20.0, 0.0, -20.0), column_half, 1.0, column),
    ];

    let door = AnimatedDef {
        entity: EntityDef::cube(
            "door",
            vec3(16.0, 3.0, 0.0),
            vec3(1.0, 5.0, 4.5),
            0.0,
            Rgb::new(0.85, 0.85, 0.85),
        ),
        path: LinearPath::new(vec3(16.0, 3.0, 0.0), vec3(16.0, 10.0, 0.0), vec3(0.0, 0.05, 0.0)),
    };

    // Paper-thin slab; a zero half height would give rapier a degenerate cuboid.
    let platform = AnimatedDef {
        entity: EntityDef::cube(
            "platform",
            vec3(10.0, -1.0, -20.0),
            vec3(5.0, 0.05, 5.0),
            0.0,
            Rgb::new(0.85, 0.85, 0.85),
        ),
        path: LinearPath::new(vec3(10.0, -1.0, -20.0), vec3(10.0, -1.0, 20.0), vec3(0.0, 0.0, 0.025)),
    };

    let key = KeyDef {
        entity: EntityDef {
            name: "key",
            origin: vec3(-6.0, 2.0, -12.0),
            half_extents: vec3(0.25, 1.0, 2.0),
            mass: 1.0,
            scale: Vec3::repeat(1.0),
            color: Rgb::new(0.5, 0.5, 0.5),
        },
        model: KEY_MODEL_PATH,
    };

    LevelDef {
        scenery,
        door: Some(door),
        key: Some(key),
        platform: Some(platform),
        tank: Some(TankLayout::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn reference_names_are_unique() {
        let level = reference_level();
        let mut names: Vec<&str> = level.scenery.iter().map(|def| def.name).collect();
        names.extend(level.door.iter().map(|d| d.entity.name));
        names.extend(level.platform.iter().map(|p| p.entity.name));
        names.extend(level.key.iter().map(|k| k.entity.name));

        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
        assert_eq!(names.len(), 11);
    }

    #[test]
    fn tank_layout_matches_joint_frames() {
        let layout = TankLayout::default();
        assert_eq!(layout.left_hinge_anchor, layout.left_track.position);
        assert_eq!(layout.right_hinge_anchor, layout.right_track.position);
        assert_eq!(layout.projectile_capacity, 10);
    }
}
