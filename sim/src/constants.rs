/// Simulation step used for every rendered frame (seconds).
///
/// There is no accumulator: one frame always advances the world by exactly this
/// much, so simulated time drifts from wall-clock time when the frame rate drops.
pub const FIXED_DT: f32 = 1.0 / 60.0;

/// Gravity along -Y (meters per second squared, positive value).
pub const GRAVITY_MPS2: f32 = 10.0;

/// Number of reusable projectiles owned by the reference tank.
pub const PROJECTILE_POOL_SIZE: usize = 10;

/// Collision radius of every projectile (meters).
///
/// Sphere bodies ignore the size they are asked for and always use this radius.
pub const PROJECTILE_RADIUS: f32 = 0.1;

/// Magnitude of the one-step central force that launches a projectile (newtons).
pub const SHOOTING_FORCE: f32 = 3000.0;

/// Distance in front of the cannon origin, along its local -Z, where projectiles spawn.
pub const MUZZLE_OFFSET: f32 = 0.5;

/// Height above the cannon where idle projectiles are parked at setup (meters).
pub const PROJECTILE_PARK_HEIGHT: f32 = 30.0;

/// Magnitude of the per-track force applied while a drive key is held (newtons).
pub const DRIVE_FORCE: f32 = 10.0;

/// Asset paths (relative to the client's asset root) of the OBJ models used by the level.
pub const KEY_MODEL_PATH: &str = "models/key.obj";
pub const SPHERE_MODEL_PATH: &str = "models/sphere.obj";
