pub mod constants;
pub mod contact;
pub mod entity;
pub mod error;
pub mod graphics;
pub mod level;
pub mod physics;
pub mod platform;
pub mod scene;
pub mod tank;
pub mod types;

pub use constants::{DRIVE_FORCE, FIXED_DT, PROJECTILE_POOL_SIZE, SHOOTING_FORCE};
pub use contact::{ContactMediator, ContactSource};
pub use entity::{Entity, EntityId, EntityRegistry};
pub use error::{ComponentKind, SimError};
pub use graphics::{CameraConfig, MeshSource, NodeId, RenderNode, SceneGraph};
pub use level::{LevelDef, TankLayout, reference_level};
pub use physics::{BodyId, JointId, PhysicsSettings, PhysicsWorld};
pub use platform::{LinearPath, Platform};
pub use scene::{FrameInput, FrameOutcome, HeldControls, InputEvent, Scene};
pub use tank::Tank;
pub use types::{Iso, Quat, Rgb, Vec3};
