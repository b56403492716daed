//! ECS Components для entity walkthrough сцены
//!
//! Организация по доменам:
//! - avatar: управляемый игроком аватар (Avatar)
//! - world: статическая геометрия (StaticObstacle, LocalGeometry)
//! - door: дверь + one-shot trigger (Door, TriggerState)
//! - camera: follow camera + free-look (FollowCamera, ViewAdjustment)

pub mod avatar;
pub mod world;
pub mod door;
pub mod camera;

// Re-exports для удобного импорта
pub use avatar::*;
pub use world::*;
pub use door::*;
pub use camera::*;
