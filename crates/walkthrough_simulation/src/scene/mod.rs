//! Scene domain — загрузка ассетов и индексация nodes
//!
//! - description: headless asset loader (RON node tree → ECS иерархия)
//! - index: SceneIndex (avatar / house / door + name → Entity)
//! - barrier: join двух независимых completion сигналов перед стартом frame loop

pub mod barrier;
pub mod description;
pub mod index;

pub use barrier::*;
pub use description::*;
pub use index::*;
