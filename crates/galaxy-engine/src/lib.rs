pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::config::{BackgroundConfig, SceneConfig, TrailConfig};
pub use api::context::BackgroundAnimation;
pub use api::error::EngineError;
pub use api::types::{ArtifactId, Theme};
pub use components::comet::Comet;
pub use components::particle::Particle;
pub use components::star::Star;
pub use components::trail::{Glow, TrailArtifact};
pub use crate::core::scheduler::{FrameHandle, FrameRequester, FrameScheduler, SchedulerState};
pub use crate::core::viewport::Viewport;
pub use renderer::{DrawCommand, DrawSurface, Palette, RecordingSurface, Rgba};
pub use systems::rng::Rng;
pub use systems::scene::SceneSimulator;
pub use systems::trail::{PointerOutcome, TrailEmitter};
