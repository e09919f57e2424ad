pub mod color;
pub mod recording;
pub mod traits;

pub use color::{Palette, Rgba};
pub use recording::{DrawCommand, RecordingSurface};
pub use traits::DrawSurface;
