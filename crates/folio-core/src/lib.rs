pub mod compositor;
pub mod config;
pub mod constants;
pub mod content;
pub mod cube;
pub mod error;
pub mod hover;
pub mod layer;
pub mod picking;
pub mod rotation;
pub mod scene;
pub mod state;
pub mod tracking;
pub mod variant;

pub use compositor::*;
pub use config::*;
pub use content::*;
pub use cube::*;
pub use error::*;
pub use hover::*;
pub use layer::*;
pub use picking::*;
pub use rotation::*;
pub use scene::*;
pub use state::*;
pub use tracking::*;
pub use variant::*;
