pub mod config;
pub mod constants;
pub mod error;
pub mod flake;
pub mod mount;
pub mod spawner;

pub use config::{SnowfallConfig, SpawnMode, UniformRange};
pub use error::{ConfigError, MountError};
pub use flake::{Glyph, Snowflake, CSS_CLASS};
pub use mount::FlakeMount;
pub use spawner::Spawner;
