//! Mount targets for spawned snowflakes.

use crate::error::MountError;
use crate::flake::Snowflake;

/// Something that can receive new snowflake elements, such as a page root.
///
/// The spawner only appends; it never reads back, reorders or removes.
pub trait FlakeMount {
    fn append(&mut self, flake: &Snowflake) -> Result<(), MountError>;
}

impl<M: FlakeMount + ?Sized> FlakeMount for &mut M {
    fn append(&mut self, flake: &Snowflake) -> Result<(), MountError> {
        (**self).append(flake)
    }
}

/// Headless mount: keeps the flakes in memory.
impl FlakeMount for Vec<Snowflake> {
    fn append(&mut self, flake: &Snowflake) -> Result<(), MountError> {
        self.push(*flake);
        Ok(())
    }
}
