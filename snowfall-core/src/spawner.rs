//! The snowflake spawner.
//!
//! Given a config, an RNG and a mount, creates flakes on demand. The host
//! calls [`Spawner::initialize`] when the page is ready and, in repeating
//! mode, [`Spawner::create_snowflake`] on each timer tick.

use rand::Rng;

use crate::config::SnowfallConfig;
use crate::error::{ConfigError, MountError};
use crate::flake::Snowflake;
use crate::mount::FlakeMount;

pub struct Spawner<R> {
    config: SnowfallConfig,
    rng: R,
    spawned: u64,
}

impl<R: Rng> Spawner<R> {
    pub fn new(config: SnowfallConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!(
            "Snowfall spawner ready: count={}, mode={}",
            config.count,
            config.spawn_mode.label()
        );
        Ok(Self {
            config,
            rng,
            spawned: 0,
        })
    }

    /// Create one batch of `config.count` flakes.
    ///
    /// Each call adds a full batch; nothing already mounted is checked or reused.
    /// Returns the number of flakes appended.
    pub fn initialize<M: FlakeMount + ?Sized>(
        &mut self,
        mount: &mut M,
    ) -> Result<usize, MountError> {
        let count = self.config.count as usize;
        for _ in 0..count {
            self.create_snowflake(mount)?;
        }
        log::info!("Spawned {} snowflakes ({} total)", count, self.spawned);
        Ok(count)
    }

    /// Draw one flake and append it to `mount`.
    pub fn create_snowflake<M: FlakeMount + ?Sized>(
        &mut self,
        mount: &mut M,
    ) -> Result<Snowflake, MountError> {
        let flake = Snowflake::random(&mut self.rng, &self.config);
        mount.append(&flake)?;
        self.spawned += 1;
        log::debug!(
            "Snowflake {} {}: size={:.1}px left={:.1}vw duration={:.1}s delay={:.1}s",
            self.spawned,
            flake.glyph,
            flake.font_size_px,
            flake.left_vw,
            flake.duration_s,
            flake.delay_s
        );
        Ok(flake)
    }

    pub fn config(&self) -> &SnowfallConfig {
        &self.config
    }

    /// Total flakes appended by this spawner.
    pub fn spawned(&self) -> u64 {
        self.spawned
    }
}
