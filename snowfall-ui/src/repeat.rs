//! Repeating spawn mode: one extra flake per interval tick.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use rand::Rng;
use snowfall_core::{FlakeMount, Spawner};

/// Start adding one flake every `interval_ms`.
///
/// Flakes are never removed, so the timer runs for the rest of the page's life.
pub fn start_repeating<R, M>(
    spawner: Rc<RefCell<Spawner<R>>>,
    mount: Rc<RefCell<M>>,
    interval_ms: u32,
) where
    R: Rng + 'static,
    M: FlakeMount + 'static,
{
    log::info!("Repeating spawn every {}ms", interval_ms);
    schedule(spawner, mount, interval_ms).forget();
}

fn schedule<R, M>(
    spawner: Rc<RefCell<Spawner<R>>>,
    mount: Rc<RefCell<M>>,
    interval_ms: u32,
) -> Interval
where
    R: Rng + 'static,
    M: FlakeMount + 'static,
{
    Interval::new(interval_ms, move || {
        let mut mount = mount.borrow_mut();
        if let Err(e) = spawner.borrow_mut().create_snowflake(&mut *mount) {
            log::warn!("Repeating spawn failed: {}", e);
        }
    })
}
