use std::cell::RefCell;
use std::rc::Rc;

use gloo_utils::format::JsValueSerdeExt;
use rand::rngs::StdRng;
use rand::SeedableRng;
use snowfall_core::{SnowfallConfig, SpawnMode, Spawner};
use wasm_bindgen::prelude::*;

pub mod dom_mount;
pub mod repeat;
pub mod trigger;

pub use dom_mount::DomMount;

fn init_logging() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
}

/// Start the default snowfall.
#[wasm_bindgen]
pub fn hydrate() {
    init_logging();
    if let Err(e) = start(SnowfallConfig::default()) {
        log::error!("Snowfall failed to start: {:?}", e);
    }
}

/// Start the snowfall with a partial config object; missing keys keep their defaults.
#[wasm_bindgen]
pub fn start_with_config(config: JsValue) -> Result<(), JsValue> {
    init_logging();
    start(parse_config(&config)?)
}

#[wasm_bindgen]
pub fn default_config() -> Result<JsValue, JsValue> {
    JsValue::from_serde(&SnowfallConfig::default())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").into()
}

fn parse_config(value: &JsValue) -> Result<SnowfallConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(SnowfallConfig::default());
    }
    value
        .into_serde::<SnowfallConfig>()
        .map_err(|e| JsValue::from_str(&format!("Invalid snowfall config: {e}")))
}

fn start(config: SnowfallConfig) -> Result<(), JsValue> {
    let spawner =
        Spawner::new(config, browser_rng()).map_err(|e| JsValue::from_str(&e.to_string()))?;
    trigger::on_dom_ready(move || spawn_on_ready(spawner))
}

fn spawn_on_ready(mut spawner: Spawner<StdRng>) {
    let mut mount = match DomMount::body() {
        Ok(mount) => mount,
        Err(e) => {
            log::warn!("Snowfall not mounted: {}", e);
            return;
        }
    };

    if let Err(e) = spawner.initialize(&mut mount) {
        log::warn!("Initial snowfall incomplete: {}", e);
    }

    if let SpawnMode::Repeating { interval_ms } = spawner.config().spawn_mode {
        repeat::start_repeating(
            Rc::new(RefCell::new(spawner)),
            Rc::new(RefCell::new(mount)),
            interval_ms,
        );
    }
}

/// Seed from the page's own random source.
fn browser_rng() -> StdRng {
    let word = || (js_sys::Math::random() * u32::MAX as f64) as u64;
    StdRng::seed_from_u64((word() << 32) | word())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use snowfall_core::Glyph;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn body_flake_count() -> u32 {
        web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .get_elements_by_class_name("snowflake")
            .length()
    }

    #[wasm_bindgen_test]
    fn missing_config_means_defaults() {
        assert_eq!(
            parse_config(&JsValue::UNDEFINED).unwrap(),
            SnowfallConfig::default()
        );
        assert_eq!(parse_config(&JsValue::NULL).unwrap(), SnowfallConfig::default());
    }

    #[wasm_bindgen_test]
    fn partial_config_object_is_merged() {
        let value = js_sys::JSON::parse(r#"{"count": 3, "glyphs": ["❅"]}"#).unwrap();
        let config = parse_config(&value).unwrap();
        assert_eq!(config.count, 3);
        assert_eq!(config.glyphs, vec![Glyph::TightTrifoliate]);
        assert_eq!(config.max_delay, 10.0);
    }

    #[wasm_bindgen_test]
    fn malformed_config_is_an_error() {
        let value = js_sys::JSON::parse(r#"{"count": "many"}"#).unwrap();
        assert!(parse_config(&value).is_err());
    }

    #[wasm_bindgen_test]
    fn invalid_config_is_rejected_before_spawning() {
        let value = js_sys::JSON::parse(r#"{"glyphs": []}"#).unwrap();
        assert!(start_with_config(value).is_err());
    }

    #[wasm_bindgen_test]
    fn each_start_appends_a_batch_to_body() {
        let before = body_flake_count();
        let value = js_sys::JSON::parse(r#"{"count": 4}"#).unwrap();

        start_with_config(value.clone()).unwrap();
        assert_eq!(body_flake_count(), before + 4);

        start_with_config(value).unwrap();
        assert_eq!(body_flake_count(), before + 8);
    }

    #[wasm_bindgen_test]
    fn default_config_exposes_camel_case_keys() {
        let value = default_config().unwrap();
        let count = js_sys::Reflect::get(&value, &"count".into()).unwrap();
        assert_eq!(count.as_f64(), Some(10.0));
        let delay = js_sys::Reflect::get(&value, &"maxDelay".into()).unwrap();
        assert_eq!(delay.as_f64(), Some(10.0));
    }
}
