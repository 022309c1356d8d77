// snowfall-ui/src/dom_mount.rs
//!
//! Mounts snowflakes as `<div class="snowflake">` children of a DOM element.

use snowfall_core::{FlakeMount, MountError, Snowflake, CSS_CLASS};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

pub struct DomMount {
    document: Document,
    root: Element,
}

impl DomMount {
    pub fn new(document: Document, root: Element) -> Self {
        Self { document, root }
    }

    /// Mount onto `document.body`.
    pub fn body() -> Result<Self, MountError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| MountError::Unavailable("no document".to_string()))?;
        let body = document
            .body()
            .ok_or_else(|| MountError::Unavailable("document has no body".to_string()))?;
        Ok(Self::new(document, body.into()))
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    fn build_element(&self, flake: &Snowflake) -> Result<HtmlElement, JsValue> {
        let element = self
            .document
            .create_element("div")?
            .dyn_into::<HtmlElement>()?;
        element.class_list().add_1(CSS_CLASS)?;
        element.set_text_content(Some(flake.glyph.as_str()));

        let style = element.style();
        for (property, value) in flake.style_properties() {
            style.set_property(property, &value)?;
        }
        Ok(element)
    }
}

impl FlakeMount for DomMount {
    fn append(&mut self, flake: &Snowflake) -> Result<(), MountError> {
        let element = self.build_element(flake).map_err(js_error)?;
        self.root.append_child(&element).map_err(js_error)?;
        Ok(())
    }
}

fn js_error(value: JsValue) -> MountError {
    MountError::Append(format!("{value:?}"))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use snowfall_core::{SnowfallConfig, Spawner};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn detached_mount() -> DomMount {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        DomMount::new(document, root)
    }

    #[wasm_bindgen_test]
    fn append_builds_styled_snowflake_div() {
        let mut mount = detached_mount();
        let flake = Snowflake {
            glyph: snowfall_core::Glyph::Snowflake,
            font_size_px: 14.0,
            left_vw: 33.5,
            duration_s: 12.0,
            delay_s: -4.0,
        };

        mount.append(&flake).unwrap();

        let child = mount
            .root()
            .first_element_child()
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        assert_eq!(child.tag_name(), "DIV");
        assert_eq!(child.class_name(), "snowflake");
        assert_eq!(child.text_content().as_deref(), Some("❄"));

        let style = child.style();
        assert_eq!(style.get_property_value("font-size").unwrap(), "14px");
        assert_eq!(style.get_property_value("left").unwrap(), "33.5vw");
        assert_eq!(style.get_property_value("animation-duration").unwrap(), "12s");
        assert_eq!(style.get_property_value("animation-delay").unwrap(), "-4s");
    }

    #[wasm_bindgen_test]
    fn initialize_fills_root_with_batch() {
        let mut mount = detached_mount();
        let mut spawner =
            Spawner::new(SnowfallConfig::default(), StdRng::seed_from_u64(5)).unwrap();

        spawner.initialize(&mut mount).unwrap();
        spawner.initialize(&mut mount).unwrap();

        assert_eq!(mount.root().child_element_count(), 20);
        let flakes = mount.root().get_elements_by_class_name("snowflake");
        assert_eq!(flakes.length(), 20);
    }
}
