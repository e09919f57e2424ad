//! DOM side of the pointer trail: the ambient glow element and one `<div>`
//! per live trail artifact.

use std::collections::HashMap;

use galaxy_engine::{ArtifactId, Glow, PointerOutcome, TrailArtifact};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::error::MountError;

/// CSS class given to every trail artifact element.
pub const ARTIFACT_CLASS: &str = "cursor-particle";

pub struct TrailLayer {
    document: Document,
    container: Element,
    glow: HtmlElement,
    live: HashMap<ArtifactId, Element>,
}

impl TrailLayer {
    pub fn new(document: &Document, glow_id: &str, container_id: &str, glow_size: f32) -> Result<Self, MountError> {
        let glow = document
            .get_element_by_id(glow_id)
            .ok_or_else(|| MountError::ElementNotFound(glow_id.to_string()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| MountError::WrongElementType { id: glow_id.to_string(), expected: "HTML element" })?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| MountError::ElementNotFound(container_id.to_string()))?;

        let style = glow.style();
        let size = format!("{}px", glow_size);
        style.set_property("width", &size).map_err(MountError::dom)?;
        style.set_property("height", &size).map_err(MountError::dom)?;

        Ok(Self {
            document: document.clone(),
            container,
            glow,
            live: HashMap::new(),
        })
    }

    /// Mirror one pointer move onto the DOM. Returns the artifact that was
    /// added, if any, so the caller can schedule its removal.
    pub fn apply(&mut self, outcome: &PointerOutcome) -> Option<TrailArtifact> {
        if let Some(glow) = outcome.glow {
            self.place_glow(&glow);
        }
        if let Some(id) = outcome.evicted {
            self.remove(id);
        }
        let artifact = outcome.spawned?;
        match self.create_artifact(&artifact) {
            Ok(el) => {
                self.live.insert(artifact.id, el);
                Some(artifact)
            }
            Err(err) => {
                log::warn!("trail artifact {:?} not shown: {}", artifact.id, err);
                None
            }
        }
    }

    fn place_glow(&self, glow: &Glow) {
        let corner = glow.top_left();
        let style = self.glow.style();
        let _ = style.set_property("left", &format!("{}px", corner.x));
        let _ = style.set_property("top", &format!("{}px", corner.y));
    }

    fn create_artifact(&self, artifact: &TrailArtifact) -> Result<Element, MountError> {
        let el = self.document.create_element("div").map_err(MountError::dom)?;
        el.set_class_name(ARTIFACT_CLASS);
        el.set_attribute(
            "style",
            &format!("left: {}px; top: {}px;", artifact.pos.x, artifact.pos.y),
        )
        .map_err(MountError::dom)?;
        self.container.append_child(&el).map_err(MountError::dom)?;
        Ok(el)
    }

    /// Remove one artifact's element. Unknown ids and a detached container
    /// are silently ignored.
    pub fn remove(&mut self, id: ArtifactId) {
        let Some(el) = self.live.remove(&id) else {
            return;
        };
        if self.container.is_connected() {
            el.remove();
        }
    }

    /// Remove every artifact element.
    pub fn clear(&mut self) {
        let attached = self.container.is_connected();
        for (_, el) in self.live.drain() {
            if attached {
                el.remove();
            }
        }
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}
