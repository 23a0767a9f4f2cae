//! Scene model: the layer registry and its JSON manifest.
//!
//! A [`Scene`] is an ordered list of [`LayerSpec`] records — image source,
//! depth factor, blend mode, opacity. Draw order is registry order (the
//! manifest author stacks back-to-front); depth is a free-floating parallax
//! factor, not a sort key. Scenes arrive either from the built-in
//! illustration ([`Scene::builtin`]) or from host-supplied JSON
//! ([`Scene::from_json`]), and are immutable once mounted.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation or parse failure for a scene manifest.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The manifest was not valid JSON for the scene schema.
    #[error("invalid scene manifest: {0}")]
    Parse(#[from] serde_json::Error),
    /// The manifest contained no layers.
    #[error("scene has no layers")]
    Empty,
    /// A layer's image source was empty.
    #[error("layer {index} has an empty image source")]
    EmptySource { index: usize },
    /// A layer's opacity fell outside `[0, 1]`.
    #[error("layer {index} opacity {opacity} is outside 0..=1")]
    OpacityRange { index: usize, opacity: f64 },
}

/// How a layer is composited over the pixels beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    /// Source-over alpha compositing.
    #[default]
    Normal,
    /// Multiply the layer with the pixels beneath (used for shadows).
    Multiply,
    /// Inverse multiply; brightens.
    Screen,
    /// Multiply or screen depending on the backdrop.
    Overlay,
}

impl BlendMode {
    /// The Canvas2D `globalCompositeOperation` keyword for this mode.
    #[must_use]
    pub fn composite_op(self) -> &'static str {
        match self {
            Self::Normal => "source-over",
            Self::Multiply => "multiply",
            Self::Screen => "screen",
            Self::Overlay => "overlay",
        }
    }
}

/// One layer of the illustration, as stored in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerSpec {
    /// Image source path or URL, resolved relative to the host page.
    pub src: String,
    /// Signed parallax depth factor. Negative recedes, positive advances
    /// toward the viewer; magnitude scales the layer's travel.
    pub depth: f64,
    /// Compositing mode. Defaults to [`BlendMode::Normal`].
    #[serde(default)]
    pub blend: BlendMode,
    /// Layer opacity in `[0, 1]`. Defaults to fully opaque.
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

fn default_opacity() -> f64 {
    1.0
}

/// An ordered, validated layer registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    layers: Vec<LayerSpec>,
}

impl Scene {
    /// Build a scene from layer records, validating each.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError`] if the list is empty, a source is blank, or an
    /// opacity falls outside `[0, 1]`.
    pub fn new(layers: Vec<LayerSpec>) -> Result<Self, SceneError> {
        if layers.is_empty() {
            return Err(SceneError::Empty);
        }
        for (index, layer) in layers.iter().enumerate() {
            if layer.src.trim().is_empty() {
                return Err(SceneError::EmptySource { index });
            }
            if !(0.0..=1.0).contains(&layer.opacity) {
                return Err(SceneError::OpacityRange { index, opacity: layer.opacity });
            }
        }
        Ok(Self { layers })
    }

    /// Parse and validate a JSON manifest.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError`] on malformed JSON or any validation failure.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let scene: Self = serde_json::from_str(json)?;
        Self::new(scene.layers)
    }

    /// The layers in draw order (back to front).
    #[must_use]
    pub fn layers(&self) -> &[LayerSpec] {
        &self.layers
    }

    /// Number of layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns `true` if the scene holds no layers. Never true for a scene
    /// built through [`Scene::new`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// The built-in ten-layer illustration.
    #[must_use]
    pub fn builtin() -> Self {
        let layer = |src: &str, depth: f64, blend: BlendMode, opacity: f64| LayerSpec {
            src: src.to_owned(),
            depth,
            blend,
            opacity,
        };
        Self {
            layers: vec![
                layer("img/layer_1_planet.png", -3.5, BlendMode::Normal, 1.0),
                layer("img/layer_2_rocket.png", -2.0, BlendMode::Normal, 1.0),
                layer("img/layer_3_stripe.png", -2.5, BlendMode::Normal, 0.6),
                layer("img/layer_4_monster_shadow.png", -1.5, BlendMode::Multiply, 0.75),
                layer("img/layer_5_planet2.png", -1.2, BlendMode::Normal, 1.0),
                layer("img/layer_6_monster.png", -1.0, BlendMode::Normal, 1.0),
                layer("img/layer_7_monster_cheeks.png", -0.8, BlendMode::Normal, 1.0),
                layer("img/layer_8_monster_hands.png", -0.3, BlendMode::Normal, 1.0),
                layer("img/layer_9_mask.png", 0.0, BlendMode::Normal, 1.0),
                layer("img/layer_10_float.png", 1.5, BlendMode::Normal, 1.0),
            ],
        }
    }
}
