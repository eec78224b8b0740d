use std::path::PathBuf;

use crate::render::RenderSettings;

/// Environment variable naming the OBJ model to load.
pub const ENV_MODEL: &str = "GFX_ENGINE_MODEL";
/// Environment variable toggling the wireframe overlay (`0`, `false`, `off`
/// disable it).
pub const ENV_WIREFRAME: &str = "GFX_ENGINE_WIREFRAME";

/// Engine configuration.
///
/// Foreign hosts cannot pass structured options through the C ABI, so the
/// global engine reads overrides from the environment (`from_env`).
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// OBJ file loaded when a scene is created. Missing or invalid files fall
    /// back to the built-in cube.
    pub model_path: PathBuf,

    pub render: RenderSettings,

    /// Upper bound, in seconds, for a single frame's delta time.
    pub max_delta: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("model.obj"),
            render: RenderSettings::default(),
            max_delta: 0.25,
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by `GFX_ENGINE_*` environment variables.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup` (an environment-like key → value map).
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup(ENV_MODEL).filter(|p| !p.trim().is_empty()) {
            self.model_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(ENV_WIREFRAME) {
            match parse_flag(&raw) {
                Some(on) => self.render.wireframe = on,
                None => log::warn!("ignoring {ENV_WIREFRAME}={raw:?}: expected on/off"),
            }
        }

        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
