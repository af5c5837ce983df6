//! Presets bundled with the library.
//!
//! The "Init" patch pads banks that hold fewer than 100 programs. It ships
//! as a base64 FXP, exactly as the plugin saves it, and is decoded once on
//! first use.

use std::sync::LazyLock;

use crate::au::decode_base64;
use crate::fxp::decode_fxp;
use crate::preset::Preset;

/// Name of the bundled init patch.
pub const INIT_PRESET_NAME: &str = "Init";

/// Base64 FXP payload of the init patch.
static INIT_PATCH_B64: &str = include_str!("../assets/init_patch.b64");

static INIT_PRESET: LazyLock<Preset> = LazyLock::new(|| {
    match decode_base64(INIT_PATCH_B64).and_then(|bytes| decode_fxp(&bytes)) {
        Ok(preset) => preset,
        Err(e) => {
            tracing::error!("bundled init patch failed to decode: {e}");
            Preset::new(INIT_PRESET_NAME)
        }
    }
});

/// The bundled init preset.
///
/// # Example
///
/// ```rust
/// use onepatch_core::init_preset;
///
/// let init = init_preset();
/// assert_eq!(init.name, "Init");
/// ```
pub fn init_preset() -> Preset {
    INIT_PRESET.clone()
}
