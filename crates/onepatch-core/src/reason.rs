//! Reason Rack Extension patches (`.repatch`).
//!
//! A patch is a `JukeboxPatch` document holding one `Value` element per
//! device property. The Reason device differs from the plugin in two ways:
//! it has no `MOD_ENV_DEPTH`, and it splits delay time and LFO 2 rate into
//! free and synced knobs (see [`crate::derived`]). Patches carry neither a
//! name nor a plugin version.

use roxmltree::Document;

use crate::derived::{DerivedParams, TransferParams};
use crate::error::DecodeError;
use crate::param::{ParamKind, Parameter, format_number};
use crate::preset::Preset;
use crate::schema::{self, DELAY_TIME, LFO_2_RATE, MOD_ENV_DEPTH};

/// `deviceProductID` of the kHs ONE Rack Extension.
pub const DEVICE_PRODUCT_ID: &str = "com.kilohearts.khsONE";

const DEVICE_NAME: &str = "kiloHearts kHs ONE";
const DEVICE_VERSION: &str = "0.0.1";

/// Stored parameters the Reason device does not expose directly.
const EXCLUDED: [&str; 3] = [LFO_2_RATE, DELAY_TIME, MOD_ENV_DEPTH];

/// Serialize a preset as a Reason patch.
///
/// The declaration is written by hand: Reason rejects declarations with an
/// encoding attribute or single quotes.
pub fn encode_reason(preset: &Preset) -> Vec<u8> {
    let mut out = String::from("<?xml version=\"1.0\"?>\n");
    out.push_str("<JukeboxPatch version=\"1.0\">\n");
    out.push_str(&format!("  <DeviceNameInEnglish>{DEVICE_NAME}</DeviceNameInEnglish>\n"));
    out.push_str(&format!(
        "  <Properties deviceProductID=\"{DEVICE_PRODUCT_ID}\" deviceVersion=\"{DEVICE_VERSION}\">\n"
    ));
    out.push_str("    <Object name=\"custom_properties\">\n");

    for param in preset.iter().filter(|p| !EXCLUDED.contains(&p.name())) {
        push_value(&mut out, param.name(), param.kind(), &param.formatted_value());
    }
    for (name, value) in DerivedParams::from_preset(preset).entries() {
        push_value(&mut out, name, ParamKind::Number, &format_number(value));
    }

    out.push_str("    </Object>\n");
    out.push_str("  </Properties>\n");
    out.push_str("</JukeboxPatch>\n");
    out.into_bytes()
}

fn push_value(out: &mut String, name: &str, kind: ParamKind, text: &str) {
    out.push_str(&format!(
        "      <Value property=\"{name}\" type=\"{}\">{text}</Value>\n",
        kind.as_str()
    ));
}

/// Parse a Reason patch.
///
/// `name_hint` becomes the preset name, usually the file stem. The version
/// is set to the oldest supported one.
pub fn decode_reason(bytes: &[u8], name_hint: &str) -> Result<Preset, DecodeError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| DecodeError::UnrecognizedContainer("patch is not valid UTF-8".to_string()))?;
    let doc = Document::parse(text)?;

    let properties = doc
        .root_element()
        .children()
        .find(|n| n.has_tag_name("Properties"))
        .ok_or_else(|| DecodeError::UnrecognizedContainer("patch has no Properties".to_string()))?;
    match properties.attribute("deviceProductID") {
        Some(DEVICE_PRODUCT_ID) => {}
        other => {
            return Err(DecodeError::UnrecognizedContainer(format!(
                "device '{}' is not kHs ONE",
                other.unwrap_or("(missing)")
            )));
        }
    }
    let object = properties
        .children()
        .find(|n| n.has_tag_name("Object"))
        .ok_or_else(|| DecodeError::UnrecognizedContainer("patch has no Object".to_string()))?;

    let mut preset = Preset::new(name_hint);
    let mut transfer = TransferParams::default();

    for value in object.children().filter(|n| n.has_tag_name("Value")) {
        let property = value.attribute("property").ok_or_else(|| {
            DecodeError::UnrecognizedContainer("Value without a property".to_string())
        })?;
        let text = value.text().unwrap_or_default();

        if let Some(param) = preset.get_mut(property) {
            param.set_formatted_value(text)?;
        } else if let Some(spec) = schema::derived_spec(property) {
            let mut derived = Parameter::new(spec.name, spec.kind, spec.steps);
            derived.set_formatted_value(text)?;
            transfer.insert(spec.name, derived.normalized_value());
        } else {
            return Err(DecodeError::UnexpectedParameter(property.to_string()));
        }
    }

    transfer.reconcile(&mut preset)?;
    tracing::debug!(name = %preset.name, "decoded reason patch");
    Ok(preset)
}
