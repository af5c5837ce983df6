//! AU presets (`.aupreset`): an Apple property list wrapping an FXP.
//!
//! The plist is a flat `dict` of alternating `key` and value elements. The
//! plugin state lives in `vstdata` as a base64 FXP; `name` overrides the
//! name stored inside that FXP.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use roxmltree::{Document, Node, ParsingOptions};

use crate::error::DecodeError;
use crate::fxp::{decode_fxp, encode_fxp};
use crate::magic::{AU_MANUFACTURER, AU_TYPE, EFFECT_ID, magic};
use crate::preset::Preset;

const PLIST_DOCTYPE: &str = r#"<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">"#;

/// Version of the AU wrapper itself, not of the plugin.
const AU_PRESET_VERSION: u32 = 1;

/// Serialize a preset as an `.aupreset` property list.
pub fn encode_au(preset: &Preset) -> Vec<u8> {
    let vstdata = BASE64.encode(encode_fxp(preset));
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
{PLIST_DOCTYPE}
<plist version="1.0">
<dict>
	<key>manufacturer</key>
	<integer>{manufacturer}</integer>
	<key>name</key>
	<string>{name}</string>
	<key>subtype</key>
	<integer>{subtype}</integer>
	<key>type</key>
	<integer>{au_type}</integer>
	<key>version</key>
	<integer>{AU_PRESET_VERSION}</integer>
	<key>vstdata</key>
	<data>{vstdata}</data>
</dict>
</plist>
"#,
        manufacturer = magic(AU_MANUFACTURER),
        name = escape_xml(&preset.name),
        subtype = magic(EFFECT_ID),
        au_type = magic(AU_TYPE),
    )
    .into_bytes()
}

/// Parse an `.aupreset` property list.
pub fn decode_au(bytes: &[u8]) -> Result<Preset, DecodeError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| DecodeError::UnrecognizedContainer("plist is not valid UTF-8".to_string()))?;
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(text, options)?;

    let root = doc.root_element();
    if !root.has_tag_name("plist") {
        return Err(DecodeError::UnrecognizedContainer(format!(
            "expected a plist, found <{}>",
            root.tag_name().name()
        )));
    }
    let dict = root
        .children()
        .find(|n| n.has_tag_name("dict"))
        .ok_or_else(|| DecodeError::UnrecognizedContainer("plist has no dict".to_string()))?;

    let subtype = find_value(dict, "subtype")
        .and_then(|n| n.text())
        .and_then(|t| t.trim().parse::<u32>().ok());
    if subtype != Some(magic(EFFECT_ID)) {
        return Err(DecodeError::UnrecognizedContainer(format!(
            "AU subtype {} is not kHs ONE",
            subtype.map_or_else(|| "(missing)".to_string(), |s| s.to_string())
        )));
    }

    let vstdata = find_value(dict, "vstdata")
        .ok_or_else(|| DecodeError::UnrecognizedContainer("plist has no vstdata".to_string()))?;
    let payload = decode_base64(vstdata.text().unwrap_or_default())?;
    let mut preset = decode_fxp(&payload)?;

    if let Some(name) = find_value(dict, "name") {
        preset.name = name.text().unwrap_or_default().to_string();
    }
    tracing::debug!(name = %preset.name, "decoded aupreset");
    Ok(preset)
}

/// The element following the `key` element whose text is `key`.
fn find_value<'a, 'input>(dict: Node<'a, 'input>, key: &str) -> Option<Node<'a, 'input>> {
    let mut elements = dict.children().filter(Node::is_element);
    while let Some(node) = elements.next() {
        if node.has_tag_name("key") && node.text().map(str::trim) == Some(key) {
            return elements.next();
        }
    }
    None
}

/// Standard base64, ignoring the line breaks and tabs plist writers insert.
pub(crate) fn decode_base64(text: &str) -> Result<Vec<u8>, DecodeError> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Ok(BASE64.decode(compact)?)
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(c),
            // Not representable in XML 1.0, even as a character reference.
            c if c < '\u{20}' || c == '\u{FFFE}' || c == '\u{FFFF}' => {}
            _ => out.push(c),
        }
    }
    out
}
