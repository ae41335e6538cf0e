use crate::error::Result;
use crate::model::{Frame, Rect, Spritesheet};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// Persisted frame record. `Rotated`/`Trimmed` exist in the wire format but
/// are never computed by the packer.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
struct FrameRecord {
    rotated: bool,
    trimmed: bool,
    frame: Rect,
}

/// Persisted sheet record: `{ "Name": .., "Frames": { key: FrameRecord } }`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
struct SheetRecord {
    name: String,
    frames: HashMap<String, FrameRecord>,
}

impl SheetRecord {
    fn into_sheet(self) -> Spritesheet {
        let mut sheet = Spritesheet::new(self.name);
        for (key, rec) in self.frames {
            sheet.insert(Frame {
                key,
                frame: rec.frame,
                rotated: rec.rotated,
                trimmed: rec.trimmed,
            });
        }
        sheet
    }
}

/// Builds the atlas document `{ <name>: { "Name", "Frames" } }` for `sheet`,
/// with frame keys in packed order.
pub fn to_document(sheet: &Spritesheet) -> Value {
    let mut frames = Map::new();
    for fr in sheet.frames() {
        frames.insert(
            fr.key.clone(),
            json!({
                "Rotated": fr.rotated,
                "Trimmed": fr.trimmed,
                "Frame": {"X": fr.frame.x, "Y": fr.frame.y, "W": fr.frame.w, "H": fr.frame.h},
            }),
        );
    }
    let mut doc = Map::new();
    doc.insert(
        sheet.name.clone(),
        json!({"Name": sheet.name, "Frames": frames}),
    );
    Value::Object(doc)
}

/// Renders the atlas document as pretty JSON with 1-space indentation,
/// the persisted atlas format.
pub fn to_json_string(sheet: &Spritesheet) -> Result<String> {
    let doc = to_document(sheet);
    let mut buf = Vec::new();
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b" ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    doc.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes the atlas JSON for `sheet` to `path`.
///
/// Returns `Ok(false)` without touching the file when `path` already exists;
/// an existing atlas is never overwritten or merged.
pub fn save_atlas<P: AsRef<Path>>(path: P, sheet: &Spritesheet) -> Result<bool> {
    let path = path.as_ref();
    if path.exists() {
        info!(path = %path.display(), "atlas already exists; skipping write");
        return Ok(false);
    }
    fs::write(path, to_json_string(sheet)?)?;
    Ok(true)
}

/// Parses an atlas document. Fails with a typed JSON error when the document
/// is malformed or does not match the expected schema.
pub fn from_json_str(s: &str) -> Result<Vec<Spritesheet>> {
    let doc: HashMap<String, SheetRecord> = serde_json::from_str(s)?;
    Ok(doc.into_values().map(SheetRecord::into_sheet).collect())
}

/// Reads and parses the atlas document at `path`.
pub fn load_atlas<P: AsRef<Path>>(path: P) -> Result<Vec<Spritesheet>> {
    let text = fs::read_to_string(path)?;
    from_json_str(&text)
}
