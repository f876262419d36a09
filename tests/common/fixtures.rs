use serde_json::{Value, json};

/// A document with the given top-level content and no fonts.
pub fn document(content: Vec<Value>) -> Value {
    json!({ "content": content })
}

/// A document that declares fonts.
pub fn document_with_fonts(fonts: Value, content: Vec<Value>) -> Value {
    json!({ "fonts": fonts, "content": content })
}

pub fn text(content: &str) -> Value {
    json!({ "type": "Text", "content": content })
}

pub fn text_in_font(content: &str, font: &str, size: f32) -> Value {
    json!({ "type": "Text", "content": content, "font": font, "size": size })
}

pub fn block(children: Vec<Value>) -> Value {
    json!({ "type": "Block", "children": children })
}

pub fn block_breaking_before(kind: &str, children: Vec<Value>) -> Value {
    json!({ "type": "Block", "breakBefore": kind, "children": children })
}

pub fn page_break(kind: &str) -> Value {
    json!({ "type": "PageBreak", "kind": kind })
}

pub fn list_item(label: Vec<Value>, body: Vec<Value>, distance_between_starts: f32, label_separation: f32) -> Value {
    json!({
        "type": "ListItem",
        "label": label,
        "body": body,
        "distanceBetweenStarts": distance_between_starts,
        "labelSeparation": label_separation
    })
}

pub fn table_cell(children: Vec<Value>, start: f32, width: f32) -> Value {
    json!({ "type": "TableCell", "children": children, "start": start, "width": width })
}

/// A metrics file where every listed character has `width` and all others
/// the default width of 500.
pub fn metrics_file(name: &str, chars: &str, width: i32) -> Value {
    let widths: serde_json::Map<String, Value> = chars.chars().map(|c| (c.to_string(), json!(width))).collect();
    json!({
        "fontName": name,
        "ascender": 718,
        "descender": -207,
        "capHeight": 718,
        "xHeight": 523,
        "widths": widths,
        "kerning": { "AV": -100 },
        "flags": 32,
        "fontBbox": [-166, -225, 1000, 931],
        "fontType": "Type1"
    })
}
