//! Firestore tagged-union value decoding.
//!
//! Firestore's REST encoding wraps every field in a one-key map naming the
//! value's type: `{"stringValue": "x"}`, `{"integerValue": "42"}`,
//! `{"mapValue": {"fields": {...}}}`, `{"arrayValue": {"values": [...]}}`
//! and so on. This module models that encoding as a closed sum type plus an
//! `Unknown` fallback variant, and translates it to and from plain
//! `serde_json` value trees.
//!
//! The decoder is deliberately permissive: unrecognised tags and unparseable
//! scalar payloads degrade to `Unknown` rather than failing the decode.
//! Absent or malformed fields surface as defaults downstream, never as an
//! error from this module.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A decoded document body: string-keyed plain values, post-decode.
pub type DecodedDocument = Map<String, Value>;

/// A single value in Firestore's tagged-union wire encoding.
///
/// Exactly one variant is populated per wire wrapper. `Unknown` resolves
/// wrappers whose tag this crate does not recognise, carrying the raw
/// payload of the first tag found so forward-compatible documents still
/// decode end to end.
#[derive(Clone, Debug, PartialEq)]
pub enum TaggedValue {
    String(String),
    Integer(i64),
    Double(f64),
    Boolean(bool),
    Null,
    Array(Vec<TaggedValue>),
    Map(BTreeMap<String, TaggedValue>),
    Unknown(Value),
}

impl TaggedValue {
    /// Decode a single wire wrapper.
    ///
    /// Dispatches on which tag key is present and recurses for map and array
    /// variants. `integerValue` payloads arrive as JSON strings (Firestore
    /// REST encodes int64 as string) or as numbers; both are accepted.
    ///
    /// Never fails: wrappers with no recognised tag resolve to
    /// [`TaggedValue::Unknown`] paired with the first key's payload, and a
    /// non-object wire value is carried through as `Unknown` unchanged.
    pub fn from_wire(wire: &Value) -> TaggedValue {
        let Some(wrapper) = wire.as_object() else {
            return TaggedValue::Unknown(wire.clone());
        };

        if let Some(payload) = wrapper.get("stringValue") {
            return match payload.as_str() {
                Some(s) => TaggedValue::String(s.to_string()),
                None => TaggedValue::Unknown(payload.clone()),
            };
        }
        if let Some(payload) = wrapper.get("integerValue") {
            return match parse_integer(payload) {
                Some(n) => TaggedValue::Integer(n),
                None => TaggedValue::Unknown(payload.clone()),
            };
        }
        if let Some(payload) = wrapper.get("doubleValue") {
            return match parse_double(payload) {
                Some(n) => TaggedValue::Double(n),
                None => TaggedValue::Unknown(payload.clone()),
            };
        }
        if let Some(payload) = wrapper.get("booleanValue") {
            return match payload.as_bool() {
                Some(b) => TaggedValue::Boolean(b),
                None => TaggedValue::Unknown(payload.clone()),
            };
        }
        if wrapper.contains_key("nullValue") {
            return TaggedValue::Null;
        }
        if let Some(payload) = wrapper.get("arrayValue") {
            let values = payload
                .get("values")
                .and_then(Value::as_array)
                .map(|vs| vs.iter().map(TaggedValue::from_wire).collect())
                .unwrap_or_default();
            return TaggedValue::Array(values);
        }
        if let Some(payload) = wrapper.get("mapValue") {
            let fields = payload
                .get("fields")
                .and_then(Value::as_object)
                .map(|fs| {
                    fs.iter()
                        .map(|(k, v)| (k.clone(), TaggedValue::from_wire(v)))
                        .collect()
                })
                .unwrap_or_default();
            return TaggedValue::Map(fields);
        }

        // Unrecognised tag: keep the first key's payload rather than failing
        // the whole decode.
        match wrapper.iter().next() {
            Some((_, payload)) => TaggedValue::Unknown(payload.clone()),
            None => TaggedValue::Null,
        }
    }

    /// Build a tagged value from a plain value tree.
    ///
    /// This is the inverse direction used by local fixtures and the
    /// round-trip tests; non-integral numbers become `Double`, integral ones
    /// `Integer`.
    pub fn from_plain(plain: &Value) -> TaggedValue {
        match plain {
            Value::Null => TaggedValue::Null,
            Value::Bool(b) => TaggedValue::Boolean(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => TaggedValue::Integer(i),
                None => TaggedValue::Double(n.as_f64().unwrap_or(0.0)),
            },
            Value::String(s) => TaggedValue::String(s.clone()),
            Value::Array(items) => {
                TaggedValue::Array(items.iter().map(TaggedValue::from_plain).collect())
            }
            Value::Object(fields) => TaggedValue::Map(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), TaggedValue::from_plain(v)))
                    .collect(),
            ),
        }
    }

    /// Collapse to a plain `serde_json` value tree.
    ///
    /// Array element order is preserved; maps keep every decoded key.
    /// `Unknown` payloads pass through unchanged.
    pub fn to_plain(&self) -> Value {
        match self {
            TaggedValue::String(s) => Value::String(s.clone()),
            TaggedValue::Integer(i) => Value::from(*i),
            TaggedValue::Double(d) => serde_json::Number::from_f64(*d)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            TaggedValue::Boolean(b) => Value::Bool(*b),
            TaggedValue::Null => Value::Null,
            TaggedValue::Array(items) => {
                Value::Array(items.iter().map(TaggedValue::to_plain).collect())
            }
            TaggedValue::Map(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_plain()))
                    .collect(),
            ),
            TaggedValue::Unknown(raw) => raw.clone(),
        }
    }

    /// Encode back into the wire wrapper shape.
    ///
    /// Integers are serialised as strings per the Firestore REST convention.
    pub fn to_wire(&self) -> Value {
        match self {
            TaggedValue::String(s) => serde_json::json!({ "stringValue": s }),
            TaggedValue::Integer(i) => serde_json::json!({ "integerValue": i.to_string() }),
            TaggedValue::Double(d) => serde_json::json!({ "doubleValue": d }),
            TaggedValue::Boolean(b) => serde_json::json!({ "booleanValue": b }),
            TaggedValue::Null => serde_json::json!({ "nullValue": null }),
            TaggedValue::Array(items) => serde_json::json!({
                "arrayValue": {
                    "values": items.iter().map(TaggedValue::to_wire).collect::<Vec<_>>(),
                }
            }),
            TaggedValue::Map(fields) => {
                let fields: Map<String, Value> = fields
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_wire()))
                    .collect();
                serde_json::json!({ "mapValue": { "fields": fields } })
            }
            TaggedValue::Unknown(raw) => raw.clone(),
        }
    }
}

/// Decode a raw document `fields` map entry-wise into a plain document body.
pub fn decode_fields(fields: &Map<String, Value>) -> DecodedDocument {
    fields
        .iter()
        .map(|(k, v)| (k.clone(), TaggedValue::from_wire(v).to_plain()))
        .collect()
}

/// Encode a plain document body into a wire-shaped `fields` map.
///
/// Counterpart of [`decode_fields`] for fixtures and round-trip tests.
pub fn encode_fields(plain: &Map<String, Value>) -> Map<String, Value> {
    plain
        .iter()
        .map(|(k, v)| (k.clone(), TaggedValue::from_plain(v).to_wire()))
        .collect()
}

fn parse_integer(payload: &Value) -> Option<i64> {
    match payload {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn parse_double(payload: &Value) -> Option<f64> {
    match payload {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_scalar_tags_to_native_values() {
        assert_eq!(
            TaggedValue::from_wire(&json!({"stringValue": "hello"})).to_plain(),
            json!("hello")
        );
        assert_eq!(
            TaggedValue::from_wire(&json!({"integerValue": "42"})).to_plain(),
            json!(42)
        );
        assert_eq!(
            TaggedValue::from_wire(&json!({"integerValue": 7})).to_plain(),
            json!(7)
        );
        assert_eq!(
            TaggedValue::from_wire(&json!({"doubleValue": 3.5})).to_plain(),
            json!(3.5)
        );
        assert_eq!(
            TaggedValue::from_wire(&json!({"booleanValue": true})).to_plain(),
            json!(true)
        );
        assert_eq!(
            TaggedValue::from_wire(&json!({"nullValue": null})).to_plain(),
            Value::Null
        );
    }

    #[test]
    fn decodes_map_value_with_all_keys() {
        let wire = json!({
            "mapValue": {
                "fields": {
                    "a": {"stringValue": "x"},
                    "b": {"integerValue": "2"},
                    "c": {"booleanValue": false},
                }
            }
        });

        let plain = TaggedValue::from_wire(&wire).to_plain();
        let obj = plain.as_object().expect("map decodes to object");
        assert_eq!(obj.len(), 3);
        assert_eq!(obj["a"], json!("x"));
        assert_eq!(obj["b"], json!(2));
        assert_eq!(obj["c"], json!(false));
    }

    #[test]
    fn decodes_array_value_preserving_order() {
        let wire = json!({
            "arrayValue": {
                "values": [
                    {"stringValue": "first"},
                    {"stringValue": "second"},
                    {"integerValue": "3"},
                ]
            }
        });

        let plain = TaggedValue::from_wire(&wire).to_plain();
        assert_eq!(plain, json!(["first", "second", 3]));
    }

    #[test]
    fn decodes_nested_maps_recursively() {
        let wire = json!({
            "mapValue": {
                "fields": {
                    "outer": {
                        "mapValue": {
                            "fields": {
                                "inner": {"arrayValue": {"values": [{"integerValue": "1"}]}}
                            }
                        }
                    }
                }
            }
        });

        let plain = TaggedValue::from_wire(&wire).to_plain();
        assert_eq!(plain, json!({"outer": {"inner": [1]}}));
    }

    #[test]
    fn empty_map_and_array_payloads_decode_to_empty_containers() {
        assert_eq!(
            TaggedValue::from_wire(&json!({"mapValue": {}})).to_plain(),
            json!({})
        );
        assert_eq!(
            TaggedValue::from_wire(&json!({"arrayValue": {}})).to_plain(),
            json!([])
        );
    }

    #[test]
    fn unknown_tag_falls_back_to_first_payload() {
        let wire = json!({"timestampValue": "2025-07-01T00:00:00Z"});
        let decoded = TaggedValue::from_wire(&wire);
        assert_eq!(
            decoded,
            TaggedValue::Unknown(json!("2025-07-01T00:00:00Z"))
        );
        assert_eq!(decoded.to_plain(), json!("2025-07-01T00:00:00Z"));
    }

    #[test]
    fn unparseable_integer_payload_degrades_to_unknown() {
        let decoded = TaggedValue::from_wire(&json!({"integerValue": "not-a-number"}));
        assert_eq!(decoded, TaggedValue::Unknown(json!("not-a-number")));
    }

    #[test]
    fn non_object_wire_value_is_carried_through() {
        let decoded = TaggedValue::from_wire(&json!("bare"));
        assert_eq!(decoded.to_plain(), json!("bare"));
    }

    #[test]
    fn decode_fields_decodes_every_entry() {
        let fields = json!({
            "name": {"stringValue": "Dr. A"},
            "years": {"integerValue": "11"},
        });
        let decoded = decode_fields(fields.as_object().expect("object"));
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded["name"], json!("Dr. A"));
        assert_eq!(decoded["years"], json!(11));
    }

    #[test]
    fn plain_tree_round_trips_through_wire_encoding() {
        let plain = json!({
            "formHeader": {
                "institute_name": "VESIT",
                "academic_year": "2025-26",
            },
            "part_a": {
                "academic_qualifications": [
                    {"examination": "S.S.C.", "year_passing": 2005, "percentage": 88.5},
                    {"examination": "B.E.", "verified": true},
                ],
                "personal_in": {"name": "Dr. A", "telephone": null},
            },
        });

        let fields = encode_fields(plain.as_object().expect("object"));
        let decoded = decode_fields(&fields);
        assert_eq!(Value::Object(decoded), plain);
    }
}
