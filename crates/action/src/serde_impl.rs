//! Configuration-facing (de)serialization.
//!
//! Actions are written as `{ "type", "name", "params" }`. Each param is a
//! plain scalar, or an explicitly tagged `{ "type": "float", "value": 2 }`
//! entry when the natural type of the document value is not the one wanted.
//! Non-finite floats have no plain form in JSON, so they are written as a
//! tagged float whose value is text (`"inf"`, `"-inf"`, `"NaN"`).

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ParamResult;
use crate::action::Action;
use crate::error::ParamError;
use crate::param::{Param, ParamType, ParamValue};

#[derive(Deserialize)]
struct ActionDocument {
    #[serde(rename = "type")]
    action_type: String,
    name: String,
    #[serde(default)]
    params: BTreeMap<String, RawParam>,
}

#[derive(Serialize)]
struct ActionDocumentRef<'a> {
    #[serde(rename = "type")]
    action_type: &'a str,
    name: &'a str,
    params: BTreeMap<&'a str, &'a ParamValue>,
}

/// A param exactly as the document wrote it, before type checking.
#[derive(Debug)]
enum RawParam {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array,
    Table(BTreeMap<String, RawParam>),
}

struct RawParamVisitor;

impl<'de> Visitor<'de> for RawParamVisitor {
    type Value = RawParam;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a parameter value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<RawParam, E> {
        Ok(RawParam::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<RawParam, E> {
        Ok(RawParam::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<RawParam, E> {
        Ok(i64::try_from(v).map_or(RawParam::Float(v as f64), RawParam::Int))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<RawParam, E> {
        Ok(RawParam::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<RawParam, E> {
        Ok(RawParam::Str(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<RawParam, E> {
        Ok(RawParam::Str(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<RawParam, E> {
        Ok(RawParam::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<RawParam, E> {
        Ok(RawParam::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<RawParam, D::Error> {
        RawParam::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RawParam, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(RawParam::Array)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawParam, A::Error> {
        let mut table = BTreeMap::new();
        while let Some((key, value)) = map.next_entry::<String, RawParam>()? {
            table.insert(key, value);
        }
        Ok(RawParam::Table(table))
    }
}

impl<'de> Deserialize<'de> for RawParam {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RawParamVisitor)
    }
}

impl RawParam {
    fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Int(_) | Self::Float(_) => "number",
            Self::Str(_) => "string",
            Self::Array => "array",
            Self::Table(_) => "object",
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Bool(v) => format!("boolean {v}"),
            Self::Int(v) => format!("number {v}"),
            Self::Float(v) => format!("number {v}"),
            Self::Str(v) => format!("string {v:?}"),
            other => other.type_name().to_string(),
        }
    }

    /// Type-check this value as the param `key`.
    ///
    /// Scalars map onto the matching payload; integers outside the `i64`
    /// range are already floats. Tables must carry an explicit `type` and
    /// `value`. `null`, arrays and untagged tables are rejected with
    /// [`ParamError::UnsupportedType`].
    fn into_param(self, key: &str) -> ParamResult<Param> {
        let payload = match self {
            Self::Bool(v) => ParamValue::Bool(v),
            Self::Int(v) => ParamValue::Int(v),
            Self::Float(v) => ParamValue::Float(v),
            Self::Str(v) => ParamValue::Str(v),
            Self::Table(entry) => tagged_payload(key, entry)?,
            other @ (Self::Null | Self::Array) => {
                return Err(ParamError::unsupported_type(key, other.type_name()));
            }
        };
        Ok(Param::new(key, payload))
    }
}

/// Tagged entry: a float tag also accepts a float literal as text.
fn tagged_payload(key: &str, mut entry: BTreeMap<String, RawParam>) -> ParamResult<ParamValue> {
    let expected = match entry.get("type") {
        Some(RawParam::Str(name)) => ParamType::from_name(name)
            .ok_or_else(|| ParamError::unsupported_type(key, name.as_str()))?,
        _ => return Err(ParamError::unsupported_type(key, "object")),
    };
    let value = entry
        .remove("value")
        .ok_or_else(|| ParamError::mismatch(key, expected, "no value"))?;

    let payload = match (expected, &value) {
        (ParamType::Integer, RawParam::Int(v)) => Some(ParamValue::Int(*v)),
        (ParamType::Float, RawParam::Int(v)) => Some(ParamValue::Float(*v as f64)),
        (ParamType::Float, RawParam::Float(v)) => Some(ParamValue::Float(*v)),
        (ParamType::Float, RawParam::Str(s)) => s.trim().parse().ok().map(ParamValue::Float),
        (ParamType::String, RawParam::Str(s)) => Some(ParamValue::Str(s.clone())),
        (ParamType::Boolean, RawParam::Bool(v)) => Some(ParamValue::Bool(*v)),
        _ => None,
    };
    payload.ok_or_else(|| ParamError::mismatch(key, expected, value.describe()))
}

impl TryFrom<ActionDocument> for Action {
    type Error = ParamError;

    fn try_from(doc: ActionDocument) -> Result<Self, Self::Error> {
        let mut action = Self::new(doc.name, doc.action_type);
        for (key, raw) in doc.params {
            let param = raw.into_param(&key)?;
            action.params.insert(key, param);
        }
        Ok(action)
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let doc = ActionDocument::deserialize(deserializer)?;
        Self::try_from(doc).map_err(de::Error::custom)
    }
}

impl Serialize for Action {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ActionDocumentRef {
            action_type: &self.action_type,
            name: &self.name,
            params: self
                .params
                .iter()
                .map(|(key, param)| (key.as_str(), param.value()))
                .collect(),
        }
        .serialize(serializer)
    }
}

impl Serialize for ParamValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Int(v) => serializer.serialize_i64(*v),
            Self::Float(v) if v.is_finite() => serializer.serialize_f64(*v),
            Self::Float(v) => {
                let mut entry = serializer.serialize_map(Some(2))?;
                entry.serialize_entry("type", ParamType::Float.name())?;
                entry.serialize_entry("value", &v.to_string())?;
                entry.end()
            }
            Self::Str(v) => serializer.serialize_str(v),
            Self::Bool(v) => serializer.serialize_bool(*v),
        }
    }
}
