//! The serializer collaborator: a per-instance codec table keyed by type.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use interop_core::base::{Base, NumberFormat};
use interop_core::config::JsonConfig;
use interop_core::errors::{ErrorInfo, InteropError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Member name that carries a class tag inside object payloads.
pub const CLASS_MEMBER: &str = "class";

type WriteFn<T> = dyn Fn(&Json, &T) -> Result<Value, InteropError> + Send + Sync;
type ReadFn<T> = dyn Fn(&Json, &Value) -> Result<T, InteropError> + Send + Sync;

struct CodecEntry<T: 'static> {
    write: Arc<WriteFn<T>>,
    read: Arc<ReadFn<T>>,
}

struct Codec {
    type_name: &'static str,
    entry: Box<dyn Any + Send + Sync>,
}

fn missing_codec<T>() -> InteropError {
    InteropError::Codec(
        ErrorInfo::new("missing-codec", "no codec is registered for this type")
            .with_context("type", type_name::<T>())
            .with_hint("call the matching register function or register_all first"),
    )
}

/// Serializer instance holding configuration, codecs and class tags.
///
/// Codecs read the configuration through the `&Json` they are handed, so changing
/// the numeral base after registration affects every later encode.
#[derive(Default)]
pub struct Json {
    config: JsonConfig,
    codecs: HashMap<TypeId, Codec>,
    tags: HashMap<TypeId, String>,
    tagged_types: HashMap<String, &'static str>,
}

impl fmt::Debug for Json {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Json")
            .field("config", &self.config)
            .field("codecs", &self.codecs.len())
            .field("tags", &self.tags.len())
            .finish()
    }
}

impl Json {
    /// Creates a serializer with default configuration and no codecs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a serializer with the given configuration and no codecs.
    pub fn with_config(config: JsonConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Creates a serializer configured from a YAML file.
    pub fn from_config_path(path: impl AsRef<Path>) -> Result<Self, InteropError> {
        Ok(Self::with_config(JsonConfig::from_path(path)?))
    }

    /// Current configuration.
    pub fn config(&self) -> &JsonConfig {
        &self.config
    }

    /// Radix used for numeric fields at encode time.
    pub fn numeral_base(&self) -> Base {
        self.config.numeral_base
    }

    /// Changes the radix used by every later encode.
    pub fn set_numeral_base(&mut self, base: Base) {
        self.config.numeral_base = base;
    }

    /// Whether floats are written as decimal text.
    pub fn legible_floats(&self) -> bool {
        self.config.legible_floats
    }

    /// Switches between decimal and bit-pattern floats for later encodes.
    pub fn set_legible_floats(&mut self, legible: bool) {
        self.config.legible_floats = legible;
    }

    /// Whether registrations install short class tags.
    pub fn add_class_tags(&self) -> bool {
        self.config.add_class_tags
    }

    /// Controls whether later registrations install short class tags.
    pub fn set_add_class_tags(&mut self, add: bool) {
        self.config.add_class_tags = add;
    }

    /// Number formatting implied by the current configuration.
    pub fn number_format(&self) -> NumberFormat {
        self.config.number_format()
    }

    /// Installs the codec for `T`, replacing any previous one.
    ///
    /// Returns `true` when a codec was replaced.
    pub fn set_serializer<T, W, R>(&mut self, write: W, read: R) -> bool
    where
        T: 'static,
        W: Fn(&Json, &T) -> Result<Value, InteropError> + Send + Sync + 'static,
        R: Fn(&Json, &Value) -> Result<T, InteropError> + Send + Sync + 'static,
    {
        let entry = CodecEntry::<T> {
            write: Arc::new(write),
            read: Arc::new(read),
        };
        let replaced = self
            .codecs
            .insert(
                TypeId::of::<T>(),
                Codec {
                    type_name: type_name::<T>(),
                    entry: Box::new(entry),
                },
            )
            .is_some();
        debug!(type_name = type_name::<T>(), replaced, "installed codec");
        replaced
    }

    /// Whether a codec is installed for `T`.
    pub fn has_serializer<T: 'static>(&self) -> bool {
        self.codecs.contains_key(&TypeId::of::<T>())
    }

    /// Number of installed codecs.
    pub fn serializer_count(&self) -> usize {
        self.codecs.len()
    }

    /// Type names of every installed codec, sorted.
    pub fn registered_types(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.codecs.values().map(|codec| codec.type_name).collect();
        names.sort_unstable();
        names
    }

    fn entry<T: 'static>(&self) -> Option<&CodecEntry<T>> {
        self.codecs
            .get(&TypeId::of::<T>())
            .and_then(|codec| codec.entry.downcast_ref::<CodecEntry<T>>())
    }

    /// Associates a short class tag with `T`, replacing earlier bindings of either.
    pub fn add_class_tag<T: 'static>(&mut self, tag: &str) {
        if let Some(previous) = self.tags.insert(TypeId::of::<T>(), tag.to_string()) {
            self.tagged_types.remove(&previous);
        }
        self.tagged_types.insert(tag.to_string(), type_name::<T>());
        debug!(tag, type_name = type_name::<T>(), "bound class tag");
    }

    /// Short class tag of `T`, if one was added.
    pub fn class_tag<T: 'static>(&self) -> Option<&str> {
        self.tags.get(&TypeId::of::<T>()).map(String::as_str)
    }

    /// Type name bound to `tag`.
    pub fn type_name_for_tag(&self, tag: &str) -> Option<&'static str> {
        self.tagged_types.get(tag).copied()
    }

    /// Encodes `value` with the codec registered for `T`.
    pub fn to_value<T: 'static>(&self, value: &T) -> Result<Value, InteropError> {
        let entry = self.entry::<T>().ok_or_else(missing_codec::<T>)?;
        (entry.write)(self, value)
    }

    /// Encodes `value` and names its type in a `class` member.
    ///
    /// The short tag is used when one was added, otherwise the full type name.
    /// Non-object payloads are wrapped as `{"class": ..., "value": ...}`.
    pub fn to_tagged_value<T: 'static>(&self, value: &T) -> Result<Value, InteropError> {
        let tag = self
            .class_tag::<T>()
            .map(str::to_string)
            .unwrap_or_else(|| type_name::<T>().to_string());
        let payload = self.to_value(value)?;
        Ok(match payload {
            Value::Object(mut members) => {
                members.insert(CLASS_MEMBER.to_string(), Value::String(tag));
                Value::Object(members)
            }
            other => {
                let mut members = serde_json::Map::new();
                members.insert(CLASS_MEMBER.to_string(), Value::String(tag));
                members.insert("value".to_string(), other);
                Value::Object(members)
            }
        })
    }

    /// Decodes a `T` with its registered codec.
    ///
    /// A `class` member naming `T` (by its short tag or type name) is dropped first.
    /// Any other `class` member is ordinary data.
    pub fn from_value<T: 'static>(&self, value: &Value) -> Result<T, InteropError> {
        let entry = self.entry::<T>().ok_or_else(missing_codec::<T>)?;
        match self.untag::<T>(value) {
            Some(inner) => (entry.read)(self, &inner),
            None => (entry.read)(self, value),
        }
    }

    // Payload with T's own class member removed; None leaves the payload as is.
    fn untag<T: 'static>(&self, value: &Value) -> Option<Value> {
        let members = value.as_object()?;
        let tag = members.get(CLASS_MEMBER)?.as_str()?;
        if self.class_tag::<T>() != Some(tag) && tag != type_name::<T>() {
            warn!(tag, expected = type_name::<T>(), "class member names another type, keeping it as data");
            return None;
        }
        if members.len() == 2 {
            if let Some(inner) = members.get("value") {
                return Some(inner.clone());
            }
        }
        let mut stripped = members.clone();
        stripped.remove(CLASS_MEMBER);
        Some(Value::Object(stripped))
    }

    /// Encodes `value` as compact JSON text.
    pub fn to_json<T: 'static>(&self, value: &T) -> Result<String, InteropError> {
        let payload = self.to_value(value)?;
        serde_json::to_string(&payload).map_err(|err| InteropError::codec("json-serialize", err))
    }

    /// Decodes a `T` from JSON text.
    pub fn from_json<T: 'static>(&self, text: &str) -> Result<T, InteropError> {
        let payload: Value =
            serde_json::from_str(text).map_err(|err| InteropError::codec("json-deserialize", err))?;
        self.from_value(&payload)
    }

    /// Encodes `value` as a binary envelope around its JSON text.
    pub fn to_bytes<T: 'static>(&self, value: &T) -> Result<Vec<u8>, InteropError> {
        let json = self.to_json(value)?;
        bincode::serialize(&json).map_err(|err| InteropError::codec("bincode-serialize", err))
    }

    /// Decodes a `T` from bytes produced by [`Json::to_bytes`].
    pub fn from_bytes<T: 'static>(&self, bytes: &[u8]) -> Result<T, InteropError> {
        let json: String =
            bincode::deserialize(bytes).map_err(|err| InteropError::codec("bincode-deserialize", err))?;
        self.from_json(&json)
    }

    /// Encodes a nested element, preferring a registered codec over serde.
    pub fn write_element<T: Serialize + 'static>(&self, value: &T) -> Result<Value, InteropError> {
        match self.entry::<T>() {
            Some(entry) => (entry.write)(self, value),
            None => serde_json::to_value(value).map_err(|err| InteropError::codec("element-serialize", err)),
        }
    }

    /// Decodes a nested element, preferring a registered codec over serde.
    pub fn read_element<T: DeserializeOwned + 'static>(&self, value: &Value) -> Result<T, InteropError> {
        match self.entry::<T>() {
            Some(entry) => (entry.read)(self, value),
            None => T::deserialize(value).map_err(|err| InteropError::codec("element-deserialize", err)),
        }
    }

    /// Renders a map key: strings as themselves, anything else as JSON text.
    pub fn write_key<K: Serialize + 'static>(&self, key: &K) -> Result<String, InteropError> {
        match self.write_element(key)? {
            Value::String(text) => Ok(text),
            other => Ok(other.to_string()),
        }
    }

    /// Parses a key written by [`Json::write_key`].
    pub fn read_key<K: DeserializeOwned + 'static>(&self, text: &str) -> Result<K, InteropError> {
        if let Ok(key) = self.read_element(&Value::String(text.to_string())) {
            return Ok(key);
        }
        let parsed: Value = serde_json::from_str(text).map_err(|err| {
            InteropError::Codec(ErrorInfo::new("map-key", err.to_string()).with_context("key", text))
        })?;
        self.read_element(&parsed)
    }
}
