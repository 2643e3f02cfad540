//! Response-shape declarations, serialized in the model service's schema dialect.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Schema {
    String,
    Integer,
    Array {
        items: Box<Schema>,
    },
    Object {
        properties: BTreeMap<&'static str, Schema>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        required: Vec<&'static str>,
    },
}

impl Schema {
    pub fn array(items: Schema) -> Self {
        Schema::Array {
            items: Box::new(items),
        }
    }

    pub fn string_array() -> Self {
        Schema::array(Schema::String)
    }

    /// An object whose listed properties are all required.
    pub fn object<const N: usize>(properties: [(&'static str, Schema); N]) -> Self {
        let required = properties.iter().map(|(name, _)| *name).collect();
        Schema::Object {
            properties: properties.into_iter().collect(),
            required,
        }
    }
}
