//! Normalized views of the artifacts written by the workers.
//!
//! Whatever is found on disk, a document always serializes to a JSON object
//! carrying its collection field and `ultima_atualizacao`.

use serde::Serialize;
use serde_json::{Map, Value};

/// Key holding the worker's last-run marker in every artifact.
pub const LAST_UPDATE_FIELD: &str = "ultima_atualizacao";

/// A JSON artifact shape that can be rebuilt from any parsed value.
pub trait Document: Serialize + Sized {
    /// Artifact name used in logs, metrics and error messages.
    const ARTIFACT: &'static str;

    /// Builds the document from the fields of the artifact's root object.
    fn from_fields(fields: Map<String, Value>) -> Self;

    /// The document served when the artifact does not exist yet.
    fn empty() -> Self {
        Self::from_fields(Map::new())
    }

    /// Coerces a parsed artifact into the documented shape.
    ///
    /// A root that is not an object is treated as an empty object.
    fn normalize(root: Value) -> Self {
        match root {
            Value::Object(fields) => Self::from_fields(fields),
            _ => Self::empty(),
        }
    }
}

fn take_last_update(fields: &mut Map<String, Value>) -> Value {
    fields.remove(LAST_UPDATE_FIELD).unwrap_or(Value::Null)
}

/// Open positions published by the positional exit worker
/// (`saida_posicional.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatusDocument {
    /// Opaque position records, in file order.
    pub posicional: Vec<Value>,
    pub ultima_atualizacao: Value,
}

impl Document for StatusDocument {
    const ARTIFACT: &'static str = "saida_posicional";

    fn from_fields(mut fields: Map<String, Value>) -> Self {
        let posicional = match fields.remove("posicional") {
            Some(Value::Array(records)) => records,
            _ => Vec::new(),
        };

        Self {
            posicional,
            ultima_atualizacao: take_last_update(&mut fields),
        }
    }
}

/// Average prices per coin published by the price worker
/// (`precos_saida.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceDocument {
    pub precos: Map<String, Value>,
    pub ultima_atualizacao: Value,
}

impl Document for PriceDocument {
    const ARTIFACT: &'static str = "precos_saida";

    fn from_fields(mut fields: Map<String, Value>) -> Self {
        let precos = match fields.remove("precos") {
            Some(Value::Object(prices)) => prices,
            _ => Map::new(),
        };

        Self {
            precos,
            ultima_atualizacao: take_last_update(&mut fields),
        }
    }
}
