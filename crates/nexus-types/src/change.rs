use serde::{Deserialize, Serialize};

/// A single field/value diff fragment recorded with an event.
///
/// Values are pre-serialized strings: this is a display and audit
/// representation, not replay input. If replay is ever wanted, this
/// becomes a tagged union of typed field updates instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    #[serde(rename = "Field")]
    pub field: String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl Change {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}
