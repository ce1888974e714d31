use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

/// XML serialization hints attached to a schema or one of its properties.
///
/// Only `name` and `wrapped` influence rendering. The remaining fields are kept
/// so that a document survives a read/write cycle unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlHint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrapped: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<bool>,
}

impl XmlHint {
    /// Hint that only renames the element.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Marks the hint as wrapped.
    pub fn wrapped(mut self) -> Self {
        self.wrapped = Some(true);
        self
    }

    /// The element name override, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether repeated values should be wrapped. Absent means `false`.
    pub fn is_wrapped(&self) -> bool {
        self.wrapped.unwrap_or(false)
    }
}

/// Helper that captures either a well-formed hint or the raw block it failed to read as one.
///
/// Annotation trees are loosely typed: a hint like `{"wrapped": "yes"}` must not make the
/// whole document unreadable. The block is kept verbatim and treated as "no hint".
#[derive(Clone, Debug, PartialEq)]
pub enum HintBlock {
    Hint(XmlHint),
    Malformed(serde_json::Value),
}

impl HintBlock {
    /// The hint, or `None` when the block is malformed.
    pub fn hint(&self) -> Option<&XmlHint> {
        match self {
            HintBlock::Hint(hint) => Some(hint),
            HintBlock::Malformed(_) => None,
        }
    }

    /// Like [`HintBlock::hint`], but reports a malformed block as [`GraphError::MalformedXmlHint`].
    pub fn checked(&self, owner: &str) -> Result<&XmlHint> {
        match self {
            HintBlock::Hint(hint) => Ok(hint),
            HintBlock::Malformed(raw) => Err(GraphError::MalformedXmlHint {
                owner: owner.to_string(),
                detail: raw.to_string(),
            }),
        }
    }
}

impl From<XmlHint> for HintBlock {
    fn from(hint: XmlHint) -> Self {
        HintBlock::Hint(hint)
    }
}

impl<'de> Deserialize<'de> for HintBlock {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match serde_json::from_value::<XmlHint>(value.clone()) {
            Ok(hint) if value.is_object() => Ok(HintBlock::Hint(hint)),
            _ => Ok(HintBlock::Malformed(value)),
        }
    }
}

impl Serialize for HintBlock {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            HintBlock::Hint(hint) => hint.serialize(serializer),
            HintBlock::Malformed(raw) => raw.serialize(serializer),
        }
    }
}

/// Reads an optional hint block for `owner`, degrading a malformed block to "no hint".
pub(crate) fn read_hint<'a>(owner: &str, block: Option<&'a HintBlock>) -> Option<&'a XmlHint> {
    match block?.checked(owner) {
        Ok(hint) => Some(hint),
        Err(err) => {
            tracing::debug!(error = %err, "Ignoring xml hint");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hint_block_reads_name_and_wrapped() {
        let block: HintBlock = serde_json::from_value(json!({"name": "Tag", "wrapped": true})).unwrap();
        let hint = block.hint().unwrap();
        assert_eq!(hint.name(), Some("Tag"));
        assert!(hint.is_wrapped());
    }

    #[test]
    fn test_hint_block_defaults_to_unwrapped() {
        let block: HintBlock = serde_json::from_value(json!({"name": "Tag"})).unwrap();
        assert!(!block.hint().unwrap().is_wrapped());
    }

    #[test]
    fn test_hint_block_keeps_malformed_input() {
        let raw = json!({"name": "Tag", "wrapped": "yes"});
        let block: HintBlock = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(block, HintBlock::Malformed(raw.clone()));
        assert!(block.hint().is_none());
        assert!(matches!(
            block.checked("tags"),
            Err(GraphError::MalformedXmlHint { .. })
        ));
        assert_eq!(serde_json::to_value(&block).unwrap(), raw);
    }

    #[test]
    fn test_hint_block_rejects_non_object() {
        let block: HintBlock = serde_json::from_value(json!("Tag")).unwrap();
        assert!(block.hint().is_none());
        assert!(read_hint("tags", Some(&block)).is_none());
    }

    #[test]
    fn test_hint_round_trips_extra_fields() {
        let raw = json!({"name": "pet", "namespace": "urn:pets", "prefix": "p"});
        let block: HintBlock = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&block).unwrap(), raw);
    }
}
