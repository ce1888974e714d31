//! The document root and the collections it is made of.
//!
//! A document is a tree of named collections. A JSON object becomes a [`Node::Collection`] of
//! further nodes; a JSON array becomes a [`Node::Members`] list of annotation nodes:
//!
//! ```json
//! {
//!   "components": {
//!     "schemas": [{"kind": "schema", "name": "Pet", "properties": []}],
//!     "examples": [{"kind": "example", "name": "dog", "value": {"name": "Rex"}}]
//!   },
//!   "paths": {
//!     "/pets": {
//!       "content": [{"kind": "mediaType", "mediaType": "application/xml"}]
//!     }
//!   }
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::nodes::{Example, MediaType, Property, Schema};

/// Top-level container of named collections.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentRoot {
    pub collections: IndexMap<String, Node>,
}

/// A collection in the document tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// A list of annotation nodes, searched by identifying name.
    Members(Vec<Member>),
    /// Named sub-collections.
    Collection(IndexMap<String, Node>),
}

/// An annotation node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Member {
    Schema(Schema),
    Property(Property),
    Example(Example),
    MediaType(MediaType),
}

impl Member {
    /// The field a reference's terminal segment is matched against.
    pub fn identifier(&self) -> &str {
        match self {
            Member::Schema(schema) => &schema.name,
            Member::Property(property) => &property.property,
            Member::Example(example) => &example.name,
            Member::MediaType(media_type) => &media_type.media_type,
        }
    }

    /// Short name of the node kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Member::Schema(_) => "schema",
            Member::Property(_) => "property",
            Member::Example(_) => "example",
            Member::MediaType(_) => "mediaType",
        }
    }
}

impl DocumentRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a document from its JSON form.
    pub fn from_json(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// Adds `member` to the member list at `path`, creating collections along the way.
    ///
    /// A member list standing where a collection is needed is replaced by an empty collection.
    pub fn insert(&mut self, path: &[&str], member: Member) -> &mut Self {
        let Some((last, parents)) = path.split_last() else {
            return self;
        };
        let mut collection = &mut self.collections;
        for segment in parents {
            let node = collection
                .entry(segment.to_string())
                .or_insert_with(|| Node::Collection(IndexMap::new()));
            if !matches!(node, Node::Collection(_)) {
                *node = Node::Collection(IndexMap::new());
            }
            let Node::Collection(children) = node else {
                return self;
            };
            collection = children;
        }
        let node = collection
            .entry(last.to_string())
            .or_insert_with(|| Node::Members(Vec::new()));
        match node {
            Node::Members(members) => members.push(member),
            Node::Collection(_) => *node = Node::Members(vec![member]),
        }
        self
    }

    /// Looks up a nested collection by path.
    pub fn node(&self, path: &[&str]) -> Option<&Node> {
        let (first, rest) = path.split_first()?;
        let mut node = self.collections.get(*first)?;
        for segment in rest {
            node = match node {
                Node::Collection(children) => children.get(*segment)?,
                Node::Members(_) => return None,
            };
        }
        Some(node)
    }

    /// Every media type descriptor, in document order.
    pub fn media_types(&self) -> Vec<&MediaType> {
        let mut found = Vec::new();
        for node in self.collections.values() {
            collect_media_types(node, &mut found);
        }
        found
    }

    /// Every media type descriptor, mutably, in the same order as [`DocumentRoot::media_types`].
    pub fn media_types_mut(&mut self) -> Vec<&mut MediaType> {
        let mut found = Vec::new();
        for node in self.collections.values_mut() {
            collect_media_types_mut(node, &mut found);
        }
        found
    }
}

fn collect_media_types<'a>(node: &'a Node, found: &mut Vec<&'a MediaType>) {
    match node {
        Node::Members(members) => found.extend(members.iter().filter_map(|member| match member {
            Member::MediaType(media_type) => Some(media_type),
            _ => None,
        })),
        Node::Collection(children) => {
            for child in children.values() {
                collect_media_types(child, found);
            }
        }
    }
}

fn collect_media_types_mut<'a>(node: &'a mut Node, found: &mut Vec<&'a mut MediaType>) {
    match node {
        Node::Members(members) => {
            found.extend(members.iter_mut().filter_map(|member| match member {
                Member::MediaType(media_type) => Some(media_type),
                _ => None,
            }))
        }
        Node::Collection(children) => {
            for child in children.values_mut() {
                collect_media_types_mut(child, found);
            }
        }
    }
}
