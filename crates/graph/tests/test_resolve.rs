//! Reference resolution against a document shaped like the output of an annotation scanner:
//! shared components plus media types hanging off paths.

use apidoc_graph::*;

const PETSTORE: &str = r##"{
  "components": {
    "schemas": [
      {
        "kind": "schema",
        "name": "Pet",
        "xml": {"name": "pet"},
        "properties": [
          {"property": "name"},
          {"property": "tags", "xml": {"name": "tag", "wrapped": true}}
        ]
      },
      {"kind": "schema", "name": "Pet", "properties": []}
    ],
    "examples": [
      {"kind": "example", "name": "dog", "summary": "A dog", "value": {"name": "Rex"}},
      {"kind": "example", "name": "cat", "value": {"name": "Tom"}}
    ]
  },
  "paths": {
    "/pets": {
      "get": {
        "content": [
          {
            "kind": "mediaType",
            "mediaType": "application/xml",
            "schema": {"$ref": "#/components/schemas/Pet"},
            "examples": {"dog": {"$ref": "#/components/examples/dog"}}
          }
        ]
      }
    }
  }
}"##;

fn petstore() -> DocumentRoot {
    serde_json::from_str(PETSTORE).expect("fixture parses")
}

#[test]
fn test_resolve_whole_schema_node() {
    let doc = petstore();
    match resolve("#/components/schemas/Pet", &doc, Selector::Node) {
        Some(Resolved::Node(Member::Schema(schema))) => {
            // first of the two `Pet` schemas
            assert_eq!(schema.properties.len(), 2);
            assert_eq!(schema.element_name(), "pet");
        }
        other => panic!("expected the Pet schema, got {:?}", other),
    }
}

#[test]
fn test_resolve_named_field() {
    let doc = petstore();
    assert_eq!(
        resolve("#/components/examples/dog", &doc, Selector::Field("summary")),
        Some(Resolved::Field(FieldValue::Text("A dog")))
    );
    assert_eq!(
        resolve("#/components/examples/cat", &doc, Selector::Field("value")),
        Some(Resolved::Field(FieldValue::Value(&serde_json::json!({"name": "Tom"}))))
    );
}

#[test]
fn test_resolve_absent_field_is_not_found() {
    let doc = petstore();
    assert!(resolve("#/components/examples/cat", &doc, Selector::Field("summary")).is_none());
    assert!(resolve("#/components/examples/cat", &doc, Selector::Field("color")).is_none());
}

#[test]
fn test_resolve_missing_collection_is_not_found() {
    let doc = petstore();
    assert!(resolve("#/examples/Missing", &doc, Selector::Node).is_none());
    assert!(resolve("#/components/responses/Missing", &doc, Selector::Node).is_none());
    assert!(resolve("#/components/examples/Missing", &doc, Selector::Node).is_none());
}

#[test]
fn test_resolve_against_empty_document() {
    let doc = DocumentRoot::new();
    assert!(resolve("#/examples/Missing", &doc, Selector::Node).is_none());
}

#[test]
fn test_try_resolve_distinguishes_failures() {
    let doc = petstore();
    assert_eq!(
        try_resolve("components/examples/dog", &doc, Selector::Node),
        Err(GraphError::NotAReference("components/examples/dog".to_string()))
    );
    assert_eq!(
        try_resolve("#/components/examples/bird", &doc, Selector::Node),
        Err(GraphError::ReferenceNotResolved(
            "#/components/examples/bird".to_string()
        ))
    );
}

#[test]
fn test_resolve_does_not_descend_into_members() {
    let doc = petstore();
    // `Pet` is a member, not a collection
    assert!(resolve("#/components/schemas/Pet/name", &doc, Selector::Node).is_none());
    // `components` is a collection of collections, not of members
    assert!(resolve("#/components/schemas", &doc, Selector::Node).is_none());
}

#[test]
fn test_typed_lookups() -> Result<()> {
    let doc = petstore();
    let example = resolve_example("#/components/examples/dog", &doc)?;
    assert_eq!(example.summary.as_deref(), Some("A dog"));

    let err = resolve_schema("#/components/examples/dog", &doc).unwrap_err();
    assert_eq!(
        err,
        GraphError::UnexpectedNode {
            reference: "#/components/examples/dog".to_string(),
            expected: "schema",
            found: "example",
        }
    );
    Ok(())
}

#[test]
fn test_media_type_schema_reference() {
    let doc = petstore();
    let media_types = doc.media_types();
    assert_eq!(media_types.len(), 1);

    let schema_ref = media_types[0].schema.as_ref().and_then(SchemaRef::as_reference);
    assert_eq!(schema_ref, Some("#/components/schemas/Pet"));
    assert_eq!(
        media_types[0].examples["dog"].as_reference(),
        Some("#/components/examples/dog")
    );
}
