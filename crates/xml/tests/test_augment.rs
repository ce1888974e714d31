//! End-to-end augmentation of a document read from JSON.

use apidoc_graph::{DocumentRoot, ExampleEntry, MediaType};
use apidoc_xml::{AugmentOptions, XmlError, augment, augment_with};
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

fn petstore() -> DocumentRoot {
    init_logging();
    DocumentRoot::from_json(json!({
        "components": {
            "schemas": [
                {
                    "kind": "schema",
                    "name": "Pet",
                    "properties": [
                        {"property": "name"},
                        {"property": "tags", "xml": {"name": "Tag", "wrapped": true}},
                        {"property": "owner", "schema": {"$ref": "#/components/schemas/Owner"}}
                    ]
                },
                {
                    "kind": "schema",
                    "name": "Owner",
                    "xml": {"name": "owner"},
                    "properties": [
                        {"property": "phones", "xml": {"name": "phones", "wrapped": true}}
                    ]
                }
            ],
            "examples": [
                {"kind": "example", "name": "tagged", "value": {"tags": [{"Tag": "a"}, {"Tag": "b"}]}},
                {
                    "kind": "example",
                    "name": "owned",
                    "summary": "A pet with an owner",
                    "value": {
                        "name": "Rex",
                        "owner": {"phones": ["555-1234", "555-9876"]},
                        "nickname": null,
                        "aliases": []
                    }
                }
            ]
        },
        "paths": {
            "/pets": {
                "get": [
                    {
                        "kind": "mediaType",
                        "mediaType": "application/xml",
                        "schema": {"$ref": "#/components/schemas/Pet"},
                        "examples": {
                            "tagged": {"$ref": "#/components/examples/tagged"},
                            "owned": {"$ref": "#/components/examples/owned"},
                            "missing": {"$ref": "#/components/examples/missing"},
                            "inline": {"summary": "Hand written", "value": "<Pet/>"}
                        }
                    },
                    {
                        "kind": "mediaType",
                        "mediaType": "application/json",
                        "schema": {"$ref": "#/components/schemas/Pet"},
                        "examples": {
                            "tagged": {"$ref": "#/components/examples/tagged"}
                        }
                    }
                ]
            }
        }
    }))
    .unwrap()
}

fn xml_examples(doc: &DocumentRoot) -> &MediaType {
    doc.media_types()
        .into_iter()
        .find(|media_type| media_type.media_type == "application/xml")
        .unwrap()
}

fn value_of(entry: &ExampleEntry) -> &str {
    entry.value.as_ref().and_then(Value::as_str).unwrap()
}

#[test]
fn test_wrapped_tags_render_as_siblings() {
    let mut doc = petstore();
    augment(&mut doc);

    let entry = &xml_examples(&doc).examples["tagged"];
    assert_eq!(
        value_of(entry),
        "<?xml version=\"1.0\"?>\n<Pet>\n  <Tag>a</Tag>\n  <Tag>b</Tag>\n</Pet>\n"
    );
    // no summary on the example: the entry name stands in
    assert_eq!(entry.summary.as_deref(), Some("tagged"));
    assert_eq!(entry.reference.as_deref(), Some("#/components/examples/tagged"));
}

#[test]
fn test_referenced_property_schema_and_blank_values() {
    let mut doc = petstore();
    augment(&mut doc);

    let entry = &xml_examples(&doc).examples["owned"];
    assert_eq!(entry.summary.as_deref(), Some("A pet with an owner"));
    assert_eq!(
        value_of(entry),
        concat!(
            "<?xml version=\"1.0\"?>\n",
            "<Pet>\n",
            "  <name>Rex</name>\n",
            "  <owner>\n",
            "    <phones>\n",
            "      <phone>555-1234</phone>\n",
            "      <phone>555-9876</phone>\n",
            "    </phones>\n",
            "  </owner>\n",
            "</Pet>\n",
        )
    );
}

#[test]
fn test_unresolved_and_inline_entries_untouched() {
    let mut doc = petstore();
    let report = augment(&mut doc);

    assert_eq!(report.descriptors, 1);
    assert_eq!(report.rendered, 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].example, "missing");
    assert!(matches!(report.skipped[0].reason, XmlError::Graph(_)));

    let examples = &xml_examples(&doc).examples;
    assert_eq!(
        examples["missing"],
        ExampleEntry::reference("#/components/examples/missing")
    );
    assert_eq!(examples["inline"].summary.as_deref(), Some("Hand written"));
    assert_eq!(examples["inline"].value, Some(json!("<Pet/>")));
}

#[test]
fn test_json_media_type_never_touched() {
    let mut doc = petstore();
    let before = doc.media_types()[1].clone();
    augment(&mut doc);
    assert_eq!(doc.media_types()[1], &before);
}

#[test]
fn test_second_pass_changes_nothing() {
    let mut doc = petstore();
    augment(&mut doc);
    let once = doc.clone();

    let report = augment(&mut doc);
    assert_eq!(report.rendered, 0);
    assert_eq!(doc, once);
}

#[test]
fn test_entry_order_preserved() {
    let mut doc = petstore();
    augment(&mut doc);
    let names: Vec<&str> = xml_examples(&doc)
        .examples
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(names, ["tagged", "owned", "missing", "inline"]);
}

#[test]
fn test_custom_media_type() {
    let mut doc = petstore();
    let options = AugmentOptions::default()
        .with_media_type("application/json")
        .with_declaration(false)
        .with_indent(0);
    let report = augment_with(&mut doc, options);
    assert_eq!(report.rendered, 1);

    let json = doc.media_types()[1];
    assert_eq!(
        value_of(&json.examples["tagged"]),
        "<Pet><Tag>a</Tag><Tag>b</Tag></Pet>\n"
    );
    assert_eq!(
        xml_examples(&doc).examples["tagged"],
        ExampleEntry::reference("#/components/examples/tagged")
    );
}

#[test]
fn test_augmented_document_serializes() {
    let mut doc = petstore();
    augment(&mut doc);
    let value = serde_json::to_value(&doc).unwrap();
    let entry = &value["paths"]["/pets"]["get"][0]["examples"]["tagged"];
    assert_eq!(entry["$ref"], json!("#/components/examples/tagged"));
    assert_eq!(entry["summary"], json!("tagged"));
    assert!(entry["value"].as_str().unwrap().starts_with("<?xml"));
}
