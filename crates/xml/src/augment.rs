//! Rendering of XML examples into media type descriptors.
//!
//! A descriptor is picked up when its media type is the configured XML media type, it has at
//! least one example and its schema is a `$ref`. Each example entry that is still a reference
//! is resolved, synthesized against the schema, formatted, and stored back as
//! `{summary, value}`. Entries that already carry a value are left alone, so running the pass
//! twice changes nothing the second time.
//!
//! Nothing here fails the pass: an entry whose references don't resolve, or whose markup
//! can't be formatted, is skipped and reported in the [`AugmentReport`].

use apidoc_graph::{
    DocumentRoot, GraphError, MediaType, Schema, SchemaRef, resolve_example, resolve_schema,
};
use tracing::{debug, warn};

use crate::config::AugmentOptions;
use crate::error::{Result, XmlError};
use crate::xml::format::Formatter;
use crate::xml::synth::Synthesizer;

/// Renders XML examples with the default options.
pub fn augment(root: &mut DocumentRoot) -> AugmentReport {
    MediaTypeAugmentor::default().augment(root)
}

/// Renders XML examples with `options`.
pub fn augment_with(root: &mut DocumentRoot, options: AugmentOptions) -> AugmentReport {
    MediaTypeAugmentor::new(options).augment(root)
}

/// An example entry that was left unchanged.
#[derive(Debug)]
pub struct SkippedExample {
    /// Media type of the descriptor holding the entry.
    pub media_type: String,
    /// Name of the entry in the descriptor's `examples` map.
    pub example: String,
    pub reason: XmlError,
}

/// Outcome of one augmentation pass.
#[derive(Debug, Default)]
pub struct AugmentReport {
    /// Descriptors that qualified for rendering.
    pub descriptors: usize,
    /// Entries rewritten with rendered XML.
    pub rendered: usize,
    pub skipped: Vec<SkippedExample>,
}

impl AugmentReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// A rendered entry waiting to be written back.
struct Rendered {
    descriptor: usize,
    example: String,
    summary: String,
    xml: String,
}

/// Rewrites referenced examples of XML media types with rendered XML.
#[derive(Debug, Clone, Default)]
pub struct MediaTypeAugmentor {
    options: AugmentOptions,
}

impl MediaTypeAugmentor {
    pub fn new(options: AugmentOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AugmentOptions {
        &self.options
    }

    /// Renders every qualifying example entry of `root` in place.
    ///
    /// Rendering reads the whole document (schemas and examples live elsewhere in it), so
    /// the pass first renders everything, then writes the results back in the same order.
    pub fn augment(&self, root: &mut DocumentRoot) -> AugmentReport {
        let mut report = AugmentReport::default();
        let rendered = self.render_all(root, &mut report);

        let mut rendered = rendered.into_iter().peekable();
        for (index, media_type) in root.media_types_mut().into_iter().enumerate() {
            while let Some(done) = rendered.next_if(|done| done.descriptor == index) {
                if let Some(entry) = media_type.examples.get_mut(&done.example) {
                    entry.render(done.summary, done.xml);
                    report.rendered += 1;
                }
            }
        }

        debug!(
            descriptors = report.descriptors,
            rendered = report.rendered,
            skipped = report.skipped.len(),
            "XML example augmentation finished"
        );
        report
    }

    /// Whether `media_type` is an XML descriptor with examples and a referenced schema.
    pub fn is_eligible(&self, media_type: &MediaType) -> bool {
        media_type.media_type == self.options.media_type
            && !media_type.examples.is_empty()
            && schema_reference(media_type).is_some()
    }

    fn render_all(&self, root: &DocumentRoot, report: &mut AugmentReport) -> Vec<Rendered> {
        let synthesizer = Synthesizer::for_document(root).with_options(self.options.clone());
        let formatter = Formatter::from(&self.options);
        let mut rendered = Vec::new();

        for (index, media_type) in root.media_types().into_iter().enumerate() {
            if !self.is_eligible(media_type) {
                continue;
            }
            let Some(schema_ref) = schema_reference(media_type) else {
                continue;
            };
            report.descriptors += 1;
            debug!(
                media_type = %media_type.media_type,
                schema = %schema_ref,
                examples = media_type.examples.len(),
                "Rendering XML examples"
            );
            if let Ok(schema) = resolve_schema(schema_ref, root) {
                for err in malformed_hints(schema) {
                    warn!(schema = %schema_ref, error = %err, "Rendering without malformed xml hint");
                }
            }

            for (name, entry) in &media_type.examples {
                let Some(example_ref) = entry.as_reference() else {
                    continue;
                };
                match render_entry(root, &synthesizer, &formatter, schema_ref, name, example_ref) {
                    Ok((summary, xml)) => {
                        debug!(example = %name, reference = %example_ref, "Rendered XML example");
                        rendered.push(Rendered {
                            descriptor: index,
                            example: name.clone(),
                            summary,
                            xml,
                        });
                    }
                    Err(reason) => {
                        match &reason {
                            XmlError::Graph(err) => {
                                debug!(example = %name, error = %err, "Skipping XML example")
                            }
                            err => warn!(example = %name, error = %err, "Failed to render XML example"),
                        }
                        report.skipped.push(SkippedExample {
                            media_type: media_type.media_type.clone(),
                            example: name.clone(),
                            reason,
                        });
                    }
                }
            }
        }
        rendered
    }
}

fn schema_reference(media_type: &MediaType) -> Option<&str> {
    media_type.schema.as_ref().and_then(SchemaRef::as_reference)
}

/// Hint blocks of `schema` and its properties that can't be read as hints.
fn malformed_hints(schema: &Schema) -> impl Iterator<Item = GraphError> + '_ {
    let own = schema.xml.as_ref().map(|block| (schema.name.as_str(), block));
    let properties = schema
        .properties
        .iter()
        .filter_map(|property| property.xml.as_ref().map(|block| (property.property.as_str(), block)));
    own.into_iter()
        .chain(properties)
        .filter_map(|(owner, block)| block.checked(owner).err())
}

/// Renders one entry, returning its summary and formatted XML.
fn render_entry(
    root: &DocumentRoot,
    synthesizer: &Synthesizer<'_>,
    formatter: &Formatter,
    schema_ref: &str,
    name: &str,
    example_ref: &str,
) -> Result<(String, String)> {
    let schema = resolve_schema(schema_ref, root)?;
    let example = resolve_example(example_ref, root)?;

    let tree = synthesizer.synthesize_example(schema, example.value.as_ref());
    let xml = formatter.format(&tree)?;
    let summary = example.summary.clone().unwrap_or_else(|| name.to_string());
    Ok((summary, xml))
}
