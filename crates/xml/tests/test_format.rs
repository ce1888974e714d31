//! Formatting of markup that didn't come from the synthesizer.

use apidoc_xml::{Formatter, Result, XmlError, format_str};

#[test]
fn test_formatting_is_idempotent() -> Result<()> {
    let inputs = [
        "<Pet><name>Rex</name><tags><tag>a</tag><tag/></tags></Pet>",
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Pet>\n\n   <name> Rex </name>\n</Pet>",
        "<note><![CDATA[a<b]]> &amp; c</note>",
        "<root><!-- kept --><empty></empty></root>",
    ];
    for input in inputs {
        let once = format_str(input)?;
        assert_eq!(format_str(&once)?, once, "input: {input}");
    }
    Ok(())
}

#[test]
fn test_existing_declaration_replaced() -> Result<()> {
    let formatted =
        format_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?><Pet/>")?;
    assert_eq!(formatted, "<?xml version=\"1.0\"?>\n<Pet/>\n");
    Ok(())
}

#[test]
fn test_cdata_and_entities_merge_into_text() -> Result<()> {
    let formatted = format_str("<note><![CDATA[a<b]]> &amp; c</note>")?;
    assert_eq!(formatted, "<?xml version=\"1.0\"?>\n<note>a&lt;b &amp; c</note>\n");
    Ok(())
}

#[test]
fn test_compact_layout() -> Result<()> {
    let formatter = Formatter::new(false, 0);
    let formatted = formatter.format_str("<Pet>\n  <name>Rex</name>\n  <tags></tags>\n</Pet>")?;
    assert_eq!(formatted, "<Pet><name>Rex</name><tags/></Pet>\n");
    Ok(())
}

#[test]
fn test_malformed_markup_is_an_error() {
    assert!(matches!(format_str("<Pet></Dog>"), Err(XmlError::Xml(_))));
    assert!(matches!(
        format_str("<Pet>&nbsp;</Pet>"),
        Err(XmlError::UnknownEntity(name)) if name == "nbsp"
    ));
}
