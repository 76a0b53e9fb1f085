//! Serialize a catalog in the layout lupdate writes.
//!
//! Contexts sit at column 0, their children are indented by four spaces per
//! level, and the file ends with a newline. Parsing the output yields a
//! catalog equal to the input.

use std::fmt::Write;

use quick_xml::escape::escape;

use crate::core::data::{
    Catalog, Context, LENGTH_VARIANT_SEPARATOR, Message, Translation, length_variants,
};

const INDENT: &str = "    ";

pub fn write_ts(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!DOCTYPE TS>\n");

    out.push_str("<TS");
    push_attribute(&mut out, "version", &catalog.version);
    if let Some(language) = &catalog.language {
        push_attribute(&mut out, "language", language);
    }
    if let Some(source_language) = &catalog.source_language {
        push_attribute(&mut out, "sourcelanguage", source_language);
    }
    out.push_str(">\n");

    for context in catalog.contexts() {
        write_context(&mut out, context);
    }

    out.push_str("</TS>\n");
    out
}

fn write_context(out: &mut String, context: &Context) {
    out.push_str("<context>\n");
    push_element(out, 1, "name", context.name());
    if let Some(comment) = context.comment() {
        push_element(out, 1, "comment", comment);
    }
    for message in context.messages() {
        write_message(out, message);
    }
    out.push_str("</context>\n");
}

fn write_message(out: &mut String, message: &Message) {
    out.push_str(INDENT);
    out.push_str("<message");
    if let Some(id) = &message.id {
        push_attribute(out, "id", id);
    }
    if message.is_numerus() {
        push_attribute(out, "numerus", "yes");
    }
    out.push_str(">\n");

    for location in &message.locations {
        push_indent(out, 2);
        out.push_str("<location");
        push_attribute(out, "filename", &location.filename);
        if let Some(line) = location.line {
            push_attribute(out, "line", &line.to_string());
        }
        out.push_str("/>\n");
    }

    push_element(out, 2, "source", &message.source);
    let optional = [
        ("oldsource", &message.old_source),
        ("comment", &message.comment),
        ("oldcomment", &message.old_comment),
        ("extracomment", &message.extra_comment),
        ("translatorcomment", &message.translator_comment),
    ];
    for (tag, value) in optional {
        if let Some(value) = value {
            push_element(out, 2, tag, value);
        }
    }

    push_indent(out, 2);
    out.push_str("<translation");
    if let Some(ty) = message.translation_type.attribute() {
        push_attribute(out, "type", ty);
    }
    match &message.translation {
        Translation::Single(text) if has_variants(text) => {
            push_attribute(out, "variants", "yes");
            out.push_str(">\n");
            for variant in length_variants(text) {
                push_element(out, 3, "lengthvariant", variant);
            }
            push_indent(out, 2);
        }
        Translation::Single(text) => {
            out.push('>');
            out.push_str(&protect(text));
        }
        Translation::Numerus(forms) => {
            out.push_str(">\n");
            for form in forms {
                push_numerus_form(out, form);
            }
            push_indent(out, 2);
        }
    }
    out.push_str("</translation>\n");

    out.push_str(INDENT);
    out.push_str("</message>\n");
}

fn has_variants(text: &str) -> bool {
    text.contains(LENGTH_VARIANT_SEPARATOR)
}

fn push_numerus_form(out: &mut String, form: &str) {
    if !has_variants(form) {
        push_element(out, 3, "numerusform", form);
        return;
    }
    push_indent(out, 3);
    out.push_str("<numerusform variants=\"yes\">");
    for variant in length_variants(form) {
        let _ = write!(out, "<lengthvariant>{}</lengthvariant>", protect(variant));
    }
    out.push_str("</numerusform>\n");
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn push_element(out: &mut String, depth: usize, tag: &str, text: &str) {
    push_indent(out, depth);
    let _ = writeln!(out, "<{tag}>{}</{tag}>", protect(text));
}

fn push_attribute(out: &mut String, key: &str, value: &str) {
    let _ = write!(out, " {}=\"{}\"", key, escape(value));
}

/// Escape markup characters; control characters become `<byte>` elements.
fn protect(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(is_unprintable) {
        out.push_str(&escape(&rest[..pos]));
        let c = rest.as_bytes()[pos];
        let _ = write!(out, "<byte value=\"x{:x}\"/>", c);
        rest = &rest[pos + 1..];
    }
    out.push_str(&escape(rest));
    out
}

/// Control characters other than newline and tab; a raw `\r` would be read
/// back as `\n`.
fn is_unprintable(c: char) -> bool {
    c < '\u{20}' && !matches!(c, '\n' | '\t')
}
