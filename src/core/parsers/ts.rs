use std::{borrow::Cow, collections::HashMap, fs, path::Path};

use quick_xml::{
    Reader,
    escape::unescape,
    events::{BytesStart, Event},
};
use tracing::debug;

use crate::core::{
    CatalogError,
    data::{
        Catalog, Context, DEFAULT_TS_VERSION, Location, Message, Translation, TranslationType,
        join_length_variants,
    },
};
use crate::utils::{build_line_index, offset_to_line};

/// Parse a `.ts` catalog from disk.
pub fn parse_ts_file(path: &Path) -> Result<Catalog, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_ts_str(&content, &path.to_string_lossy())
}

/// Parse a `.ts` catalog from a string.
///
/// `file_path` is only used to label errors.
pub fn parse_ts_str(content: &str, file_path: &str) -> Result<Catalog, CatalogError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let catalog = TsParser::new(content, file_path).parse()?;
    debug!(
        file = file_path,
        language = catalog.language.as_deref().unwrap_or(""),
        contexts = catalog.contexts().len(),
        messages = catalog.message_count(),
        "parsed catalog"
    );
    Ok(catalog)
}

/// Cheap sniff to tell Linguist catalogs apart from TypeScript sources that share the extension.
pub fn looks_like_ts(content: &str) -> bool {
    let head = content.trim_start_matches('\u{feff}').trim_start();
    if !head.starts_with('<') {
        return false;
    }
    let window = head.char_indices().nth(1024).map_or(head, |(i, _)| &head[..i]);
    window.contains("<TS")
}

struct TsParser<'a> {
    reader: Reader<&'a [u8]>,
    file_path: &'a str,
    line_index: Vec<usize>,
    /// Last absolute line seen per file, the base for relative `line="+N"` values.
    last_line: HashMap<String, usize>,
    last_file: Option<String>,
    /// Comments and unknown elements skipped so far.
    dropped: usize,
}

impl<'a> TsParser<'a> {
    fn new(content: &'a str, file_path: &'a str) -> Self {
        let mut reader = Reader::from_str(content);
        reader.trim_text(false);
        Self {
            reader,
            file_path,
            line_index: build_line_index(content),
            last_line: HashMap::new(),
            last_file: None,
            dropped: 0,
        }
    }

    fn line(&self) -> usize {
        offset_to_line(&self.line_index, self.reader.buffer_position())
    }

    fn xml_error(&self, message: impl ToString) -> CatalogError {
        CatalogError::Xml {
            file_path: self.file_path.to_string(),
            line: self.line(),
            message: message.to_string(),
        }
    }

    fn format_error(&self, line: usize, message: impl Into<String>) -> CatalogError {
        CatalogError::Format {
            file_path: self.file_path.to_string(),
            line,
            message: message.into(),
        }
    }

    fn next(&mut self) -> Result<Event<'a>, CatalogError> {
        match self.reader.read_event() {
            Ok(event) => Ok(event),
            Err(e) => Err(self.xml_error(e)),
        }
    }

    fn skip(&mut self, start: &BytesStart<'_>) -> Result<(), CatalogError> {
        match self.reader.read_to_end(start.name()) {
            Ok(_) => Ok(()),
            Err(e) => Err(self.xml_error(e)),
        }
    }

    /// Record content the catalog model cannot hold.
    fn drop_content(&mut self, what: &str) {
        debug!(file = self.file_path, line = self.line(), what, "skipping content");
        self.dropped += 1;
    }

    fn skip_unknown(&mut self, start: &BytesStart<'_>) -> Result<(), CatalogError> {
        self.drop_content(&String::from_utf8_lossy(start.name().as_ref()));
        self.skip(start)
    }

    fn attribute(&self, start: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>, CatalogError> {
        for attr in start.attributes() {
            let attr = attr.map_err(|e| self.xml_error(e))?;
            if attr.key.as_ref() == key {
                let value = attr.unescape_value().map_err(|e| self.xml_error(e))?;
                return Ok(Some(value.into_owned()));
            }
        }
        Ok(None)
    }

    fn parse(mut self) -> Result<Catalog, CatalogError> {
        loop {
            match self.next()? {
                Event::Start(e) if e.name().as_ref() == b"TS" => {
                    let mut catalog = self.catalog_header(&e)?;
                    self.parse_body(&mut catalog)?;
                    self.count_trailing();
                    catalog.dropped_content = self.dropped;
                    return Ok(catalog);
                }
                Event::Empty(e) if e.name().as_ref() == b"TS" => {
                    let mut catalog = self.catalog_header(&e)?;
                    self.count_trailing();
                    catalog.dropped_content = self.dropped;
                    return Ok(catalog);
                }
                Event::Start(e) | Event::Empty(e) => {
                    let found = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    return Err(self.format_error(
                        self.line(),
                        format!("expected <TS> root element, found <{}>", found),
                    ));
                }
                Event::Eof => {
                    return Err(self.format_error(self.line(), "missing <TS> root element"));
                }
                Event::Comment(_) => self.drop_content("comment"),
                Event::PI(_) => self.drop_content("processing instruction"),
                _ => {}
            }
        }
    }

    /// Content after the root element is lost as well; malformed trailing
    /// data is left to the XML reader of the consumer.
    fn count_trailing(&mut self) {
        loop {
            match self.reader.read_event() {
                Ok(Event::Comment(_)) => self.drop_content("comment"),
                Ok(Event::PI(_)) => self.drop_content("processing instruction"),
                Ok(Event::Eof) | Err(_) => return,
                Ok(_) => {}
            }
        }
    }

    fn catalog_header(&self, start: &BytesStart<'_>) -> Result<Catalog, CatalogError> {
        let mut catalog = Catalog::default();
        catalog.version = self
            .attribute(start, b"version")?
            .unwrap_or_else(|| DEFAULT_TS_VERSION.to_string());
        catalog.language = self.attribute(start, b"language")?;
        catalog.source_language = self.attribute(start, b"sourcelanguage")?;
        Ok(catalog)
    }

    fn parse_body(&mut self, catalog: &mut Catalog) -> Result<(), CatalogError> {
        loop {
            match self.next()? {
                Event::Start(e) if e.name().as_ref() == b"context" => {
                    let context = self.parse_context()?;
                    catalog.push_context(context);
                }
                Event::Start(e) => self.skip_unknown(&e)?,
                Event::Empty(e) => self.drop_content(&String::from_utf8_lossy(e.name().as_ref())),
                Event::Comment(_) => self.drop_content("comment"),
                Event::End(_) => return Ok(()),
                Event::Eof => {
                    return Err(self.format_error(self.line(), "unexpected end of file inside <TS>"));
                }
                _ => {}
            }
        }
    }

    fn parse_context(&mut self) -> Result<Context, CatalogError> {
        let start_line = self.line();
        let mut name = None;
        let mut comment = None;
        let mut messages = Vec::new();

        loop {
            match self.next()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"name" => name = Some(self.read_text("name")?),
                    b"comment" => comment = Some(self.read_text("comment")?),
                    b"message" => messages.push(self.parse_message(&e)?),
                    _ => self.skip_unknown(&e)?,
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"name" => name = Some(String::new()),
                    b"comment" => comment = Some(String::new()),
                    b"message" => {
                        return Err(self.format_error(self.line(), "<message> without <source>"));
                    }
                    other => self.drop_content(&String::from_utf8_lossy(other)),
                },
                Event::Comment(_) => self.drop_content("comment"),
                Event::End(_) => break,
                Event::Eof => {
                    return Err(self.format_error(
                        self.line(),
                        "unexpected end of file inside <context>",
                    ));
                }
                _ => {}
            }
        }

        let name = name.ok_or_else(|| self.format_error(start_line, "<context> without <name>"))?;
        let mut context = Context::new(name);
        if let Some(comment) = comment {
            context = context.with_comment(comment);
        }
        for message in messages {
            context.push(message);
        }
        Ok(context)
    }

    fn parse_message(&mut self, start: &BytesStart<'_>) -> Result<Message, CatalogError> {
        let file_line = self.line();
        let numerus = self.attribute(start, b"numerus")?.as_deref() == Some("yes");
        let mut message = Message {
            id: self.attribute(start, b"id")?,
            file_line,
            ..Default::default()
        };
        if numerus {
            message.translation = Translation::Numerus(Vec::new());
        }
        let mut source = None;

        loop {
            match self.next()? {
                Event::Empty(e) => match e.name().as_ref() {
                    b"location" => {
                        let location = self.parse_location(&e)?;
                        message.locations.push(location);
                    }
                    b"source" => source = Some(String::new()),
                    b"translation" => {
                        message.translation_type = self.translation_type(&e)?;
                    }
                    b"oldsource" => message.old_source = Some(String::new()),
                    b"comment" => message.comment = Some(String::new()),
                    b"oldcomment" => message.old_comment = Some(String::new()),
                    b"extracomment" => message.extra_comment = Some(String::new()),
                    b"translatorcomment" => message.translator_comment = Some(String::new()),
                    other => self.drop_content(&String::from_utf8_lossy(other)),
                },
                Event::Start(e) => match e.name().as_ref() {
                    b"location" => {
                        let location = self.parse_location(&e)?;
                        message.locations.push(location);
                        self.skip(&e)?;
                    }
                    b"source" => source = Some(self.read_text("source")?),
                    b"oldsource" => message.old_source = Some(self.read_text("oldsource")?),
                    b"comment" => message.comment = Some(self.read_text("comment")?),
                    b"oldcomment" => message.old_comment = Some(self.read_text("oldcomment")?),
                    b"extracomment" => {
                        message.extra_comment = Some(self.read_text("extracomment")?)
                    }
                    b"translatorcomment" => {
                        message.translator_comment = Some(self.read_text("translatorcomment")?)
                    }
                    b"translation" => {
                        message.translation_type = self.translation_type(&e)?;
                        message.translation = if numerus {
                            Translation::Numerus(self.read_numerus_forms()?)
                        } else {
                            Translation::Single(self.read_text("translation")?)
                        };
                    }
                    _ => self.skip_unknown(&e)?,
                },
                Event::Comment(_) => self.drop_content("comment"),
                Event::End(_) => break,
                Event::Eof => {
                    return Err(self.format_error(
                        self.line(),
                        "unexpected end of file inside <message>",
                    ));
                }
                _ => {}
            }
        }

        message.source =
            source.ok_or_else(|| self.format_error(file_line, "<message> without <source>"))?;
        Ok(message)
    }

    fn translation_type(&self, start: &BytesStart<'_>) -> Result<TranslationType, CatalogError> {
        match self.attribute(start, b"type")? {
            None => Ok(TranslationType::Finished),
            Some(value) => TranslationType::from_attribute(&value).ok_or_else(|| {
                self.format_error(
                    self.line(),
                    format!("unknown translation type `{}`", value),
                )
            }),
        }
    }

    fn parse_location(&mut self, start: &BytesStart<'_>) -> Result<Location, CatalogError> {
        let filename = match self.attribute(start, b"filename")? {
            Some(filename) => filename,
            None => self.last_file.clone().ok_or_else(|| {
                self.format_error(self.line(), "<location> without filename")
            })?,
        };

        let line = match self.attribute(start, b"line")? {
            Some(raw) => Some(self.resolve_line(&filename, &raw)?),
            None => None,
        };

        if let Some(line) = line {
            self.last_line.insert(filename.clone(), line);
        }
        self.last_file = Some(filename.clone());

        Ok(Location { filename, line })
    }

    /// Resolve absolute (`33`) and relative (`+3`, `-2`) line attributes.
    fn resolve_line(&self, filename: &str, raw: &str) -> Result<usize, CatalogError> {
        let invalid = || self.format_error(self.line(), format!("invalid line attribute `{}`", raw));

        if raw.starts_with('+') || raw.starts_with('-') {
            let delta: i64 = raw.parse().map_err(|_| invalid())?;
            let base = self.last_line.get(filename).copied().unwrap_or(0) as i64;
            usize::try_from(base + delta).map_err(|_| invalid())
        } else {
            raw.parse().map_err(|_| invalid())
        }
    }

    fn read_numerus_forms(&mut self) -> Result<Vec<String>, CatalogError> {
        let mut forms = Vec::new();
        loop {
            match self.next()? {
                Event::Start(e) if e.name().as_ref() == b"numerusform" => {
                    forms.push(self.read_text("numerusform")?);
                }
                Event::Empty(e) if e.name().as_ref() == b"numerusform" => forms.push(String::new()),
                Event::Start(e) => self.skip_unknown(&e)?,
                Event::Empty(e) => self.drop_content(&String::from_utf8_lossy(e.name().as_ref())),
                Event::Comment(_) => self.drop_content("comment"),
                Event::End(_) => return Ok(forms),
                Event::Eof => {
                    return Err(self.format_error(
                        self.line(),
                        "unexpected end of file inside <translation>",
                    ));
                }
                _ => {}
            }
        }
    }

    /// Collect the text of an element up to its end tag.
    ///
    /// `<byte value="..."/>` children stand for characters XML cannot carry.
    /// Translations and numerus forms may hold `<lengthvariant>` children
    /// instead of text; they are joined with the length variant separator.
    fn read_text(&mut self, tag: &str) -> Result<String, CatalogError> {
        let has_variants = matches!(tag, "translation" | "numerusform");
        let mut text = String::new();
        let mut variants = Vec::new();
        loop {
            match self.next()? {
                Event::Text(t) => {
                    let raw = std::str::from_utf8(&t).map_err(|e| self.xml_error(e))?;
                    let normalized = normalize_newlines(raw);
                    let unescaped = unescape(&normalized).map_err(|e| self.xml_error(e))?;
                    text.push_str(&unescaped);
                }
                Event::CData(c) => {
                    let raw = c.into_inner();
                    let chunk = std::str::from_utf8(&raw).map_err(|e| self.xml_error(e))?;
                    text.push_str(&normalize_newlines(chunk));
                }
                Event::Empty(e) if e.name().as_ref() == b"byte" => {
                    let value = self.attribute(&e, b"value")?.unwrap_or_default();
                    text.push(self.byte_char(&value)?);
                }
                Event::Start(e) if has_variants && e.name().as_ref() == b"lengthvariant" => {
                    variants.push(self.read_text("lengthvariant")?);
                }
                Event::Empty(e) if has_variants && e.name().as_ref() == b"lengthvariant" => {
                    variants.push(String::new());
                }
                Event::Start(e) | Event::Empty(e) => {
                    let found = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    return Err(self.format_error(
                        self.line(),
                        format!("unexpected <{}> inside <{}>", found, tag),
                    ));
                }
                Event::Comment(_) => self.drop_content("comment"),
                // Text between variants is indentation.
                Event::End(_) if !variants.is_empty() => {
                    return Ok(join_length_variants(&variants));
                }
                Event::End(_) => return Ok(text),
                Event::Eof => {
                    return Err(self.format_error(
                        self.line(),
                        format!("unexpected end of file inside <{}>", tag),
                    ));
                }
                _ => {}
            }
        }
    }

    fn byte_char(&self, value: &str) -> Result<char, CatalogError> {
        let code = match value.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => value.parse().ok(),
        };
        code.and_then(char::from_u32).ok_or_else(|| {
            self.format_error(self.line(), format!("invalid <byte> value `{}`", value))
        })
    }
}

/// End-of-line handling of XML 1.0: `\r\n` and lone `\r` read as `\n`.
///
/// Character references such as `&#13;` are resolved after this and survive.
fn normalize_newlines(raw: &str) -> Cow<'_, str> {
    if raw.contains('\r') {
        Cow::Owned(raw.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(raw)
    }
}
