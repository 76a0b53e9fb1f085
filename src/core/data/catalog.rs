use std::collections::HashMap;

use serde::Serialize;

use super::message::Message;

/// Format version written by current lupdate.
pub const DEFAULT_TS_VERSION: &str = "2.1";

/// Messages of one UI component, in file order.
///
/// Keeps an index from source text to message positions so lookups do not
/// scan the whole context.
#[derive(Debug, Clone, Serialize)]
pub struct Context {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    messages: Vec<Message>,
    #[serde(skip)]
    by_source: HashMap<String, Vec<usize>>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            messages: Vec::new(),
            by_source: HashMap::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn push(&mut self, message: Message) {
        self.by_source
            .entry(message.source.clone())
            .or_default()
            .push(self.messages.len());
        self.messages.push(message);
    }

    /// All messages with this source text and disambiguation, in file order.
    pub fn candidates<'a, 'k>(
        &'a self,
        source: &'k str,
        disambiguation: &'k str,
    ) -> impl Iterator<Item = &'a Message> {
        self.by_source
            .get(source)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&idx| &self.messages[idx])
            .filter(move |m| m.disambiguation() == disambiguation)
    }
}

impl PartialEq for Context {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.comment == other.comment && self.messages == other.messages
    }
}

impl Eq for Context {}

/// An in-memory translation catalog for one target language.
///
/// Contexts keep file order. Several `<context>` blocks with the same name
/// are kept apart for faithful re-serialization, but lookups see all of them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
    contexts: Vec<Context>,
    /// Comments and unknown elements the parser skipped. Writing the catalog
    /// back loses them.
    #[serde(skip)]
    pub dropped_content: usize,
    #[serde(skip)]
    by_name: HashMap<String, Vec<usize>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            version: DEFAULT_TS_VERSION.to_string(),
            language: None,
            source_language: None,
            contexts: Vec::new(),
            dropped_content: 0,
            by_name: HashMap::new(),
        }
    }
}

impl Catalog {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
            ..Default::default()
        }
    }

    pub fn contexts(&self) -> &[Context] {
        &self.contexts
    }

    pub fn push_context(&mut self, context: Context) {
        self.by_name
            .entry(context.name.clone())
            .or_default()
            .push(self.contexts.len());
        self.contexts.push(context);
    }

    /// Append a message to the last context with this name, creating it if needed.
    pub fn insert(&mut self, context: &str, message: Message) {
        let last = self.by_name.get(context).and_then(|idx| idx.last()).copied();
        match last {
            Some(idx) => self.contexts[idx].push(message),
            None => {
                let mut ctx = Context::new(context);
                ctx.push(message);
                self.push_context(ctx);
            }
        }
    }

    /// Every `<context>` block carrying this name.
    pub fn contexts_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Context> {
        self.by_name
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&idx| &self.contexts[idx])
    }

    /// All messages matching the key exactly, in file order.
    pub fn candidates<'a, 'k>(
        &'a self,
        context: &'k str,
        source: &'k str,
        disambiguation: &'k str,
    ) -> impl Iterator<Item = &'a Message> {
        self.contexts_named(context)
            .flat_map(move |ctx| ctx.candidates(source, disambiguation))
    }

    /// First servable message for the key, without disambiguation retry.
    pub fn find(
        &self,
        context: &str,
        source: &str,
        disambiguation: &str,
        include_unfinished: bool,
    ) -> Option<&Message> {
        self.candidates(context, source, disambiguation)
            .find(|m| m.is_servable(include_unfinished))
    }

    /// Iterate every message with the name of its context.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Message)> {
        self.contexts
            .iter()
            .flat_map(|ctx| ctx.messages.iter().map(move |m| (ctx.name(), m)))
    }

    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }

    /// Primary language subtag of the catalog (e.g. "ar" for "ar_EG").
    pub fn primary_language(&self) -> Option<&str> {
        self.language
            .as_deref()
            .and_then(|lang| lang.split(['_', '-']).next())
            .filter(|lang| !lang.is_empty())
    }
}

impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
            && self.language == other.language
            && self.source_language == other.source_language
            && self.contexts == other.contexts
    }
}

impl Eq for Catalog {}
