//! Atom feed parsing for arXiv query responses
//!
//! Only the parts of the feed a candidate needs are read: per `<entry>` the
//! `<title>`, `<summary>`, `<id>` and every `<author><name>`. Elements from
//! other namespaces (`arxiv:*`, `opensearch:*`) and feed-level metadata are
//! skipped.

use crate::error::{Result, SearchError};
use paperrank_core::CandidatePaper;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

pub const ATOM_NS: &[u8] = b"http://www.w3.org/2005/Atom";

/// Atom elements we track. Anything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Feed,
    Entry,
    Title,
    Summary,
    Id,
    Author,
    Name,
    Other,
}

impl Tag {
    fn from_atom(local: &[u8]) -> Self {
        match local {
            b"feed" => Tag::Feed,
            b"entry" => Tag::Entry,
            b"title" => Tag::Title,
            b"summary" => Tag::Summary,
            b"id" => Tag::Id,
            b"author" => Tag::Author,
            b"name" => Tag::Name,
            _ => Tag::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Summary,
    Id,
    AuthorName,
}

/// Field whose text is being read at this element path, if any.
fn captured_field(path: &[Tag]) -> Option<Field> {
    match path {
        [Tag::Feed, Tag::Entry, Tag::Title] => Some(Field::Title),
        [Tag::Feed, Tag::Entry, Tag::Summary] => Some(Field::Summary),
        [Tag::Feed, Tag::Entry, Tag::Id] => Some(Field::Id),
        [Tag::Feed, Tag::Entry, Tag::Author, Tag::Name] => Some(Field::AuthorName),
        _ => None,
    }
}

#[derive(Debug, Default)]
struct EntryFields {
    title: Option<String>,
    summary: Option<String>,
    id: Option<String>,
    authors: Vec<String>,
}

impl EntryFields {
    /// Record the text of a captured element. An element with no text
    /// content leaves the field unset, and repeated elements keep the first
    /// value.
    fn set(&mut self, field: Field, text: Option<String>) {
        let Some(text) = text else {
            return;
        };
        let text = text.trim().to_string();
        match field {
            Field::Title => {
                self.title.get_or_insert(text);
            }
            Field::Summary => {
                self.summary.get_or_insert(text);
            }
            Field::Id => {
                self.id.get_or_insert(text);
            }
            Field::AuthorName => {
                if !text.is_empty() {
                    self.authors.push(text);
                }
            }
        }
    }

    /// `position` is 1-based, for error messages.
    fn into_paper(self, position: usize) -> Result<CandidatePaper> {
        let summary = self.summary.ok_or_else(|| {
            SearchError::Parse(format!("entry {} has no <summary>", position))
        })?;
        let id = self
            .id
            .ok_or_else(|| SearchError::Parse(format!("entry {} has no <id>", position)))?;

        Ok(CandidatePaper::new(
            self.title.unwrap_or_default(),
            self.authors,
            summary,
            id,
        ))
    }
}

/// Parse an Atom feed into candidates, in document order.
///
/// A feed without entries yields an empty `Vec`.
///
/// # Errors
/// [`SearchError::Parse`] if the document is not well-formed XML, its root is
/// not an Atom `<feed>`, or an entry lacks `<summary>` or `<id>`.
pub fn parse_feed(xml: &str) -> Result<Vec<CandidatePaper>> {
    let mut reader = NsReader::from_str(xml);
    let mut path: Vec<Tag> = Vec::new();
    let mut saw_feed = false;
    let mut entry: Option<EntryFields> = None;
    // Text of the captured element currently open; `None` until some arrives
    let mut text: Option<String> = None;
    let mut papers = Vec::new();

    loop {
        let (ns, event) = match reader.read_resolved_event() {
            Ok(resolved) => resolved,
            Err(e) => {
                return Err(SearchError::Parse(format!(
                    "malformed XML at byte {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
        };
        let in_atom = matches!(ns, ResolveResult::Bound(Namespace(uri)) if uri == ATOM_NS);

        match event {
            Event::Start(e) => {
                let tag = if in_atom {
                    Tag::from_atom(e.local_name().as_ref())
                } else {
                    Tag::Other
                };
                path.push(tag);
                if captured_field(&path).is_some() {
                    text = None;
                }

                match path.as_slice() {
                    [Tag::Feed] => saw_feed = true,
                    [_] => return Err(not_a_feed()),
                    [Tag::Feed, Tag::Entry] => entry = Some(EntryFields::default()),
                    _ => {}
                }
            }
            Event::Empty(e) => {
                let tag = if in_atom {
                    Tag::from_atom(e.local_name().as_ref())
                } else {
                    Tag::Other
                };
                match (path.as_slice(), tag) {
                    ([], Tag::Feed) => saw_feed = true,
                    ([], _) => return Err(not_a_feed()),
                    // A self-closed entry carries none of the required fields
                    ([Tag::Feed], Tag::Entry) => {
                        return Err(SearchError::Parse(format!(
                            "entry {} has no <summary>",
                            papers.len() + 1
                        )));
                    }
                    _ => {}
                }
            }
            Event::Text(e) => {
                if captured_field(&path).is_some() {
                    let unescaped = e.unescape().map_err(|err| {
                        SearchError::Parse(format!("invalid text content: {}", err))
                    })?;
                    if !unescaped.is_empty() {
                        text.get_or_insert_with(String::new).push_str(&unescaped);
                    }
                }
            }
            Event::CData(e) => {
                if captured_field(&path).is_some() {
                    text.get_or_insert_with(String::new)
                        .push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::End(_) => {
                if let (Some(field), Some(fields)) = (captured_field(&path), entry.as_mut()) {
                    fields.set(field, text.take());
                }
                if matches!(path.as_slice(), [Tag::Feed, Tag::Entry]) {
                    if let Some(fields) = entry.take() {
                        papers.push(fields.into_paper(papers.len() + 1)?);
                    }
                }
                path.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !path.is_empty() {
        return Err(SearchError::Parse(
            "unexpected end of document: unclosed elements".to_string(),
        ));
    }
    if !saw_feed {
        return Err(not_a_feed());
    }

    Ok(papers)
}

fn not_a_feed() -> SearchError {
    SearchError::Parse("document root is not an Atom <feed>".to_string())
}
