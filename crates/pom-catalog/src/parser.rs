//! pom.xml document loader.
//!
//! Uses the quick-xml pull reader to tokenize the document and maps the
//! elements this crate cares about onto a [`PomDocument`]. Anything nested
//! under other sections (`build`, `dependencyManagement`, `profiles`, ...)
//! is skipped wholesale so its coordinates never leak into the project's.

use crate::error::{PomError, Result};
use crate::types::{MavenScope, PomDependency, PomDocument, RawParent};
use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::borrow::Cow;
use std::io::Read;

/// Context stack element for pull parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseContext {
    Project,
    Parent,
    Dependencies,
    Dependency,
    Field(Field),
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    GroupId,
    ArtifactId,
    Version,
    Name,
    Description,
    Url,
    RelativePath,
    Scope,
    Type,
    Optional,
}

impl ParseContext {
    fn child(self, tag: &str) -> Self {
        match (self, tag) {
            (Self::Project, "parent") => Self::Parent,
            (Self::Project, "dependencies") => Self::Dependencies,
            (Self::Dependencies, "dependency") => Self::Dependency,
            (Self::Project | Self::Parent | Self::Dependency, "groupId") => {
                Self::Field(Field::GroupId)
            }
            (Self::Project | Self::Parent | Self::Dependency, "artifactId") => {
                Self::Field(Field::ArtifactId)
            }
            (Self::Project | Self::Parent | Self::Dependency, "version") => {
                Self::Field(Field::Version)
            }
            (Self::Project, "name") => Self::Field(Field::Name),
            (Self::Project, "description") => Self::Field(Field::Description),
            (Self::Project, "url") => Self::Field(Field::Url),
            (Self::Parent, "relativePath") => Self::Field(Field::RelativePath),
            (Self::Dependency, "scope") => Self::Field(Field::Scope),
            (Self::Dependency, "type") => Self::Field(Field::Type),
            (Self::Dependency, "optional") => Self::Field(Field::Optional),
            _ => Self::Ignored,
        }
    }
}

/// Accumulates the document while the reader walks it.
#[derive(Default)]
struct PomBuilder {
    doc: PomDocument,
    parent: Option<RawParent>,
    dependency: Option<PomDependency>,
    text: String,
}

impl PomBuilder {
    fn enter(&mut self, ctx: ParseContext) {
        match ctx {
            ParseContext::Parent => self.parent = Some(RawParent::default()),
            ParseContext::Dependency => self.dependency = Some(PomDependency::default()),
            ParseContext::Field(_) => self.text.clear(),
            _ => {}
        }
    }

    fn leave(&mut self, ctx: ParseContext, owner: Option<ParseContext>) {
        match ctx {
            ParseContext::Parent => self.doc.parent = self.parent.take(),
            ParseContext::Dependency => {
                if let Some(dep) = self.dependency.take() {
                    self.doc.dependencies.push(dep);
                }
            }
            ParseContext::Field(field) => {
                let raw = std::mem::take(&mut self.text);
                if let Some(owner) = owner {
                    self.store(owner, field, raw);
                }
            }
            _ => {}
        }
    }

    fn store(&mut self, owner: ParseContext, field: Field, raw: String) {
        // Descriptions keep their layout for the normalizer.
        let value = if field == Field::Description {
            raw
        } else {
            raw.trim().to_string()
        };

        match owner {
            ParseContext::Project => {
                let doc = &mut self.doc;
                match field {
                    Field::GroupId => doc.group_id = Some(value),
                    Field::ArtifactId => doc.artifact_id = Some(value),
                    Field::Version => doc.version = Some(value),
                    Field::Name => doc.name = Some(value),
                    Field::Description => doc.description = Some(value),
                    Field::Url => doc.url = Some(value),
                    _ => {}
                }
            }
            ParseContext::Parent => {
                if let Some(parent) = self.parent.as_mut() {
                    match field {
                        Field::GroupId => parent.group_id = Some(value),
                        Field::ArtifactId => parent.artifact_id = Some(value),
                        Field::Version => parent.version = Some(value),
                        Field::RelativePath => parent.relative_path = Some(value),
                        _ => {}
                    }
                }
            }
            ParseContext::Dependency => {
                if let Some(dep) = self.dependency.as_mut() {
                    match field {
                        Field::GroupId => dep.group_id = Some(value),
                        Field::ArtifactId => dep.artifact_id = Some(value),
                        Field::Version => dep.version = Some(value),
                        Field::Scope => {
                            dep.scope = value.parse::<MavenScope>().unwrap_or_default();
                        }
                        Field::Type => dep.packaging = Some(value),
                        Field::Optional => dep.optional = value.eq_ignore_ascii_case("true"),
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }

    fn collecting(stack: &[ParseContext]) -> bool {
        matches!(stack.last(), Some(ParseContext::Field(_)))
    }
}

/// Reads a POM document from `source`.
///
/// `path` only labels errors. The source is borrowed, never closed. The
/// bytes are decoded from the byte order mark or the declared encoding,
/// UTF-8 otherwise.
///
/// # Errors
///
/// - `PomError::SourceUnavailable` - reading `source` failed
/// - `PomError::MalformedDocument` - bytes invalid under the document's
///   encoding, an unknown encoding label, not well-formed XML, or the root
///   element is not `<project>`
pub fn parse_project(path: &str, mut source: impl Read) -> Result<PomDocument> {
    let mut bytes = Vec::new();
    source
        .read_to_end(&mut bytes)
        .map_err(|source| PomError::SourceUnavailable {
            path: path.to_string(),
            source,
        })?;

    let content = decode_document(path, &bytes)?;
    parse_pom_str(path, &content)
}

fn decode_document(path: &str, bytes: &[u8]) -> Result<String> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None => (declared_encoding(path, bytes)?.unwrap_or(UTF_8), bytes),
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .map(Cow::into_owned)
        .ok_or_else(|| {
            PomError::malformed(path, format!("document is not valid {}", encoding.name()))
        })
}

/// Encoding named by the XML declaration, if there is one.
fn declared_encoding(path: &str, bytes: &[u8]) -> Result<Option<&'static Encoding>> {
    let mut reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();

    // A missing or broken declaration is left to the main parse to report
    let Ok(Event::Decl(decl)) = reader.read_event_into(&mut buf) else {
        return Ok(None);
    };
    let Some(label) = decl.encoding() else {
        return Ok(None);
    };
    let label = label.map_err(|e| PomError::malformed(path, e.to_string()))?;

    let encoding = Encoding::for_label(&label).ok_or_else(|| {
        PomError::malformed(
            path,
            format!("unsupported encoding '{}'", String::from_utf8_lossy(&label)),
        )
    })?;

    // The declaration was readable as ASCII, so the bytes cannot be UTF-16
    if encoding == UTF_16LE || encoding == UTF_16BE {
        return Ok(Some(UTF_8));
    }
    Ok(Some(encoding))
}

/// Parses an in-memory POM document.
pub fn parse_pom_str(path: &str, content: &str) -> Result<PomDocument> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut reader = Reader::from_str(content);

    let mut builder = PomBuilder::default();
    let mut stack: Vec<ParseContext> = Vec::new();
    let mut seen_root = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| PomError::malformed(path, e.to_string()))?;

        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let tag = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                let ctx = match stack.last() {
                    Some(parent) => parent.child(&tag),
                    None if seen_root => {
                        return Err(PomError::malformed(path, "multiple root elements"));
                    }
                    None if tag == "project" => {
                        seen_root = true;
                        ParseContext::Project
                    }
                    None => {
                        return Err(PomError::malformed(
                            path,
                            format!("expected <project> root element, found <{tag}>"),
                        ));
                    }
                };

                builder.enter(ctx);
                if matches!(event, Event::Empty(_)) {
                    builder.leave(ctx, stack.last().copied());
                } else {
                    stack.push(ctx);
                }
            }
            Event::Text(ref e) if PomBuilder::collecting(&stack) => {
                let text = e
                    .decode()
                    .map_err(|err| PomError::malformed(path, err.to_string()))?;
                builder.text.push_str(&text);
            }
            Event::CData(ref e) if PomBuilder::collecting(&stack) => {
                builder.text.push_str(&String::from_utf8_lossy(e.as_ref()));
            }
            Event::GeneralRef(ref e) if PomBuilder::collecting(&stack) => {
                let resolved = e
                    .resolve_char_ref()
                    .map_err(|err| PomError::malformed(path, err.to_string()))?;
                if let Some(ch) = resolved {
                    builder.text.push(ch);
                } else {
                    let name = e
                        .decode()
                        .map_err(|err| PomError::malformed(path, err.to_string()))?;
                    let replacement = quick_xml::escape::resolve_predefined_entity(&name)
                        .ok_or_else(|| {
                            PomError::malformed(path, format!("unknown entity '&{name};'"))
                        })?;
                    builder.text.push_str(replacement);
                }
            }
            Event::End(_) => {
                if let Some(ctx) = stack.pop() {
                    builder.leave(ctx, stack.last().copied());
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(PomError::malformed(path, "no <project> root element"));
    }
    if !stack.is_empty() {
        return Err(PomError::malformed(path, "unexpected end of document"));
    }

    tracing::debug!(
        path,
        artifact_id = builder.doc.artifact_id.as_deref().unwrap_or_default(),
        dependencies = builder.doc.dependencies.len(),
        "parsed POM document"
    );

    Ok(builder.doc)
}
