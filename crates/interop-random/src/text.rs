//! The tagged string form shared by generators and distributions.
//!
//! Layout: an optional radix marker, the tag, then the fields between backticks
//! separated by `~`, e.g. `16rXSSR`1f~-3~a~7``.

use interop_core::base::{split_marker, Base};
use interop_core::errors::{ErrorInfo, InteropError};

pub(crate) struct Tagged<'a> {
    pub marker: Option<Base>,
    pub tag: &'a str,
    pub fields: Vec<&'a str>,
}

pub(crate) fn write_tagged(marker: Option<Base>, tag: &str, fields: &[String]) -> String {
    let prefix = marker
        .map(|base| format!("{}r", base.radix()))
        .unwrap_or_default();
    format!("{prefix}{tag}`{}`", fields.join("~"))
}

pub(crate) fn parse_tagged(text: &str) -> Result<Tagged<'_>, InteropError> {
    let (marker, rest) = split_marker(text.trim())?;
    let open = rest.find('`').ok_or_else(|| malformed(text, "missing opening backtick"))?;
    let body = &rest[open + 1..];
    let close = body.find('`').ok_or_else(|| malformed(text, "missing closing backtick"))?;
    let tag = &rest[..open];
    if tag.is_empty() {
        return Err(malformed(text, "missing tag"));
    }
    let body = &body[..close];
    let fields = if body.is_empty() {
        Vec::new()
    } else {
        body.split('~').collect()
    };
    Ok(Tagged {
        marker,
        tag,
        fields,
    })
}

pub(crate) fn malformed(text: &str, reason: &str) -> InteropError {
    InteropError::Codec(ErrorInfo::new("malformed-tagged-string", reason).with_context("text", text))
}

pub(crate) fn unknown_tag(tag: &str, kind: &str) -> InteropError {
    InteropError::Codec(
        ErrorInfo::new("unknown-tag", format!("no {kind} is registered under this tag"))
            .with_context("tag", tag),
    )
}

pub(crate) fn tag_mismatch(kind: &str, expected: &str, found: &str) -> InteropError {
    InteropError::Codec(
        ErrorInfo::new("tag-mismatch", format!("serialized {kind} has a different tag"))
            .with_context("expected", expected)
            .with_context("found", found),
    )
}
