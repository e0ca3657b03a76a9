//! Content security rules for untrusted text.
//!
//! Every rule rejects; nothing here rewrites user text. A string is scanned in its original
//! form and after one and two rounds of percent-decoding, each lowercased and with whitespace
//! removed, so encoded or spaced-out markers are caught too.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::context::Document;
use crate::foundation::error::{CutlineError, CutlineResult};
use crate::resources::model::Resource;
use crate::timeline::element::{ElementKind, TimelineElement};
use crate::validate::pipeline::DocumentValidator;

/// Longest accepted free text, in characters.
pub const MAX_TEXT_LEN: usize = 100_000;
/// Longest accepted font name, in characters.
pub const MAX_FONT_NAME_LEN: usize = 200;
/// Longest accepted media path, in bytes.
pub const MAX_PATH_LEN: usize = 4096;

const SCRIPT_MARKERS: &[&str] = &[
    "javascript:",
    "vbscript:",
    "livescript:",
    "data:text/html",
    "<script",
    "</script",
    "<iframe",
    "<object",
    "<embed",
    "<svg",
    "<link",
    "<meta",
];

// Plain words in prose; only flagged when not glued to a preceding word.
const CALL_MARKERS: &[&str] = &["eval(", "expression("];

const LOOKUP_MARKERS: &[&str] = &[
    "${jndi:",
    "${lower:",
    "${upper:",
    "${env:",
    "${sys:",
    "${::-",
    "jndi:ldap:",
    "jndi:ldaps:",
    "jndi:rmi:",
    "jndi:dns:",
    "jndi:iiop:",
    "jndi:corba:",
    "jndi:nds:",
    "jndi:http:",
];

const SYSTEM_DIRS: &[&str] = &[
    "/etc/",
    "/proc/",
    "/sys/",
    "/dev/",
    "/bin/",
    "/sbin/",
    "/usr/bin",
    "/boot/",
    "/root/",
    "/var/",
    "c:\\windows",
    "/windows/system32",
    "file://",
];

const ENTITY_MARKUP_CHARS: &[char] = &[
    '<', '>', '"', '\'', '`', '&', ':', '(', ')', '/', '\\', '=', '\t', '\n', '\r',
];

static EVENT_HANDLER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:^|[^a-z0-9_])on(?:load|unload|error|abort|click|dblclick|mouse[a-z]*|key[a-z]*|focus[a-z]*|blur|change|input|submit|reset|select|scroll|resize|pointer[a-z]*|touch[a-z]*|drag[a-z]*|drop|animation[a-z]*|transition[a-z]*|toggle|begin|end|wheel|contextmenu|copy|paste|cut)\s*=",
    )
    .expect("BUG: invalid EVENT_HANDLER_RE regex literal")
});

static NUMERIC_ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&#(x[0-9a-f]+|[0-9]+);?").expect("BUG: invalid NUMERIC_ENTITY_RE regex literal")
});

static NAMED_ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"&(?:lt|gt|quot|apos|colon|lpar|rpar|sol|bsol|tab|newline|grave|equals|lsqb|rsqb|lcub|rcub)(?:;|\b)",
    )
    .expect("BUG: invalid NAMED_ENTITY_RE regex literal")
});

static DRIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^a-z0-9])[a-z]:[\\/]").expect("BUG: invalid DRIVE_RE regex literal")
});

/// Validate free user text (titles, captions) against every content rule.
pub fn validate_text_content(text: &str) -> CutlineResult<()> {
    validate_text_field("text", text)
}

/// [`validate_text_content`] with an explicit field name for error attribution.
pub fn validate_text_field(field: &str, text: &str) -> CutlineResult<()> {
    validate_text_with_limit(field, text, MAX_TEXT_LEN)
}

pub(crate) fn validate_text_with_limit(
    field: &str,
    text: &str,
    max_len: usize,
) -> CutlineResult<()> {
    let len = text.chars().count();
    if len > max_len {
        return Err(CutlineError::security(
            field,
            format!("text is {len} characters, limit is {max_len}"),
        ));
    }

    for form in decoded_forms(text) {
        check_code_points(field, &form)?;
        let lower = form.to_lowercase();
        let stripped: String = lower.chars().filter(|c| !c.is_whitespace()).collect();
        for variant in [lower.as_str(), stripped.as_str()] {
            check_markers(field, variant)?;
        }
    }
    Ok(())
}

/// Validate a font family name: alphanumerics, space, `-`, `_`, `.`, `(`, `)` only.
pub fn validate_font_name(name: &str) -> CutlineResult<()> {
    if name.trim().is_empty() {
        return Err(CutlineError::security("font", "font name must be non-empty"));
    }
    let len = name.chars().count();
    if len > MAX_FONT_NAME_LEN {
        return Err(CutlineError::security(
            "font",
            format!("font name is {len} characters, limit is {MAX_FONT_NAME_LEN}"),
        ));
    }
    if let Some(bad) = name
        .chars()
        .find(|&c| !(c.is_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.' | '(' | ')')))
    {
        return Err(CutlineError::security(
            "font",
            format!("character {bad:?} is not allowed in a font name"),
        ));
    }
    Ok(())
}

/// Validate a media source path (after any `file://` prefix was removed).
///
/// Absolute paths are fine; parent segments, control characters and system directories are not.
pub fn validate_media_path(path: &str) -> CutlineResult<()> {
    const FIELD: &str = "asset.path";
    if path.len() > MAX_PATH_LEN {
        return Err(CutlineError::security(
            FIELD,
            format!("path is {} bytes, limit is {MAX_PATH_LEN}", path.len()),
        ));
    }
    for form in decoded_forms(path) {
        check_code_points(FIELD, &form)?;
        if form.split(['/', '\\']).any(|seg| seg == "..") {
            return Err(CutlineError::security(FIELD, "parent directory segments are not allowed"));
        }
        let lower = form.to_lowercase();
        if let Some(dir) = ["/etc/", "/proc/", "/sys/", "/dev/"]
            .iter()
            .find(|d| lower.starts_with(**d))
        {
            return Err(CutlineError::security(
                FIELD,
                format!("media under {dir} is not allowed"),
            ));
        }
    }
    Ok(())
}

/// Names carried by a resource are untrusted text too, capped at `max_len` characters.
pub(crate) fn check_resource_text(res: &Resource, max_len: usize) -> CutlineResult<()> {
    match res {
        Resource::Asset(a) => validate_text_with_limit("asset.name", a.name(), max_len),
        Resource::Format(f) => match f.name() {
            Some(name) => validate_text_with_limit("format.name", name, max_len),
            None => Ok(()),
        },
        Resource::Effect(e) => validate_text_with_limit("effect.name", e.name(), max_len),
    }
}

/// Original, decoded once, decoded twice.
fn decoded_forms(text: &str) -> [String; 3] {
    let once = percent_decode(text);
    let twice = percent_decode(&once);
    [text.to_owned(), once, twice]
}

fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && i + 2 < bytes.len()
            && let (Some(h), Some(l)) = (hex_val(bytes[i + 1]), hex_val(bytes[i + 2]))
        {
            out.push((h << 4) | l);
            i += 3;
            continue;
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

fn is_forbidden_control(c: char) -> bool {
    let cp = u32::from(c);
    (cp < 0x20 && !matches!(c, '\t' | '\n' | '\r')) || (0x7f..=0x9f).contains(&cp)
}

/// Joiners (U+200C, U+200D) are allowed: emoji sequences and several scripts need them.
fn is_spoofing_code_point(c: char) -> bool {
    matches!(
        u32::from(c),
        0xFEFF
            | 0x061C
            | 0x200B
            | 0x200E
            | 0x200F
            | 0x202A..=0x202E
            | 0x2060..=0x2064
            | 0x2066..=0x2069
    )
}

fn check_code_points(field: &str, text: &str) -> CutlineResult<()> {
    if let Some(c) = text.chars().find(|&c| is_forbidden_control(c)) {
        return Err(CutlineError::security(
            field,
            format!("control character U+{:04X} is not allowed", u32::from(c)),
        ));
    }
    if let Some(c) = text.chars().find(|&c| is_spoofing_code_point(c)) {
        return Err(CutlineError::security(
            field,
            format!("invisible or bidirectional control U+{:04X} is not allowed", u32::from(c)),
        ));
    }
    Ok(())
}

fn check_markers(field: &str, v: &str) -> CutlineResult<()> {
    let reject = |what: &str| Err(CutlineError::security(field, what.to_owned()));

    if let Some(m) = SCRIPT_MARKERS.iter().find(|m| v.contains(**m)) {
        return reject(&format!("script injection marker '{m}'"));
    }
    if let Some(m) = CALL_MARKERS.iter().find(|m| contains_unglued(v, m)) {
        return reject(&format!("script injection marker '{m}'"));
    }
    if EVENT_HANDLER_RE.is_match(v) {
        return reject("inline event handler attribute");
    }
    if let Some(m) = LOOKUP_MARKERS.iter().find(|m| v.contains(**m)) {
        return reject(&format!("lookup injection marker '{m}'"));
    }
    if NAMED_ENTITY_RE.is_match(v) {
        return reject("dangerous named character entity");
    }
    for cap in NUMERIC_ENTITY_RE.captures_iter(v) {
        if numeric_entity_is_dangerous(&cap[1]) {
            return reject(&format!("dangerous numeric character entity '{}'", &cap[0]));
        }
    }
    check_traversal(field, v)
}

fn check_traversal(field: &str, v: &str) -> CutlineResult<()> {
    // A leading ".../" is the namespaced template convention, not a traversal.
    let body = v.strip_prefix(".../").unwrap_or(v);
    if body.contains("../") || body.contains("..\\") {
        return Err(CutlineError::security(field, "path traversal sequence"));
    }
    if let Some(dir) = SYSTEM_DIRS.iter().find(|d| v.contains(**d)) {
        return Err(CutlineError::security(
            field,
            format!("system path reference '{dir}'"),
        ));
    }
    if v.contains("\\\\") {
        return Err(CutlineError::security(field, "UNC path reference"));
    }
    if DRIVE_RE.is_match(v) {
        return Err(CutlineError::security(field, "drive-letter path reference"));
    }
    Ok(())
}

/// `true` when `marker` occurs at the start of `v` or after a non-alphanumeric character.
fn contains_unglued(v: &str, marker: &str) -> bool {
    v.match_indices(marker).any(|(i, _)| {
        v[..i]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric())
    })
}

fn numeric_entity_is_dangerous(body: &str) -> bool {
    let parsed = match body.strip_prefix('x') {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => body.parse::<u32>(),
    };
    let Some(c) = parsed.ok().and_then(char::from_u32) else {
        return true;
    };
    is_forbidden_control(c)
        || is_spoofing_code_point(c)
        || ENTITY_MARKUP_CHARS.contains(&c)
}

/// Every piece of free text in a document: names, title text, fonts and attribute values.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContentSecurityValidator;

impl DocumentValidator for ContentSecurityValidator {
    fn name(&self) -> &'static str {
        "content-security"
    }

    fn validate(&self, doc: &Document) -> CutlineResult<()> {
        let max = doc.config().max_text_len;
        validate_text_with_limit("document.name", &doc.config().name, max)?;
        for res in doc.registry().resources() {
            check_resource_text(res, max)?;
        }
        for seq in doc.sequences() {
            validate_text_with_limit("sequence.name", seq.name(), max)?;
            for el in seq.timeline().elements() {
                check_element_text(el, max)?;
            }
        }
        Ok(())
    }
}

fn check_element_text(el: &TimelineElement, max: usize) -> CutlineResult<()> {
    if let Some(name) = el.name() {
        validate_text_with_limit(&format!("{}.name", el.id()), name, max)?;
    }
    if let ElementKind::Title { text, .. } = el.kind() {
        text.validate_security(&format!("{}.title", el.id()), max)?;
    }
    for (key, value) in el.attributes() {
        validate_text_with_limit(&format!("{}.attributes.{key}", el.id()), value, max)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/validate/security.rs"]
mod tests;
