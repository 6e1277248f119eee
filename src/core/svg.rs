//! Handling of the monkey artwork markup.
//!
//! The SVG comes from an external generator. Whether it is shown and exported
//! as-is or stripped of active content first is decided by [`SvgPolicy`].

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static SVG_ELEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<svg\b.*</svg\s*>").expect("valid svg element regex"));

static SCRIPT_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<script\b[^>]*/>")
        .expect("valid script regex")
});

static START_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)<([A-Za-z][A-Za-z0-9:_.-]*)((?:\s+[^\s"'>/=]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'>]+))?)*)(\s*/?)>"#,
    )
    .expect("valid start tag regex")
});

static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(\s+)([^\s"'>/=]+)(?:(\s*=\s*)("[^"]*"|'[^']*'|[^\s"'>]+))?"#)
        .expect("valid attribute regex")
});

static NUMERIC_ENTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&#(?:[xX]([0-9A-Fa-f]+)|([0-9]+));?").expect("valid entity regex")
});

static ELEMENT_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[A-Za-z][A-Za-z0-9:_-]*").expect("valid element regex"));

/// Trust decision for externally produced markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SvgPolicy {
    /// Use the markup exactly as fetched
    #[default]
    Trust,
    /// Drop scripts, event handlers and javascript: links first
    Sanitize,
}

impl SvgPolicy {
    pub fn apply(self, markup: &str) -> String {
        match self {
            SvgPolicy::Trust => markup.to_string(),
            SvgPolicy::Sanitize => sanitize(markup),
        }
    }
}

impl fmt::Display for SvgPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SvgPolicy::Trust => f.write_str("trust"),
            SvgPolicy::Sanitize => f.write_str("sanitize"),
        }
    }
}

impl FromStr for SvgPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trust" => Ok(SvgPolicy::Trust),
            "sanitize" => Ok(SvgPolicy::Sanitize),
            other => Err(format!(
                "unknown svg policy '{}', expected 'trust' or 'sanitize'",
                other
            )),
        }
    }
}

/// Remove active content from SVG markup
pub fn sanitize(markup: &str) -> String {
    let without_scripts = SCRIPT_BLOCK.replace_all(markup, "");
    START_TAG
        .replace_all(&without_scripts, |caps: &Captures| clean_start_tag(caps))
        .into_owned()
}

/// Rebuild one start tag without `on*` handlers and with script URLs blanked
fn clean_start_tag(caps: &Captures) -> String {
    let mut tag = format!("<{}", &caps[1]);

    for attr in ATTRIBUTE.captures_iter(&caps[2]) {
        let name = &attr[2];
        if name.to_ascii_lowercase().starts_with("on") {
            continue;
        }
        match (attr.get(3), attr.get(4)) {
            (Some(eq), Some(value)) if is_script_url(value.as_str()) => {
                tag.push_str(&attr[1]);
                tag.push_str(name);
                tag.push_str(eq.as_str());
                tag.push_str("\"#\"");
            }
            _ => tag.push_str(&attr[0]),
        }
    }

    tag.push_str(&caps[3]);
    tag.push('>');
    tag
}

/// True when an attribute value would run script once entities are decoded.
/// Also catches SMIL lists such as `values="#a;javascript:..."`.
fn is_script_url(raw: &str) -> bool {
    let unquoted = raw.trim_matches(|c: char| c == '"' || c == '\'');
    let compact: String = decode_entities(unquoted)
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    compact.contains("javascript:") || compact.contains("vbscript:")
}

fn decode_entities(value: &str) -> String {
    NUMERIC_ENTITY
        .replace_all(value, |caps: &Captures| {
            let code = match (caps.get(1), caps.get(2)) {
                (Some(hex), _) => u32::from_str_radix(hex.as_str(), 16).ok(),
                (_, Some(dec)) => dec.as_str().parse::<u32>().ok(),
                _ => None,
            };
            code.and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_default()
        })
        .replace("&colon;", ":")
        .replace("&Tab;", "\t")
        .replace("&NewLine;", "\n")
}

/// Locate the outermost `<svg>` element, skipping any prolog or comments
pub fn find_svg_element(markup: &str) -> Option<&str> {
    SVG_ELEMENT.find(markup).map(|m| m.as_str())
}

/// Short description of an SVG document for the terminal
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SvgSummary {
    pub width: Option<String>,
    pub height: Option<String>,
    pub view_box: Option<String>,
    pub element_count: usize,
    pub bytes: usize,
}

impl SvgSummary {
    pub fn from_markup(markup: &str) -> Option<Self> {
        let element = find_svg_element(markup)?;
        let open_tag_end = element.find('>').unwrap_or(element.len());
        let open_tag = &element[..open_tag_end];

        Some(Self {
            width: attribute(open_tag, "width"),
            height: attribute(open_tag, "height"),
            view_box: attribute(open_tag, "viewBox"),
            element_count: ELEMENT_OPEN.find_iter(element).count(),
            bytes: element.len(),
        })
    }

    /// "400×400", falling back to the viewBox size
    pub fn dimensions(&self) -> Option<String> {
        match (&self.width, &self.height) {
            (Some(w), Some(h)) => Some(format!("{}×{}", w, h)),
            _ => self.view_box.as_ref().and_then(|vb| {
                let parts: Vec<&str> = vb.split_whitespace().collect();
                if parts.len() == 4 {
                    Some(format!("{}×{}", parts[2], parts[3]))
                } else {
                    None
                }
            }),
        }
    }
}

fn attribute(tag: &str, name: &str) -> Option<String> {
    let pattern = format!(r#"\s{}\s*=\s*["']([^"']*)["']"#, regex::escape(name));
    Regex::new(&pattern)
        .ok()?
        .captures(tag)
        .map(|c| c[1].to_string())
}
