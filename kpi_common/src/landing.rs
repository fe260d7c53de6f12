//! Landing-page document that embeds a rendered fragment.
//!
//! Documentation landing pages are stored as JSON with a fixed shape
//! (`type`, `heading`, `subHeading`, `content`, `alsoLinks`). The fragment HTML
//! goes into `content`. Output is pretty-printed with a four-space indent.
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::error::FragmentError;

/// Page type written into every landing document.
pub const LANDING_TYPE: &str = "landing";
/// Heading used when none is given.
pub const DEFAULT_HEADING: &str = "Live Trading";

/// A link shown under "see also" on a landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlsoLink {
    /// Link caption.
    pub title: String,
    /// Target URL.
    pub href: String,
}

/// Landing page description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    /// Always `landing`.
    #[serde(rename = "type")]
    pub page_type: String,
    /// Page heading.
    pub heading: String,
    /// Secondary heading, empty for introductions.
    pub sub_heading: String,
    /// Rendered HTML body.
    pub content: String,
    /// Related links.
    pub also_links: Vec<AlsoLink>,
}

impl LandingPage {
    /// Wrap `content` in a landing document with the given heading.
    pub fn new(heading: &str, content: String) -> Self {
        Self {
            page_type: LANDING_TYPE.to_string(),
            heading: heading.to_string(),
            sub_heading: String::new(),
            content,
            also_links: Vec::new(),
        }
    }

    /// Encode to pretty JSON with a four-space indent.
    pub fn to_json_pretty(&self) -> Result<String, FragmentError> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(String::from_utf8(buf)?)
    }
}
