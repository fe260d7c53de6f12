//! The live-trading introduction paragraph and its renderer.
//!
//! The paragraph is stored as a static list of segments: literal HTML text and
//! named KPI placeholders. Rendering walks the list once and writes the literal
//! text byte-for-byte, pulling each placeholder from the `KpiSnapshot` passed in.
//!
//! Values are inserted verbatim. The renderer never escapes them and never looks
//! inside them, so a value containing markup or brace syntax is emitted as-is;
//! escaping untrusted values is the caller's job.
//!
//! When a KPI is absent (or empty) the outcome depends on `MissingKeyPolicy`:
//! - `Empty` (default) — the placeholder renders as an empty string and a warning
//!   is logged.
//! - `Error` — the first missing key in template order fails the render with
//!   `FragmentError::MissingKey`.
use clap::ValueEnum;
use log::{debug, warn};
use strum_macros::{Display, EnumString};

use crate::error::FragmentError;
use crate::kpi::{KpiKey, KpiSnapshot};

/// One piece of the fragment template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Literal HTML copied to the output unchanged.
    Text(&'static str),
    /// Placeholder resolved against the snapshot.
    Kpi(KpiKey),
}

/// Live-trading introduction paragraph.
pub const LIVE_TRADING_TEMPLATE: &[Segment] = &[
    Segment::Text(
        "<p>A live algorithm is an algorithm that trades in real-time with real market data. \
         QuantConnect enables you to run your algorithms in live mode with real-time market data. \
         Deploy your algorithms using QuantConnect because our infrastructure is battle-tested. \
         We have successfully hosted more than ",
    ),
    Segment::Kpi(KpiKey::LiveAlgorithmsCount),
    Segment::Text(" live algorithms and have had more than "),
    Segment::Kpi(KpiKey::VolumeTraded),
    Segment::Text(
        " in volume traded on our servers since 2015. \
         The algorithms that our members create are run on co-located servers and the trading \
         infrastructure is maintained at all times by our team of engineers. \
         It's common for members to achieve 6-months of uptime with no interruptions.</p>",
    ),
];

/// What to do when the snapshot lacks a KPI the template needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Display, EnumString)]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MissingKeyPolicy {
    /// Substitute an empty string and log a warning.
    #[default]
    Empty,
    /// Fail the render with `FragmentError::MissingKey`.
    Error,
}

/// Renders a segment template against KPI snapshots.
#[derive(Debug, Clone, Copy)]
pub struct FragmentRenderer {
    template: &'static [Segment],
    policy: MissingKeyPolicy,
}

impl Default for FragmentRenderer {
    fn default() -> Self {
        Self::new(MissingKeyPolicy::default())
    }
}

impl FragmentRenderer {
    /// Renderer for the live-trading paragraph with the given missing-key policy.
    pub fn new(policy: MissingKeyPolicy) -> Self {
        Self::with_template(LIVE_TRADING_TEMPLATE, policy)
    }

    /// Renderer for an arbitrary segment template.
    pub fn with_template(template: &'static [Segment], policy: MissingKeyPolicy) -> Self {
        Self { template, policy }
    }

    /// Active missing-key policy.
    pub fn policy(&self) -> MissingKeyPolicy {
        self.policy
    }

    /// KPI keys consumed by the template, in order of first appearance.
    pub fn required_keys(&self) -> Vec<KpiKey> {
        let mut keys = Vec::new();
        for segment in self.template {
            if let Segment::Kpi(key) = segment {
                if !keys.contains(key) {
                    keys.push(*key);
                }
            }
        }
        keys
    }

    /// Render the template with values from `snapshot`.
    pub fn render(&self, snapshot: &KpiSnapshot) -> Result<String, FragmentError> {
        let capacity = self
            .template
            .iter()
            .map(|segment| match segment {
                Segment::Text(text) => text.len(),
                Segment::Kpi(key) => snapshot.get(*key).map_or(0, str::len),
            })
            .sum();
        let mut html = String::with_capacity(capacity);

        for segment in self.template {
            match segment {
                Segment::Text(text) => html.push_str(text),
                Segment::Kpi(key) => match (snapshot.get(*key), self.policy) {
                    (Some(value), _) => html.push_str(value),
                    (None, MissingKeyPolicy::Error) => {
                        return Err(FragmentError::MissingKey(*key));
                    }
                    (None, MissingKeyPolicy::Empty) => {
                        warn!("KPI {} is missing, rendering an empty value", key);
                    }
                },
            }
        }

        debug!("Rendered fragment: {} bytes", html.len());
        Ok(html)
    }
}

/// Render the live-trading paragraph with the default policy (missing KPIs render empty).
pub fn render_live_trading(snapshot: &KpiSnapshot) -> Result<String, FragmentError> {
    FragmentRenderer::default().render(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const HEAD: &str = "<p>A live algorithm is an algorithm that trades in real-time with real market data. QuantConnect enables you to run your algorithms in live mode with real-time market data. Deploy your algorithms using QuantConnect because our infrastructure is battle-tested. We have successfully hosted more than ";
    const MIDDLE: &str = " live algorithms and have had more than ";
    const TAIL: &str = " in volume traded on our servers since 2015. The algorithms that our members create are run on co-located servers and the trading infrastructure is maintained at all times by our team of engineers. It's common for members to achieve 6-months of uptime with no interruptions.</p>";

    fn snapshot(count: &str, volume: &str) -> KpiSnapshot {
        KpiSnapshot::new()
            .with(KpiKey::LiveAlgorithmsCount, count)
            .with(KpiKey::VolumeTraded, volume)
    }

    #[test]
    fn literal_text_is_untouched() {
        let html = render_live_trading(&snapshot("A", "B")).unwrap();
        assert_eq!(html, format!("{HEAD}A{MIDDLE}B{TAIL}"));
    }

    #[test]
    fn required_keys_follow_template_order() {
        assert_eq!(
            FragmentRenderer::default().required_keys(),
            vec![KpiKey::LiveAlgorithmsCount, KpiKey::VolumeTraded]
        );
    }

    #[test]
    fn repeated_placeholders_are_listed_once() {
        const TEMPLATE: &[Segment] = &[
            Segment::Kpi(KpiKey::VolumeTraded),
            Segment::Text(" / "),
            Segment::Kpi(KpiKey::VolumeTraded),
        ];
        let renderer = FragmentRenderer::with_template(TEMPLATE, MissingKeyPolicy::Error);

        assert_eq!(renderer.required_keys(), vec![KpiKey::VolumeTraded]);
        let html = renderer
            .render(&KpiSnapshot::new().with(KpiKey::VolumeTraded, "$1"))
            .unwrap();
        assert_eq!(html, "$1 / $1");
    }

    #[test]
    fn error_policy_reports_first_missing_key() {
        let err = FragmentRenderer::new(MissingKeyPolicy::Error)
            .render(&KpiSnapshot::new())
            .unwrap_err();
        assert!(matches!(err, FragmentError::MissingKey(KpiKey::LiveAlgorithmsCount)));
    }

    #[test]
    fn empty_policy_blanks_missing_values() {
        let renderer = FragmentRenderer::new(MissingKeyPolicy::Empty);
        let html = renderer
            .render(&KpiSnapshot::new().with(KpiKey::LiveAlgorithmsCount, "50,000"))
            .unwrap();
        assert_eq!(html, format!("{HEAD}50,000{MIDDLE}{TAIL}"));
    }

    #[test]
    fn policy_parses_from_text() {
        assert_eq!(
            <MissingKeyPolicy as FromStr>::from_str("EMPTY").unwrap(),
            MissingKeyPolicy::Empty
        );
        assert_eq!(
            <MissingKeyPolicy as FromStr>::from_str("error").unwrap(),
            MissingKeyPolicy::Error
        );
        assert_eq!(MissingKeyPolicy::Error.to_string(), "error");
    }

    #[test]
    fn default_renderer_blanks_missing_values() {
        assert_eq!(FragmentRenderer::default().policy(), MissingKeyPolicy::Empty);
        let html = render_live_trading(&KpiSnapshot::new().with(KpiKey::LiveAlgorithmsCount, "50,000"))
            .unwrap();
        assert_eq!(html, format!("{HEAD}50,000{MIDDLE}{TAIL}"));
    }

    #[test]
    fn whitespace_values_are_substituted_as_given() {
        let renderer = FragmentRenderer::new(MissingKeyPolicy::Error);
        let html = renderer.render(&snapshot(" ", "$100 billion")).unwrap();
        assert_eq!(html, format!("{HEAD} {MIDDLE}$100 billion{TAIL}"));
    }
}
