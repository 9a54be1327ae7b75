//! Field extraction from semi-formatted alert text.
//!
//! A pure, total transform: labeled lines are matched with regular
//! expressions and anything that does not match becomes an absent field.
//! Nothing here can fail on malformed input.

use std::sync::LazyLock;

use regex::Regex;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Title:\s*(.+)").expect("valid regex"));
static ACCOUNT_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Account Name:\s*(.+)").expect("valid regex"));
static MONITORING_GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Monitoring Group:\s*(.+)").expect("valid regex"));
static ASSETS_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Assets Blocklisted:.*").expect("valid regex"));
static ZONE_NAMES_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Zone Names:.*").expect("valid regex"));
/// Platform link markup `<url|label>`; only the label matters here.
static LINK_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<http.*?\|(.*?)>").expect("valid regex"));

/// Content fields pulled out of one alert message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedFields {
    pub title: Option<String>,
    pub account_name: Option<String>,
    pub monitoring_group: Option<String>,
    pub assets_blocklisted: Option<String>,
    pub zone_names: Option<String>,
}

/// Extract the labeled fields from raw (HTML-entity-escaped) message text.
///
/// The text is unescaped first so that `&lt;url|label&gt;` tokens become
/// `<url|label>` and the link-label pattern can see them.
pub fn extract_fields(text: &str) -> ExtractedFields {
    let text = html_unescape(text);

    ExtractedFields {
        title: capture_after_label(&TITLE_RE, &text),
        account_name: capture_after_label(&ACCOUNT_NAME_RE, &text),
        monitoring_group: capture_after_label(&MONITORING_GROUP_RE, &text),
        assets_blocklisted: link_labels_on_line(&ASSETS_LINE_RE, &text),
        zone_names: link_labels_on_line(&ZONE_NAMES_LINE_RE, &text),
    }
}

/// First capture group of `re`, trimmed of surrounding whitespace.
/// `None` when no line carries the label.
fn capture_after_label(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// All link labels on the single line matched by `line_re`, joined with
/// `", "`.
///
/// A missing label line and a label line with no link tokens both yield
/// `None` -- a populated field is never the empty string.
fn link_labels_on_line(line_re: &Regex, text: &str) -> Option<String> {
    let line = line_re.find(text)?.as_str();
    let labels: Vec<&str> = LINK_LABEL_RE
        .captures_iter(line)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();

    if labels.is_empty() {
        None
    } else {
        Some(labels.join(", "))
    }
}

/// Undo the HTML entity escaping the platform applies to message text.
///
/// Slack escapes exactly `&`, `<` and `>`. `&amp;` is replaced last so a
/// double-escaped token like `&amp;lt;` resolves to `&lt;`, not `<`.
fn html_unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
