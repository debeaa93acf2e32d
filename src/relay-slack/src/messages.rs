//! Message formatting for Slack.

use serde::{Deserialize, Serialize};

/// Convert Markdown to Slack mrkdwn format.
///
/// Slack uses its own markup called "mrkdwn":
/// - Bold: `**text**` → `*text*`
/// - Strikethrough: `~~text~~` → `~text~`
/// - Links: `[text](url)` → `<url|text>`
/// - Italic and code stay the same; nothing inside code is rewritten.
///
/// # Example
///
/// ```rust
/// use relay_slack::markdown_to_mrkdwn;
///
/// let md = "**bold** and _italic_ with a [link](https://example.com)";
/// let mrkdwn = markdown_to_mrkdwn(md);
/// assert_eq!(mrkdwn, "*bold* and _italic_ with a <https://example.com|link>");
/// ```
pub fn markdown_to_mrkdwn(md: &str) -> String {
    let mut processed = String::with_capacity(md.len());
    let mut in_code_block = false;
    let mut i = 0;

    while i < md.len() {
        let remaining = &md[i..];

        if remaining.starts_with("```") {
            in_code_block = !in_code_block;
            processed.push_str("```");
            i += 3;
            continue;
        }

        if !in_code_block {
            if let Some((converted, consumed)) = convert_span(remaining) {
                processed.push_str(&converted);
                i += consumed;
                continue;
            }
        }

        // `i` always sits on a char boundary, so `remaining` is non-empty here
        let Some(c) = remaining.chars().next() else {
            break;
        };
        processed.push(c);
        i += c.len_utf8();
    }

    processed
}

/// Try to rewrite one inline construct at the start of `text`.
///
/// Returns the replacement and the number of bytes it consumed. Emphasis and
/// links never span lines; an opener without a matching closer on the same
/// line is left as plain text.
fn convert_span(text: &str) -> Option<(String, usize)> {
    if let Some(rest) = text.strip_prefix('`') {
        let end = rest.find('`')?;
        return Some((text[..end + 2].to_string(), end + 2));
    }

    if let Some(rest) = text.strip_prefix("**") {
        let inner = delimited(rest, "**")?;
        return Some((format!("*{}*", inner), inner.len() + 4));
    }

    if let Some(rest) = text.strip_prefix("~~") {
        let inner = delimited(rest, "~~")?;
        return Some((format!("~{}~", inner), inner.len() + 4));
    }

    if let Some(rest) = text.strip_prefix('[') {
        let line = current_line(rest);
        let label_end = line.find(']')?;
        let label = &line[..label_end];
        if label.is_empty() || label.contains('[') {
            return None;
        }
        let target = line[label_end + 1..].strip_prefix('(')?;
        let url = &target[..target.find(')')?];
        if url.is_empty() || url.contains(char::is_whitespace) {
            return None;
        }
        // `[` + label + `](` + url + `)`
        return Some((format!("<{}|{}>", url, label), label.len() + url.len() + 4));
    }

    None
}

/// Text up to the closing `marker` on the current line.
///
/// The enclosed text must be non-empty and must not start or end with
/// whitespace, so `2 ** 3` is not treated as an opener.
fn delimited<'a>(rest: &'a str, marker: &str) -> Option<&'a str> {
    let line = current_line(rest);
    let inner = &line[..line.find(marker)?];
    let starts_blank = inner.chars().next().is_none_or(char::is_whitespace);
    let ends_blank = inner.chars().last().is_none_or(char::is_whitespace);
    if starts_blank || ends_blank {
        return None;
    }
    Some(inner)
}

fn current_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or(text)
}

/// Slack message content for `chat.postMessage`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackMessageContent {
    /// Message text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Thread timestamp (for replies).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_ts: Option<String>,
}

impl SlackMessageContent {
    /// Create a new message content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set thread timestamp (for replies).
    pub fn in_thread(mut self, thread_ts: impl Into<String>) -> Self {
        self.thread_ts = Some(thread_ts.into());
        self
    }
}
