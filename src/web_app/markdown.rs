// web_app/markdown.rs - Markdown rendering for answer bodies
//
// GitHub-flavoured extensions (tables, strikethrough, task lists, bare URL
// autolinks) on top of pulldown-cmark. Raw HTML in an answer is rendered as
// text and link/image URLs outside http, https and mailto are blanked, so the
// output is safe to inject with `inner_html`.

use pulldown_cmark::{html, CowStr, Event, LinkType, Options, Parser, Tag, TagEnd, TextMergeStream};
use regex::Regex;
use std::sync::LazyLock;

const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

static BARE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(?:https?://|www\.)[^\s<>]*[^\s<>.,:;!?'")\]]"#)
        .expect("Failed to compile autolink regex")
});

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Render an answer's markdown to an HTML fragment.
pub fn render_markdown(source: &str) -> String {
    let mut events = Vec::new();
    let mut link_depth = 0usize;
    let mut in_code_block = false;

    for event in TextMergeStream::new(Parser::new_ext(source, options())) {
        match event {
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                id,
            }) => {
                link_depth += 1;
                events.push(Event::Start(Tag::Link {
                    link_type,
                    dest_url: sanitize_url(dest_url),
                    title,
                    id,
                }));
            }
            Event::Start(Tag::Image {
                link_type,
                dest_url,
                title,
                id,
            }) => {
                events.push(Event::Start(Tag::Image {
                    link_type,
                    dest_url: sanitize_url(dest_url),
                    title,
                    id,
                }));
            }
            Event::End(TagEnd::Link) => {
                link_depth = link_depth.saturating_sub(1);
                events.push(event);
            }
            Event::Start(Tag::CodeBlock(_)) => {
                in_code_block = true;
                events.push(event);
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                events.push(event);
            }
            Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
            Event::Text(text) if link_depth == 0 && !in_code_block => {
                push_autolinked(&mut events, text);
            }
            other => events.push(other),
        }
    }

    let mut output = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut output, events.into_iter());
    output
}

/// Keep relative URLs and the allowed schemes; anything else becomes "".
///
/// Browsers drop tabs, newlines and leading control characters when parsing a
/// scheme, so those are ignored before the check.
pub fn is_safe_url(url: &str) -> bool {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_ascii_control() && !c.is_whitespace())
        .collect();

    let Some(colon) = normalized.find(':') else {
        return true;
    };
    // A ':' after a path, query or fragment delimiter is not a scheme separator
    if normalized[..colon].contains(|c: char| matches!(c, '/' | '?' | '#')) {
        return true;
    }

    let scheme = normalized[..colon].to_ascii_lowercase();
    ALLOWED_SCHEMES.contains(&scheme.as_str())
}

fn sanitize_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) {
        url
    } else {
        tracing::warn!("Dropping link with disallowed scheme");
        CowStr::from("")
    }
}

/// Split a text run around bare URLs, wrapping each URL in a link.
fn push_autolinked<'a>(events: &mut Vec<Event<'a>>, text: CowStr<'a>) {
    if !BARE_URL.is_match(&text) {
        events.push(Event::Text(text));
        return;
    }

    let text: &str = &text;
    let mut cursor = 0;
    for found in BARE_URL.find_iter(text) {
        if found.start() > cursor {
            events.push(Event::Text(CowStr::from(text[cursor..found.start()].to_string())));
        }
        let label = found.as_str().to_string();
        let dest_url = if label.to_ascii_lowercase().starts_with("www.") {
            format!("http://{label}")
        } else {
            label.clone()
        };
        events.push(Event::Start(Tag::Link {
            link_type: LinkType::Inline,
            dest_url: CowStr::from(dest_url),
            title: CowStr::from(""),
            id: CowStr::from(""),
        }));
        events.push(Event::Text(CowStr::from(label)));
        events.push(Event::End(TagEnd::Link));
        cursor = found.end();
    }
    if cursor < text.len() {
        events.push(Event::Text(CowStr::from(text[cursor..].to_string())));
    }
}
