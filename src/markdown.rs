//! Markdown Rendering
//!
//! Renders the backend's About/limitations markdown to HTML with
//! pulldown-cmark. Inline math written as `$...$` is rewritten into the
//! `\( ... \)` delimiters that KaTeX auto-render picks up on the host
//! page, with the TeX body HTML-escaped but otherwise untouched.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser};

/// Parse markdown to an HTML fragment.
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

/// Parse markdown for inline use (strips the outer `<p>` tags).
pub fn parse_markdown_inline(text: &str) -> String {
    let html = parse_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut text_run = String::new();

    // The parser splits text at token boundaries (`<`, `>`, entities),
    // so a `$...$` span can straddle several Text events. Buffer the
    // whole run and split math out of the combined text.
    for event in parser {
        match event {
            Event::Text(text) => text_run.push_str(&text),
            other => {
                flush_text(&mut text_run, &mut events);
                events.push(other);
            }
        }
    }
    flush_text(&mut text_run, &mut events);

    events
}

fn flush_text<'a>(run: &mut String, events: &mut Vec<Event<'a>>) {
    if run.is_empty() {
        return;
    }
    let text = std::mem::take(run);
    if text.contains('$') {
        events.extend(process_math(&text));
    } else {
        events.push(Event::Text(CowStr::from(text)));
    }
}

/// Split a text run on `$...$` pairs, emitting the math segments as
/// KaTeX-delimited spans. An unpaired `$` is left as literal text.
fn process_math(text: &str) -> Vec<Event<'static>> {
    let mut events = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find('$') {
        let (before, after_open) = rest.split_at(open);
        match after_open[1..].find('$') {
            Some(close) => {
                if !before.is_empty() {
                    events.push(Event::Text(CowStr::from(before.to_string())));
                }
                let tex = &after_open[1..1 + close];
                events.push(Event::Html(CowStr::from(format!(
                    r#"<span class="inline-math">\({}\)</span>"#,
                    escape_html(tex)
                ))));
                rest = &after_open[close + 2..];
            }
            None => break,
        }
    }

    if !rest.is_empty() {
        events.push(Event::Text(CowStr::from(rest.to_string())));
    }

    events
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_paragraphs() {
        let html = parse_markdown("# Scope\n\nApplies to enclosure fires.");
        assert!(html.contains("<h1>Scope</h1>"));
        assert!(html.contains("<p>Applies to enclosure fires.</p>"));
    }

    #[test]
    fn inline_math_gets_katex_delimiters() {
        let html = parse_markdown("The plume constant $C_p$ applies.");
        assert!(html.contains(r#"<span class="inline-math">\(C_p\)</span>"#));
        assert!(html.contains("The plume constant"));
    }

    #[test]
    fn math_body_is_html_escaped() {
        let html = parse_markdown("valid for $T < 600$ degrees");
        assert!(html.contains(r"\(T &lt; 600\)"));
    }

    #[test]
    fn math_spans_survive_text_tokenization() {
        // `<` and `>` split the paragraph into several Text events; the
        // math pair must still be found across them.
        let html = parse_markdown("holds for $T > 600$ and $x < 2$ only");
        assert!(html.contains(r"\(T &gt; 600\)"));
        assert!(html.contains(r"\(x &lt; 2\)"));
        assert!(html.contains("holds for"));
    }

    #[test]
    fn unpaired_dollar_stays_literal() {
        let html = parse_markdown("costs $5 per run");
        assert!(html.contains("costs $5 per run"));
    }

    #[test]
    fn inline_variant_strips_paragraph_wrapper() {
        let html = parse_markdown_inline("just text");
        assert_eq!(html, "just text");
    }
}
