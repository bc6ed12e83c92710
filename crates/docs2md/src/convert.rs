//! HTML to Markdown conversion
//!
//! Conversion is a fixed, ordered list of [`Rule`]s. Each rule is one
//! regex substitution pass over the output of the previous rule, so the
//! order of the table below is significant:
//!
//! 1. scaffolding (doctype, `html`/`head`/`body`, scripts, styles, embeds)
//! 2. chrome regions (`nav`, `aside`, `header`, `footer`) and layout wrappers
//! 3. headings, paragraphs and blockquotes
//! 4. code blocks and inline code
//! 5. emphasis
//! 6. links
//! 7. lists
//! 8. tables
//! 9. line breaks and horizontal rules
//! 10. form elements
//! 11. character references
//! 12. blank line collapsing
//!
//! Tag names are matched exactly and case-insensitively, so `<b>` never
//! matches `<br>` or `<body>`. Element content is captured non-greedily;
//! nested elements of the same kind are not balanced.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

/// Pipeline stage a rule belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Scaffolding,
    Chrome,
    Blocks,
    Code,
    Emphasis,
    Links,
    Lists,
    Tables,
    Breaks,
    Forms,
    Entities,
    Whitespace,
}

type Callback = Box<dyn Fn(&Captures) -> String + Send + Sync>;

enum Replacement {
    /// Static template, `${n}` refers to capture groups
    Template(&'static str),
    /// Computed replacement
    With(Callback),
}

/// A single substitution: pattern plus replacement
struct Rule {
    stage: Stage,
    pattern: Regex,
    replacement: Replacement,
}

impl Rule {
    fn template(stage: Stage, pattern: &str, template: &'static str) -> Self {
        Self {
            stage,
            pattern: compile(pattern),
            replacement: Replacement::Template(template),
        }
    }

    fn with<F>(stage: Stage, pattern: &str, f: F) -> Self
    where
        F: Fn(&Captures) -> String + Send + Sync + 'static,
    {
        Self {
            stage,
            pattern: compile(pattern),
            replacement: Replacement::With(Box::new(f)),
        }
    }

    fn apply(&self, input: &str) -> String {
        match &self.replacement {
            Replacement::Template(template) => {
                self.pattern.replace_all(input, *template).into_owned()
            }
            Replacement::With(f) => self
                .pattern
                .replace_all(input, |caps: &Captures| f(caps))
                .into_owned(),
        }
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid conversion pattern {pattern}: {e}"))
}

/// Opening tag with an exact tag name, attributes optional
fn open(tag: &str) -> String {
    format!(r"(?i)<{tag}(?:[\s/][^>]*)?>")
}

/// Opening or closing tag
fn either(tag: &str) -> String {
    format!(r"(?i)</?{tag}(?:[\s/][^>]*)?>")
}

/// Whole element, content captured as group 1
fn element(tag: &str) -> String {
    format!(r"(?i)<{tag}(?:[\s/][^>]*)?>(?s:(.*?))</{tag}\s*>")
}

static RULES: Lazy<Vec<Rule>> = Lazy::new(build_rules);

static LIST_ITEM: Lazy<Regex> = Lazy::new(|| compile(&element("li")));
static TABLE_ROW: Lazy<Regex> = Lazy::new(|| compile(&element("tr")));
static TABLE_CELL: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)<(th|td)(?:[\s/][^>]*)?>(?s:(.*?))</(?:th|td)\s*>"));
static TABLE_CAPTION: Lazy<Regex> = Lazy::new(|| compile(&element("caption")));
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| compile(&open("br")));

const CODE_LANGUAGE: &str = r#"class\s*=\s*["'][^"']*?language-([\w+#.-]+)[^"']*["']"#;

fn build_rules() -> Vec<Rule> {
    let mut rules = Vec::new();

    // 1. Scaffolding
    rules.push(Rule::template(Stage::Scaffolding, r"(?s)<!--.*?-->", ""));
    rules.push(Rule::template(Stage::Scaffolding, r"(?i)<!DOCTYPE[^>]*>", ""));
    rules.push(Rule::template(Stage::Scaffolding, &either("html"), ""));
    rules.push(Rule::template(Stage::Scaffolding, &element("head"), ""));
    rules.push(Rule::template(Stage::Scaffolding, &either("body"), ""));
    for tag in ["script", "style", "noscript", "svg", "video", "iframe"] {
        rules.push(Rule::template(Stage::Scaffolding, &element(tag), ""));
    }
    for tag in ["meta", "link"] {
        rules.push(Rule::template(Stage::Scaffolding, &open(tag), ""));
    }

    // 2. Chrome regions and layout wrappers
    for tag in ["nav", "aside", "header", "footer"] {
        rules.push(Rule::template(Stage::Chrome, &element(tag), ""));
    }
    rules.push(Rule::template(
        Stage::Chrome,
        &open("(?:main|section|article|div)"),
        "",
    ));
    rules.push(Rule::template(
        Stage::Chrome,
        r"(?i)</(?:main|section|article|div)\s*>",
        "\n",
    ));
    rules.push(Rule::template(Stage::Chrome, &either("span"), ""));

    // 3. Block structure
    for level in 1..=6usize {
        rules.push(Rule::with(
            Stage::Blocks,
            &element(&format!("h{level}")),
            move |caps| format!("\n{} {}\n\n", "#".repeat(level), squash(&caps[1])),
        ));
    }
    rules.push(Rule::with(Stage::Blocks, &element("p"), |caps| {
        format!("\n{}\n\n", caps[1].trim())
    }));
    rules.push(Rule::with(Stage::Blocks, &element("blockquote"), |caps| {
        // Lists run after blocks, so nested ones are converted before quoting
        format!("\n{}\n\n", quote(&apply(&caps[1], Some(Stage::Lists))))
    }));

    // 4. Code
    rules.push(Rule::with(
        Stage::Code,
        &format!(
            r"(?i)<pre(?:[\s/][^>]*)?>\s*<code[^>]*?\s{CODE_LANGUAGE}[^>]*>(?s:(.*?))</code\s*>\s*</pre\s*>"
        ),
        |caps| fence(&caps[1], &caps[2]),
    ));
    rules.push(Rule::with(
        Stage::Code,
        r"(?i)<pre(?:[\s/][^>]*)?>\s*<code(?:[\s/][^>]*)?>(?s:(.*?))</code\s*>\s*</pre\s*>",
        |caps| fence("", &caps[1]),
    ));
    rules.push(Rule::with(
        Stage::Code,
        &format!(r"(?i)<code[^>]*?\s{CODE_LANGUAGE}[^>]*>(?s:(.*?))</code\s*>"),
        |caps| fence(&caps[1], &caps[2]),
    ));
    rules.push(Rule::template(Stage::Code, &element("code"), "`${1}`"));
    rules.push(Rule::with(Stage::Code, &element("pre"), |caps| {
        fence("", &caps[1])
    }));

    // 5. Emphasis
    for tag in ["strong", "b"] {
        rules.push(Rule::template(Stage::Emphasis, &element(tag), "**${1}**"));
    }
    for tag in ["em", "i"] {
        rules.push(Rule::template(Stage::Emphasis, &element(tag), "*${1}*"));
    }

    // 6. Links
    rules.push(Rule::with(
        Stage::Links,
        r#"(?i)<a\s(?:[^>]*?\s)?href\s*=\s*(?:"([^"]*)"|'([^']*)')[^>]*>(?s:(.*?))</a\s*>"#,
        |caps| {
            let href = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map_or("", |m| m.as_str());
            format!("[{}]({})", squash(&caps[3]), href)
        },
    ));

    // 7. Lists
    rules.push(Rule::with(Stage::Lists, &element("ul"), |caps| {
        let items: String = LIST_ITEM
            .captures_iter(&caps[1])
            .map(|item| format!("- {}\n", item[1].trim()))
            .collect();
        format!("\n{items}\n")
    }));
    rules.push(Rule::with(Stage::Lists, &element("ol"), |caps| {
        let items: String = LIST_ITEM
            .captures_iter(&caps[1])
            .enumerate()
            .map(|(i, item)| format!("{}. {}\n", i + 1, item[1].trim()))
            .collect();
        format!("\n{items}\n")
    }));

    // 8. Tables
    rules.push(Rule::with(Stage::Tables, &element("table"), |caps| {
        table(&caps[1])
    }));
    rules.push(Rule::template(Stage::Tables, &element("colgroup"), ""));
    rules.push(Rule::template(Stage::Tables, &open("col"), ""));

    // 9. Line breaks and rules
    rules.push(Rule::template(Stage::Breaks, &open("br"), "\n"));
    rules.push(Rule::template(Stage::Breaks, &open("hr"), "\n\n---\n\n"));

    // 10. Forms
    rules.push(Rule::template(Stage::Forms, &element("form"), ""));
    rules.push(Rule::template(Stage::Forms, &open("input"), ""));
    rules.push(Rule::template(Stage::Forms, &element("textarea"), ""));
    rules.push(Rule::template(Stage::Forms, &element("option"), "${1}\n"));
    rules.push(Rule::template(Stage::Forms, &either("select"), ""));
    rules.push(Rule::template(Stage::Forms, &element("label"), "${1}"));
    rules.push(Rule::template(Stage::Forms, &element("button"), "${1}"));
    rules.push(Rule::template(Stage::Forms, &either("fieldset"), ""));
    rules.push(Rule::template(
        Stage::Forms,
        &element("legend"),
        "\n**${1}**\n",
    ));

    // 11. Character references, one pass so `&amp;lt;` stays `&lt;`
    rules.push(Rule::with(
        Stage::Entities,
        r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z][a-zA-Z0-9]{1,31});",
        |caps| match decode_entity(&caps[1]) {
            Some(c) => c.to_string(),
            None => caps[0].to_string(),
        },
    ));

    // 12. Blank lines
    rules.push(Rule::template(Stage::Whitespace, r"\n\s*\n\s*\n", "\n\n"));
    rules.push(Rule::template(Stage::Whitespace, r"\n{3,}", "\n\n"));

    rules
}

/// Named references understood by the converter
const ENTITIES: &[(&str, char)] = &[
    ("lt", '<'),
    ("gt", '>'),
    ("amp", '&'),
    ("quot", '"'),
    ("apos", '\''),
    ("nbsp", ' '),
    ("copy", '©'),
    ("reg", '®'),
    ("trade", '™'),
    ("mdash", '—'),
    ("ndash", '–'),
    ("hellip", '…'),
    ("laquo", '«'),
    ("raquo", '»'),
];

fn decode_entity(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse().ok()?,
        };
        if code == 0 {
            return None;
        }
        return char::from_u32(code);
    }
    ENTITIES
        .iter()
        .find(|(entity, _)| *entity == name)
        .map(|(_, c)| *c)
}

/// Collapse inner whitespace and `<br>` to single spaces
///
/// Used for text that must stay on one line: headings, link text, captions
/// and table cells.
fn squash(s: &str) -> String {
    LINE_BREAK
        .replace_all(s, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fenced code block; only surrounding newlines of the body are dropped
fn fence(language: &str, body: &str) -> String {
    format!("\n```{}\n{}\n```\n\n", language, body.trim_matches(|c| c == '\n' || c == '\r'))
}

/// Prefix every line with `> `, keeping at most one empty quoted line in a row
fn quote(content: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    for line in content.trim().lines() {
        let line = line.trim_end();
        if line.trim().is_empty() {
            if lines.last().is_some_and(|l| l == ">") {
                continue;
            }
            lines.push(">".to_string());
        } else {
            lines.push(format!("> {}", line.trim_start()));
        }
    }
    lines.join("\n")
}

/// Render table content as pipe-delimited rows
fn table(content: &str) -> String {
    let mut output = String::from("\n\n");

    if let Some(caption) = TABLE_CAPTION.captures(content) {
        output.push_str(&format!("*{}*\n\n", squash(&caption[1])));
    }

    let mut separator_written = false;
    for row in TABLE_ROW.captures_iter(content) {
        let cells: Vec<(bool, String)> = TABLE_CELL
            .captures_iter(&row[1])
            .map(|cell| {
                let is_header = cell[1].eq_ignore_ascii_case("th");
                (is_header, squash(&cell[2]).replace('|', "\\|"))
            })
            .collect();
        if cells.is_empty() {
            continue;
        }

        for (_, text) in &cells {
            output.push_str(&format!("| {} ", text));
        }
        output.push_str("|\n");

        if !separator_written && cells.iter().all(|(is_header, _)| *is_header) {
            output.push_str(&"| --- ".repeat(cells.len()));
            output.push_str("|\n");
            separator_written = true;
        }
    }

    output.push('\n');
    output
}

fn apply(input: &str, stage: Option<Stage>) -> String {
    let mut text = input.to_string();
    for rule in RULES.iter() {
        if stage.is_some_and(|s| s != rule.stage) {
            continue;
        }
        text = rule.apply(&text);
    }
    text
}

/// Convert HTML to markdown
///
/// Never fails: markup the rules do not recognize is left in place.
pub fn html_to_markdown(html: &str) -> String {
    let markdown = apply(html, None).trim().to_string();
    debug!(
        input_len = html.len(),
        output_len = markdown.len(),
        "Converted HTML to markdown"
    );
    markdown
}

/// Decode the character references the converter knows about
pub fn decode_entities(s: &str) -> String {
    apply(s, Some(Stage::Entities))
}

/// Collapse runs of blank lines to a single blank line
pub fn collapse_blank_lines(s: &str) -> String {
    apply(s, Some(Stage::Whitespace))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_compile() {
        assert!(!RULES.is_empty());
        assert_eq!(RULES.last().map(|r| r.stage), Some(Stage::Whitespace));
    }

    #[test]
    fn test_headings_all_levels() {
        for level in 1..=6 {
            let html = format!("<h{level}>Title</h{level}>");
            let expected = format!("{} Title", "#".repeat(level));
            assert_eq!(html_to_markdown(&html), expected);
        }
    }

    #[test]
    fn test_heading_with_attributes_and_whitespace() {
        let html = "<h2 id=\"auth\" class=\"title\">\n  Authorization\n</h2><p>Use a key.</p>";
        assert_eq!(html_to_markdown(html), "## Authorization\n\nUse a key.");
    }

    #[test]
    fn test_paragraphs() {
        assert_eq!(
            html_to_markdown("<p>First paragraph</p><p>Second paragraph</p>"),
            "First paragraph\n\nSecond paragraph"
        );
        let md = html_to_markdown("<p>text</p>after");
        assert_eq!(md, "text\n\nafter");
        assert!(!md.contains("<p>"));
    }

    #[test]
    fn test_p_does_not_match_pre() {
        let md = html_to_markdown("<pre>a</pre><p>b</p>");
        assert_eq!(md, "```\na\n```\n\nb");
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(html_to_markdown("<code>const x = 1;</code>"), "`const x = 1;`");
    }

    #[test]
    fn test_pre_preserves_lines() {
        let html = "<pre>function test() {\n  return true;\n}</pre>";
        assert_eq!(
            html_to_markdown(html),
            "```\nfunction test() {\n  return true;\n}\n```"
        );
    }

    #[test]
    fn test_code_with_language() {
        let html = r#"<pre><code class="language-rust">fn main() {}</code></pre>"#;
        assert_eq!(html_to_markdown(html), "```rust\nfn main() {}\n```");

        let html = r#"<code class="hljs language-json">{"key": "value"}</code>"#;
        assert_eq!(html_to_markdown(html), "```json\n{\"key\": \"value\"}\n```");
    }

    #[test]
    fn test_pre_code_without_language() {
        let html = "<pre><code>curl https://catalog.api.2gis.com\n</code></pre>";
        assert_eq!(
            html_to_markdown(html),
            "```\ncurl https://catalog.api.2gis.com\n```"
        );
    }

    #[test]
    fn test_emphasis() {
        let html = "<p><strong>bold</strong> and <em>italic</em>, <b>b</b> and <i>i</i></p>";
        assert_eq!(html_to_markdown(html), "**bold** and *italic*, **b** and *i*");
    }

    #[test]
    fn test_bold_does_not_swallow_line_break() {
        assert_eq!(html_to_markdown("<b>x</b><br>y<br/>z"), "**x**\ny\nz");
    }

    #[test]
    fn test_links() {
        assert_eq!(
            html_to_markdown(r#"<a class="ref" href="https://docs.2gis.com/ru/api">Docs</a>"#),
            "[Docs](https://docs.2gis.com/ru/api)"
        );
        assert_eq!(
            html_to_markdown("<a href='/ru/api/search/places'>Places</a>"),
            "[Places](/ru/api/search/places)"
        );
        // Anchors without href are left alone
        assert_eq!(
            html_to_markdown(r#"<a name="top">Top</a>"#),
            r#"<a name="top">Top</a>"#
        );
    }

    #[test]
    fn test_link_ignores_prefixed_href_attributes() {
        assert_eq!(
            html_to_markdown(r#"<a data-href="/wrong" href="/right">T</a>"#),
            "[T](/right)"
        );
        assert_eq!(
            html_to_markdown(r#"<a data-href='/wrong' class="x" href='/right'>T</a>"#),
            "[T](/right)"
        );
        assert_eq!(
            html_to_markdown("<a href=\"/docs\">Line<br>break</a>"),
            "[Line break](/docs)"
        );
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(html_to_markdown("<ul><li>a</li><li>b</li></ul>"), "- a\n- b");
    }

    #[test]
    fn test_indented_list_items() {
        let html = "<ul>\n    <li>Item 1</li>\n    <li>\n      Item 2\n    </li>\n</ul>";
        assert_eq!(html_to_markdown(html), "- Item 1\n- Item 2");
    }

    #[test]
    fn test_ordered_lists_restart_numbering() {
        let html = "<ol><li>a</li><li>b</li></ol><p>between</p><ol><li>c</li><li>d</li></ol>";
        assert_eq!(
            html_to_markdown(html),
            "1. a\n2. b\n\nbetween\n\n1. c\n2. d"
        );
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(html_to_markdown("<blockquote>Quote</blockquote>"), "> Quote");
        assert_eq!(
            html_to_markdown("<blockquote><p>one</p><p>two</p></blockquote>"),
            "> one\n>\n> two"
        );
    }

    #[test]
    fn test_blockquote_with_list() {
        assert_eq!(
            html_to_markdown("<blockquote><ul><li>a</li><li>b</li></ul></blockquote>"),
            "> - a\n> - b"
        );
        assert_eq!(
            html_to_markdown("<blockquote><p>Steps:</p><ol><li>one</li></ol></blockquote>"),
            "> Steps:\n>\n> 1. one"
        );
    }

    #[test]
    fn test_table() {
        let html = "<table><caption>Parameters</caption>\
            <thead><tr><th>Name</th><th>Type</th></tr></thead>\
            <tbody><tr><td>q</td><td>string</td></tr>\
            <tr><td>fields</td><td>a|b</td></tr></tbody></table>";
        assert_eq!(
            html_to_markdown(html),
            "*Parameters*\n\n| Name | Type |\n| --- | --- |\n| q | string |\n| fields | a\\|b |"
        );
    }

    #[test]
    fn test_table_cell_line_breaks_stay_in_row() {
        let html = "<table><tr><th>Param</th><th>Note</th></tr>\
            <tr><td>q</td><td>line1<br>line2<br/>line3</td></tr></table>";
        assert_eq!(
            html_to_markdown(html),
            "| Param | Note |\n| --- | --- |\n| q | line1 line2 line3 |"
        );
    }

    #[test]
    fn test_heading_line_break() {
        assert_eq!(html_to_markdown("<h2>Title<br>Sub</h2>"), "## Title Sub");
        assert_eq!(html_to_markdown("<h3>A<BR />B</h3>\nc<br>d"), "### A B\n\nc\nd");
    }

    #[test]
    fn test_table_is_separated_from_text() {
        let md = html_to_markdown("before<table><tr><td>x</td></tr></table>after");
        assert_eq!(md, "before\n\n| x |\n\nafter");
    }

    #[test]
    fn test_horizontal_rule() {
        assert_eq!(html_to_markdown("a<hr>b"), "a\n\n---\n\nb");
    }

    #[test]
    fn test_strips_scaffolding() {
        let html = r#"<!DOCTYPE html>
<html lang="ru">
<head><title>Places API</title><meta charset="utf-8"></head>
<body>
<script>window.analytics = {};</script>
<style>.nav { color: red; }</style>
<noscript>Enable JS</noscript>
<svg viewBox="0 0 10 10"><path d="M0 0"/></svg>
<iframe src="https://example.com"></iframe>
<link rel="stylesheet" href="/main.css">
<h1>Places API</h1>
<!-- build: 1234 -->
</body>
</html>"#;
        assert_eq!(html_to_markdown(html), "# Places API");
    }

    #[test]
    fn test_strips_chrome_regions() {
        let html = "<header><a href=\"/\">Logo</a></header>\
            <nav><ul><li>Menu</li></ul></nav>\
            <main><article><section><h1>Content</h1></section></article></main>\
            <aside>Related</aside><footer>© 2GIS</footer>";
        let md = html_to_markdown(html);
        assert_eq!(md, "# Content");
    }

    #[test]
    fn test_unwraps_div_and_span() {
        assert_eq!(
            html_to_markdown("<div class=\"a\"><span>one</span></div><div>two</div>"),
            "one\ntwo"
        );
        assert_eq!(
            html_to_markdown("<div><div>nested</div></div>"),
            "nested"
        );
    }

    #[test]
    fn test_form_elements() {
        let html = "<form action=\"/search\"><input name=\"q\"><button>Go</button></form>\
            <label>Language</label>\
            <select name=\"lang\"><option>ru</option><option>en</option></select>\
            <textarea>draft</textarea>\
            <fieldset><legend>Options</legend>value</fieldset>";
        let md = html_to_markdown(html);
        assert!(!md.contains("Go"));
        assert!(!md.contains("draft"));
        assert!(!md.contains('<'));
        assert!(md.contains("Language"));
        assert!(md.contains("ru\nen"));
        assert!(md.contains("**Options**\nvalue"));
    }

    #[test]
    fn test_entity_decoding() {
        assert_eq!(
            html_to_markdown("a&amp;b &lt;c&gt; &quot;d&quot; &#39;e&#39; f&nbsp;g"),
            "a&b <c> \"d\" 'e' f g"
        );
        assert_eq!(
            html_to_markdown("&copy; &reg; &trade; &mdash; &ndash; &hellip; &laquo;x&raquo;"),
            "© ® ™ — – … «x»"
        );
    }

    #[test]
    fn test_entity_decoding_after_tags() {
        // Escaped markup in code must not be treated as tags
        assert_eq!(
            html_to_markdown("<code>&lt;p&gt;text&lt;/p&gt;</code>"),
            "`<p>text</p>`"
        );
    }

    #[test]
    fn test_entity_single_pass() {
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
        assert_eq!(decode_entities("&#x41;&#66;"), "AB");
        assert_eq!(decode_entities("&unknown; & alone"), "&unknown; & alone");
        assert_eq!(decode_entities("&#0;"), "&#0;");
    }

    #[test]
    fn test_plain_text_unchanged() {
        let text = "Just some plain text.\nWith a second line.";
        assert_eq!(html_to_markdown(text), text);
        assert_eq!(html_to_markdown("  padded text \n"), "padded text");
    }

    #[test]
    fn test_whitespace_collapse() {
        assert_eq!(html_to_markdown("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(html_to_markdown("a\n \n\t\n\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("x\n\n\ny\n\nz"), "x\n\ny\n\nz");
    }

    #[test]
    fn test_uppercase_tags() {
        assert_eq!(html_to_markdown("<H1>Title</H1><P>Body</P>"), "# Title\n\nBody");
    }

    #[test]
    fn test_malformed_input_does_not_panic() {
        let html = "<p>unclosed <b>bold <ul><li>item <table><tr><td>cell";
        let md = html_to_markdown(html);
        assert!(md.contains("unclosed"));
        assert!(md.contains("cell"));
        assert_eq!(html_to_markdown(""), "");
        assert_eq!(html_to_markdown("<"), "<");
    }

    #[test]
    fn test_documentation_page() {
        let html = r#"<!DOCTYPE html>
<html>
<head><title>Geocoder API</title></head>
<body>
    <nav class="sidebar"><a href="/ru/api">All APIs</a></nav>
    <main>
        <h1>Geocoder API</h1>
        <p>Converts an <strong>address</strong> into coordinates.</p>
        <h2>Request</h2>
        <pre><code class="language-bash">curl "https://catalog.api.2gis.com/3.0/items/geocode?q=Moscow&amp;key=KEY"</code></pre>
        <ul>
            <li>Forward geocoding</li>
            <li>Reverse geocoding</li>
        </ul>
        <p>See <a href="/ru/api/search/geocoder/reference">reference</a>.</p>
    </main>
    <footer>&copy; 2GIS</footer>
</body>
</html>"#;
        let md = html_to_markdown(html);
        assert!(md.starts_with("# Geocoder API\n\n"));
        assert!(md.contains("Converts an **address** into coordinates."));
        assert!(md.contains("## Request"));
        assert!(md.contains("```bash\ncurl \"https://catalog.api.2gis.com/3.0/items/geocode?q=Moscow&key=KEY\"\n```"));
        assert!(md.contains("- Forward geocoding\n- Reverse geocoding"));
        assert!(md.contains("[reference](/ru/api/search/geocoder/reference)"));
        assert!(!md.contains("All APIs"));
        assert!(!md.contains("©"));
        assert!(!md.contains("\n\n\n"));
    }
}
