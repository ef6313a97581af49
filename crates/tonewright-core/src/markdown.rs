//! Markdown to prose conversion.
//!
//! Uses pulldown-cmark for proper CommonMark parsing rather than regex-based
//! stripping. Block boundaries become blank lines so paragraph counts and
//! sentence splitting see the document's real structure.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Strip markdown formatting, returning plain prose text.
///
/// Removes:
/// - Code blocks (fenced and indented)
/// - HTML
/// - YAML frontmatter
/// - Headings (section titles are not prose)
/// - Tables
/// - Image alt text
///
/// Preserves:
/// - Paragraph breaks (as blank lines)
/// - Link text (the visible part)
/// - Inline code text, without backticks
/// - Blockquote and list item text
/// - Emphasis/strong text (without markers)
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    // pulldown-cmark doesn't know about frontmatter.
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, options);

    let mut result = String::with_capacity(text.len());
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(
                Tag::CodeBlock(_) | Tag::Heading { .. } | Tag::Table(_) | Tag::Image { .. },
            ) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Heading(_) | TagEnd::Table | TagEnd::Image) => {
                skip_depth = skip_depth.saturating_sub(1);
            }

            Event::Text(t) | Event::Code(t) if skip_depth == 0 => {
                result.push_str(&t);
            }
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => {
                result.push(' ');
            }

            Event::Start(Tag::Item) | Event::End(TagEnd::Paragraph | TagEnd::Item)
                if skip_depth == 0 =>
            {
                end_block(&mut result);
            }

            _ => {}
        }
    }

    result.trim_end().to_string()
}

/// Close the current block with a blank line, once.
fn end_block(out: &mut String) {
    let trimmed_len = out.trim_end().len();
    out.truncate(trimmed_len);
    if !out.is_empty() {
        out.push_str("\n\n");
    }
}

/// Strip YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_opening) = trimmed.strip_prefix("---") else {
        return text;
    };
    let Some(close_pos) = after_opening.find("\n---") else {
        return text;
    };

    let remainder = &after_opening[close_pos + 4..];
    remainder.strip_prefix('\n').unwrap_or(remainder)
}
