use pulldown_cmark::{Event, Parser, Tag, TagEnd};

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Render the backend's markdown answer fields for a terminal.
///
/// Headings and strong/emphasis become ANSI bold, bullet items get a
/// leading `•`, paragraphs are separated by a blank line. Plain text with
/// no markup passes through unchanged.
pub fn render(text: &str) -> String {
    let parser = Parser::new(text);
    let mut out = String::new();
    let mut in_item = false;

    for event in parser {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                pad_block(&mut out);
                out.push_str(BOLD);
            }
            Event::End(TagEnd::Heading(_)) => {
                out.push_str(RESET);
                out.push('\n');
            }
            Event::Start(Tag::Strong) | Event::Start(Tag::Emphasis) => out.push_str(BOLD),
            Event::End(TagEnd::Strong) | Event::End(TagEnd::Emphasis) => out.push_str(RESET),
            Event::Start(Tag::Item) => {
                in_item = true;
                out.push_str("  • ");
            }
            Event::End(TagEnd::Item) => {
                in_item = false;
                out.push('\n');
            }
            // Tight list items carry their text directly; paragraph spacing
            // only applies outside items.
            Event::Start(Tag::Paragraph) if !in_item => pad_block(&mut out),
            Event::End(TagEnd::Paragraph) if !in_item => out.push('\n'),
            Event::Text(t) => out.push_str(&t),
            Event::Code(code) => {
                out.push('`');
                out.push_str(&code);
                out.push('`');
            }
            Event::SoftBreak => out.push(' '),
            Event::HardBreak => out.push('\n'),
            _ => {}
        }
    }

    out.trim_end().to_string()
}

/// Separate a new block from what came before with one blank line.
fn pad_block(out: &mut String) {
    if !out.is_empty() {
        while !out.ends_with("\n\n") {
            out.push('\n');
        }
    }
}
