use crate::line::{self, Context, Line};

/// Fixed preamble of every generated template
pub const HEADER: &str = "\n\nblock contents\n";

/// Converts the text of one markup file into a Pug template.
pub trait LineConverter {
    fn convert(&self, source: &str) -> String;
}

/// Wraps every source line verbatim as literal text inside one paragraph.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainParagraphConverter;

impl LineConverter for PlainParagraphConverter {
    fn convert(&self, source: &str) -> String {
        let mut out = String::with_capacity(HEADER.len() + source.len() * 2);
        out.push_str(HEADER);

        push_indent(0, &mut out);
        out.push_str("p\n");
        for raw in line::lines(source) {
            push_indent(1, &mut out);
            out.push_str("| ");
            out.push_str(raw);
        }

        out
    }
}

/// Turns bullet lines into `ul`/`li` blocks and other lines into `p` blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListAwareConverter;

impl LineConverter for ListAwareConverter {
    fn convert(&self, source: &str) -> String {
        let mut out = String::with_capacity(HEADER.len() + source.len() * 2);
        out.push_str(HEADER);

        // An open list at end of input is left open
        let mut stack: Vec<Context> = Vec::new();
        for raw in line::lines(source) {
            match Line::classify(raw) {
                Line::Blank => {
                    stack.pop();
                }
                Line::ListItem(text) => {
                    if stack.last() != Some(&Context::List) {
                        stack.push(Context::List);
                        push_indent(stack.len(), &mut out);
                        out.push_str("ul\n");
                    }
                    emit_tagged("li", text, stack.len(), &mut out);
                }
                Line::Paragraph(text) => {
                    stack.pop();
                    emit_tagged("p", text, stack.len(), &mut out);
                }
            }
        }

        out
    }
}

fn emit_tagged(tag: &str, text: &str, depth: usize, out: &mut String) {
    push_indent(depth, out);
    out.push_str(tag);
    out.push(' ');
    out.push_str(text);
}

/// Base indent under `block contents`, plus two spaces per level
fn push_indent(depth: usize, out: &mut String) {
    for _ in 0..=depth {
        out.push_str("  ");
    }
}
