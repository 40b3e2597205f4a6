//! Renders a markdown document as nested JSON keyed by headings.
//!
//! Paragraphs become strings, bullet and numbered lists become arrays, fenced
//! code blocks are kept verbatim. A section with subsections becomes an object;
//! its own leading content is stored under `"content"`.

use serde_json::{Map, Value};

#[derive(Debug, Default)]
struct Section {
    title: String,
    level: usize,
    content: Vec<Value>,
    children: Vec<Section>,
}

impl Section {
    fn into_value(self) -> Value {
        let content = match self.content.len() {
            0 => None,
            1 => self.content.into_iter().next(),
            _ => Some(Value::Array(self.content)),
        };

        if self.children.is_empty() {
            return content.unwrap_or(Value::Null);
        }

        let mut map = Map::new();
        if let Some(content) = content {
            map.insert("content".to_string(), content);
        }
        for child in self.children {
            let title = child.title.clone();
            map.insert(title, child.into_value());
        }
        Value::Object(map)
    }
}

enum Block {
    Paragraph(Vec<String>),
    List(Vec<String>),
    Code(Vec<String>),
}

impl Block {
    fn into_value(self) -> Value {
        match self {
            Block::Paragraph(lines) => Value::String(lines.join(" ")),
            Block::List(items) => Value::Array(items.into_iter().map(Value::String).collect()),
            Block::Code(lines) => Value::String(lines.join("\n")),
        }
    }
}

/// Build the heading outline of `markdown`.
pub fn outline(markdown: &str) -> Value {
    // stack[0] is the document root; headings nest by level.
    let mut stack = vec![Section::default()];
    let mut block: Option<Block> = None;

    for line in markdown.lines() {
        let trimmed = line.trim();

        if let Some(Block::Code(lines)) = &mut block {
            if trimmed.starts_with("```") {
                flush(&mut stack, block.take());
            } else {
                lines.push(line.to_string());
            }
            continue;
        }

        if trimmed.starts_with("```") {
            flush(&mut stack, block.take());
            block = Some(Block::Code(Vec::new()));
        } else if let Some((level, title)) = heading(trimmed) {
            flush(&mut stack, block.take());
            while stack.len() > 1 && stack.last().is_some_and(|s| s.level >= level) {
                close_section(&mut stack);
            }
            stack.push(Section { title: title.to_string(), level, ..Section::default() });
        } else if trimmed.is_empty() {
            flush(&mut stack, block.take());
        } else if let Some(item) = list_item(trimmed) {
            match &mut block {
                Some(Block::List(items)) => items.push(item.to_string()),
                _ => {
                    flush(&mut stack, block.take());
                    block = Some(Block::List(vec![item.to_string()]));
                }
            }
        } else {
            match &mut block {
                Some(Block::Paragraph(lines)) => lines.push(trimmed.to_string()),
                Some(Block::List(items)) => {
                    // Continuation line of the previous list item.
                    if let Some(last) = items.last_mut() {
                        last.push(' ');
                        last.push_str(trimmed);
                    }
                }
                _ => {
                    flush(&mut stack, block.take());
                    block = Some(Block::Paragraph(vec![trimmed.to_string()]));
                }
            }
        }
    }

    flush(&mut stack, block.take());
    while stack.len() > 1 {
        close_section(&mut stack);
    }

    let root = stack.pop().unwrap_or_default();
    match root.into_value() {
        Value::Null => Value::Object(Map::new()),
        value => value,
    }
}

fn flush(stack: &mut [Section], block: Option<Block>) {
    if let (Some(block), Some(section)) = (block, stack.last_mut()) {
        section.content.push(block.into_value());
    }
}

fn close_section(stack: &mut Vec<Section>) {
    if let Some(section) = stack.pop()
        && let Some(parent) = stack.last_mut()
    {
        parent.children.push(section);
    }
}

fn heading(line: &str) -> Option<(usize, &str)> {
    let level = line.chars().take_while(|c| *c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = &line[level..];
    if !rest.is_empty() && !rest.starts_with(' ') {
        return None;
    }
    Some((level, rest.trim()))
}

fn list_item(line: &str) -> Option<&str> {
    if let Some(item) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return Some(item.trim());
    }
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        return line[digits..].strip_prefix(". ").map(str::trim);
    }
    None
}
