//! Markdown idea files to JSON.
//!
//! Headings become nested object keys (deeper headings nest under the
//! nearest shallower one). Under a heading, a single block is stored as-is
//! and several blocks become an array. Paragraphs and code blocks are
//! strings; lists are arrays of strings, with a nested list appearing as an
//! array right after the item that contains it. When a heading has both its
//! own blocks and subheadings, the blocks go under `"content"`.

use crate::error::{DesignError, Result};
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use serde_json::{Map, Value};
use std::path::Path;

/// Read an idea file and convert it to JSON.
pub fn read_idea_file(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(DesignError::IdeaNotFound(path.to_path_buf()));
    }
    let markdown = std::fs::read_to_string(path)?;
    Ok(markdown_to_json(&markdown))
}

pub fn markdown_to_json(markdown: &str) -> Value {
    let mut builder = TreeBuilder::new();
    for event in Parser::new_ext(markdown, Options::empty()) {
        builder.handle(event);
    }
    builder.render(0)
}

// ---------------------------------------------------------------------------
// Tree building
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Node {
    blocks: Vec<Value>,
    children: Vec<(String, usize)>,
}

struct TreeBuilder {
    nodes: Vec<Node>,
    /// Open headings as (level, node index); the root is level 0.
    headings: Vec<(usize, usize)>,
    text: String,
    in_heading: bool,
    lists: Vec<Vec<Value>>,
    /// Text of the current item, one buffer per open list.
    items: Vec<String>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            headings: vec![(0, 0)],
            text: String::new(),
            in_heading: false,
            lists: Vec::new(),
            items: Vec::new(),
        }
    }

    fn current(&mut self) -> &mut Node {
        let idx = self.headings.last().map(|(_, idx)| *idx).unwrap_or(0);
        &mut self.nodes[idx]
    }

    fn push_text(&mut self, s: &str) {
        if !self.in_heading {
            if let Some(item) = self.items.last_mut() {
                item.push_str(s);
                return;
            }
        }
        self.text.push_str(s);
    }

    fn flush_item(&mut self) {
        let Some(item) = self.items.last_mut() else {
            return;
        };
        let text = std::mem::take(item).trim().to_string();
        if text.is_empty() {
            return;
        }
        if let Some(list) = self.lists.last_mut() {
            list.push(Value::String(text));
        }
    }

    fn push_block(&mut self, block: Value) {
        self.current().blocks.push(block);
    }

    fn open_heading(&mut self, level: usize, title: String) {
        while self.headings.len() > 1 && self.headings.last().is_some_and(|(l, _)| *l >= level) {
            self.headings.pop();
        }
        let parent = self.headings.last().map(|(_, idx)| *idx).unwrap_or(0);
        let existing = self.nodes[parent]
            .children
            .iter()
            .find(|(t, _)| *t == title)
            .map(|(_, idx)| *idx);
        let idx = match existing {
            Some(idx) => idx,
            None => {
                self.nodes.push(Node::default());
                let idx = self.nodes.len() - 1;
                self.nodes[parent].children.push((title, idx));
                idx
            }
        };
        self.headings.push((level, idx));
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                self.text.clear();
                self.in_heading = true;
            }
            Event::End(TagEnd::Heading(level)) => {
                self.in_heading = false;
                let title = std::mem::take(&mut self.text).trim().to_string();
                self.open_heading(level as usize, title);
            }
            Event::Start(Tag::Paragraph) | Event::Start(Tag::CodeBlock(_)) => {
                if self.lists.is_empty() {
                    self.text.clear();
                } else if let Some(item) = self.items.last_mut() {
                    if !item.is_empty() {
                        item.push(' ');
                    }
                }
            }
            Event::End(TagEnd::Paragraph) | Event::End(TagEnd::CodeBlock) => {
                if self.lists.is_empty() {
                    let text = std::mem::take(&mut self.text).trim().to_string();
                    if !text.is_empty() {
                        self.push_block(Value::String(text));
                    }
                }
            }
            Event::Start(Tag::List(_)) => {
                self.flush_item();
                self.lists.push(Vec::new());
                self.items.push(String::new());
            }
            Event::End(TagEnd::List(_)) => {
                self.flush_item();
                self.items.pop();
                let list = Value::Array(self.lists.pop().unwrap_or_default());
                match self.lists.last_mut() {
                    Some(parent) => parent.push(list),
                    None => self.push_block(list),
                }
            }
            Event::Start(Tag::Item) => {
                if let Some(item) = self.items.last_mut() {
                    item.clear();
                }
            }
            Event::End(TagEnd::Item) => self.flush_item(),
            Event::Text(text) | Event::Code(text) => self.push_text(&text),
            Event::SoftBreak => self.push_text(" "),
            Event::HardBreak => self.push_text("\n"),
            _ => {}
        }
    }

    fn render(&self, idx: usize) -> Value {
        let node = &self.nodes[idx];
        let blocks = match node.blocks.len() {
            0 => None,
            1 => Some(node.blocks[0].clone()),
            _ => Some(Value::Array(node.blocks.clone())),
        };
        if node.children.is_empty() {
            return blocks.unwrap_or_else(|| Value::String(String::new()));
        }
        let mut map = Map::new();
        if let Some(blocks) = blocks {
            map.insert("content".to_string(), blocks);
        }
        for (title, child) in &node.children {
            let value = self.render(*child);
            match map.get_mut(title) {
                // A subheading titled "content" joins the heading's own blocks.
                Some(existing) => match existing {
                    Value::Array(items) if node.blocks.len() > 1 => items.push(value),
                    other => *other = Value::Array(vec![other.take(), value]),
                },
                None => {
                    map.insert(title.clone(), value);
                }
            }
        }
        Value::Object(map)
    }
}
