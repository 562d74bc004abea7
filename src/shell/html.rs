//! Minimal HTML element tree and serializer.
//!
//! Only what the shell needs: elements with ordered attributes, escaped
//! text and trusted raw fragments (page content, inline scripts).

use quick_xml::escape::escape;
use std::borrow::Cow;

/// Elements that never have children or a closing tag.
const VOID_TAGS: [&str; 6] = ["meta", "link", "br", "hr", "img", "input"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Escaped on output.
    Text(String),
    /// Written verbatim.
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    attrs: Vec<(Cow<'static, str>, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder form of [`Element::set_attr`].
    pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set an attribute, replacing an existing one of the same name.
    pub fn set_attr(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Builder form of [`Element::push`].
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.push(node);
        self
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag)
    }

    /// Serialize to HTML. `pretty` puts element children on indented lines.
    pub fn to_html(&self, pretty: bool) -> String {
        let mut out = String::with_capacity(4096);
        self.write_to(&mut out, 0, pretty);
        out
    }

    fn write_to(&self, out: &mut String, depth: usize, pretty: bool) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            // Boolean attributes (`async`, `defer`) are written bare
            if !value.is_empty() {
                out.push_str("=\"");
                out.push_str(&escape(value.as_str()));
                out.push('"');
            }
        }
        out.push('>');

        if self.is_void() {
            return;
        }

        let block = pretty
            && self
                .children
                .iter()
                .any(|c| matches!(c, Node::Element(_)));
        for child in &self.children {
            if block {
                newline(out, depth + 1);
            }
            match child {
                Node::Element(elem) => elem.write_to(out, depth + 1, pretty),
                Node::Text(text) => out.push_str(&escape(text.as_str())),
                Node::Raw(raw) => out.push_str(raw),
            }
        }
        if block {
            newline(out, depth);
        }

        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

impl From<Element> for Node {
    fn from(elem: Element) -> Self {
        Node::Element(elem)
    }
}

fn newline(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push_str("  ");
    }
}
