//! Типизированное дерево документа. Экранирование выполняется только при рендере,
//! поэтому код построения страницы работает с исходными строками.

use std::borrow::Cow;

use super::escape::{handler_arg, html_attr, html_text};

const VOID_ELEMENTS: &[&str] = &["meta", "link", "img", "br", "hr", "input"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Текст, экранируется как содержимое элемента
    Text(String),
    /// Готовая разметка/CSS/JS, выводится как есть
    Raw(Cow<'static, str>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Text(String),
    Handler(ScriptCall),
}

/// Вызов JS-функции со строковыми аргументами: `name('a', 'b')`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptCall {
    pub function: &'static str,
    pub args: Vec<String>,
}

impl ScriptCall {
    pub fn new(function: &'static str, args: impl IntoIterator<Item = String>) -> Self {
        Self {
            function,
            args: args.into_iter().collect(),
        }
    }

    fn render(&self) -> String {
        let args: Vec<String> = self
            .args
            .iter()
            .map(|a| format!("'{}'", handler_arg(a)))
            .collect();
        format!("{}({})", self.function, args.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, AttrValue)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, AttrValue::Text(value.into())));
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn id(self, value: impl Into<String>) -> Self {
        self.attr("id", value)
    }

    pub fn on_click(mut self, call: ScriptCall) -> Self {
        self.attrs.push(("onclick", AttrValue::Handler(call)));
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn raw(self, raw: impl Into<Cow<'static, str>>) -> Self {
        self.child(Node::Raw(raw.into()))
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag)
    }

    fn render_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            match value {
                AttrValue::Text(text) => out.push_str(&html_attr(text)),
                AttrValue::Handler(call) => out.push_str(&call.render()),
            }
            out.push('"');
        }
        out.push('>');

        if self.is_void() {
            return;
        }

        for child in &self.children {
            child.render_into(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

impl Node {
    pub fn render_into(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.render_into(out),
            Node::Text(text) => out.push_str(&html_text(text)),
            Node::Raw(raw) => out.push_str(raw),
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// HTML-документ целиком: doctype + `<html>` с `<head>` и `<body>`
#[derive(Debug, Clone)]
pub struct Document {
    lang: &'static str,
    head: Vec<Node>,
    body: Vec<Node>,
}

impl Document {
    pub fn new(lang: &'static str) -> Self {
        Self {
            lang,
            head: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn head(mut self, node: impl Into<Node>) -> Self {
        self.head.push(node.into());
        self
    }

    pub fn body(mut self, node: impl Into<Node>) -> Self {
        self.body.push(node.into());
        self
    }

    /// Верхнеуровневые узлы разделяются переводом строки, чтобы файл было удобно читать
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(32 * 1024);
        out.push_str("<!DOCTYPE html>\n<html lang=\"");
        out.push_str(&html_attr(self.lang));
        out.push_str("\">\n<head>\n");
        for node in &self.head {
            node.render_into(&mut out);
            out.push('\n');
        }
        out.push_str("</head>\n<body>\n");
        for node in &self.body {
            node.render_into(&mut out);
            out.push('\n');
        }
        out.push_str("</body>\n</html>\n");
        out
    }
}
