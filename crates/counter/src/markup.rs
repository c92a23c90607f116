// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Static structure of the widget.
//!
//! The body is described as a small tree of [`Element`]s which each
//! [`Host`](crate::host::Host) builds in its own way. The [`Display`](fmt::Display)
//! implementation renders the same tree as HTML.

use std::borrow::Cow;
use std::fmt::{self, Write};

use crate::Config;

/// Child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    Text(Cow<'static, str>),
    Element(Element),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub id: Option<Cow<'static, str>>,
    pub children: Vec<Child>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Element {
            tag,
            id: None,
            children: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<Cow<'static, str>>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn text(mut self, text: impl Into<Cow<'static, str>>) -> Self {
        self.children.push(Child::Text(text.into()));
        self
    }

    pub fn child(mut self, element: Element) -> Self {
        self.children.push(Child::Element(element));
        self
    }

    /// Concatenated text of all descendants, same as the DOM `textContent`.
    pub fn text_content(&self) -> String {
        let mut out = String::new();

        self.collect_text(&mut out);

        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Child::Text(text) => out.push_str(text),
                Child::Element(el) => el.collect_text(out),
            }
        }
    }

    /// Depth-first walk over this element and all of its descendants.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element)) {
        visit(self);

        for child in &self.children {
            if let Child::Element(el) = child {
                el.walk(visit);
            }
        }
    }
}

/// Replacement content for the document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    pub nodes: Vec<Element>,
}

impl Markup {
    /// Heading, counter display and the three buttons.
    pub fn counter(config: &Config) -> Self {
        let mut buf = itoa::Buffer::new();
        let initial = buf.format(config.default_count).to_owned();

        Markup {
            nodes: vec![
                Element::new("h1").text(config.heading.clone()),
                Element::new("p")
                    .text(config.counter_label.clone())
                    .child(
                        Element::new("span")
                            .id(config.counter_id.clone())
                            .text(initial),
                    ),
                Element::new("button")
                    .id(config.increment_id.clone())
                    .text(config.increment_label.clone()),
                Element::new("button")
                    .id(config.decrement_id.clone())
                    .text(config.decrement_label.clone()),
                Element::new("button")
                    .id(config.reset_id.clone())
                    .text(config.reset_label.clone()),
            ],
        }
    }
}

struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                c => f.write_char(c)?,
            }
        }

        Ok(())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;

        if let Some(id) = &self.id {
            write!(f, " id=\"{}\"", Escaped(id))?;
        }

        f.write_char('>')?;

        for child in &self.children {
            match child {
                Child::Text(text) => write!(f, "{}", Escaped(text))?,
                Child::Element(el) => write!(f, "{el}")?,
            }
        }

        write!(f, "</{}>", self.tag)
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, node) in self.nodes.iter().enumerate() {
            if n > 0 {
                f.write_char('\n')?;
            }
            write!(f, "{node}")?;
        }

        Ok(())
    }
}
