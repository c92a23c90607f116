// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! An in-memory [`Host`] for running the widget without a browser.
//!
//! ```
//! use cmpm_counter::headless::Page;
//! use cmpm_counter::{bootstrap, Config};
//!
//! let mut page = Page::new();
//! bootstrap(&mut page, Config::default()).unwrap();
//!
//! page.click("increment");
//!
//! assert_eq!(page.text("counter").as_deref(), Some("1"));
//! assert_eq!(page.title(), "Clicked 1");
//! assert_eq!(page.background().as_deref(), Some("pink"));
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::host::Host;
use crate::markup::Markup;
use crate::render::{Frame, Surface};

#[derive(Default)]
struct Document {
    body: Option<Markup>,
    /// Text content of every element with an identifier.
    texts: HashMap<String, String>,
    title: String,
    background: Option<String>,
    renders: usize,
}

/// Headless document. Elements are addressed by their identifier.
#[derive(Default)]
pub struct Page {
    doc: Rc<RefCell<Document>>,
    listeners: HashMap<String, Vec<Box<dyn FnMut()>>>,
    hidden: HashSet<String>,
}

impl Page {
    pub fn new() -> Self {
        Page::default()
    }

    /// Pretend the element with the given identifier never makes it into the
    /// document, so that looking it up fails.
    pub fn without(mut self, id: &str) -> Self {
        self.hidden.insert(id.to_owned());
        self
    }

    /// Fire a click on the element, returns the number of listeners invoked.
    pub fn click(&mut self, id: &str) -> usize {
        match self.listeners.get_mut(id) {
            Some(handlers) => {
                for handler in handlers.iter_mut() {
                    handler();
                }
                handlers.len()
            }
            None => 0,
        }
    }

    /// Number of click listeners attached to the element.
    pub fn listeners(&self, id: &str) -> usize {
        self.listeners.get(id).map_or(0, Vec::len)
    }

    /// Current text content of the element, if it is in the document.
    pub fn text(&self, id: &str) -> Option<String> {
        self.doc.borrow().texts.get(id).cloned()
    }

    pub fn title(&self) -> String {
        self.doc.borrow().title.clone()
    }

    /// Background color, `None` until something sets it.
    pub fn background(&self) -> Option<String> {
        self.doc.borrow().background.clone()
    }

    /// Body markup as last mounted.
    pub fn body(&self) -> Option<Markup> {
        self.doc.borrow().body.clone()
    }

    /// How many frames were rendered to this page.
    pub fn renders(&self) -> usize {
        self.doc.borrow().renders
    }
}

impl Host for Page {
    type Element = String;
    type Surface = PageSurface;

    fn mount(&mut self, markup: &Markup) {
        let mut doc = self.doc.borrow_mut();

        doc.texts.clear();
        self.listeners.clear();

        for node in &markup.nodes {
            node.walk(&mut |el| {
                if let Some(id) = el.id.as_deref() {
                    if !self.hidden.contains(id) {
                        doc.texts.insert(id.to_owned(), el.text_content());
                    }
                }
            });
        }

        doc.body = Some(markup.clone());
    }

    fn lookup(&self, id: &str) -> Option<String> {
        self.doc
            .borrow()
            .texts
            .contains_key(id)
            .then(|| id.to_owned())
    }

    fn on_click<F>(&mut self, element: &String, handler: F)
    where
        F: FnMut() + 'static,
    {
        self.listeners
            .entry(element.clone())
            .or_default()
            .push(Box::new(handler));
    }

    fn surface(&self, display: String) -> PageSurface {
        PageSurface {
            doc: self.doc.clone(),
            display,
        }
    }
}

/// Render sink of a [`Page`].
pub struct PageSurface {
    doc: Rc<RefCell<Document>>,
    display: String,
}

impl Surface for PageSurface {
    fn render(&mut self, frame: &Frame) {
        let mut doc = self.doc.borrow_mut();
        let doc = &mut *doc;

        // The display element is gone, nothing to update.
        let Some(text) = doc.texts.get_mut(&self.display) else {
            return;
        };

        text.clone_from(&frame.text);
        doc.title.clone_from(&frame.title);
        doc.background = Some(frame.background.clone().into_owned());
        doc.renders += 1;
    }
}
