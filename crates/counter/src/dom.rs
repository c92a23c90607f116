// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The live browser document.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Node};

use crate::host::Host;
use crate::markup::{Child, Element, Markup};
use crate::render::{Frame, Surface};

/// [`Host`] backed by the `document` of the current window.
pub struct Dom {
    document: Document,
}

impl Dom {
    /// Get the document of the global `window`, if there is one.
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;

        Some(Dom { document })
    }

    fn build(&self, el: &Element) -> Result<Node, JsValue> {
        let node = self.document.create_element(el.tag)?;

        if let Some(id) = &el.id {
            node.set_id(id);
        }

        for child in &el.children {
            match child {
                Child::Text(text) => {
                    node.append_with_str_1(text)?;
                }
                Child::Element(el) => {
                    node.append_child(&self.build(el)?)?;
                }
            }
        }

        Ok(node.into())
    }
}

impl Host for Dom {
    type Element = HtmlElement;
    type Surface = DomSurface;

    fn mount(&mut self, markup: &Markup) {
        let Some(body) = self.document.body() else {
            crate::error!("document has no body to mount into");
            return;
        };

        body.set_text_content(None);

        for el in &markup.nodes {
            let res = self.build(el).and_then(|node| body.append_child(&node));

            if let Err(err) = res {
                crate::error!("failed to create <{}>: {err:?}", el.tag);
            }
        }
    }

    fn lookup(&self, id: &str) -> Option<HtmlElement> {
        self.document.get_element_by_id(id)?.dyn_into().ok()
    }

    fn on_click<F>(&mut self, element: &HtmlElement, handler: F)
    where
        F: FnMut() + 'static,
    {
        let closure = Closure::<dyn FnMut()>::new(handler);

        let res = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());

        match res {
            // Listeners live as long as the page does.
            Ok(()) => closure.forget(),
            Err(err) => crate::error!("failed to attach click listener to #{}: {err:?}", element.id()),
        }
    }

    fn surface(&self, display: HtmlElement) -> DomSurface {
        DomSurface {
            document: self.document.clone(),
            display,
        }
    }
}

/// Writes frames to the display element, `document.title` and the body
/// background color.
pub struct DomSurface {
    document: Document,
    display: HtmlElement,
}

impl Surface for DomSurface {
    fn render(&mut self, frame: &Frame) {
        self.display.set_text_content(Some(frame.text.as_str()));
        self.document.set_title(&frame.title);

        if let Some(body) = self.document.body() {
            let res = body
                .style()
                .set_property("background-color", &frame.background);

            if let Err(err) = res {
                crate::error!("failed to set background color: {err:?}");
            }
        }
    }
}
