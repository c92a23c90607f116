// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Turning a counter value into what the page shows.
//!
//! A render produces a [`Frame`]: the display text, the document title and the
//! background color token. A [`Surface`] is anything that can show a frame,
//! be it the live document, the [headless page](crate::headless::Page), or a
//! recording sink in a test.

use std::borrow::Cow;

use crate::Config;

/// Whether a value is even or odd, using the truncating remainder:
/// `-1 % 2 == -1`, which is non-zero, so `-1` is odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub const fn of(value: i64) -> Self {
        if value % 2 != 0 {
            Parity::Odd
        } else {
            Parity::Even
        }
    }

    /// The background color token for this parity.
    pub fn color(self, config: &Config) -> &Cow<'static, str> {
        match self {
            Parity::Even => &config.color_even,
            Parity::Odd => &config.color_odd,
        }
    }
}

/// Everything a single render writes out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub value: i64,
    /// Decimal representation of `value`, for the display element.
    pub text: String,
    pub title: String,
    pub background: Cow<'static, str>,
}

impl Frame {
    pub fn compose(value: i64, config: &Config) -> Self {
        let mut buf = itoa::Buffer::new();
        let text = buf.format(value);

        let mut title = String::with_capacity(config.title_prefix.len() + text.len());

        title.push_str(&config.title_prefix);
        title.push_str(text);

        Frame {
            value,
            text: text.to_owned(),
            title,
            background: Parity::of(value).color(config).clone(),
        }
    }
}

/// A render sink: something that can reflect a [`Frame`] on screen.
pub trait Surface {
    fn render(&mut self, frame: &Frame);
}

/// Keeps every rendered frame, most recent last.
impl Surface for Vec<Frame> {
    fn render(&mut self, frame: &Frame) {
        self.push(frame.clone());
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn parity() {
        assert_eq!(Parity::of(0), Parity::Even);
        assert_eq!(Parity::of(1), Parity::Odd);
        assert_eq!(Parity::of(-1), Parity::Odd);
        assert_eq!(Parity::of(-2), Parity::Even);
        assert_eq!(Parity::of(i64::MIN), Parity::Even);
        assert_eq!(Parity::of(i64::MAX), Parity::Odd);
    }

    #[test]
    fn compose() {
        let config = Config::default();

        assert_eq!(
            Frame::compose(-1, &config),
            Frame {
                value: -1,
                text: "-1".into(),
                title: "Clicked -1".into(),
                background: "pink".into(),
            }
        );

        let frame = Frame::compose(42, &config);

        assert_eq!(frame.text, "42");
        assert_eq!(frame.title, "Clicked 42");
        assert_eq!(frame.background, "lightblue");
    }

    #[test]
    fn custom_tokens() {
        let config = Config {
            title_prefix: "Count: ".into(),
            color_odd: "salmon".into(),
            ..Config::default()
        };

        let frame = Frame::compose(3, &config);

        assert_eq!(frame.title, "Count: 3");
        assert_eq!(frame.background, "salmon");
    }

    proptest! {
        #[test]
        fn background_follows_parity(n in any::<i64>()) {
            let config = Config::default();
            let frame = Frame::compose(n, &config);

            if n % 2 != 0 {
                prop_assert_eq!(&*frame.background, "pink");
            } else {
                prop_assert_eq!(&*frame.background, "lightblue");
            }
        }

        #[test]
        fn title_is_prefix_and_text(n in any::<i64>()) {
            let frame = Frame::compose(n, &Config::default());

            prop_assert_eq!(&frame.text, &n.to_string());
            prop_assert_eq!(frame.title, format!("Clicked {n}"));
        }
    }
}
