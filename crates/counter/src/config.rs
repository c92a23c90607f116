// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Static configuration of the widget: element identifiers, labels, colors.

use std::borrow::Cow;

/// Every string and constant the widget puts on the page.
///
/// All text fields are [`Cow`]s so that [`Config::DEFAULT`] can be built at
/// compile time, while a config loaded at runtime (with the `serde` feature)
/// can own its strings.
///
/// ```
/// use cmpm_counter::Config;
///
/// let config = Config {
///     color_odd: "salmon".into(),
///     ..Config::default()
/// };
///
/// assert_eq!(config.color_even, "lightblue");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    pub heading: Cow<'static, str>,
    pub counter_label: Cow<'static, str>,

    pub counter_id: Cow<'static, str>,
    pub increment_id: Cow<'static, str>,
    pub decrement_id: Cow<'static, str>,
    pub reset_id: Cow<'static, str>,

    pub increment_label: Cow<'static, str>,
    pub decrement_label: Cow<'static, str>,
    pub reset_label: Cow<'static, str>,

    /// Value the counter starts at, and returns to on reset.
    pub default_count: i64,

    /// Prepended to the counter value in the document title.
    pub title_prefix: Cow<'static, str>,
    pub color_even: Cow<'static, str>,
    pub color_odd: Cow<'static, str>,
}

impl Config {
    pub const DEFAULT: Config = Config {
        heading: Cow::Borrowed("CMPM 121 Project"),
        counter_label: Cow::Borrowed("Counter: "),

        counter_id: Cow::Borrowed("counter"),
        increment_id: Cow::Borrowed("increment"),
        decrement_id: Cow::Borrowed("dec"),
        reset_id: Cow::Borrowed("reset"),

        increment_label: Cow::Borrowed("Click Me!"),
        decrement_label: Cow::Borrowed("Decrement"),
        reset_label: Cow::Borrowed("Reset"),

        default_count: 0,

        title_prefix: Cow::Borrowed("Clicked "),
        color_even: Cow::Borrowed("lightblue"),
        color_odd: Cow::Borrowed("pink"),
    };
}

impl Default for Config {
    fn default() -> Self {
        Config::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();

        assert_eq!(config.counter_id, "counter");
        assert_eq!(config.increment_id, "increment");
        assert_eq!(config.decrement_id, "dec");
        assert_eq!(config.reset_id, "reset");
        assert_eq!(config.default_count, 0);
        assert_eq!(config.title_prefix, "Clicked ");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_fills_in_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "color_odd": "salmon", "default_count": 10 }"#).unwrap();

        assert_eq!(config.color_odd, "salmon");
        assert_eq!(config.default_count, 10);
        assert_eq!(config.color_even, "lightblue");
        assert_eq!(config.heading, "CMPM 121 Project");
    }
}
