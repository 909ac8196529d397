//! Theme configuration shared by every component in a subtree.

use std::collections::BTreeMap;

use leptos::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Color;

#[derive(Debug, Error)]
/// Errors raised while loading a [`Theme`].
pub enum ThemeError {
    /// The theme document is not valid JSON or has the wrong shape.
    #[error("theme parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Class-name and palette configuration applied by every component.
pub struct Theme {
    /// Prefix prepended to every generated class, e.g. `bulma-` for prefixed Bulma builds.
    pub class_prefix: String,
    /// Explicit class renames, e.g. for CSS-module builds. Takes precedence over the prefix.
    pub class_map: BTreeMap<String, String>,
    /// Palette color used by color-capable components when the caller supplies none.
    pub default_color: Option<Color>,
}

impl Theme {
    /// Loads a theme from a JSON document. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Returns a copy of this theme using `prefix` for generated classes.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Returns a copy of this theme with `color` as the default palette color.
    pub fn with_default_color(mut self, color: Color) -> Self {
        self.default_color = Some(color);
        self
    }

    /// Maps a generated Bulma class to the class emitted in markup.
    pub fn transform(&self, class: &str) -> String {
        match self.class_map.get(class) {
            Some(mapped) => mapped.clone(),
            None => format!("{}{class}", self.class_prefix),
        }
    }
}

#[component]
/// Provides a [`Theme`] to descendant components.
pub fn ThemeProvider(
    /// Theme published to the subtree.
    #[prop(into)]
    theme: Theme,
    /// Subtree using the theme.
    children: Children,
) -> impl IntoView {
    provide_context(theme);
    children().into_view()
}

/// Returns the nearest provided [`Theme`], or the default theme outside a [`ThemeProvider`].
pub fn use_theme() -> Theme {
    use_context::<Theme>().unwrap_or_default()
}
