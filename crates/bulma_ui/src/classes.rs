//! Class-name and inline-style composition.
//!
//! Every component builds its class attribute through [`ClassList`]: the
//! Bulma base class first, then one class per recognized modifier in the
//! order the component appends them, then caller classes. Library classes go
//! through [`Theme::transform`]; caller classes are emitted untouched.

use crate::{report, Modifier, ModifierToken, PropError, Theme};

/// Composes `base` with every enabled state class, in the given order.
pub fn classes(base: &str, state: &[(&str, bool)]) -> Vec<String> {
    std::iter::once(base.to_string())
        .chain(
            state
                .iter()
                .filter(|(_, enabled)| *enabled)
                .map(|(class, _)| (*class).to_string()),
        )
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Ordered class list for one component render.
pub struct ClassList {
    component: &'static str,
    library: Vec<String>,
    custom: Vec<String>,
    errors: Vec<PropError>,
}

impl ClassList {
    /// Starts a list with the component's Bulma base class.
    pub fn new(component: &'static str, base: &str) -> Self {
        Self {
            component,
            library: vec![base.to_string()],
            custom: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Appends `class` when `enabled`.
    pub fn flag(mut self, class: &str, enabled: bool) -> Self {
        if enabled {
            self.library.push(class.to_string());
        }
        self
    }

    /// Appends `{prefix}{token}` for a recognized modifier and records an error otherwise.
    pub fn modifier<T: ModifierToken>(mut self, prefix: &str, value: Option<&Modifier<T>>) -> Self {
        if let Some(value) = value {
            match value.validate(self.component) {
                Ok(value) => self.library.push(format!("{prefix}{}", value.token())),
                Err(err) => self.errors.push(err),
            }
        }
        self
    }

    /// Appends caller-supplied classes after every library class.
    pub fn custom(mut self, class: Option<&str>) -> Self {
        if let Some(class) = class {
            self.custom
                .extend(class.split_whitespace().map(str::to_string));
        }
        self
    }

    /// Untransformed classes in output order.
    pub fn tokens(&self) -> Vec<String> {
        self.library
            .iter()
            .chain(self.custom.iter())
            .cloned()
            .collect()
    }

    /// Invalid modifier values seen while building the list.
    pub fn errors(&self) -> &[PropError] {
        &self.errors
    }

    /// Logs every recorded error.
    pub fn report(&self) {
        for err in &self.errors {
            report(err);
        }
    }

    /// Renders the `class` attribute value.
    pub fn render(&self, theme: &Theme) -> String {
        self.library
            .iter()
            .map(|class| theme.transform(class))
            .chain(self.custom.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered inline-style declarations.
pub struct Style(Vec<(String, String)>);

impl Style {
    /// Parses `property: value; property: value` declarations. Malformed entries are skipped.
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(';')
                .filter_map(|declaration| {
                    let (property, value) = declaration.split_once(':')?;
                    let (property, value) = (property.trim(), value.trim());
                    if property.is_empty() || value.is_empty() {
                        return None;
                    }
                    Some((property.to_string(), value.to_string()))
                })
                .collect(),
        )
    }

    /// Value for `property`, if declared.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Declarations in order.
    pub fn declarations(&self) -> &[(String, String)] {
        &self.0
    }

    /// Applies `other` on top: repeated properties take its value in place, new ones are appended.
    pub fn overlay(mut self, other: Style) -> Self {
        for (property, value) in other.0 {
            match self.0.iter_mut().find(|(name, _)| *name == property) {
                Some(existing) => existing.1 = value,
                None => self.0.push((property, value)),
            }
        }
        self
    }
}

impl From<&str> for Style {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for Style {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Style {
    fn from(declarations: [(&str, &str); N]) -> Self {
        Self(
            declarations
                .into_iter()
                .map(|(property, value)| (property.to_string(), value.to_string()))
                .collect(),
        )
    }
}

/// Renders `required` followed by the caller's declarations.
///
/// Required declarations always win: a caller declaration for the same
/// property is dropped.
pub fn merge_style(required: &[(&str, &str)], caller: Option<&Style>) -> String {
    let caller = caller
        .map(Style::declarations)
        .unwrap_or_default()
        .iter()
        .filter(|(property, _)| !required.iter().any(|(name, _)| name == property))
        .map(|(property, value)| format!("{property}: {value}"));

    required
        .iter()
        .map(|(property, value)| format!("{property}: {value}"))
        .chain(caller)
        .collect::<Vec<_>>()
        .join("; ")
}
