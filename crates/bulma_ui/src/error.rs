//! Development-time diagnostics raised while composing components.

use leptos::logging;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Recoverable problems detected while rendering a component.
///
/// None of these abort rendering. They are logged through [`report`] and the
/// component falls back to a documented default.
pub enum PropError {
    /// A modifier property received a value outside its enumerated domain.
    #[error("`{component}`: invalid value `{value}` for prop `{prop}`, expected one of: {expected}")]
    InvalidValue {
        /// Component that received the value.
        component: &'static str,
        /// Property name.
        prop: &'static str,
        /// Raw value as supplied by the caller.
        value: String,
        /// Comma-separated list of accepted values.
        expected: String,
    },
    /// A context-consuming leaf was rendered outside its family container.
    #[error("`{component}` rendered outside `{container}`, using the initial context")]
    MissingContext {
        /// Leaf component name.
        component: &'static str,
        /// Container that should have provided the context.
        container: &'static str,
    },
}

/// Logs a recoverable component diagnostic.
pub fn report(err: &PropError) {
    logging::warn!("{err}");
}
