#![forbid(unsafe_code)]

//! Value ownership.
//!
//! A slider is either *controlled* (the host supplies the value on every
//! render and decides whether to accept changes) or *uncontrolled* (the
//! slider owns its value). [`ValueStore`] resolves the two in one place:
//! every candidate is normalized, and the store reports what it would commit
//! without ever overriding an external value.

use serde::{Deserialize, Serialize};
use slidekit_core::NormalizedConfig;

use crate::value::SliderValue;

/// Who owns the committed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSource {
    Controlled,
    Uncontrolled,
}

/// Outcome of one store mutation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoreCommit<V> {
    /// Normalized candidate; this is what `on_change` reports.
    pub value: V,
    pub source: ValueSource,
    /// Whether local state now holds `value`. Always `false` when controlled.
    pub applied: bool,
}

/// Single owner of a slider's committed value.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueStore<V> {
    internal: V,
    external: Option<V>,
}

impl<V: SliderValue> ValueStore<V> {
    /// Store owning `value`.
    #[must_use]
    pub fn uncontrolled(value: V, config: &NormalizedConfig) -> Self {
        Self {
            internal: value.normalize(config),
            external: None,
        }
    }

    /// Store mirroring a host-owned `value`.
    #[must_use]
    pub fn controlled(value: V, config: &NormalizedConfig) -> Self {
        let value = value.normalize(config);
        Self {
            internal: value,
            external: Some(value),
        }
    }

    /// Resolve construction props: `value` wins over `default_value`.
    #[must_use]
    pub fn new(value: Option<V>, default_value: V, config: &NormalizedConfig) -> Self {
        match value {
            Some(value) => Self::controlled(value, config),
            None => Self::uncontrolled(default_value, config),
        }
    }

    #[must_use]
    pub const fn source(&self) -> ValueSource {
        if self.external.is_some() {
            ValueSource::Controlled
        } else {
            ValueSource::Uncontrolled
        }
    }

    /// Value the slider should render.
    #[must_use]
    pub fn current(&self) -> V {
        self.external.unwrap_or(self.internal)
    }

    /// Propose `candidate` as the new value.
    ///
    /// Uncontrolled stores commit the normalized candidate. Controlled stores
    /// keep rendering the external value and only report the candidate.
    pub fn set_value(&mut self, candidate: V, config: &NormalizedConfig) -> StoreCommit<V> {
        let value = candidate.normalize(config);
        let source = self.source();
        let applied = match source {
            ValueSource::Controlled => false,
            ValueSource::Uncontrolled => {
                self.internal = value;
                true
            }
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            message = "slider.store.commit",
            source = ?source,
            applied,
            value = ?value
        );

        StoreCommit {
            value,
            source,
            applied,
        }
    }

    /// Host re-render: adopt a new external value, or hand ownership back
    /// to the internal value with `None`.
    ///
    /// Releasing control keeps the last rendered value so the slider does not
    /// jump.
    pub fn sync_external(&mut self, external: Option<V>, config: &NormalizedConfig) {
        match external {
            Some(value) => self.external = Some(value.normalize(config)),
            None => {
                if let Some(last) = self.external.take() {
                    self.internal = last;
                }
            }
        }
    }

    /// Re-apply `config` to stored values after a configuration change.
    pub fn renormalize(&mut self, config: &NormalizedConfig) {
        self.internal = self.internal.normalize(config);
        self.external = self.external.map(|value| value.normalize(config));
    }
}
