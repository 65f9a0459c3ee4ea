#![forbid(unsafe_code)]

//! ARIA value attributes for one handle (`role="slider"`).

use slidekit_core::NormalizedConfig;
use slidekit_engine::{MarkSet, TooltipPresenter};

/// Attributes a host copies onto a handle element.
#[derive(Debug, Clone, PartialEq)]
pub struct AriaValue {
    /// `aria-valuenow`
    pub value_now: f64,
    /// `aria-valuemin`
    pub value_min: f64,
    /// `aria-valuemax`
    pub value_max: f64,
    /// `aria-valuetext`
    pub value_text: String,
    /// `aria-orientation`
    pub orientation: &'static str,
    /// `aria-disabled`
    pub disabled: bool,
}

impl AriaValue {
    /// Attributes for a handle at `value`.
    ///
    /// Range handles report their partner as the bound they cannot cross, so
    /// pass the partner's value as `value_min` / `value_max` where relevant.
    #[must_use]
    pub fn new(
        value: f64,
        value_min: f64,
        value_max: f64,
        config: &NormalizedConfig,
        marks: &MarkSet,
    ) -> Self {
        Self {
            value_now: value,
            value_min,
            value_max,
            value_text: TooltipPresenter::label(value, config, marks),
            orientation: config.orientation().as_aria(),
            disabled: config.disabled(),
        }
    }

    /// `(name, value)` pairs ready to set on an element.
    #[must_use]
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("aria-valuenow", self.value_now.to_string()),
            ("aria-valuemin", self.value_min.to_string()),
            ("aria-valuemax", self.value_max.to_string()),
            ("aria-valuetext", self.value_text.clone()),
            ("aria-orientation", self.orientation.to_owned()),
            ("aria-disabled", self.disabled.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidekit_core::{Orientation, SliderConfig};

    #[test]
    fn attributes_follow_config() {
        let (config, _) = SliderConfig::new()
            .range(0.0, 1.0)
            .step(0.1)
            .orientation(Orientation::Vertical)
            .disabled(true)
            .normalize();
        let aria = AriaValue::new(0.3, 0.0, 1.0, &config, &MarkSet::new());
        assert_eq!(aria.value_text, "0.3");
        assert_eq!(aria.orientation, "vertical");
        let attributes = aria.attributes();
        assert!(attributes.contains(&("aria-disabled", "true".to_owned())));
        assert!(attributes.contains(&("aria-valuemax", "1".to_owned())));
    }
}
