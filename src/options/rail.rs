use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::rail::LabelType;
use crate::util::easing::Curve;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Rail", inline)]
#[serde(default)]
/// Navigation rail animation and label parameters.
pub struct RailOptions {
    /// Length of one full selection transition in milliseconds.
    #[schemars(title = "Transition (ms)", range(min = 0, max = 2000), extend("step" = 10))]
    pub transition_ms: u64,
    /// Which destinations show labels.
    #[schemars(title = "Labels")]
    pub label_type: LabelType,
    /// Easing applied to progress for icon motion.
    #[schemars(title = "Curve")]
    pub curve: Curve,
    /// Extended rails always show every label.
    #[schemars(title = "Extended")]
    pub extended: bool,
}

impl RailOptions {
    /// Transition length as a [`Duration`].
    #[must_use]
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

impl Default for RailOptions {
    fn default() -> Self {
        Self {
            transition_ms: 200,
            label_type: LabelType::Selected,
            curve: Curve::EaseInOut,
            extended: false,
        }
    }
}
