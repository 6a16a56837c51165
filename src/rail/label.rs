//! Label visibility modes and the label fade curve.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which destinations show their label.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum LabelType {
    /// Icons only; labels never shown.
    None,
    /// Only the selected destination shows its label, fading with progress.
    #[default]
    Selected,
    /// Every destination always shows its label.
    All,
}

/// Label opacity for one destination.
///
/// For [`LabelType::Selected`] the curve is piecewise on raw progress `p`:
///
/// - selected: 0 below 0.25, `(p - 0.25) * 2` up to 0.75, then 1
/// - not selected: 0 up to and including 0.75, then `(p - 0.75) * 4`
///
/// The unselected branch is the first quarter of the reverse playback
/// (`q = 1 - p` in `[0, 0.25)` maps to `1 - 4q`), written on raw progress.
#[must_use]
pub fn label_opacity(progress: f32, selected: bool, label_type: LabelType) -> f32 {
    match label_type {
        LabelType::None => 0.0,
        LabelType::All => 1.0,
        LabelType::Selected if selected => {
            if progress < 0.25 {
                0.0
            } else if progress < 0.75 {
                (progress - 0.25) * 2.0
            } else {
                1.0
            }
        }
        LabelType::Selected => {
            if progress <= 0.75 {
                0.0
            } else {
                ((progress - 0.75) * 4.0).min(1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_boundaries() {
        let op = |p| label_opacity(p, true, LabelType::Selected);
        assert_eq!(op(0.0), 0.0);
        assert_eq!(op(0.2), 0.0);
        assert_eq!(op(0.25), 0.0);
        assert_eq!(op(0.5), 0.5);
        assert_eq!(op(0.75), 1.0);
        assert_eq!(op(1.0), 1.0);
    }

    #[test]
    fn unselected_fades_in_last_quarter_of_progress() {
        let op = |p| label_opacity(p, false, LabelType::Selected);
        assert_eq!(op(0.0), 0.0);
        assert_eq!(op(0.75), 0.0);
        assert_eq!(op(0.875), 0.5);
        assert_eq!(op(1.0), 1.0);
    }

    #[test]
    fn all_and_none_ignore_progress() {
        for p in [0.0, 0.25, 0.5, 0.75, 1.0] {
            for selected in [true, false] {
                assert_eq!(label_opacity(p, selected, LabelType::All), 1.0);
                assert_eq!(label_opacity(p, selected, LabelType::None), 0.0);
            }
        }
    }
}
