//! Per-destination selection progress and its playback state machine.

use super::label::{label_opacity, LabelType};
use crate::error::RailError;

/// Playback direction of one destination's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Sitting at a resting bound (0 or 1).
    #[default]
    Resting,
    /// Moving toward 1 (becoming selected).
    Advancing,
    /// Moving toward 0 (becoming unselected).
    Retreating,
}

/// Where a destination sits in its selection lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPhase {
    /// Progress 0, not animating.
    RestingUnselected,
    /// Playing forward toward 1.
    Advancing,
    /// Progress 1, not animating.
    RestingSelected,
    /// Playing in reverse toward 0.
    Retreating,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ItemState {
    progress: f32,
    direction: Direction,
}

impl ItemState {
    const UNSELECTED: Self = Self {
        progress: 0.0,
        direction: Direction::Resting,
    };
    const SELECTED: Self = Self {
        progress: 1.0,
        direction: Direction::Resting,
    };

    fn advance_toward(&mut self) {
        self.direction = if self.progress < 1.0 {
            Direction::Advancing
        } else {
            Direction::Resting
        };
    }

    fn retreat(&mut self) {
        self.direction = if self.progress > 0.0 {
            Direction::Retreating
        } else {
            Direction::Resting
        };
    }

    /// Step by `step` (> 0) toward the current target. Returns whether
    /// progress moved.
    fn step(&mut self, step: f32) -> bool {
        let (next, arrived) = match self.direction {
            Direction::Resting => return false,
            Direction::Advancing => {
                let next = (self.progress + step).min(1.0);
                (next, next >= 1.0)
            }
            Direction::Retreating => {
                let next = (self.progress - step).max(0.0);
                (next, next <= 0.0)
            }
        };
        // only the bound being approached ends playback
        if arrived {
            self.direction = Direction::Resting;
        }
        let moved = next != self.progress;
        self.progress = next;
        moved
    }

    fn phase(self) -> ItemPhase {
        match self.direction {
            Direction::Advancing => ItemPhase::Advancing,
            Direction::Retreating => ItemPhase::Retreating,
            Direction::Resting if self.progress >= 1.0 => {
                ItemPhase::RestingSelected
            }
            Direction::Resting => ItemPhase::RestingUnselected,
        }
    }
}

fn check_index(index: usize, bound: usize) -> Result<(), RailError> {
    if index < bound {
        Ok(())
    } else {
        Err(RailError::InvalidIndex { index, bound })
    }
}

/// Selection state machine for a navigation rail.
///
/// Holds one progress value in `[0, 1]` per destination. The selected
/// destination plays forward toward 1, the previously selected one plays in
/// reverse toward 0, and everything else rests at 0. Time only moves through
/// [`tick`](Self::tick), so the whole machine is driven by the host's frame
/// loop and is deterministic under test.
///
/// When the destination count supplied by the host no longer matches the
/// allocated state, the next [`select`](Self::select) discards every
/// progress value and snaps the new selection to 1 rather than cross-fading
/// between structurally different lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RailSelection {
    items: Vec<ItemState>,
    selected: usize,
    destination_count: usize,
}

impl RailSelection {
    /// Unconfigured selection with no destinations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate `destination_count` items with `selected` resting at 1 and
    /// all others at 0.
    pub fn configured(
        destination_count: usize,
        selected: usize,
    ) -> Result<Self, RailError> {
        let mut selection = Self::new();
        selection.configure(destination_count, selected)?;
        Ok(selection)
    }

    /// Reset to `destination_count` resting items with `selected` at 1.
    ///
    /// Fails without touching state if `selected` is out of range.
    pub fn configure(
        &mut self,
        destination_count: usize,
        selected: usize,
    ) -> Result<(), RailError> {
        check_index(selected, destination_count)?;
        self.reset(destination_count, selected);
        Ok(())
    }

    fn reset(&mut self, destination_count: usize, selected: usize) {
        self.items.clear();
        self.items
            .resize(destination_count, ItemState::UNSELECTED);
        self.items[selected] = ItemState::SELECTED;
        self.selected = selected;
        self.destination_count = destination_count;
    }

    /// Record the host's current destination count.
    ///
    /// Progress is left untouched; a changed count takes effect at the next
    /// [`select`](Self::select).
    pub fn set_destination_count(&mut self, destination_count: usize) {
        if destination_count != self.destination_count {
            log::debug!(
                "rail destination count {} -> {destination_count}, reset \
                 pending",
                self.destination_count
            );
        }
        self.destination_count = destination_count;
    }

    /// Select destination `index`.
    ///
    /// Returns whether any state changed. Re-selecting the current
    /// destination is a no-op; a destination caught mid-flight keeps moving
    /// from wherever it sits. Any destination still retreating from an
    /// earlier selection is snapped to rest, so at most one item advances
    /// and one retreats.
    pub fn select(&mut self, index: usize) -> Result<bool, RailError> {
        check_index(index, self.destination_count)?;

        if self.destination_count != self.items.len() {
            log::debug!(
                "rail structure changed ({} -> {} destinations), snapping \
                 to {index}",
                self.items.len(),
                self.destination_count
            );
            self.reset(self.destination_count, index);
            return Ok(true);
        }

        let previous = self.selected;
        if index == previous {
            return Ok(false);
        }

        for (i, item) in self.items.iter_mut().enumerate() {
            if i != previous
                && i != index
                && item.direction == Direction::Retreating
            {
                *item = ItemState::UNSELECTED;
            }
        }
        self.items[previous].retreat();
        self.items[index].advance_toward();
        self.selected = index;

        log::debug!(
            "rail selection {previous} -> {index} (from progress {:.3} / \
             {:.3})",
            self.items[previous].progress,
            self.items[index].progress
        );
        Ok(true)
    }

    /// Advance every animating item by `elapsed_fraction` of the transition
    /// duration.
    ///
    /// Progress is clamped to `[0, 1]` and an item stops animating exactly
    /// at its bound. Returns `true` if any progress changed, so the host can
    /// skip re-rendering otherwise. Negative fractions are treated as zero.
    pub fn tick(&mut self, elapsed_fraction: f32) -> bool {
        if !elapsed_fraction.is_finite() {
            log::warn!("ignoring non-finite rail tick {elapsed_fraction}");
            return false;
        }
        if elapsed_fraction <= 0.0 {
            return false;
        }

        let mut dirty = false;
        for item in &mut self.items {
            dirty |= item.step(elapsed_fraction);
        }
        if dirty {
            log::trace!("rail tick {elapsed_fraction:.4}");
        }
        dirty
    }

    /// Index of the selected destination.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Number of allocated items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no items are allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Destination count last supplied by the host.
    #[must_use]
    pub fn destination_count(&self) -> usize {
        self.destination_count
    }

    /// Whether a structural reset is waiting for the next selection.
    #[must_use]
    pub fn is_reset_pending(&self) -> bool {
        self.destination_count != self.items.len()
    }

    /// Raw progress of item `index`.
    #[must_use]
    pub fn progress(&self, index: usize) -> Option<f32> {
        self.items.get(index).map(|item| item.progress)
    }

    /// Playback direction of item `index`.
    #[must_use]
    pub fn direction(&self, index: usize) -> Option<Direction> {
        self.items.get(index).map(|item| item.direction)
    }

    /// Lifecycle phase of item `index`.
    #[must_use]
    pub fn phase(&self, index: usize) -> Option<ItemPhase> {
        self.items.get(index).map(|item| item.phase())
    }

    /// Whether any item is between bounds.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.items
            .iter()
            .any(|item| item.direction != Direction::Resting)
    }

    /// Label opacity for item `index` under `label_type`.
    pub fn label_opacity(
        &self,
        index: usize,
        label_type: LabelType,
    ) -> Result<f32, RailError> {
        let item = self.items.get(index).ok_or(RailError::InvalidIndex {
            index,
            bound: self.items.len(),
        })?;
        Ok(label_opacity(item.progress, index == self.selected, label_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 12.0;

    fn settle(sel: &mut RailSelection) -> usize {
        let mut frames = 0;
        while sel.tick(FRAME) {
            frames += 1;
            assert!(frames < 1000, "selection never settled");
        }
        frames
    }

    fn progresses(sel: &RailSelection) -> Vec<f32> {
        (0..sel.len()).filter_map(|i| sel.progress(i)).collect()
    }

    #[test]
    fn configure_sets_resting_bounds() {
        let sel = RailSelection::configured(4, 2).unwrap();
        assert_eq!(progresses(&sel), [0.0, 0.0, 1.0, 0.0]);
        assert_eq!(sel.selected(), 2);
        assert_eq!(sel.phase(2), Some(ItemPhase::RestingSelected));
        assert_eq!(sel.phase(0), Some(ItemPhase::RestingUnselected));
        assert!(!sel.is_animating());
    }

    #[test]
    fn configure_rejects_out_of_range() {
        assert_eq!(
            RailSelection::configured(3, 3),
            Err(RailError::InvalidIndex { index: 3, bound: 3 })
        );
        assert_eq!(
            RailSelection::configured(0, 0),
            Err(RailError::InvalidIndex { index: 0, bound: 0 })
        );

        let mut sel = RailSelection::configured(3, 1).unwrap();
        let before = sel.clone();
        assert!(sel.configure(2, 5).is_err());
        assert_eq!(sel, before);
    }

    #[test]
    fn ticks_without_selection_keep_bounds() {
        let mut sel = RailSelection::configured(3, 1).unwrap();
        for _ in 0..50 {
            assert!(!sel.tick(0.1));
        }
        assert_eq!(progresses(&sel), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn transition_completes_exactly() {
        let mut sel = RailSelection::configured(3, 0).unwrap();
        assert!(sel.select(2).unwrap());
        assert_eq!(sel.phase(0), Some(ItemPhase::Retreating));
        assert_eq!(sel.phase(2), Some(ItemPhase::Advancing));

        assert!(sel.tick(0.3));
        let p0 = sel.progress(0).unwrap();
        let p2 = sel.progress(2).unwrap();
        assert!((p0 - 0.7).abs() < 1e-6);
        assert!((p2 - 0.3).abs() < 1e-6);

        let _ = settle(&mut sel);
        assert_eq!(progresses(&sel), [0.0, 0.0, 1.0]);
        assert!(!sel.is_animating());
        assert_eq!(sel.phase(2), Some(ItemPhase::RestingSelected));
    }

    #[test]
    fn oversized_tick_does_not_overshoot() {
        let mut sel = RailSelection::configured(2, 0).unwrap();
        let _ = sel.select(1).unwrap();
        assert!(sel.tick(5.0));
        assert_eq!(progresses(&sel), [0.0, 1.0]);
        assert!(!sel.tick(5.0));
    }

    #[test]
    fn sub_ulp_tick_keeps_outgoing_item_retreating() {
        let mut sel = RailSelection::configured(2, 0).unwrap();
        let _ = sel.select(1).unwrap();

        // too small to move 1.0 downward in f32
        let _ = sel.tick(1e-8);
        assert_eq!(sel.progress(0), Some(1.0));
        assert_eq!(sel.phase(0), Some(ItemPhase::Retreating));
        assert!(sel.is_animating());

        let _ = settle(&mut sel);
        assert_eq!(progresses(&sel), [0.0, 1.0]);
        assert_eq!(sel.phase(0), Some(ItemPhase::RestingUnselected));
        assert_eq!(sel.label_opacity(0, LabelType::Selected), Ok(0.0));
    }

    #[test]
    fn sub_ulp_tick_keeps_incoming_item_advancing() {
        let mut sel = RailSelection::configured(2, 0).unwrap();
        let _ = sel.select(1).unwrap();
        let _ = sel.tick(0.5);
        let _ = sel.select(0).unwrap();
        let _ = settle(&mut sel);
        assert_eq!(progresses(&sel), [1.0, 0.0]);

        // incoming item starting from 0 must not stop on a tiny step either
        let _ = sel.select(1).unwrap();
        let _ = sel.tick(1e-30);
        assert_eq!(sel.phase(1), Some(ItemPhase::Advancing));
        let _ = settle(&mut sel);
        assert_eq!(progresses(&sel), [0.0, 1.0]);
    }

    #[test]
    fn degenerate_ticks_are_ignored() {
        let mut sel = RailSelection::configured(2, 0).unwrap();
        let _ = sel.select(1).unwrap();
        assert!(!sel.tick(0.0));
        assert!(!sel.tick(-0.5));
        assert!(!sel.tick(f32::NAN));
        assert_eq!(progresses(&sel), [1.0, 0.0]);
    }

    #[test]
    fn reselecting_settled_index_is_noop() {
        let mut sel = RailSelection::configured(3, 1).unwrap();
        let before = sel.clone();
        assert!(!sel.select(1).unwrap());
        assert_eq!(sel, before);
    }

    #[test]
    fn reselect_mid_flight_continues() {
        let mut sel = RailSelection::configured(3, 0).unwrap();
        let _ = sel.select(1).unwrap();
        let _ = sel.tick(0.4);
        let mid = sel.progress(1).unwrap();
        assert!(mid > 0.0 && mid < 1.0);

        assert!(!sel.select(1).unwrap());
        assert_eq!(sel.progress(1), Some(mid));
        let _ = sel.tick(0.1);
        assert!(sel.progress(1).unwrap() > mid);
    }

    #[test]
    fn retarget_reverses_from_current_value() {
        let mut sel = RailSelection::configured(3, 0).unwrap();
        let _ = sel.select(1).unwrap();
        let _ = sel.tick(0.4);

        // back to 0 while 1 is mid-flight
        let _ = sel.select(0).unwrap();
        let p0 = sel.progress(0).unwrap();
        let p1 = sel.progress(1).unwrap();
        assert!((p0 - 0.6).abs() < 1e-6);
        assert!((p1 - 0.4).abs() < 1e-6);
        assert_eq!(sel.direction(0), Some(Direction::Advancing));
        assert_eq!(sel.direction(1), Some(Direction::Retreating));

        let _ = sel.tick(0.1);
        assert!(sel.progress(0).unwrap() > p0);
        assert!(sel.progress(1).unwrap() < p1);
    }

    #[test]
    fn stale_retreat_snaps_to_rest() {
        let mut sel = RailSelection::configured(3, 0).unwrap();
        let _ = sel.select(1).unwrap();
        let _ = sel.tick(0.2);
        let _ = sel.select(2).unwrap();

        assert_eq!(sel.phase(0), Some(ItemPhase::RestingUnselected));
        assert_eq!(sel.progress(0), Some(0.0));
        assert_eq!(sel.phase(1), Some(ItemPhase::Retreating));
        assert_eq!(sel.phase(2), Some(ItemPhase::Advancing));

        let advancing = (0..3)
            .filter(|&i| sel.phase(i) == Some(ItemPhase::Advancing))
            .count();
        let retreating = (0..3)
            .filter(|&i| sel.phase(i) == Some(ItemPhase::Retreating))
            .count();
        assert_eq!((advancing, retreating), (1, 1));
    }

    #[test]
    fn select_rejects_out_of_range_without_mutation() {
        let mut sel = RailSelection::configured(3, 0).unwrap();
        let _ = sel.select(1).unwrap();
        let _ = sel.tick(0.25);
        let before = sel.clone();
        assert_eq!(
            sel.select(3),
            Err(RailError::InvalidIndex { index: 3, bound: 3 })
        );
        assert_eq!(sel, before);
    }

    #[test]
    fn structural_change_resets_on_select() {
        let mut sel = RailSelection::configured(3, 0).unwrap();
        let _ = sel.select(1).unwrap();
        let _ = sel.tick(0.5);

        sel.set_destination_count(5);
        assert!(sel.is_reset_pending());
        // pending state still reports old progress
        assert_eq!(sel.len(), 3);

        assert!(sel.select(4).unwrap());
        assert!(!sel.is_reset_pending());
        assert_eq!(progresses(&sel), [0.0, 0.0, 0.0, 0.0, 1.0]);
        assert!(!sel.is_animating());
    }

    #[test]
    fn structural_change_validates_against_new_count() {
        let mut sel = RailSelection::configured(5, 4).unwrap();
        sel.set_destination_count(2);
        let before = sel.clone();
        assert_eq!(
            sel.select(4),
            Err(RailError::InvalidIndex { index: 4, bound: 2 })
        );
        assert_eq!(sel, before);

        // same index as before still resets to the new shape
        let mut sel = RailSelection::configured(3, 1).unwrap();
        sel.set_destination_count(2);
        assert!(sel.select(1).unwrap());
        assert_eq!(progresses(&sel), [0.0, 1.0]);
    }

    #[test]
    fn label_opacity_follows_progress() {
        let mut sel = RailSelection::configured(2, 0).unwrap();
        let mode = LabelType::Selected;
        assert_eq!(sel.label_opacity(0, mode), Ok(1.0));
        assert_eq!(sel.label_opacity(1, mode), Ok(0.0));

        let _ = sel.select(1).unwrap();
        let _ = sel.tick(0.5);
        // incoming label halfway up its ramp, outgoing already faded
        assert_eq!(sel.label_opacity(1, mode), Ok(0.5));
        assert_eq!(sel.label_opacity(0, mode), Ok(0.0));

        assert_eq!(sel.label_opacity(0, LabelType::All), Ok(1.0));
        assert_eq!(sel.label_opacity(1, LabelType::None), Ok(0.0));
        assert!(sel.label_opacity(2, mode).is_err());
    }

    #[test]
    fn settle_takes_one_transition() {
        let mut sel = RailSelection::configured(2, 0).unwrap();
        let _ = sel.select(1).unwrap();
        let frames = settle(&mut sel);
        assert!((12..=13).contains(&frames));
    }
}
