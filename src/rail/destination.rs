//! Rail of opaque destinations driven by a [`RailSelection`].

use std::time::Duration;

use super::clock::elapsed_fraction;
use super::label::{label_opacity, LabelType};
use super::selection::{ItemPhase, RailSelection};
use crate::error::RailError;
use crate::options::RailOptions;

/// One selectable rail entry.
///
/// `T` is whatever the host renders (icon handles, widget ids, strings).
/// The rail only hands references back; it never looks inside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination<T> {
    /// Icon shown while unselected.
    pub icon: T,
    /// Icon shown while selected, if different.
    pub selected_icon: Option<T>,
    /// Label content.
    pub label: T,
}

impl<T> Destination<T> {
    /// Destination using the same icon in both states.
    pub fn new(icon: T, label: T) -> Self {
        Self {
            icon,
            selected_icon: None,
            label,
        }
    }

    /// Set a distinct icon for the selected state.
    #[must_use]
    pub fn with_selected_icon(mut self, icon: T) -> Self {
        self.selected_icon = Some(icon);
        self
    }
}

/// Per-frame render data for one destination.
#[derive(Debug, Clone, Copy)]
pub struct RailItemView<'a, T> {
    /// Position in the rail.
    pub index: usize,
    /// The host's destination content.
    pub destination: &'a Destination<T>,
    /// Whether this is the selected destination.
    pub selected: bool,
    /// Raw selection progress in `[0, 1]`.
    pub progress: f32,
    /// Progress after the configured easing curve.
    pub eased_progress: f32,
    /// Label opacity in `[0, 1]`.
    pub label_opacity: f32,
    /// Lifecycle phase; `None` while a structural reset is pending and
    /// this destination has no state yet.
    pub phase: Option<ItemPhase>,
}

impl<'a, T> RailItemView<'a, T> {
    /// Icon to draw: the selected variant when selected and present.
    #[must_use]
    pub fn icon(&self) -> &'a T {
        match (&self.destination.selected_icon, self.selected) {
            (Some(icon), true) => icon,
            _ => &self.destination.icon,
        }
    }

    /// Label content.
    #[must_use]
    pub fn label(&self) -> &'a T {
        &self.destination.label
    }
}

/// Navigation rail: destinations plus their selection animation.
#[derive(Debug, Clone)]
pub struct Rail<T> {
    destinations: Vec<Destination<T>>,
    selection: RailSelection,
    options: RailOptions,
}

impl<T> Rail<T> {
    /// Build a rail with `selected` resting fully selected.
    pub fn new(
        destinations: Vec<Destination<T>>,
        selected: usize,
        options: RailOptions,
    ) -> Result<Self, RailError> {
        let selection = RailSelection::configured(destinations.len(), selected)?;
        Ok(Self {
            destinations,
            selection,
            options,
        })
    }

    /// Replace the destination list.
    ///
    /// A different length resets all progress at the next
    /// [`select`](Self::select); the same length keeps in-flight playback.
    pub fn set_destinations(&mut self, destinations: Vec<Destination<T>>) {
        self.selection.set_destination_count(destinations.len());
        self.destinations = destinations;
    }

    /// Select destination `index`. See [`RailSelection::select`].
    pub fn select(&mut self, index: usize) -> Result<bool, RailError> {
        self.selection.select(index)
    }

    /// Advance playback by a fraction of the transition duration.
    pub fn tick(&mut self, elapsed_fraction: f32) -> bool {
        self.selection.tick(elapsed_fraction)
    }

    /// Advance playback by a frame delta, scaled by the configured
    /// transition duration.
    pub fn advance(&mut self, frame: Duration) -> bool {
        self.tick(elapsed_fraction(frame, self.options.transition()))
    }

    /// Replace the options. Takes effect on the next frame.
    pub fn set_options(&mut self, options: RailOptions) {
        self.options = options;
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &RailOptions {
        &self.options
    }

    /// Underlying selection state.
    #[must_use]
    pub fn selection(&self) -> &RailSelection {
        &self.selection
    }

    /// Selected destination index.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selection.selected()
    }

    /// Destinations in display order.
    #[must_use]
    pub fn destinations(&self) -> &[Destination<T>] {
        &self.destinations
    }

    /// Whether any destination is mid-transition.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.selection.is_animating()
    }

    /// Label mode actually in force; extended rails always show labels.
    #[must_use]
    pub fn effective_label_type(&self) -> LabelType {
        if self.options.extended {
            LabelType::All
        } else {
            self.options.label_type
        }
    }

    /// Render data for every destination, in order.
    pub fn items(&self) -> impl Iterator<Item = RailItemView<'_, T>> + '_ {
        let easing = self.options.curve.easing();
        let label_type = self.effective_label_type();
        let selected = self.selection.selected();
        self.destinations
            .iter()
            .enumerate()
            .map(move |(index, destination)| {
                let progress = self.selection.progress(index).unwrap_or(0.0);
                let is_selected = index == selected;
                RailItemView {
                    index,
                    destination,
                    selected: is_selected,
                    progress,
                    eased_progress: easing.evaluate(progress),
                    label_opacity: label_opacity(
                        progress,
                        is_selected,
                        label_type,
                    ),
                    phase: self.selection.phase(index),
                }
            })
    }
}
