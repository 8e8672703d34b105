use crate::geometry::{self, ArcSpan, Circle, Point};
use crate::item::{ItemEvent, ItemId, ItemLabel, PickerItem};
use crate::listener::{ListenerId, Listeners, PickerListener};
use crate::style::{ActivationPolicy, Style};
use std::time::Instant;

/// A ring of picker items sharing one circle and one orbit track.
///
/// Owns the mutable per-item state and forwards item transitions to its listeners after
/// applying its own reaction: starting a drag hides the other items, and the end of the
/// release animation brings them all back.
#[derive(Debug)]
pub struct Picker {
    style: Style,
    items: Vec<PickerItem>,
    circle: Circle,
    active: Option<usize>,
    listeners: Listeners,
}

impl Picker {
    pub fn new(style: Style, labels: impl IntoIterator<Item = ItemLabel>) -> Self {
        let items = labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| PickerItem::new(ItemId::from(i), label))
            .collect();
        Self {
            style,
            items,
            circle: Circle::default(),
            active: None,
            listeners: Listeners::default(),
        }
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn items(&self) -> &[PickerItem] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&PickerItem> {
        self.items.get(id.index())
    }

    pub fn circle(&self) -> Circle {
        self.circle
    }

    /// The full-circle track behind the items.
    pub fn orbit(&self) -> ArcSpan {
        ArcSpan::full(self.style.start_angle)
    }

    pub fn active_item(&self) -> Option<&PickerItem> {
        self.active.and_then(|i| self.items.get(i))
    }

    pub fn add_listener(&mut self, listener: impl PickerListener + 'static) -> ListenerId {
        self.listeners.add(listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn has_listener(&self, id: ListenerId) -> bool {
        self.listeners.contains(id)
    }

    /// Lays the items out around `circle`, splitting the configured angle range evenly.
    pub fn layout(&mut self, circle: Circle) {
        self.circle = circle;
        if self.items.is_empty() {
            log::debug!("layout skipped: picker has no items");
            return;
        }

        let spans = geometry::partition_circle(
            self.style.start_angle,
            self.style.end_angle,
            self.items.len(),
        );
        for (item, span) in self.items.iter_mut().zip(spans) {
            item.set_geometry(span, self.style.stroke_width, circle);
        }
        log::debug!(
            "laid out {} items on radius {:.1}",
            self.items.len(),
            circle.radius()
        );
    }

    /// Starts a drag on the item under `point`. Returns whether the touch was taken.
    pub fn touch_down(&mut self, point: Point) -> bool {
        if self.active.is_some() {
            return false;
        }

        let min_touch_target = self.style.min_touch_target_px();
        let Some(index) = self
            .items
            .iter()
            .position(|item| item.is_interactive() && item.touch_in_range(point, min_touch_target))
        else {
            return false;
        };

        let item = &mut self.items[index];
        match self.style.activation {
            ActivationPolicy::TouchDown => item.enable_seek_overlay(),
            ActivationPolicy::Host if !item.seek().enabled => {
                log::trace!("touch on item {} ignored: overlay not enabled", item.id());
                return false;
            }
            ActivationPolicy::Host => {}
        }

        let mut events = Vec::new();
        let angle = item.touch_angle(point);
        item.start_tracking(angle, &mut events);
        self.active = Some(index);
        self.dispatch(events);
        true
    }

    pub fn touch_move(&mut self, point: Point) -> bool {
        let Some(item) = self.active.and_then(|i| self.items.get_mut(i)) else {
            return false;
        };

        let mut events = Vec::new();
        let angle = item.touch_angle(point);
        item.track(angle, &mut events);
        self.dispatch(events);
        true
    }

    pub fn touch_up(&mut self, now: Instant) -> bool {
        let Some(item) = self.active.take().and_then(|i| self.items.get_mut(i)) else {
            return false;
        };

        let mut events = Vec::new();
        item.stop_tracking(
            now,
            self.style.animation_duration(),
            self.style.hide_delay(),
            &mut events,
        );
        self.dispatch(events);
        true
    }

    /// Host-driven activation of an item's seek overlay.
    pub fn enable_seek_overlay(&mut self, id: ItemId) -> bool {
        match self.items.get_mut(id.index()) {
            Some(item) if item.is_interactive() => {
                item.enable_seek_overlay();
                true
            }
            _ => false,
        }
    }

    /// Enables the overlay of whichever item lies under `point`.
    pub fn enable_seek_overlay_at(&mut self, point: Point) -> Option<ItemId> {
        let min_touch_target = self.style.min_touch_target_px();
        let item = self
            .items
            .iter_mut()
            .find(|item| item.is_interactive() && item.touch_in_range(point, min_touch_target))?;
        item.enable_seek_overlay();
        Some(item.id())
    }

    pub fn set_progress(&mut self, id: ItemId, progress: f64) -> bool {
        let Some(item) = self.items.get_mut(id.index()) else {
            return false;
        };

        let mut events = Vec::new();
        item.set_progress(progress, &mut events);
        self.dispatch(events);
        true
    }

    pub fn reset(&mut self) {
        let mut events = Vec::new();
        for item in &mut self.items {
            item.set_progress(0.0, &mut events);
        }
        self.dispatch(events);
    }

    /// Advances animations and pending hides. Returns whether a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let hide_delay = self.style.hide_delay();
        let mut events = Vec::new();
        let changed = self
            .items
            .iter_mut()
            .fold(false, |changed, item| item.tick(now, hide_delay, &mut events) || changed);
        self.dispatch(events);
        changed
    }

    pub fn needs_tick(&self) -> bool {
        self.items.iter().any(PickerItem::needs_tick)
    }

    fn dispatch(&mut self, events: Vec<ItemEvent>) {
        for event in events {
            self.react(&event);
            self.listeners.notify(&event);
        }
    }

    fn react(&mut self, event: &ItemEvent) {
        match *event {
            ItemEvent::TrackingStarted(id) => {
                for item in self.items.iter_mut().filter(|item| item.id() != id) {
                    item.visible = false;
                    item.enabled = false;
                }
            }
            ItemEvent::AnimationEnded(_) => {
                for item in &mut self.items {
                    item.visible = true;
                    item.enabled = true;
                }
            }
            ItemEvent::ProgressChanged { .. } | ItemEvent::TrackingStopped(_) => {}
        }
    }
}
