use crate::item::{ItemEvent, ItemId};
use derive_more::{Display, From, Into};

/// Observer of picker item transitions. Every callback has an empty default.
pub trait PickerListener {
    fn on_progress_changed(&mut self, _item: ItemId, _progress: f64, _from_user: bool) {}

    fn on_start_tracking(&mut self, _item: ItemId) {}

    fn on_stop_tracking(&mut self, _item: ItemId) {}

    fn on_end_tracking_animation(&mut self, _item: ItemId) {}
}

impl<F> PickerListener for F
where
    F: FnMut(&ItemEvent),
{
    fn on_progress_changed(&mut self, item: ItemId, progress: f64, from_user: bool) {
        self(&ItemEvent::ProgressChanged {
            item,
            progress,
            from_user,
        });
    }

    fn on_start_tracking(&mut self, item: ItemId) {
        self(&ItemEvent::TrackingStarted(item));
    }

    fn on_stop_tracking(&mut self, item: ItemId) {
        self(&ItemEvent::TrackingStopped(item));
    }

    fn on_end_tracking_animation(&mut self, item: ItemId) {
        self(&ItemEvent::AnimationEnded(item));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into)]
pub struct ListenerId(u64);

/// Listeners notified in registration order.
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Box<dyn PickerListener>)>,
}

impl Listeners {
    pub fn add(&mut self, listener: impl PickerListener + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }

    pub fn notify(&mut self, event: &ItemEvent) {
        for (_, listener) in &mut self.entries {
            match *event {
                ItemEvent::ProgressChanged {
                    item,
                    progress,
                    from_user,
                } => listener.on_progress_changed(item, progress, from_user),
                ItemEvent::TrackingStarted(item) => listener.on_start_tracking(item),
                ItemEvent::TrackingStopped(item) => listener.on_stop_tracking(item),
                ItemEvent::AnimationEnded(item) => listener.on_end_tracking_animation(item),
            }
        }
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
