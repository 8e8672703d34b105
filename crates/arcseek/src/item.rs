use crate::animation::RotationAnimation;
use crate::geometry::{
    self, ArcSpan, Circle, FULL_CIRCLE, PROGRESS_PER_REVOLUTION, Point, hit_test, normalize,
};
use derive_more::{Display, From, Into};
use std::time::{Duration, Instant};

pub const MIN_PROGRESS: f64 = -100.0;
pub const MAX_PROGRESS: f64 = 100.0;

pub const DEFAULT_ITEM_START_ANGLE: f64 = 270.0 - 15.0;
pub const DEFAULT_ITEM_END_ANGLE: f64 = 270.0 + 15.0;
pub const DEFAULT_ITEM_STROKE_WIDTH: f64 = 48.0;

crate::string_newtype!(pub ItemLabel);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into)]
pub struct ItemId(usize);

impl ItemId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemEvent {
    ProgressChanged {
        item: ItemId,
        progress: f64,
        from_user: bool,
    },
    TrackingStarted(ItemId),
    TrackingStopped(ItemId),
    AnimationEnded(ItemId),
}

impl ItemEvent {
    pub fn item(&self) -> ItemId {
        match *self {
            Self::ProgressChanged { item, .. }
            | Self::TrackingStarted(item)
            | Self::TrackingStopped(item)
            | Self::AnimationEnded(item) => item,
        }
    }
}

pub fn clamp_progress(progress: f64) -> f64 {
    progress.clamp(MIN_PROGRESS, MAX_PROGRESS)
}

/// The circular seek ring shown over an item while it is dragged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeekOverlay {
    pub visible: bool,
    pub enabled: bool,
    /// Start angle of the ring; the pointer is drawn `progress` away from it.
    pub origin: f64,
    animation: Option<RotationAnimation>,
    hide_at: Option<Instant>,
}

impl SeekOverlay {
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn hide_pending(&self) -> bool {
        self.hide_at.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct PickerItem {
    id: ItemId,
    label: ItemLabel,
    span: ArcSpan,
    stroke_width: f64,
    circle: Circle,
    progress: f64,
    touch_start_progress: f64,
    last_touch_angle: Option<f64>,
    pub visible: bool,
    pub enabled: bool,
    seek: SeekOverlay,
}

impl PickerItem {
    pub fn new(id: ItemId, label: ItemLabel) -> Self {
        let mut item = Self {
            id,
            label,
            span: ArcSpan::new(DEFAULT_ITEM_START_ANGLE, DEFAULT_ITEM_END_ANGLE),
            stroke_width: DEFAULT_ITEM_STROKE_WIDTH,
            circle: Circle::default(),
            progress: 0.0,
            touch_start_progress: 0.0,
            last_touch_angle: None,
            visible: true,
            enabled: true,
            seek: SeekOverlay::default(),
        };
        item.snap_origin();
        item
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn label(&self) -> &ItemLabel {
        &self.label
    }

    pub fn span(&self) -> ArcSpan {
        self.span
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn circle(&self) -> Circle {
        self.circle
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn seek(&self) -> &SeekOverlay {
        &self.seek
    }

    pub fn is_tracking(&self) -> bool {
        self.last_touch_angle.is_some()
    }

    pub fn is_interactive(&self) -> bool {
        self.visible && self.enabled
    }

    pub fn center_angle(&self) -> f64 {
        self.span.center()
    }

    /// Resting position of the seek ring origin for the current progress.
    pub fn resting_origin(&self) -> f64 {
        geometry::progress_to_angle(self.center_angle(), self.progress)
    }

    pub fn pointer_angle(&self) -> f64 {
        geometry::pointer_angle(self.seek.origin, self.progress)
    }

    /// Where the item caption is drawn, on the ring at the arc center.
    pub fn label_position(&self) -> Point {
        Point::on_circle(
            self.circle.center,
            self.circle.radius(),
            self.center_angle(),
        )
    }

    pub fn set_geometry(&mut self, span: ArcSpan, stroke_width: f64, circle: Circle) {
        self.span = span;
        self.stroke_width = stroke_width;
        self.circle = circle;
        if !self.is_tracking() && !self.seek.is_animating() {
            self.snap_origin();
        }
    }

    pub fn touch_in_range(&self, point: Point, min_touch_target_px: f64) -> bool {
        let (dx, dy) = (point.x - self.circle.center.x, point.y - self.circle.center.y);
        hit_test(
            geometry::point_to_angle(dx, dy),
            point.distance_to(self.circle.center),
            &self.span,
            &self.circle,
            self.stroke_width,
            min_touch_target_px,
        )
    }

    /// Angle of `point` around this item's circle.
    pub fn touch_angle(&self, point: Point) -> f64 {
        geometry::point_to_angle(point.x - self.circle.center.x, point.y - self.circle.center.y)
    }

    pub fn enable_seek_overlay(&mut self) {
        self.seek.hide_at = None;
        self.seek.visible = true;
        self.seek.enabled = true;
    }

    /// Programmatic change; listeners see `from_user == false`.
    pub fn set_progress(&mut self, progress: f64, events: &mut Vec<ItemEvent>) {
        let progress = clamp_progress(progress);
        if progress == self.progress {
            return;
        }
        self.progress = progress;
        if !self.is_tracking() {
            self.touch_start_progress = progress;
            if !self.seek.is_animating() {
                self.snap_origin();
            }
        }
        events.push(ItemEvent::ProgressChanged {
            item: self.id,
            progress,
            from_user: false,
        });
    }

    pub fn start_tracking(&mut self, angle: f64, events: &mut Vec<ItemEvent>) {
        if let Some(animation) = self.seek.animation.take() {
            self.seek.origin = normalize(animation.target());
        }
        self.seek.hide_at = None;

        events.push(ItemEvent::TrackingStarted(self.id));
        self.touch_start_progress = self.progress;
        self.snap_origin();
        self.last_touch_angle = Some(angle);

        // the pointer jumps to the touch, taking the reading nearest the current value;
        // readings past either end are clamped so the lock holds
        let forward = normalize(angle - self.seek.origin) * PROGRESS_PER_REVOLUTION / FULL_CIRCLE;
        let jumped = (-2..=1)
            .map(|turns| forward + PROGRESS_PER_REVOLUTION * f64::from(turns))
            .min_by(|a, b| (a - self.progress).abs().total_cmp(&(b - self.progress).abs()))
            .unwrap_or(forward);
        log::trace!("item {} tracking from {:.1}°", self.id, angle);
        self.update_from_user(jumped, events);
    }

    /// Follows the drag by the shortest rotation since the previous touch, locking at the
    /// ends of the range instead of wrapping.
    pub fn track(&mut self, angle: f64, events: &mut Vec<ItemEvent>) {
        let Some(last) = self.last_touch_angle else {
            return;
        };
        self.last_touch_angle = Some(angle);
        let delta = geometry::signed_delta(last, angle) * PROGRESS_PER_REVOLUTION / FULL_CIRCLE;
        self.update_from_user(self.progress + delta, events);
    }

    pub fn stop_tracking(
        &mut self,
        now: Instant,
        duration: Duration,
        hide_delay: Duration,
        events: &mut Vec<ItemEvent>,
    ) {
        if self.last_touch_angle.take().is_none() {
            return;
        }
        self.seek.enabled = false;

        if self.progress != self.touch_start_progress {
            let clockwise = self.progress < self.touch_start_progress;
            let target = geometry::shortest_rotation_target(
                self.seek.origin,
                self.resting_origin(),
                clockwise,
            );
            log::debug!(
                "item {} rotating {:.1}° -> {:.1}° ({})",
                self.id,
                self.seek.origin,
                target,
                if clockwise { "cw" } else { "ccw" }
            );
            self.seek.animation = Some(RotationAnimation::new(
                self.seek.origin,
                target,
                now,
                duration,
            ));
        } else {
            self.snap_origin();
            self.schedule_hide(now + hide_delay);
        }

        self.touch_start_progress = self.progress;
        events.push(ItemEvent::TrackingStopped(self.id));
    }

    /// Advances the rotation and the pending hide. Returns whether anything visible changed.
    pub fn tick(&mut self, now: Instant, hide_delay: Duration, events: &mut Vec<ItemEvent>) -> bool {
        let mut changed = false;

        if let Some(animation) = self.seek.animation {
            self.seek.origin = normalize(animation.sample(now));
            changed = true;
            if animation.is_finished(now) {
                self.seek.animation = None;
                // progress may have been set while rotating
                self.snap_origin();
                self.schedule_hide(now + hide_delay);
            }
        }

        if let Some(hide_at) = self.seek.hide_at
            && now >= hide_at
        {
            self.seek.hide_at = None;
            self.seek.visible = false;
            self.seek.enabled = false;
            changed = true;
            events.push(ItemEvent::AnimationEnded(self.id));
        }

        changed
    }

    pub fn needs_tick(&self) -> bool {
        self.seek.animation.is_some() || self.seek.hide_at.is_some()
    }

    fn update_from_user(&mut self, progress: f64, events: &mut Vec<ItemEvent>) {
        let progress = clamp_progress(progress);
        if progress != self.progress {
            self.progress = progress;
            events.push(ItemEvent::ProgressChanged {
                item: self.id,
                progress,
                from_user: true,
            });
        }
    }

    fn schedule_hide(&mut self, at: Instant) {
        if self.seek.visible {
            self.seek.hide_at = Some(at);
        }
    }

    fn snap_origin(&mut self) {
        self.seek.origin = self.resting_origin();
    }
}
