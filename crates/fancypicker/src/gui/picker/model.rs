use super::RING_PADDING;
use crate::config::{ColorConfig, Config};
use arcseek::{Circle, ItemEvent, ItemId, Picker, Point};

/// Picker plus the text the sample screen shows around it.
pub struct State {
    pub picker: Picker,
    pub captions: Vec<String>,
    pub headline: Option<String>,
    pub colors: ColorConfig,
}

impl State {
    pub fn from_config(config: &Config) -> Self {
        let mut picker = Picker::new(config.style.clone(), config.labels());
        for (i, item) in config.items.iter().enumerate() {
            picker.set_progress(ItemId::from(i), item.progress);
        }
        let captions = picker
            .items()
            .iter()
            .map(|item| item.label().to_string())
            .collect();

        Self {
            picker,
            captions,
            headline: None,
            colors: config.colors.clone(),
        }
    }

    /// Fits the ring inside a `width` x `height` area, leaving room for the stroke.
    pub fn layout(&mut self, width: f64, height: f64) {
        let stroke = self.picker.style().stroke_width;
        let diameter = (width.min(height) - stroke - 2.0 * RING_PADDING).max(0.0);
        self.picker
            .layout(Circle::new(Point::default(), diameter, diameter));
    }

    pub fn apply(&mut self, event: &ItemEvent) {
        match *event {
            ItemEvent::ProgressChanged {
                item,
                progress,
                from_user,
            } => {
                if let Some(caption) = self.captions.get_mut(item.index()) {
                    *caption = format_progress(progress);
                }
                if from_user {
                    self.headline = Some(format_progress(progress));
                }
            }
            ItemEvent::TrackingStarted(item) => {
                self.headline = self
                    .picker
                    .item(item)
                    .map(|item| format_progress(item.progress()));
            }
            ItemEvent::TrackingStopped(_) => {}
            ItemEvent::AnimationEnded(_) => self.headline = None,
        }
    }
}

/// Drawing-area coordinates to coordinates around the ring center.
pub fn to_local(x: f64, y: f64, width: f64, height: f64) -> Point {
    Point::new(x - width / 2.0, y - height / 2.0)
}

pub fn format_progress(progress: f64) -> String {
    format!("{}", progress.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ItemConfig;
    use arcseek::ItemLabel;

    fn state() -> State {
        let mut config = Config::default();
        config.items[1] = ItemConfig {
            label: Some(ItemLabel::new("B")),
            progress: 30.0,
        };
        State::from_config(&config)
    }

    #[test]
    fn test_from_config_applies_initial_progress() {
        let state = state();

        assert_eq!(state.picker.items()[1].progress(), 30.0);
        assert_eq!(state.captions, vec!["1", "B", "3"]);
        assert_eq!(state.headline, None);
    }

    #[test]
    fn test_layout_fits_stroke_and_padding() {
        let mut state = state();
        state.layout(400.0, 300.0);

        let circle = state.picker.circle();
        assert_eq!(circle.width, 300.0 - 56.0 - 2.0 * RING_PADDING);
        assert_eq!(circle.center, Point::default());
    }

    #[test]
    fn test_events_update_captions_and_headline() {
        let mut state = state();
        let item = ItemId::from(0);

        state.apply(&ItemEvent::TrackingStarted(item));
        assert_eq!(state.headline.as_deref(), Some("0"));

        state.apply(&ItemEvent::ProgressChanged {
            item,
            progress: -12.7,
            from_user: true,
        });
        assert_eq!(state.captions[0], "-12");
        assert_eq!(state.headline.as_deref(), Some("-12"));

        state.apply(&ItemEvent::ProgressChanged {
            item: ItemId::from(2),
            progress: 5.0,
            from_user: false,
        });
        assert_eq!(state.captions[2], "5");
        assert_eq!(state.headline.as_deref(), Some("-12"));

        state.apply(&ItemEvent::AnimationEnded(item));
        assert_eq!(state.headline, None);
    }

    #[test]
    fn test_to_local_centers_coordinates() {
        assert_eq!(to_local(200.0, 100.0, 400.0, 200.0), Point::default());
        assert_eq!(to_local(0.0, 0.0, 400.0, 200.0), Point::new(-200.0, -100.0));
    }
}
