use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::picker::{self, FRAME_INTERVAL, State, model::to_local};
use crate::gui::theme::{self, ThemeColors};
use arcseek::{ItemEvent, Point};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

pub struct AppModel {
    pub state: Rc<RefCell<State>>,
    pub drawing_area: gtk::DrawingArea,
    pub ticker: Option<glib::SourceId>,
}

#[derive(Debug)]
pub enum AppMsg {
    TouchDown(Point),
    TouchMove(Point),
    TouchUp,
    LongPress(Point),
    Resize,
    Tick,
    Picker(ItemEvent),
    ConfigReload,
    Quit,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

fn build_state(config: &Config, sender: &ComponentSender<AppModel>) -> State {
    let mut state = State::from_config(config);
    let sender = sender.clone();
    state
        .picker
        .add_listener(move |event: &ItemEvent| sender.input(AppMsg::Picker(*event)));
    state
        .picker
        .add_listener(|event: &ItemEvent| log::debug!("Picker event: {:?}", event));
    state
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Fancy Picker"),
            set_default_size: (480, 480),
            add_css_class: "fancypicker-window",

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Quit);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: "fancypicker-area",

                connect_resize[sender] => move |_, _, _| {
                    sender.input(AppMsg::Resize);
                },

                add_controller = gtk::GestureDrag {
                    connect_drag_begin[sender] => move |_, x, y| {
                        sender.input(AppMsg::TouchDown(Point::new(x, y)));
                    },
                    connect_drag_update[sender] => move |gesture, dx, dy| {
                        if let Some((x, y)) = gesture.start_point() {
                            sender.input(AppMsg::TouchMove(Point::new(x + dx, y + dy)));
                        }
                    },
                    connect_drag_end[sender] => move |_, _, _| {
                        sender.input(AppMsg::TouchUp);
                    },
                },

                add_controller = gtk::GestureLongPress {
                    connect_pressed[sender] => move |_, x, y| {
                        sender.input(AppMsg::LongPress(Point::new(x, y)));
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, rx) = init;

        theme::load_css();

        let state = Rc::new(RefCell::new(build_state(&config, &sender)));

        let model = AppModel {
            state: state.clone(),
            drawing_area: gtk::DrawingArea::default(),
            ticker: None,
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let state_draw = model.state.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, width, height| {
                let state = state_draw.borrow();
                let colors = ThemeColors::from_context(&drawing_area.style_context(), &state.colors);
                if let Err(e) = picker::draw(cr, &state, &colors, width as f64, height as f64) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        let redraw = match msg {
            AppMsg::TouchDown(point) => {
                let point = self.local(point);
                self.state.borrow_mut().picker.touch_down(point)
            }
            AppMsg::TouchMove(point) => {
                let point = self.local(point);
                self.state.borrow_mut().picker.touch_move(point)
            }
            AppMsg::TouchUp => self.state.borrow_mut().picker.touch_up(Instant::now()),
            AppMsg::LongPress(point) => {
                let point = self.local(point);
                self.state
                    .borrow_mut()
                    .picker
                    .enable_seek_overlay_at(point)
                    .is_some()
            }
            AppMsg::Resize => {
                let (width, height) = self.size();
                self.state.borrow_mut().layout(width, height);
                true
            }
            AppMsg::Tick => {
                let mut state = self.state.borrow_mut();
                let changed = state.picker.tick(Instant::now());
                if !state.picker.needs_tick()
                    && let Some(ticker) = self.ticker.take()
                {
                    ticker.remove();
                }
                changed
            }
            AppMsg::Picker(event) => {
                self.state.borrow_mut().apply(&event);
                true
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    let (width, height) = self.size();
                    let mut state = build_state(&new_config, &sender);
                    state.layout(width, height);
                    *self.state.borrow_mut() = state;
                    log::info!("Configuration reloaded");
                    true
                }
                Err(e) => {
                    log::error!("Failed to reload config: {}", e);
                    false
                }
            },
            AppMsg::Quit => {
                relm4::main_application().quit();
                false
            }
        };

        self.ensure_ticking(&sender);
        if redraw {
            self.drawing_area.queue_draw();
        }
    }
}

impl AppModel {
    fn size(&self) -> (f64, f64) {
        (
            self.drawing_area.width() as f64,
            self.drawing_area.height() as f64,
        )
    }

    fn local(&self, point: Point) -> Point {
        let (width, height) = self.size();
        to_local(point.x, point.y, width, height)
    }

    fn ensure_ticking(&mut self, sender: &ComponentSender<Self>) {
        if self.ticker.is_some() || !self.state.borrow().picker.needs_tick() {
            return;
        }
        let sender = sender.clone();
        self.ticker = Some(glib::timeout_add_local(FRAME_INTERVAL, move || {
            sender.input(AppMsg::Tick);
            glib::ControlFlow::Continue
        }));
    }
}
