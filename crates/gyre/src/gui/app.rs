use crate::config;
use crate::events::AppEvent;
use crate::gui::canvas::Canvas;
use crate::gui::clock::scene::{LINE_WIDTH_RANGE, SPEED_RANGE, SPEED_STEP};
use crate::gui::clock::{ClockScene, FrameTick};
use crate::gui::theme::{self, ThemeColor};
use crate::gui::timer::FrameTimer;
use crate::gui::{DEFAULT_SIZE, window};
use gtk::prelude::*;
use gtk4 as gtk;
use gyrectl::ipc::ControlCommand;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub struct AppInit {
    pub scene: ClockScene,
    pub canvas: Canvas,
    pub color_hex: String,
    pub debug: bool,
    pub overlay: bool,
    pub rx: async_channel::Receiver<AppEvent>,
}

pub struct AppModel {
    pub scene: ClockScene,
    pub canvas: Rc<RefCell<Canvas>>,
    pub timer: FrameTimer,
    pub paused: bool,
    pub debug: bool,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    /// Frame clock timestamp in microseconds.
    Frame(i64),
    Resize(i32, i32),
    Redraw,
    Pause,
    Resume,
    TogglePause,
    ToggleDebug,
    SetLineWidth(f64),
    SetSpeed(f64),
    SetColor(String),
    SetAnimate(bool),
    ConfigReload,
}

impl From<ControlCommand> for AppMsg {
    fn from(cmd: ControlCommand) -> Self {
        match cmd {
            ControlCommand::Pause => AppMsg::Pause,
            ControlCommand::Resume => AppMsg::Resume,
            ControlCommand::Toggle => AppMsg::TogglePause,
            ControlCommand::Reload => AppMsg::ConfigReload,
            ControlCommand::Debug => AppMsg::ToggleDebug,
            ControlCommand::LineWidth(w) => AppMsg::SetLineWidth(w),
            ControlCommand::Speed(s) => AppMsg::SetSpeed(s),
            ControlCommand::Color(c) => AppMsg::SetColor(c.to_string()),
            ControlCommand::Animate(a) => AppMsg::SetAnimate(a),
        }
    }
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Control(cmd) => AppMsg::from(cmd),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

impl AppModel {
    /// Runs `draw` against a fresh context on the canvas.
    fn draw_with<T>(
        &mut self,
        draw: impl FnOnce(&mut ClockScene, &mut cairo::Context) -> Result<T, cairo::Error>,
    ) -> Result<T, cairo::Error> {
        let mut cr = self.canvas.borrow().context()?;
        draw(&mut self.scene, &mut cr)
    }

    fn present(&self, result: Result<bool, cairo::Error>) {
        match result {
            Ok(true) => self.drawing_area.queue_draw(),
            Ok(false) => {}
            Err(e) => log::error!("Drawing error: {}", e),
        }
    }

    fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            self.paused = paused;
            log::info!("{}", if paused { "Paused" } else { "Resumed" });
        }
    }

    fn reload_config(&mut self) {
        match config::load_config() {
            Ok(new_config) => {
                if new_config.arcs != self.scene.arcs().len() {
                    log::warn!(
                        "Arc count change to {} takes effect on restart",
                        new_config.arcs
                    );
                }
                self.debug = new_config.debug;
                self.scene.set_params(new_config.scene_params());
                log::info!("Configuration reloaded");
            }
            Err(e) => log::error!("Failed to reload config: {}", e),
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = AppInit;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Gyre"),
            set_default_size: (DEFAULT_SIZE, DEFAULT_SIZE),
            add_css_class: "gyre-window",

            #[name = "overlay"]
            gtk::Overlay {
                #[wrap(Some)]
                #[name = "drawing_area"]
                set_child = &gtk::DrawingArea {
                    set_hexpand: true,
                    set_vexpand: true,
                    add_css_class: "gyre-canvas",

                    connect_resize[sender] => move |_, width, height| {
                        sender.input(AppMsg::Resize(width, height));
                    },
                },

                add_overlay = &gtk::Box {
                    set_orientation: gtk::Orientation::Vertical,
                    set_spacing: 4,
                    set_halign: gtk::Align::Start,
                    set_valign: gtk::Align::Start,
                    set_margin_all: 12,
                    add_css_class: "gyre-debug",
                    #[watch]
                    set_visible: model.debug,

                    gtk::Label {
                        set_label: "line width",
                        set_xalign: 0.0,
                    },
                    gtk::Scale::with_range(
                        gtk::Orientation::Horizontal,
                        *LINE_WIDTH_RANGE.start(),
                        *LINE_WIDTH_RANGE.end(),
                        1.0,
                    ) {
                        set_width_request: 200,
                        set_draw_value: true,
                        set_digits: 0,
                        #[watch]
                        #[block_signal(line_width_handler)]
                        set_value: model.scene.params().line_width,
                        connect_value_changed[sender] => move |scale| {
                            sender.input(AppMsg::SetLineWidth(scale.value()));
                        } @line_width_handler,
                    },

                    gtk::Label {
                        set_label: "speed",
                        set_xalign: 0.0,
                    },
                    gtk::Scale::with_range(
                        gtk::Orientation::Horizontal,
                        *SPEED_RANGE.start(),
                        *SPEED_RANGE.end(),
                        SPEED_STEP,
                    ) {
                        set_width_request: 200,
                        set_draw_value: true,
                        set_digits: 2,
                        #[watch]
                        #[block_signal(speed_handler)]
                        set_value: model.scene.params().speed,
                        connect_value_changed[sender] => move |scale| {
                            sender.input(AppMsg::SetSpeed(scale.value()));
                        } @speed_handler,
                    },

                    gtk::Label {
                        set_label: "color",
                        set_xalign: 0.0,
                    },
                    gtk::Entry {
                        set_text: &color_hex,
                        set_placeholder_text: Some("#rrggbb"),
                        connect_activate[sender] => move |entry| {
                            sender.input(AppMsg::SetColor(entry.text().to_string()));
                        },
                    },

                    gtk::CheckButton::with_label("animate arcs") {
                        #[watch]
                        #[block_signal(animate_handler)]
                        set_active: model.scene.params().animate,
                        connect_toggled[sender] => move |button| {
                            sender.input(AppMsg::SetAnimate(button.is_active()));
                        } @animate_handler,
                    },
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let AppInit {
            mut scene,
            canvas,
            color_hex,
            debug,
            overlay,
            rx,
        } = init;

        theme::load_css();
        if overlay {
            window::init_overlay(&root);
        }

        {
            let sender = sender.clone();
            scene.set_on_change(move || sender.input(AppMsg::Redraw));
        }

        let model = AppModel {
            scene,
            canvas: Rc::new(RefCell::new(canvas)),
            timer: FrameTimer::new(),
            paused: false,
            debug,
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let canvas_draw = model.canvas.clone();
        widgets.drawing_area.set_draw_func(move |_, cr, _, _| {
            if let Err(e) = canvas_draw.borrow().paint_onto(cr) {
                log::error!("Drawing error: {}", e);
            }
        });

        {
            let sender = sender.clone();
            widgets.drawing_area.add_tick_callback(move |_, frame_clock| {
                sender.input(AppMsg::Frame(frame_clock.frame_time()));
                glib::ControlFlow::Continue
            });
        }

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Frame(frame_time) => {
                let delta_ms = self.timer.tick(frame_time);
                let tick = FrameTick::new(!self.paused, delta_ms);
                let result = self.draw_with(|scene, cr| scene.update(cr, tick));
                self.present(result);
            }
            AppMsg::Resize(width, height) => {
                if let Err(e) = self.canvas.borrow_mut().resize(width, height) {
                    log::error!("Failed to resize canvas to {}x{}: {}", width, height, e);
                    return;
                }
                let result = self.draw_with(|scene, cr| {
                    scene.resize(cr, width as f64, height as f64).map(|_| true)
                });
                self.present(result);
            }
            AppMsg::Redraw => {
                let result = self.draw_with(|scene, cr| scene.draw_update(cr, 0.0).map(|_| true));
                self.present(result);
            }
            AppMsg::Pause => self.set_paused(true),
            AppMsg::Resume => self.set_paused(false),
            AppMsg::TogglePause => self.set_paused(!self.paused),
            AppMsg::ToggleDebug => self.debug = !self.debug,
            AppMsg::SetLineWidth(width) => self.scene.set_line_width(width),
            AppMsg::SetSpeed(speed) => self.scene.set_speed(speed),
            AppMsg::SetColor(hex) => match hex.parse::<ThemeColor>() {
                Ok(color) => self.scene.set_color(*color),
                Err(e) => log::warn!("{}", e),
            },
            AppMsg::SetAnimate(animate) => self.scene.set_animate(animate),
            AppMsg::ConfigReload => self.reload_config(),
        }
    }
}
