//! WASM application entry point.

use super::clock::PerformanceClock;
use super::controls::{parse_percent, Controls};
use super::frame::RafScheduler;
use super::logger::ConsoleLogger;
use super::svg::SvgRingView;
use log::{info, warn, LevelFilter};
use ringbar_core::Animator;
use ringbar_widgets::{AnimateOptions, ProgressRing, RingStyle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlButtonElement, HtmlInputElement, MouseEvent};

type ClickListener = Closure<dyn FnMut(MouseEvent)>;

struct Buttons {
    start: HtmlButtonElement,
    hide: HtmlButtonElement,
    unhide: HtmlButtonElement,
}

impl Buttons {
    fn sync(&self, controls: Controls) {
        self.start.set_disabled(!controls.start_enabled);
        self.hide.set_disabled(!controls.hide_enabled);
        self.unhide.set_disabled(!controls.unhide_enabled);
    }
}

/// The demo page: one ring, a percent input and three buttons.
#[wasm_bindgen]
pub struct DemoApp {
    ring: Rc<ProgressRing<SvgRingView>>,
    controls: Rc<RefCell<Controls>>,
    buttons: Rc<Buttons>,
    default_duration_ms: f64,
    _listeners: Vec<ClickListener>,
}

#[wasm_bindgen]
impl DemoApp {
    /// Mount a ring into `.wrapper` and wire the page's buttons.
    ///
    /// `style_toml` overrides the built-in ring style.
    #[wasm_bindgen(constructor)]
    pub fn new(style_toml: Option<String>) -> Result<DemoApp, JsValue> {
        console_error_panic_hook::set_once();
        ConsoleLogger::init(LevelFilter::Info);

        let document = window()
            .ok_or("No window")?
            .document()
            .ok_or("No document")?;

        let style = match style_toml {
            Some(source) => {
                RingStyle::from_toml(&source).map_err(|e| JsValue::from_str(&e.to_string()))?
            }
            None => RingStyle::default(),
        };
        let default_duration_ms = style.default_duration.as_millis();

        let wrapper: Element = query_as(&document, ".wrapper")?;
        let input: HtmlInputElement = query_as(&document, ".input-percent")?;
        let buttons = Rc::new(Buttons {
            start: query_as(&document, ".btn-animate-start")?,
            hide: query_as(&document, ".btn-hidden")?,
            unhide: query_as(&document, ".btn-unhidden")?,
        });

        let animator = Animator::new(
            Rc::new(PerformanceClock::new()?),
            Rc::new(RafScheduler::new()?),
        );
        let view = SvgRingView::new(&document, style)?;
        let ring = Rc::new(ProgressRing::new(animator, view));
        ring.create(&wrapper)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let controls = Rc::new(RefCell::new(Controls::default()));
        buttons.sync(*controls.borrow());

        let listeners = wire(&ring, &controls, &buttons, &input, default_duration_ms)?;

        info!("ringbar demo mounted");
        Ok(Self {
            ring,
            controls,
            buttons,
            default_duration_ms,
            _listeners: listeners,
        })
    }

    /// Animate from 0 to `percent` over `duration_ms` (the style default
    /// when omitted).
    pub fn animate(&self, percent: f64, duration_ms: Option<f64>) -> Result<(), JsValue> {
        start_run(
            &self.ring,
            &self.controls,
            &self.buttons,
            percent,
            duration_ms.unwrap_or(self.default_duration_ms),
        )
        .map_err(|e| JsValue::from_str(&e))
    }

    /// Hide the ring.
    pub fn hide(&self) {
        hide_ring(&self.ring, &self.controls, &self.buttons);
    }

    /// Show the ring again.
    pub fn unhide(&self) {
        unhide_ring(&self.ring, &self.controls, &self.buttons);
    }

    /// Whether a run is in flight.
    pub fn status_animate(&self) -> bool {
        self.ring.status_animate()
    }

    /// Whether the ring is hidden.
    pub fn status_hidden(&self) -> bool {
        self.ring.status_hidden()
    }

    /// Percent currently shown.
    pub fn percent(&self) -> u8 {
        self.ring.percent()
    }
}

fn wire(
    ring: &Rc<ProgressRing<SvgRingView>>,
    controls: &Rc<RefCell<Controls>>,
    buttons: &Rc<Buttons>,
    input: &HtmlInputElement,
    duration_ms: f64,
) -> Result<Vec<ClickListener>, JsValue> {
    let on_start: ClickListener = {
        let ring = Rc::clone(ring);
        let controls = Rc::clone(controls);
        let buttons = Rc::clone(buttons);
        let input = input.clone();
        Closure::new(move |_: MouseEvent| {
            let percent = match parse_percent(&input.value()) {
                Ok(percent) => percent,
                Err(e) => {
                    warn!("{e}");
                    return;
                }
            };
            if let Err(e) = start_run(&ring, &controls, &buttons, percent, duration_ms) {
                warn!("{e}");
            }
        })
    };
    listen(&buttons.start, &on_start)?;

    let on_hide: ClickListener = {
        let ring = Rc::clone(ring);
        let controls = Rc::clone(controls);
        let buttons = Rc::clone(buttons);
        Closure::new(move |_: MouseEvent| hide_ring(&ring, &controls, &buttons))
    };
    listen(&buttons.hide, &on_hide)?;

    let on_unhide: ClickListener = {
        let ring = Rc::clone(ring);
        let controls = Rc::clone(controls);
        let buttons = Rc::clone(buttons);
        Closure::new(move |_: MouseEvent| unhide_ring(&ring, &controls, &buttons))
    };
    listen(&buttons.unhide, &on_unhide)?;

    Ok(vec![on_start, on_hide, on_unhide])
}

fn listen(button: &HtmlButtonElement, listener: &ClickListener) -> Result<(), JsValue> {
    button.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
}

fn start_run(
    ring: &ProgressRing<SvgRingView>,
    controls: &Rc<RefCell<Controls>>,
    buttons: &Rc<Buttons>,
    percent: f64,
    duration_ms: f64,
) -> Result<(), String> {
    let end_controls = Rc::clone(controls);
    let end_buttons = Rc::clone(buttons);
    let options = AnimateOptions::new(percent, duration_ms).on_end(move || {
        end_controls.borrow_mut().animation_ended();
        let state = *end_controls.borrow();
        end_buttons.sync(state);
    });
    ring.animate(options).map_err(|e| e.to_string())?;

    controls.borrow_mut().animation_started();
    let state = *controls.borrow();
    buttons.sync(state);
    Ok(())
}

fn hide_ring(ring: &ProgressRing<SvgRingView>, controls: &RefCell<Controls>, buttons: &Buttons) {
    ring.hide();
    controls.borrow_mut().hidden();
    let state = *controls.borrow();
    buttons.sync(state);
}

fn unhide_ring(ring: &ProgressRing<SvgRingView>, controls: &RefCell<Controls>, buttons: &Buttons) {
    ring.unhide();
    controls.borrow_mut().shown();
    let state = *controls.borrow();
    buttons.sync(state);
}

fn query_as<T: JsCast>(document: &Document, selector: &str) -> Result<T, JsValue> {
    document
        .query_selector(selector)?
        .ok_or_else(|| format!("'{selector}' not found"))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("'{selector}' has the wrong element type")))
}
