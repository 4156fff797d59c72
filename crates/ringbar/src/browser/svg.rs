//! Inline SVG rendering of a progress ring.
//!
//! Markup produced (class names are the page's CSS hooks):
//!
//! ```text
//! <svg class="progressbar" viewBox="0 0 62 62" style="--opacityThumb: 1; --percent: 0">
//!   <circle class="progressbar__track" cx="31" cy="31" r="27"/>
//!   <circle class="progressbar__thumb" cx="31" cy="31" r="27"/>
//!   <text class="progressbar__text" x="31" y="31">
//!     <tspan>0</tspan><tspan>%</tspan>
//!   </text>
//! </svg>
//! ```

use log::warn;
use ringbar_widgets::{RingError, RingStyle, RingView};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, SvgElement};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Class applied to the root while hidden.
pub const HIDDEN_CLASS: &str = "progressbar_hidden";

/// A ring rendered as SVG elements.
#[derive(Debug)]
pub struct SvgRingView {
    root: SvgElement,
    thumb: Element,
    percent_text: Element,
    style: RingStyle,
}

impl SvgRingView {
    /// Build the SVG tree in `document`, showing 0.
    pub fn new(document: &Document, style: RingStyle) -> Result<Self, JsValue> {
        let root = document
            .create_element_ns(Some(SVG_NS), "svg")?
            .dyn_into::<SvgElement>()
            .map_err(|_| "svg element is not an SVGElement")?;
        root.class_list().add_1("progressbar")?;
        root.set_attribute("viewBox", &format!("0 0 {0} {0}", style.view_box))?;
        root.style().set_property("--opacityThumb", "1")?;
        root.style().set_property("--percent", "0")?;

        let track = circle(document, &style, "progressbar__track")?;
        track.set_attribute("stroke", &style.track_color.to_css())?;

        let thumb = circle(document, &style, "progressbar__thumb")?;
        thumb.set_attribute("stroke", &style.thumb_color.to_css())?;
        thumb.set_attribute("stroke-linecap", "round")?;
        thumb.set_attribute("stroke-dasharray", &style.circumference().to_string())?;
        thumb.set_attribute(
            "transform",
            &format!("rotate(-90 {} {})", style.center.x, style.center.y),
        )?;

        let text = document.create_element_ns(Some(SVG_NS), "text")?;
        text.class_list().add_1("progressbar__text")?;
        text.set_attribute("x", &style.center.x.to_string())?;
        text.set_attribute("y", &style.center.y.to_string())?;
        text.set_attribute("dominant-baseline", "middle")?;
        text.set_attribute("text-anchor", "middle")?;
        text.set_attribute("fill", &style.text_color.to_css())?;
        text.set_attribute("font-size", &style.font_size.to_string())?;

        let percent_text = document.create_element_ns(Some(SVG_NS), "tspan")?;
        percent_text.set_text_content(Some("0"));
        let suffix = document.create_element_ns(Some(SVG_NS), "tspan")?;
        suffix.set_text_content(Some(&style.suffix));

        text.append_with_node_2(&percent_text, &suffix)?;
        root.append_with_node_3(&track, &thumb, &text)?;

        let view = Self {
            root,
            thumb,
            percent_text,
            style,
        };
        view.set_dash_offset(0)?;
        Ok(view)
    }

    /// Root `<svg>` element.
    pub fn root(&self) -> &SvgElement {
        &self.root
    }

    /// Text currently shown in the number tspan.
    pub fn percent_text(&self) -> String {
        self.percent_text.text_content().unwrap_or_default()
    }

    fn set_dash_offset(&self, percent: u8) -> Result<(), JsValue> {
        let circumference = self.style.circumference();
        let offset = circumference * (1.0 - f32::from(percent.min(100)) / 100.0);
        self.thumb
            .set_attribute("stroke-dashoffset", &offset.to_string())
    }
}

fn circle(document: &Document, style: &RingStyle, class: &str) -> Result<Element, JsValue> {
    let circle = document.create_element_ns(Some(SVG_NS), "circle")?;
    circle.class_list().add_1(class)?;
    circle.set_attribute("cx", &style.center.x.to_string())?;
    circle.set_attribute("cy", &style.center.y.to_string())?;
    circle.set_attribute("r", &style.radius.to_string())?;
    circle.set_attribute("fill", "none")?;
    circle.set_attribute("stroke-width", &style.stroke_width.to_string())?;
    Ok(circle)
}

impl RingView for SvgRingView {
    type Container = Element;

    fn mount(&self, container: &Element) -> Result<(), RingError> {
        container.set_text_content(Some(""));
        container
            .append_child(&self.root)
            .map(|_| ())
            .map_err(|e| RingError::Mount(format!("{e:?}")))
    }

    fn show_percent(&self, percent: u8) {
        let value = percent.to_string();
        self.percent_text.set_text_content(Some(&value));
        if let Err(e) = self.root.style().set_property("--percent", &value) {
            warn!("failed to set --percent: {e:?}");
        }
        if let Err(e) = self.set_dash_offset(percent) {
            warn!("failed to set stroke-dashoffset: {e:?}");
        }
    }

    fn set_hidden(&self, hidden: bool) {
        let classes = self.root.class_list();
        let result = if hidden {
            classes.add_1(HIDDEN_CLASS)
        } else {
            classes.remove_1(HIDDEN_CLASS)
        };
        if let Err(e) = result {
            warn!("failed to toggle {HIDDEN_CLASS}: {e:?}");
        }
    }
}
