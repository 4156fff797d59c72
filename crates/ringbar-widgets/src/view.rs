//! Rendering surfaces for a progress ring.

use crate::error::RingError;
use crate::style::RingStyle;
use ringbar_core::{
    Canvas, DrawCommand, FontWeight, LineCap, RecordingCanvas, StrokeStyle, TextStyle,
};
use std::cell::{Cell, RefCell};

/// The visual side of a ring: shows a displayed percent as text and as an
/// indicator proportional to 0..=100.
///
/// Methods take `&self` because per-frame callbacks hold a shared handle to
/// the view.
pub trait RingView {
    /// What the view mounts into (a DOM element, a command buffer, ...).
    type Container: ?Sized;

    /// Replace the container's content with this view's root.
    fn mount(&self, container: &Self::Container) -> Result<(), RingError>;

    /// Reflect a new displayed percent.
    fn show_percent(&self, percent: u8);

    /// Apply or remove the hidden visual state.
    fn set_hidden(&self, hidden: bool);
}

/// Paint a ring: track circle, thumb arc clockwise from 12 o'clock, and a
/// centered label.
pub fn paint_ring(canvas: &mut dyn Canvas, style: &RingStyle, percent: u8) {
    canvas.stroke_circle(
        style.center,
        style.radius,
        StrokeStyle::new(style.track_color, style.stroke_width),
    );

    if percent > 0 {
        canvas.stroke_arc(
            style.center,
            style.radius,
            0.0,
            style.sweep(percent),
            StrokeStyle::new(style.thumb_color, style.stroke_width).with_cap(LineCap::Round),
        );
    }

    canvas.draw_text(
        &style.label(percent),
        style.center,
        &TextStyle {
            size: style.font_size,
            color: style.text_color,
            weight: FontWeight::Bold,
        },
    );
}

/// A view that repaints into a [`RecordingCanvas`] on every change.
///
/// Keeps every percent it was asked to show, so tests can inspect the
/// sequence a run produced. Mounting copies the current frame into a
/// command buffer.
#[derive(Debug)]
pub struct RecordingView {
    style: RingStyle,
    canvas: RefCell<RecordingCanvas>,
    percent: Cell<u8>,
    hidden: Cell<bool>,
    history: RefCell<Vec<u8>>,
}

impl Default for RecordingView {
    fn default() -> Self {
        Self::new(RingStyle::default())
    }
}

impl RecordingView {
    /// Create a view showing 0 with the given style.
    #[must_use]
    pub fn new(style: RingStyle) -> Self {
        let view = Self {
            style,
            canvas: RefCell::new(RecordingCanvas::new()),
            percent: Cell::new(0),
            hidden: Cell::new(false),
            history: RefCell::new(Vec::new()),
        };
        view.repaint();
        view
    }

    /// The style this view paints with.
    #[must_use]
    pub fn style(&self) -> &RingStyle {
        &self.style
    }

    /// Percent currently shown.
    #[must_use]
    pub fn percent(&self) -> u8 {
        self.percent.get()
    }

    /// Whether the hidden state is applied.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden.get()
    }

    /// Every percent passed to [`RingView::show_percent`], in order.
    #[must_use]
    pub fn history(&self) -> Vec<u8> {
        self.history.borrow().clone()
    }

    /// Draw commands of the current frame. Empty while hidden.
    #[must_use]
    pub fn commands(&self) -> Vec<DrawCommand> {
        self.canvas.borrow().commands().to_vec()
    }

    fn repaint(&self) {
        let mut canvas = self.canvas.borrow_mut();
        canvas.clear();
        if !self.hidden.get() {
            paint_ring(&mut *canvas, &self.style, self.percent.get());
        }
    }
}

impl RingView for RecordingView {
    type Container = RefCell<Vec<DrawCommand>>;

    fn mount(&self, container: &Self::Container) -> Result<(), RingError> {
        let mut slot = container
            .try_borrow_mut()
            .map_err(|_| RingError::Mount("container is already borrowed".to_string()))?;
        slot.clear();
        slot.extend(self.commands());
        Ok(())
    }

    fn show_percent(&self, percent: u8) {
        self.percent.set(percent);
        self.history.borrow_mut().push(percent);
        self.repaint();
    }

    fn set_hidden(&self, hidden: bool) {
        self.hidden.set(hidden);
        self.repaint();
    }
}
