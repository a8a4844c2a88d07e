//! Runaway "No" button positioning
//!
//! Every trigger (pointer enter, touch start, click) pins the button at a
//! fresh random spot inside the viewport. There is no debouncing: a burst of
//! triggers keeps relocating the button and the last one wins.

use log::warn;
use rand::Rng;
use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::config::{BUTTON_HEIGHT, BUTTON_WIDTH, EDGE_PADDING};

/// Viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const ZERO: Viewport = Viewport { width: 0.0, height: 0.0 };

    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    /// Reads `innerWidth`/`innerHeight` right now. Falls back to
    /// [`Viewport::ZERO`], which pins the button at the padding corner.
    pub fn current() -> Self {
        let Some(window) = web_sys::window() else {
            warn!("No window available, using zero viewport");
            return Self::ZERO;
        };
        match (dimension(window.inner_width()), dimension(window.inner_height())) {
            (Some(width), Some(height)) => Self::new(width, height),
            _ => {
                warn!("Could not read viewport size, using zero viewport");
                Self::ZERO
            }
        }
    }
}

fn dimension(value: Result<JsValue, JsValue>) -> Option<f64> {
    value.ok().and_then(|v| v.as_f64())
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorMode {
    /// Normal document flow, coordinates ignored
    #[default]
    Static,
    /// `position: fixed` at the anchor coordinates
    Pinned,
}

/// Where the "No" button is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ButtonAnchor {
    pub mode: AnchorMode,
    pub x: f64,
    pub y: f64,
}

impl ButtonAnchor {
    pub fn pinned(x: f64, y: f64) -> Self {
        Self {
            mode: AnchorMode::Pinned,
            x,
            y,
        }
    }

    pub fn is_pinned(&self) -> bool {
        self.mode == AnchorMode::Pinned
    }

    /// Positioning part of the button's inline style.
    pub fn inline_style(&self) -> String {
        match self.mode {
            AnchorMode::Static => "position: static;".to_string(),
            AnchorMode::Pinned => format!(
                "position: fixed; left: {:.0}px; top: {:.0}px;",
                self.x, self.y
            ),
        }
    }
}

/// Picks a new pinned anchor that keeps the button inside `viewport`.
pub fn compute_anchor<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> ButtonAnchor {
    let x = axis_position(viewport.width - BUTTON_WIDTH, rng);
    let y = axis_position(viewport.height - BUTTON_HEIGHT, rng);
    ButtonAnchor::pinned(x, y)
}

/// `max(P, uniform(0, max))`, clamped to `P` when the range is empty.
fn axis_position<R: Rng + ?Sized>(max: f64, rng: &mut R) -> f64 {
    if max <= 0.0 {
        return EDGE_PADDING;
    }
    rng.random_range(0.0..=max).max(EDGE_PADDING)
}
