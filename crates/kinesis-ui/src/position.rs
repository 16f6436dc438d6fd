//! Placement of popups next to their trigger.
//!
//! A flyout opens to the right of the trigger row and starts level with its
//! top edge. If that would run off the bottom of the viewport, or start inside
//! the bottom margin, it is pulled up so it ends `min_margin` above the
//! bottom, but never higher than `min_margin` below the top.
//!
//! The horizontal position is a fixed offset from the trigger's right edge and
//! is never clamped against the right side of the viewport.

use kinesis_core::{Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionerConfig {
    /// Gap between the trigger's right edge and the popup.
    pub offset_x: f32,
    /// Minimum distance kept from the viewport's top and bottom when clamping.
    pub min_margin: f32,
    /// Height of one item row, for the estimated layout.
    pub row_height: f32,
    /// Header and padding around the rows, for the estimated layout.
    pub chrome_height: f32,
    /// Width assumed for the popup until the host reports a measured size.
    pub popup_width: f32,
}

impl Default for PositionerConfig {
    fn default() -> Self {
        Self {
            offset_x: 10.0,
            min_margin: 20.0,
            row_height: 36.0,
            chrome_height: 56.0,
            popup_width: 220.0,
        }
    }
}

/// How tall the popup is taken to be.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PopupHeight {
    /// Derived from the number of rows.
    Estimated(usize),
    /// Reported by the host after a layout pass.
    Measured(f32),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FlyoutPosition {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportPositioner {
    config: PositionerConfig,
}

impl ViewportPositioner {
    pub fn new(config: PositionerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PositionerConfig {
        &self.config
    }

    pub fn estimate_height(&self, item_count: usize) -> f32 {
        item_count as f32 * self.config.row_height + self.config.chrome_height
    }

    pub fn resolve_height(&self, height: PopupHeight) -> f32 {
        match height {
            PopupHeight::Estimated(n) => self.estimate_height(n),
            PopupHeight::Measured(h) => h.max(0.0),
        }
    }

    pub fn compute_position(
        &self,
        anchor: Rect,
        estimated_height: f32,
        viewport_height: f32,
    ) -> FlyoutPosition {
        let x = anchor.right() + self.config.offset_x;
        let mut y = anchor.top();
        let lowest = viewport_height - self.config.min_margin;
        if y + estimated_height > viewport_height || y > lowest {
            y = y
                .min(lowest - estimated_height)
                .max(self.config.min_margin);
        }
        FlyoutPosition { x, y }
    }

    pub fn place(&self, anchor: Rect, height: PopupHeight, viewport_height: f32) -> FlyoutPosition {
        self.compute_position(anchor, self.resolve_height(height), viewport_height)
    }

    /// The popup's box at `position`, using the measured size when known.
    pub fn popup_rect(&self, position: FlyoutPosition, height: f32, measured: Option<Size>) -> Rect {
        let size = measured.unwrap_or(Size {
            width: self.config.popup_width,
            height,
        });
        Rect::from_origin_size(Vec2::new(position.x, position.y), size)
    }
}

/// [`ViewportPositioner::compute_position`] with the default configuration.
pub fn compute_position(anchor: Rect, estimated_height: f32, viewport_height: f32) -> FlyoutPosition {
    ViewportPositioner::default().compute_position(anchor, estimated_height, viewport_height)
}
