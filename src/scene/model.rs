use crate::color::hsl::Hsl;
use crate::color::sweep::ColorPair;
use crate::foundation::core::{CARD_CANVAS, Point, Rect};

/// Id of the background gradient inside a card scene.
pub const CARD_GRADIENT_ID: &str = "card-gradient";

const BORDER_WIDTH: f64 = 4.0;
const ACCENT_OPACITY: f64 = 0.25;
const BOTTOM_BAR_HEIGHT: f64 = 26.0;
const UPPER_BAR_HEIGHT: f64 = 37.0;

/// Color stop of a [`LinearGradient`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient vector, 0..=1.
    pub offset: f64,
    /// Stop color.
    pub color: Hsl,
    /// Stop opacity, 0..=1.
    pub opacity: f64,
}

/// Linear gradient in object bounding-box units.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    /// Definition id referenced by [`Paint::Gradient`].
    pub id: String,
    /// Start of the gradient vector.
    pub start: Point,
    /// End of the gradient vector.
    pub end: Point,
    /// Stops in document order.
    pub stops: Vec<GradientStop>,
}

/// Fill of a shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    /// Flat color.
    Solid {
        /// Fill color.
        color: Hsl,
        /// Fill opacity, 0..=1.
        opacity: f64,
    },
    /// Reference to a gradient defined in [`Scene::gradients`].
    Gradient {
        /// Gradient id.
        id: String,
    },
}

/// Outline of a shape, centered on its edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    /// Stroke color.
    pub color: Hsl,
    /// Stroke opacity, 0..=1.
    pub opacity: f64,
    /// Line width in user units.
    pub width: f64,
}

/// Axis-aligned rectangle with a fill and an optional stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct RectShape {
    /// Position and size in viewbox units.
    pub rect: Rect,
    /// Interior paint.
    pub fill: Paint,
    /// Outline, if any.
    pub stroke: Option<Stroke>,
}

/// One card's drawing: gradients are definitions, shapes paint in order.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// SVG `viewBox`; also the rendered size in CSS pixels.
    pub view_box: Rect,
    /// Gradient definitions.
    pub gradients: Vec<LinearGradient>,
    /// Shapes in paint order.
    pub shapes: Vec<RectShape>,
}

/// Build the fixed card layout for `pair`.
///
/// Both gradient stops sit at offset 0, so the card shows a hard switch to the secondary color
/// rather than a blend.
pub fn build_card(pair: &ColorPair) -> Scene {
    let card = CARD_CANVAS.rect();
    let (w, h) = (card.width(), card.height());
    let half_border = BORDER_WIDTH / 2.0;

    let gradient = LinearGradient {
        id: CARD_GRADIENT_ID.to_owned(),
        start: Point::new(0.0, 0.0),
        end: Point::new(0.0, 1.0),
        stops: vec![
            GradientStop {
                offset: 0.0,
                color: pair.primary,
                opacity: 1.0,
            },
            GradientStop {
                offset: 0.0,
                color: pair.secondary,
                opacity: 1.0,
            },
        ],
    };

    let accent = || Paint::Solid {
        color: Hsl::BLACK,
        opacity: ACCENT_OPACITY,
    };

    let background = RectShape {
        rect: card,
        fill: Paint::Gradient {
            id: CARD_GRADIENT_ID.to_owned(),
        },
        stroke: None,
    };

    let border = RectShape {
        rect: Rect::new(half_border, half_border, w - half_border, h - half_border),
        fill: Paint::Solid {
            color: Hsl::BLACK,
            opacity: 0.0,
        },
        stroke: Some(Stroke {
            color: Hsl::BLACK,
            opacity: ACCENT_OPACITY,
            width: BORDER_WIDTH,
        }),
    };

    let bottom_y = h - BOTTOM_BAR_HEIGHT - BORDER_WIDTH;
    let bottom_bar = RectShape {
        rect: Rect::from_origin_size(
            (BORDER_WIDTH, bottom_y),
            (w - 2.0 * BORDER_WIDTH, BOTTOM_BAR_HEIGHT),
        ),
        fill: accent(),
        stroke: None,
    };

    let upper_inset = 2.0 * BORDER_WIDTH;
    let upper_y = h - BOTTOM_BAR_HEIGHT - 3.0 * BORDER_WIDTH - UPPER_BAR_HEIGHT;
    let upper_bar = RectShape {
        rect: Rect::from_origin_size(
            (upper_inset, upper_y),
            (w - 2.0 * upper_inset, UPPER_BAR_HEIGHT),
        ),
        fill: accent(),
        stroke: None,
    };

    Scene {
        view_box: card,
        gradients: vec![gradient],
        shapes: vec![background, border, bottom_bar, upper_bar],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
