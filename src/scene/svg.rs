use std::fmt;

use crate::scene::model::{LinearGradient, Paint, RectShape, Scene};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

impl Scene {
    /// Serialize as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        self.to_string()
    }

    /// [`Scene::to_svg`] as UTF-8 bytes, ready for `usvg`.
    pub fn to_svg_bytes(&self) -> Vec<u8> {
        self.to_svg().into_bytes()
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vb = self.view_box;
        write!(
            f,
            r#"<svg xmlns="{SVG_NS}" width="{}" height="{}" viewBox="{} {} {} {}">"#,
            vb.width(),
            vb.height(),
            vb.x0,
            vb.y0,
            vb.width(),
            vb.height()
        )?;

        if !self.gradients.is_empty() {
            f.write_str("<defs>")?;
            for g in &self.gradients {
                write_gradient(f, g)?;
            }
            f.write_str("</defs>")?;
        }

        for shape in &self.shapes {
            write_rect(f, shape)?;
        }

        f.write_str("</svg>")
    }
}

fn write_gradient(f: &mut fmt::Formatter<'_>, g: &LinearGradient) -> fmt::Result {
    write!(
        f,
        r#"<linearGradient id="{}" x1="{}" y1="{}" x2="{}" y2="{}">"#,
        g.id, g.start.x, g.start.y, g.end.x, g.end.y
    )?;
    for stop in &g.stops {
        write!(
            f,
            r#"<stop offset="{}" stop-color="{}" stop-opacity="{}"/>"#,
            stop.offset,
            stop.color.to_hex(),
            stop.opacity
        )?;
    }
    f.write_str("</linearGradient>")
}

fn write_rect(f: &mut fmt::Formatter<'_>, shape: &RectShape) -> fmt::Result {
    let r = shape.rect;
    write!(
        f,
        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
        r.x0,
        r.y0,
        r.width(),
        r.height()
    )?;

    match &shape.fill {
        Paint::Solid { color, opacity } => write!(
            f,
            r#" fill="{}" fill-opacity="{}""#,
            color.to_hex(),
            opacity
        )?,
        Paint::Gradient { id } => write!(f, r#" fill="url(#{id})""#)?,
    }

    if let Some(stroke) = &shape.stroke {
        write!(
            f,
            r#" stroke="{}" stroke-opacity="{}" stroke-width="{}""#,
            stroke.color.to_hex(),
            stroke.opacity,
            stroke.width
        )?;
    }

    f.write_str("/>")
}

#[cfg(test)]
#[path = "../../tests/unit/scene/svg.rs"]
mod tests;
