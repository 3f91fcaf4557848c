use std::sync::Arc;

use resvg::tiny_skia;

use crate::foundation::{
    core::Canvas,
    error::{ForestError, ForestResult},
};

/// Heading drawn at the top of every frame.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TitleText {
    pub title: String,
    pub subtitle: String,
}

impl Default for TitleText {
    fn default() -> Self {
        Self {
            title: "Growing with your contributions | InsideForest".to_string(),
            subtitle: "Sprite forest · 53×7 · weekly growth".to_string(),
        }
    }
}

const TITLE_PX: f64 = 30.0;
const TITLE_TOP: f64 = 44.0;
const SUBTITLE_PX: f64 = 14.0;
const SUBTITLE_TOP: f64 = 80.0;

pub(crate) fn system_fontdb() -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    tracing::debug!(faces = db.len(), "loaded system fonts");
    Arc::new(db)
}

/// Premultiplied RGBA8 layer with the title and subtitle centered horizontally.
///
/// Glyphs come from `fontdb`; text with no matching font is dropped, which leaves the layer
/// transparent.
pub fn title_layer(
    canvas: Canvas,
    text: &TitleText,
    fontdb: Arc<usvg::fontdb::Database>,
) -> ForestResult<Vec<u8>> {
    let mut pixmap = tiny_skia::Pixmap::new(canvas.width, canvas.height).ok_or_else(|| {
        ForestError::render(format!(
            "cannot allocate {}x{} text layer",
            canvas.width, canvas.height
        ))
    })?;
    if text.title.trim().is_empty() && text.subtitle.trim().is_empty() {
        return Ok(pixmap.take());
    }

    let svg = title_svg(canvas, text);
    let opts = usvg::Options {
        fontdb,
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(&svg, &opts)
        .map_err(|e| ForestError::render(format!("title layer: {e}")))?;
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());
    Ok(pixmap.take())
}

fn title_svg(canvas: Canvas, text: &TitleText) -> String {
    let cx = f64::from(canvas.width) / 2.0;
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}">"#,
            r#"<text x="{cx}" y="{ty}" font-family="DejaVu Sans, sans-serif" font-size="{tpx}" "#,
            r#"text-anchor="middle" dominant-baseline="hanging" "#,
            r#"fill="rgb(235,250,250)" fill-opacity="0.922">{title}</text>"#,
            r#"<text x="{cx}" y="{sy}" font-family="DejaVu Sans Mono, monospace" font-size="{spx}" "#,
            r#"text-anchor="middle" dominant-baseline="hanging" "#,
            r#"fill="rgb(200,235,235)" fill-opacity="0.706">{subtitle}</text>"#,
            "</svg>"
        ),
        w = canvas.width,
        h = canvas.height,
        cx = cx,
        ty = TITLE_TOP,
        tpx = TITLE_PX,
        sy = SUBTITLE_TOP,
        spx = SUBTITLE_PX,
        title = escape_xml(&text.title),
        subtitle = escape_xml(&text.subtitle),
    )
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
