//! SVG export for a single page.
//!
//! Renders each panel outline as a path; panels holding an image get an
//! `<image>` clipped to the outline. Resize gaps can be overlaid as handles.

use crate::model::{Page, PageSize};
use crate::resize_gaps::calculate_resize_gaps;

/// Colours and overlay options for [`render_page_svg`].
#[derive(Debug, Clone)]
pub struct SvgStyle {
    pub background: String,
    pub panel_fill: String,
    pub panel_stroke: String,
    pub stroke_width: f64,
    pub gap_stroke: String,
    pub show_gaps: bool,
    pub adjacency_threshold: f64,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            panel_fill: "#f4f4f4".to_string(),
            panel_stroke: "#111111".to_string(),
            stroke_width: 3.0,
            gap_stroke: "#2f80ed".to_string(),
            show_gaps: false,
            adjacency_threshold: panelkit_core::DEFAULT_ADJACENCY_THRESHOLD,
        }
    }
}

/// Renders a standalone SVG document of `page`.
pub fn render_page_svg(page: &Page, size: PageSize, style: &SvgStyle) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = size.width,
        h = size.height
    ));
    svg.push_str(&format!(
        "  <rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
        size.width,
        size.height,
        escape_attr(&style.background)
    ));

    for (i, panel) in page.panels.iter().enumerate() {
        let d = panel.path_data();
        svg.push_str(&format!(
            "  <path id=\"panel-{}\" d=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            i,
            d,
            escape_attr(&style.panel_fill),
            escape_attr(&style.panel_stroke),
            style.stroke_width
        ));

        if let Some(image) = &panel.image {
            let bb = panel.drop_zone();
            svg.push_str(&format!(
                "  <clipPath id=\"clip-{}\"><path d=\"{}\"/></clipPath>\n",
                i, d
            ));
            svg.push_str(&format!(
                "  <image href=\"{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" \
                 preserveAspectRatio=\"xMidYMid slice\" clip-path=\"url(#clip-{})\"/>\n",
                escape_attr(&image.source),
                bb.left,
                bb.top,
                bb.width,
                bb.height,
                i
            ));
        }
    }

    if style.show_gaps {
        for gap in calculate_resize_gaps(&page.panels, style.adjacency_threshold) {
            svg.push_str(&format!(
                "  <line class=\"resize-gap\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
                gap.x1,
                gap.y1,
                gap.x2,
                gap.y2,
                escape_attr(&style.gap_stroke),
                style.stroke_width
            ));
        }
    }

    svg.push_str("</svg>\n");
    svg
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
