use std::path::Path;

use anyhow::Result;

use crate::config::LayoutConfig;
#[cfg(feature = "png")]
use crate::config::RenderConfig;
use crate::layout::{GRID_UNIT, PlacedNode, Scene};
use crate::theme::Theme;

pub fn render_svg(scene: &Scene, theme: &Theme, config: &LayoutConfig) -> String {
    let mut svg = String::new();
    let width = scene.width.max(200.0);
    let height = scene.height.max(200.0);

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));

    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        theme.canvas_background
    ));

    svg.push_str("<defs>");
    svg.push_str(&format!(
        "<pattern id=\"grid-dots\" x=\"0\" y=\"0\" width=\"{GRID_UNIT}\" height=\"{GRID_UNIT}\" patternUnits=\"userSpaceOnUse\"><circle cx=\"{half}\" cy=\"{half}\" r=\"0.75\" fill=\"{}\"/></pattern>",
        theme.dot_color,
        half = GRID_UNIT / 2.0,
    ));
    svg.push_str("</defs>");
    svg.push_str("<rect x=\"0\" y=\"0\" width=\"100%\" height=\"100%\" fill=\"url(#grid-dots)\"/>");

    // regular connectors first so highlighted ones are never occluded
    svg.push_str("<g>");
    for routed in &scene.regular_paths {
        svg.push_str(&format!(
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1\" stroke-dasharray=\"2 2\"/>",
            routed.path, theme.edge_color
        ));
    }
    svg.push_str("</g>");
    svg.push_str("<g>");
    for routed in &scene.highlighted_paths {
        svg.push_str(&format!(
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"/>",
            routed.path, theme.highlight_color
        ));
    }
    svg.push_str("</g>");

    for entry in &scene.nodes {
        svg.push_str(&card_svg(entry, theme, config));
    }

    svg.push_str("</svg>");
    svg
}

fn card_svg(entry: &PlacedNode, theme: &Theme, config: &LayoutConfig) -> String {
    let x = entry.anchor.x * GRID_UNIT;
    let y = entry.anchor.y * GRID_UNIT;
    let (stroke, stroke_width, dash) = if entry.selected {
        (theme.highlight_color.as_str(), 2.0, "")
    } else {
        (theme.card_border.as_str(), 1.0, " stroke-dasharray=\"4 4\"")
    };
    let cost_color = if entry.selected {
        theme.highlight_color.as_str()
    } else {
        theme.cost_color.as_str()
    };

    let mut card = format!(
        "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"12\" ry=\"12\" fill=\"{}\" stroke=\"{stroke}\" stroke-width=\"{stroke_width}\"{dash}/>",
        config.card_width, config.card_height, theme.card_background
    );
    let name_y = y + 12.0 + theme.font_size;
    card.push_str(&format!(
        "<text x=\"{:.2}\" y=\"{name_y:.2}\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
        x + 12.0,
        theme.font_family,
        theme.font_size,
        theme.card_name_color,
        escape_xml(&entry.node.name)
    ));
    let cost_y = name_y + theme.font_size + 8.0;
    card.push_str(&format!(
        "<text x=\"{:.2}\" y=\"{cost_y:.2}\" font-family=\"{}\" font-size=\"{}\" font-weight=\"bold\" fill=\"{cost_color}\">${}</text>",
        x + 12.0,
        theme.font_family,
        theme.font_size + 2.0,
        entry.node.cost
    ));
    card
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.font_family = "Inter".to_string();
    opt.default_size = usvg::Size::from_wh(render_cfg.width, render_cfg.height)
        .unwrap_or(usvg::Size::from_wh(800.0, 600.0).unwrap());

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
