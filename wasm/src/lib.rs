use costgraph::{CostCanvas, LayoutConfig, Theme, parse_graph, render_svg};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CostTreeOptions {
    selected_region: Option<String>,
    selected_workspace: Option<String>,
    scale: Option<f32>,
    theme: Option<String>,
}

fn build_theme(options: &CostTreeOptions) -> Theme {
    if options.theme.as_deref() == Some("dark") {
        Theme::dark()
    } else {
        Theme::light()
    }
}

#[wasm_bindgen]
pub fn render_cost_tree_svg(nodes_json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let options = if let Some(raw_options) = options_json {
        serde_json::from_str::<CostTreeOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string()))?
    } else {
        CostTreeOptions::default()
    };

    let graph = parse_graph(nodes_json).map_err(|error| JsValue::from_str(&error.to_string()))?;
    let config = LayoutConfig::default();
    let theme = build_theme(&options);

    let mut canvas = CostCanvas::new(graph);
    if let Some(scale) = options.scale {
        canvas.transform_mut().set_scale(scale);
    }
    canvas.set_selection(
        options.selected_region.as_deref(),
        options.selected_workspace.as_deref(),
    );
    canvas.measure_headless(&config);
    let scene = canvas.scene(&config);
    Ok(render_svg(&scene, &theme, &config))
}

#[cfg(test)]
mod tests {
    use crate::{CostTreeOptions, build_theme};

    #[test]
    fn theme_defaults_to_light() {
        let theme = build_theme(&CostTreeOptions::default());
        assert_eq!(theme.canvas_background, "#FAFAFA");
    }

    #[test]
    fn dark_theme_is_selectable() {
        let options = CostTreeOptions {
            theme: Some("dark".to_string()),
            ..Default::default()
        };
        let theme = build_theme(&options);
        assert_eq!(theme.canvas_background, "#18181B");
    }
}
