use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub card_width: f32,
    pub card_height: f32,
    pub corner_radius: f32,
    pub canvas_min_width: f32,
    pub canvas_min_height: f32,
    pub canvas_base_height: f32,
    pub workspace_row_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            card_width: 160.0,
            card_height: 72.0,
            corner_radius: 12.0,
            canvas_min_width: 640.0,
            canvas_min_height: 512.0,
            canvas_base_height: 256.0,
            workspace_row_height: 80.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    layout: Option<LayoutOverrides>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    font_size: Option<f32>,
    canvas_background: Option<String>,
    card_background: Option<String>,
    card_border: Option<String>,
    edge_color: Option<String>,
    highlight_color: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct LayoutOverrides {
    card_width: Option<f32>,
    card_height: Option<f32>,
    corner_radius: Option<f32>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = json5::from_str(&contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        if theme_name == "dark" {
            config.theme = Theme::dark();
        } else if theme_name == "light" || theme_name == "default" {
            config.theme = Theme::light();
        }
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.font_size {
            config.theme.font_size = v;
        }
        if let Some(v) = vars.canvas_background {
            config.theme.canvas_background = v;
        }
        if let Some(v) = vars.card_background {
            config.theme.card_background = v;
        }
        if let Some(v) = vars.card_border {
            config.theme.card_border = v;
        }
        if let Some(v) = vars.edge_color {
            config.theme.edge_color = v;
        }
        if let Some(v) = vars.highlight_color {
            config.theme.highlight_color = v;
        }
    }

    if let Some(layout) = parsed.layout {
        if let Some(v) = layout.card_width {
            config.layout.card_width = v;
        }
        if let Some(v) = layout.card_height {
            config.layout.card_height = v;
        }
        if let Some(v) = layout.corner_radius {
            config.layout.corner_radius = v;
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_card_dimensions() {
        let config = LayoutConfig::default();
        assert_eq!(config.card_width, 160.0);
        assert_eq!(config.corner_radius, 12.0);
    }

    #[test]
    fn missing_path_yields_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.layout.card_width, 160.0);
        assert_eq!(config.theme.highlight_color, Theme::default().highlight_color);
    }
}
