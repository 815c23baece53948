use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f32,
    pub canvas_background: String,
    pub dot_color: String,
    pub card_background: String,
    pub card_border: String,
    pub card_name_color: String,
    pub cost_color: String,
    pub edge_color: String,
    pub highlight_color: String,
    pub hint_color: String,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 14.0,
            canvas_background: "#FAFAFA".to_string(),
            dot_color: "#52525B".to_string(),
            card_background: "#FFFFFF".to_string(),
            card_border: "#9CA3AF".to_string(),
            card_name_color: "#4B5563".to_string(),
            cost_color: "#111827".to_string(),
            edge_color: "#A1A1AA".to_string(),
            highlight_color: "#2563EB".to_string(),
            hint_color: "#52525B".to_string(),
        }
    }

    pub fn dark() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 14.0,
            canvas_background: "#18181B".to_string(),
            dot_color: "#71717A".to_string(),
            card_background: "#27272A".to_string(),
            card_border: "#52525B".to_string(),
            card_name_color: "#A1A1AA".to_string(),
            cost_color: "#F4F4F5".to_string(),
            edge_color: "#52525B".to_string(),
            highlight_color: "#3B82F6".to_string(),
            hint_color: "#A1A1AA".to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
