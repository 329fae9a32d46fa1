use egui::Color32;

pub const ADVANCED_LOG_ENV: &str = "CHESS_VIEWER_ADVANCED_LOG";

#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub title: String,
    pub window_size: [f32; 2],
    pub light_square: Color32,
    pub dark_square: Color32,
    pub selected_square: Color32,
    pub hint_color: Color32,
    pub advanced_logging: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Chess Board".to_string(),
            window_size: [800.0, 800.0],
            light_square: Color32::from_rgb(240, 217, 181),
            dark_square: Color32::from_rgb(181, 136, 99),
            selected_square: Color32::from_rgb(255, 255, 0),
            hint_color: Color32::from_rgba_premultiplied(128, 128, 128, 179), // 70% opacity
            advanced_logging: false,
        }
    }
}

impl ViewerConfig {
    /// Defaults, with advanced logging switched on by `CHESS_VIEWER_ADVANCED_LOG=1|true`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var(ADVANCED_LOG_ENV) {
            config.advanced_logging = parse_flag(&value);
        }
        config
    }

    pub fn square_color(&self, dark: bool) -> Color32 {
        if dark {
            self.dark_square
        } else {
            self.light_square
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
