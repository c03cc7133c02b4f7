use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_icon_mode")]
    pub icon_mode: String,
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

fn default_icon_mode() -> String {
    "nerdfont".to_string()
}

fn default_mouse() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            icon_mode: default_icon_mode(),
            mouse: default_mouse(),
        }
    }
}
