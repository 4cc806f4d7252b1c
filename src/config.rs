#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub class_name: String,
    pub window: WindowConfig,
    pub farewell: DialogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogConfig {
    pub caption: String,
    pub text: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            class_name: "my window class".to_string(),
            window: WindowConfig::default(),
            farewell: DialogConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "hello, I'm a window!".to_string(),
            x: 0,
            y: 0,
            width: 800,
            height: 600,
        }
    }
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            caption: "I'm a messagebox!".to_string(),
            text: "Goodbye!".to_string(),
        }
    }
}
