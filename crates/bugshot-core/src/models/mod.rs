pub mod settings;

pub use settings::{
    GroqSettings, GroqSettingsUpdate, JiraSettings, JiraSettingsUpdate, Settings, SettingsUpdate,
    MASK_MARKER,
};
