pub mod settings;

pub use settings::{SettingsCommands, SettingsSetArgs};
