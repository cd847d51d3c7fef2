mod preferences;
mod settings;

pub use preferences::Preferences;
pub use settings::{Settings, DEFAULT_BYPASS, DEFAULT_MATCHERS};
