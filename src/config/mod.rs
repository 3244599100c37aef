pub mod schema;
pub mod loader;

pub use schema::{ClassKind, ClassKindSettings, Config, HooksConfig, LanguageSettings};
pub use loader::{load_config, merge_with_cli_args, DEFAULT_CONFIG_PATH};
