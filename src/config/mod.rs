pub mod files;
pub mod settings;

pub use files::{atomic_write, config_file, init_config_dir, log_file, sounds_dir};
pub use settings::{load_config, save_config, AppConfig};
