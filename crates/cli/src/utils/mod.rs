pub mod loading;

pub use loading::{load_config, load_symbols};
