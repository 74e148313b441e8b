pub mod config;
pub mod constants;
pub mod epoch;
pub mod form;
pub mod particles;
pub mod preview;
pub mod registry;
pub mod reveal;
pub mod ripple;
pub mod scroll_spy;
pub mod stylesheet;
pub mod trail;
pub mod typing;

pub use config::FxConfig;
