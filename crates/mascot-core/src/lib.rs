pub mod config;
pub mod constants;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod interceptor;
pub mod mascot;
pub mod overlay;
pub mod particles;
pub mod sprite;
pub mod transition;

pub use config::*;
pub use direction::*;
pub use error::*;
pub use geometry::*;
pub use interceptor::*;
pub use mascot::*;
pub use overlay::*;
pub use particles::*;
pub use sprite::*;
pub use transition::*;

pub use url::Url;
