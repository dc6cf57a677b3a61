pub mod ambient;
pub mod camera;
pub mod config;
pub mod constants;
pub mod layout;
pub mod metrics;
pub mod pointer;
pub mod proximity;
pub mod scene;
pub mod spring;

pub use ambient::*;
pub use camera::*;
pub use config::*;
pub use constants::*;
pub use layout::*;
pub use metrics::*;
pub use pointer::*;
pub use proximity::*;
pub use scene::*;
pub use spring::*;
