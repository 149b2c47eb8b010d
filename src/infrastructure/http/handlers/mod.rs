//! HTTP Handlers

mod drafts;
mod match_image;
mod publish;
mod scan;
mod status;

pub use drafts::*;
pub use match_image::*;
pub use publish::*;
pub use scan::*;
pub use status::*;
