pub mod job;
pub mod layer;
pub mod model;
