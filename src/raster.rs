pub mod draw;
pub mod morph;
