pub mod bleed;
pub mod calibration;
pub mod occupancy;
pub mod params;
pub mod shrink;
