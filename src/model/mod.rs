pub mod evaluation;
pub mod params;
pub mod partition;
