
pub use world::AdminWorld;
