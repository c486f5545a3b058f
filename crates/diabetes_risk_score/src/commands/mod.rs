//! CLI command implementations.

mod device;
pub mod assess;
pub mod predict;
pub mod score;
pub mod train;

pub use device::init_device;
