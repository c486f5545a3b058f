use burn::backend::ndarray::NdArrayDevice;
use tracing::debug;

/// Initializes the device that training and inference run on.
///
/// The tabular risk model is small, so the CPU backend is the default.
///
/// This function only exists to be able to change the device at a single
/// location.
pub fn init_device() -> NdArrayDevice {
    debug!("Initializing NdArray device");
    NdArrayDevice::default()
}
