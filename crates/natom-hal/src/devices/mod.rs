//! Built-in device models.

mod chadoq2;
mod mock;

use std::sync::Arc;

use crate::device::DeviceModel;

pub use chadoq2::Chadoq2;
pub use mock::MockDevice;

/// All built-in device models.
pub fn builtin() -> Vec<Arc<dyn DeviceModel>> {
    vec![Arc::new(Chadoq2), Arc::new(MockDevice)]
}
