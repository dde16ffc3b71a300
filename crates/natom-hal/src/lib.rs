//! natom Hardware Abstraction Layer
//!
//! Device descriptors for neutral-atom quantum processors. A device is a
//! fixed trap array with geometric and capacity limits and a set of control
//! channels. This crate checks registers of atom positions against those
//! limits and exposes the device's capability metadata.
//!
//! # Overview
//!
//! - A common [`DeviceModel`] trait that every device variant implements with
//!   constants (name, four limits, channel map)
//! - [`check_array`], the shared validator: capacity, dimensionality,
//!   minimum spacing, radial distance, in that order
//! - [`Device`], a model paired with a register that passed validation
//! - [`Channel`] descriptors and their [`Basis`]
//! - Device models loaded from YAML/JSON via [`DeviceSpec`]
//! - A [`DeviceRegistry`] for lookup by name
//!
//! # Built-in Devices
//!
//! | Device | Dim | Max atoms | Max radius | Min spacing |
//! |--------|-----|-----------|------------|-------------|
//! | [`Chadoq2`] | 2 | 100 | 50 µm | 4 µm |
//! | [`MockDevice`] | 3 | 2000 | 1000 µm | 1 µm |
//!
//! # Example
//!
//! ```rust
//! use natom_hal::{Chadoq2, Device};
//!
//! let device = Device::new(Chadoq2, [("q0", [0.0, 0.0]), ("q1", [4.0, 0.0])]).unwrap();
//! assert_eq!(device.qubits().len(), 2);
//! assert_eq!(device.supported_bases().len(), 2);
//!
//! // Too close together: rejected, no device is built.
//! let err = Device::new(Chadoq2, [("q0", [0.0, 0.0]), ("q1", [3.9, 0.0])]).unwrap_err();
//! assert!(err.is_constraint_violation());
//! ```
//!
//! # Implementing a Device
//!
//! ```rust
//! use std::sync::LazyLock;
//! use natom_hal::{ChannelMap, DeviceModel, Rydberg};
//!
//! static CHANNELS: LazyLock<ChannelMap> = LazyLock::new(|| {
//!     ChannelMap::from([("rydberg_global".into(), Rydberg::global(20.0, 5.0))])
//! });
//!
//! struct SmallDevice;
//!
//! impl DeviceModel for SmallDevice {
//!     fn name(&self) -> &str { "SmallDevice" }
//!     fn max_dimensionality(&self) -> usize { 2 }
//!     fn max_atom_num(&self) -> usize { 10 }
//!     fn max_radial_distance(&self) -> f64 { 20.0 }
//!     fn min_atom_distance(&self) -> f64 { 5.0 }
//!     fn channels(&self) -> &ChannelMap { &CHANNELS }
//! }
//! ```

pub mod channel;
pub mod config;
pub mod device;
pub mod devices;
pub mod error;
pub mod registry;
pub mod validate;

pub use channel::{Addressing, Basis, Channel, ChannelMap, Raman, Rydberg};
pub use config::{ChannelKind, ChannelSpec, ConfiguredDevice, DeviceSpec};
pub use device::{Device, DeviceModel, QubitData};
pub use devices::{Chadoq2, MockDevice};
pub use error::{ConstraintViolation, HalError, HalResult};
pub use registry::DeviceRegistry;
pub use validate::{DeviceLimits, check_array};

pub use natom_register::{Position, Register, RegisterError};
