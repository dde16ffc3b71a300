//! Registers of trapped atoms for neutral-atom devices.
//!
//! A [`Register`] maps qubit labels to [`Position`]s in a 2D or 3D trap
//! array. Registers are validated on construction (unique labels, finite and
//! uniformly sized coordinates) and are immutable afterwards. Device-specific
//! rules such as minimum spacing are enforced by `natom-hal`, not here.
//!
//! # Example
//!
//! ```rust
//! use natom_register::Register;
//!
//! let reg = Register::new([("q0", [0.0, 0.0]), ("q1", [4.0, 0.0])]).unwrap();
//! assert_eq!(reg.len(), 2);
//!
//! // 3x3 square array with 5 µm spacing, centered on the origin.
//! let square = Register::square(3, 5.0, Some("q")).unwrap();
//! assert_eq!(square.len(), 9);
//! ```

mod error;
mod layout;
mod position;
mod register;

pub use error::{RegisterError, RegisterResult};
pub use position::Position;
pub use register::Register;
