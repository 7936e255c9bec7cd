//! Shared data contracts between the Stallside edge agent and cloud backend.
//!
//! This crate contains:
//! - Record shapes exchanged by the two services (barns, stalls, devices,
//!   horses, commands, sync payloads)
//! - Shape guards for untyped network payloads
//! - Pure transform functions: timestamp formats, time units, key casing,
//!   age approximation, and reading-format adapters
//!
//! Principles:
//! - No I/O, no async, no infrastructure dependencies
//! - Every transform is stateless and returns a fresh value, never mutating
//!   its input
//! - Testable in isolation

pub mod api;
pub mod barn;
pub mod clock;
pub mod command;
pub mod config;
pub mod device;
pub mod error;
pub mod horse;
pub mod sync;
pub mod transform;

// Re-export commonly used types
pub use clock::{Clock, SystemClock};
pub use command::{Command, CommandAction, CommandStatus};
pub use config::{EdgeConfig, is_edge_config, is_stall_location};
pub use device::{DeviceReading, DeviceType, EdgeReading, ReadingType};
pub use error::{ContractError, Result};
