//! Deterministic decoding of fuzzer input into typed values.
//!
//! [`FuzzedDataProvider`] wraps the byte slice a fuzzing engine hands to a
//! target and splits it into typed arguments: integers and floats in
//! arbitrary ranges, booleans, enum variants, slice picks, byte blobs and
//! strings. Blobs are read from the front of the buffer and scalars from the
//! back, so mutating one kind of data leaves the other stable.
//!
//! ```
//! use fdp_provider::FuzzedDataProvider;
//!
//! let data = [b'h', b'i', b'\\', b'!', 0x4A];
//! let mut fdp = FuzzedDataProvider::new(&data);
//!
//! let port = fdp.consume_integral_in_range(10i32, 30); // 0x4A % 21 == 11
//! let name = fdp.consume_random_length_string();
//!
//! assert_eq!(port, 21);
//! assert_eq!(name, "hi");
//! assert_eq!(fdp.remaining_bytes(), 0);
//! ```

#![warn(clippy::pedantic)]

pub mod consumable;
pub mod element;
pub mod enums;
pub mod float;
pub mod integral;
pub mod provider;
pub mod raw_string;

pub use consumable::Consumable;
pub use element::ByteElement;
pub use enums::FuzzEnum;
pub use float::FloatingPoint;
pub use integral::Integral;
pub use provider::FuzzedDataProvider;
pub use raw_string::RawString;
