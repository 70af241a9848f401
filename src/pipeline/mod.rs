//! Phone-number synthesis and batch dataset generation.
//!
//! - [`phone`] draws the structural parts of a phone number and lays them
//!   out in one of two writing styles.
//! - [`batch`] runs the independent-trials generation loop and persists
//!   the finished images.

pub mod batch;
pub mod phone;

pub use batch::{generate_phone_dataset, render_sequence_to_file, BatchOptions};
pub use phone::{PhoneNumber, PhoneNumberSynthesizer, WritingStyle};
