//! Two single-screen click games on bevy + egui.
//! - `rps`: Rock-Paper-Scissors against a random computer.
//! - `quiz`: multiple-choice quiz from a local bank or OpenTDB.
//! - `hit` / `paint`: click regions and drawing shared by both.

pub mod error;
pub mod hit;
pub mod paint;
pub mod quiz;
pub mod rps;

pub use error::{FetchError, InvalidInput, QuizError};
pub use hit::Region;
