//! Business logic services for the application layer.

pub mod admission_gate;
pub mod game_service;

pub use admission_gate::{Admission, AdmissionGate};
pub use game_service::GameService;
