pub mod errors;
pub mod logging;
pub mod message;
pub mod package;
pub mod training;

pub use errors::{Result, StrideError};
pub use message::InfoMessage;
pub use package::{Package, process_packages, read_package};
pub use training::{Running, SportsWalking, Swimming, Training, Workout, WorkoutKind};
