//! Training calculations.
//!
//! A `Training` is one of three workout kinds. Each kind embeds the shared
//! `TrainingBase` record and implements `Workout`, which supplies the shared
//! distance and speed derivations; kinds override the step length, the speed
//! derivation, or both, and always supply their own calorie formula.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::message::InfoMessage;
use log::debug;
use std::fmt;

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_HOUR: f64 = 60.0;
pub const DEFAULT_LEN_STEP: f64 = 0.65;

/// Raw readings shared by every workout kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingBase {
    /// Steps or strokes.
    pub action: u64,
    /// Hours. Must be positive; not checked.
    pub duration: f64,
    /// Kilograms.
    pub weight: f64,
}

impl TrainingBase {
    pub fn new(action: u64, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }

    pub fn duration_minutes(&self) -> f64 {
        self.duration * MIN_IN_HOUR
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    pub fn display_name(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Per-kind formulas. Only the three concrete kinds implement this, so a
/// bare `TrainingBase` has no way to report calories.
pub trait Workout {
    const KIND: WorkoutKind;
    const LEN_STEP: f64 = DEFAULT_LEN_STEP;

    fn base(&self) -> &TrainingBase;

    /// Kilometers covered.
    fn distance(&self) -> f64 {
        self.base().action as f64 * Self::LEN_STEP / M_IN_KM
    }

    /// Kilometers per hour. Non-finite when duration is zero.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.base().duration
    }

    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        let base = self.base();
        InfoMessage::new(
            Self::KIND.display_name(),
            base.duration,
            self.distance(),
            self.mean_speed(),
            self.spent_calories(),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Training {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

macro_rules! dispatch {
    ($self:expr, $w:ident => $body:expr) => {
        match $self {
            Training::Running($w) => $body,
            Training::SportsWalking($w) => $body,
            Training::Swimming($w) => $body,
        }
    };
}

impl Training {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Training::Running(_) => Running::KIND,
            Training::SportsWalking(_) => SportsWalking::KIND,
            Training::Swimming(_) => Swimming::KIND,
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.kind().display_name()
    }

    pub fn base(&self) -> &TrainingBase {
        dispatch!(self, w => w.base())
    }

    pub fn distance(&self) -> f64 {
        dispatch!(self, w => w.distance())
    }

    pub fn mean_speed(&self) -> f64 {
        dispatch!(self, w => w.mean_speed())
    }

    pub fn spent_calories(&self) -> f64 {
        dispatch!(self, w => w.spent_calories())
    }

    pub fn show_training_info(&self) -> InfoMessage {
        debug!("Training::show_training_info kind={}", self.kind());
        dispatch!(self, w => w.show_training_info())
    }
}

impl From<Running> for Training {
    fn from(w: Running) -> Self {
        Training::Running(w)
    }
}

impl From<SportsWalking> for Training {
    fn from(w: SportsWalking) -> Self {
        Training::SportsWalking(w)
    }
}

impl From<Swimming> for Training {
    fn from(w: Swimming) -> Self {
        Training::Swimming(w)
    }
}
