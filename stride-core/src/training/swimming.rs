use super::{M_IN_KM, TrainingBase, Workout, WorkoutKind};

/// Pool swim. Speed comes from the pool laps while distance still comes from
/// the stroke count, so the two can disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub base: TrainingBase,
    /// Meters.
    pub length_pool: f64,
    pub count_pool: u64,
}

impl Swimming {
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(action: u64, duration: f64, weight: f64, length_pool: f64, count_pool: u64) -> Self {
        Self {
            base: TrainingBase::new(action, duration, weight),
            length_pool,
            count_pool,
        }
    }
}

impl Workout for Swimming {
    const KIND: WorkoutKind = WorkoutKind::Swimming;
    const LEN_STEP: f64 = 1.38;

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool as f64 / M_IN_KM / self.base.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.base.weight
    }
}
