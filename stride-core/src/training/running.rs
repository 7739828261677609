use super::{M_IN_KM, TrainingBase, Workout, WorkoutKind};

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub base: TrainingBase,
}

impl Running {
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

    pub fn new(action: u64, duration: f64, weight: f64) -> Self {
        Self {
            base: TrainingBase::new(action, duration, weight),
        }
    }
}

impl Workout for Running {
    const KIND: WorkoutKind = WorkoutKind::Running;

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed()
            - Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.base.weight
            / M_IN_KM
            * self.base.duration_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_uses_default_step() {
        let run = Running::new(15000, 1.0, 75.0);
        assert!((run.distance() - 15000.0 * 0.65 / 1000.0).abs() < 1e-12);
    }

    #[test]
    fn speed_is_distance_over_duration() {
        for (action, duration) in [(15000, 1.0), (8000, 0.5), (1234, 2.25)] {
            let run = Running::new(action, duration, 70.0);
            assert!((run.mean_speed() - run.distance() / duration).abs() < 1e-12);
        }
    }

    #[test]
    fn calories_follow_formula() {
        let run = Running::new(15000, 1.0, 75.0);
        // (18 * 9.75 - 20) * 75 / 1000 * 60
        assert!((run.spent_calories() - 699.75).abs() < 1e-9);
    }

    #[test]
    fn slow_runs_report_negative_calories() {
        let run = Running::new(1000, 1.0, 75.0);
        assert!(run.spent_calories() < 0.0);
    }
}
