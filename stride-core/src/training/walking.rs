use super::{TrainingBase, Workout, WorkoutKind};

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    pub base: TrainingBase,
    /// Centimeters.
    pub height: f64,
}

impl SportsWalking {
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(action: u64, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            base: TrainingBase::new(action, duration, weight),
            height,
        }
    }

    /// `speed² // height`: floored toward negative infinity, not divided.
    fn speed_height_ratio(&self) -> f64 {
        floor_div(self.mean_speed().powi(2), self.height)
    }
}

/// Floor division derived from the remainder, so the quotient is not rounded
/// before it is floored. A zero divisor yields NaN.
fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

impl Workout for SportsWalking {
    const KIND: WorkoutKind = WorkoutKind::SportsWalking;

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        let weight = self.base.weight;
        (Self::CALORIES_WEIGHT_MULTIPLIER * weight
            + self.speed_height_ratio() * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * self.base.duration_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_floored() {
        // speed² = 5.0 with height 2 gives 2, not 2.5
        let speed = 5.0_f64.sqrt();
        let action = (speed * 1000.0 / 0.65).round() as u64;
        let mut walk = SportsWalking::new(action, 1.0, 70.0, 2.0);
        let speed_sq = walk.mean_speed().powi(2);
        assert!((speed_sq - 5.0).abs() < 1e-3);
        assert_eq!(walk.speed_height_ratio(), (speed_sq / 2.0).floor());
        assert_eq!(walk.speed_height_ratio(), 2.0);

        walk.height = -2.0;
        assert_eq!(walk.speed_height_ratio(), -3.0);
    }

    #[test]
    fn ratio_floors_from_remainder() {
        // 42.25 / 0.01 rounds up to 4225.0, the true quotient is just below it
        let walk = SportsWalking::new(10000, 1.0, 75.0, 0.01);
        assert_eq!(walk.mean_speed(), 6.5);
        assert_eq!(walk.speed_height_ratio(), 4224.0);
        assert!((walk.spent_calories() - 551389.5).abs() < 1e-6);
    }

    #[test]
    fn floor_div_signs() {
        assert_eq!(floor_div(7.0, 2.0), 3.0);
        assert_eq!(floor_div(-7.0, 2.0), -4.0);
        assert_eq!(floor_div(7.0, -2.0), -4.0);
        assert_eq!(floor_div(-7.0, -2.0), 3.0);
        assert!(floor_div(1.0, 4.0) == 0.0 && floor_div(1.0, 4.0).is_sign_positive());
        assert!(floor_div(-1.0, 4.0).eq(&-1.0));
        assert!(floor_div(1.0, 0.0).is_nan());
    }

    #[test]
    fn floored_term_feeds_calories() {
        let speed = 5.0_f64.sqrt();
        let action = (speed * 1000.0 / 0.65).round() as u64;
        let walk = SportsWalking::new(action, 1.0, 70.0, 2.0);
        let expected = (0.035 * 70.0 + 2.0 * 0.029 * 70.0) * 60.0;
        assert!((walk.spent_calories() - expected).abs() < 1e-9);
    }

    #[test]
    fn reference_walk() {
        let walk = SportsWalking::new(9000, 1.0, 75.0, 180.0);
        assert!((walk.distance() - 5.85).abs() < 1e-12);
        assert!((walk.mean_speed() - 5.85).abs() < 1e-12);
        // 5.85² / 180 floors to zero, leaving only the weight term
        assert!((walk.spent_calories() - 157.5).abs() < 1e-9);
    }
}
