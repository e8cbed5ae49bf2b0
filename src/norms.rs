use serde::Serialize;
use time::Date;

/// Recommended weekly activity, spread evenly over the week.
const WEEKLY_ACTIVITY_MINUTES: f64 = 150.0;

/// Daily targets derived from anthropometric inputs. All values rounded to
/// two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyNorms {
    pub calorie_goal: f64,
    pub water_goal_ml: f64,
    pub proteins_g: f64,
    pub fats_g: f64,
    pub carbs_g: f64,
    pub daily_activity_minutes: f64,
}

/// Mifflin-St Jeor variant with the male coefficient (+5) and no gender
/// offset term. The omission is inherited from the formula this service was
/// built around and is kept deliberately; do not "fix" it here.
pub fn calculate_norms(height_cm: f64, weight_kg: f64, age_years: i32) -> DailyNorms {
    let calorie_goal = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years) + 5.0;
    let water_goal_ml = 30.0 * weight_kg;

    // 30% of calories from protein (4 kcal/g), 25% from fat (9 kcal/g),
    // 45% from carbs (4 kcal/g).
    let proteins_g = calorie_goal * 0.3 / 4.0;
    let fats_g = calorie_goal * 0.25 / 9.0;
    let carbs_g = calorie_goal * 0.45 / 4.0;

    DailyNorms {
        calorie_goal: round2(calorie_goal),
        water_goal_ml: round2(water_goal_ml),
        proteins_g: round2(proteins_g),
        fats_g: round2(fats_g),
        carbs_g: round2(carbs_g),
        daily_activity_minutes: round2(WEEKLY_ACTIVITY_MINUTES / 7.0),
    }
}

/// Full years between `birth_date` and `today`, counting the birthday itself
/// as already completed.
pub fn age_on(birth_date: Date, today: Date) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month() as u8, today.day()) < (birth_date.month() as u8, birth_date.day()) {
        age -= 1;
    }
    age
}

pub fn remaining(goal: f64, consumed: f64) -> f64 {
    (goal - consumed).max(0.0)
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
