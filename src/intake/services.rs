use time::OffsetDateTime;
use tracing::{debug, info};

use crate::clients::nutrition::NutritionApi;
use crate::errors::ApiError;
use crate::goals;
use crate::intake::dto::{
    LogCaloriesRequest, LogCaloriesResponse, LogWaterRequest, LogWaterResponse,
};
use crate::intake::repo;
use crate::norms;
use crate::profile;
use crate::state::AppState;

pub async fn log_water(
    state: &AppState,
    user_id: i64,
    req: LogWaterRequest,
) -> Result<LogWaterResponse, ApiError> {
    if !(req.amount_ml > 0.0) {
        return Err(ApiError::validation("water amount must be positive"));
    }

    let profile = profile::repo::find(&state.db, user_id)
        .await?
        .ok_or(ApiError::ProfileMissing)?;
    let goal = goals::service::get_or_create_today_goal(&state.db, &profile).await?;

    let today = OffsetDateTime::now_utc().date();
    let id = repo::insert_water(&state.db, user_id, today, req.amount_ml).await?;
    let total = repo::water_total_for_day(&state.db, user_id, today).await?;
    info!(user_id, amount_ml = req.amount_ml, total_today_ml = total, "water logged");

    Ok(LogWaterResponse {
        id,
        logged_ml: req.amount_ml,
        total_today_ml: total,
        goal_ml: goal.water_goal_ml,
        remaining_ml: norms::remaining(goal.water_goal_ml, total),
    })
}

pub async fn log_calories(
    state: &AppState,
    user_id: i64,
    req: LogCaloriesRequest,
) -> Result<LogCaloriesResponse, ApiError> {
    let (product, amount) = resolve_amount(state, req).await?;

    let profile = profile::repo::find(&state.db, user_id)
        .await?
        .ok_or(ApiError::ProfileMissing)?;
    let goal = goals::service::get_or_create_today_goal(&state.db, &profile).await?;

    let today = OffsetDateTime::now_utc().date();
    let id = repo::insert_calories(&state.db, user_id, today, amount).await?;
    let total = repo::calories_total_for_day(&state.db, user_id, today).await?;
    info!(user_id, kcal = amount, total_today_kcal = total, "calories logged");

    Ok(LogCaloriesResponse {
        id,
        product,
        logged_kcal: amount,
        total_today_kcal: total,
        goal_kcal: goal.calorie_goal,
        remaining_kcal: norms::remaining(goal.calorie_goal, total),
    })
}

/// Raw kcal amount, or a product lookup. A looked-up product logs its
/// per-100g kcal value as the absolute amount — no portion-size input exists,
/// and the conflation is preserved on purpose.
async fn resolve_amount(
    state: &AppState,
    req: LogCaloriesRequest,
) -> Result<(Option<String>, f64), ApiError> {
    match (req.calories_kcal, req.product) {
        (Some(kcal), _) => {
            if !(kcal > 0.0) {
                return Err(ApiError::validation("calorie amount must be positive"));
            }
            Ok((None, kcal))
        }
        (None, Some(name)) => {
            let info = state
                .nutrition
                .lookup(&name)
                .await
                .map_err(|e| ApiError::ExternalLookup(format!("nutrition lookup: {e}")))?;
            let Some(info) = info else {
                debug!(product = %name, "nutrition lookup found nothing");
                return Err(ApiError::Validation(format!(
                    "no product matched '{name}', try a different name"
                )));
            };
            if info.calories_per_100g <= 0.0 {
                return Err(ApiError::Validation(format!(
                    "no calorie data for product '{}'",
                    info.name
                )));
            }
            Ok((Some(info.name), info.calories_per_100g))
        }
        (None, None) => Err(ApiError::validation(
            "provide either calories_kcal or product",
        )),
    }
}
