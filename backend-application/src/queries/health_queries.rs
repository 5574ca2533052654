use crate::{AppError, AppState};

pub async fn check_readiness(state: &AppState) -> Result<(), AppError> {
    state.health_service.check_database().await?;
    Ok(())
}
