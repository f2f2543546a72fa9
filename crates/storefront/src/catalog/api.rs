use contracts::catalog::GameSummary;

use crate::shared::api_utils::{get_json, ApiError};
use crate::system::auth::session::Session;

/// Games on sale. The listing route serves approved games only; the client
/// still drops any pending or rejected row it receives.
pub async fn fetch_catalog(session: Session) -> Result<Vec<GameSummary>, ApiError> {
    get_json(&session, "/api/games").await
}
