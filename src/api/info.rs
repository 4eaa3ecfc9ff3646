use axum::{extract::State, response::Html};
use time::{format_description::well_known::Rfc2822, OffsetDateTime};

use crate::api::middleware::{ApiResult, AppState};

/// Summary page: live person count plus the moment the page was rendered.
pub async fn info(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let count = state.person_service.count().await?;
    let now = OffsetDateTime::now_utc()
        .format(&Rfc2822)
        .unwrap_or_default();

    Ok(Html(format!(
        "<p>Phonebook has info for {} people</p>\n<p>{}</p>",
        count, now
    )))
}
