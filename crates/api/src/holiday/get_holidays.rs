use crate::error::PortariusError;
use crate::shared::auth::protect_route;
use actix_web::{web, HttpRequest, HttpResponse};
use portarius_api_structs::get_holidays::*;
use portarius_domain::national_holidays;
use portarius_infra::{HolidayApiClient, PortariusContext};
use tracing::warn;

/// Serves the BrasilAPI holiday list for the year, falling back to
/// the built-in table when the upstream call fails.
pub async fn get_holidays_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;

    let holidays = match HolidayApiClient::new().fetch_holidays(path_params.year).await {
        Ok(holidays) => holidays,
        Err(e) => {
            warn!(
                "Unable to fetch holidays for {} from the API, serving the built-in table: {:?}",
                path_params.year, e
            );
            national_holidays(path_params.year)
        }
    };

    Ok(HttpResponse::Ok().json(APIResponse::new(holidays)))
}
