use crate::reminder::SendDueReservationRemindersUseCase;
use crate::shared::usecase::execute;
use chrono::{DateTime, Duration as ChronoDuration, NaiveTime, Utc};
use chrono_tz::Tz;
use portarius_infra::PortariusContext;
use std::time::Duration;
use tracing::error;

/// Seconds from `now` until the next local noon. Recomputed before
/// every sleep so the schedule tracks the configured timezone rather
/// than drifting by a fixed 24h step.
pub fn seconds_until_next_noon(now: DateTime<Utc>, tz: Tz) -> u64 {
    let local = now.with_timezone(&tz);
    let todays_noon = local.date().and_hms(12, 0, 0);
    let next_noon = if local < todays_noon {
        todays_noon
    } else {
        (local.date() + ChronoDuration::days(1)).and_hms(12, 0, 0)
    };
    (next_noon - local).num_seconds().max(1) as u64
}

/// Daily reservation reminder job: one catch-up pass when the process
/// boots after noon, then a pass at every local noon.
pub fn start_reservation_reminders_job(ctx: PortariusContext) {
    actix_web::rt::spawn(async move {
        let boot_local = ctx.sys.now().with_timezone(&ctx.config.timezone);
        if boot_local.time() > NaiveTime::from_hms(12, 0, 0) {
            send_due_reservation_reminders(&ctx).await;
        }

        loop {
            let secs = seconds_until_next_noon(ctx.sys.now(), ctx.config.timezone);
            actix_web::rt::time::sleep(Duration::from_secs(secs)).await;
            send_due_reservation_reminders(&ctx).await;
        }
    });
}

async fn send_due_reservation_reminders(ctx: &PortariusContext) {
    let usecase = SendDueReservationRemindersUseCase {};
    if let Err(e) = execute(usecase, ctx).await {
        error!("Daily reservation reminder pass failed: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::America::Sao_Paulo;

    #[test]
    fn before_noon_waits_until_todays_noon() {
        let now = Sao_Paulo.ymd(2024, 6, 3).and_hms(9, 0, 0).with_timezone(&Utc);
        assert_eq!(seconds_until_next_noon(now, Sao_Paulo), 3 * 60 * 60);
    }

    #[test]
    fn after_noon_waits_until_tomorrows_noon() {
        let now = Sao_Paulo.ymd(2024, 6, 3).and_hms(18, 0, 0).with_timezone(&Utc);
        assert_eq!(seconds_until_next_noon(now, Sao_Paulo), 18 * 60 * 60);
    }

    #[test]
    fn exactly_at_noon_waits_a_full_day() {
        let now = Sao_Paulo.ymd(2024, 6, 3).and_hms(12, 0, 0).with_timezone(&Utc);
        assert_eq!(seconds_until_next_noon(now, Sao_Paulo), 24 * 60 * 60);
    }
}
