use crate::{
    api::{attendance, employee, user, working_hours},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;

/// Per-route limiter. Both knobs are clamped to at least 1 so no
/// env value (0, or above 60000/min) can leave the builder unfinishable.
fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
    let burst = requests_per_min.max(1);
    let per_ms = (60_000 / burst as u64).max(1);
    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(burst)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .unwrap();
    Governor::new(&cfg)
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    cfg.service(
        web::scope(&config.api_prefix)
            .service(
                web::scope("/employees")
                    .service(
                        web::resource("")
                            .route(web::get().to(employee::list_employees))
                            .route(web::post().to(employee::create_employee)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(employee::update_employee))
                            .route(web::delete().to(employee::delete_employee)),
                    ),
            )
            .service(
                web::scope("/users")
                    // literal segments must register before /{id}
                    .service(
                        web::resource("/create")
                            .wrap(build_limiter(config.rate_create_user_per_min))
                            .route(web::post().to(user::create_user)),
                    )
                    .service(
                        web::resource("/login")
                            .wrap(build_limiter(config.rate_login_per_min))
                            .route(web::post().to(user::login)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(user::get_user))
                            .route(web::put().to(user::update_user))
                            .route(web::delete().to(user::delete_user)),
                    ),
            )
            .service(
                web::scope("/attendance")
                    .service(
                        web::resource("/update").route(web::post().to(attendance::update_attendance)),
                    )
                    .service(
                        web::resource("/by-date")
                            .route(web::get().to(attendance::attendance_by_date)),
                    )
                    .service(web::resource("/all").route(web::get().to(attendance::all_attendance)))
                    .service(
                        web::resource("/today-summary")
                            .route(web::get().to(attendance::today_summary)),
                    ),
            )
            .service(
                web::scope("/working-hours").service(
                    web::resource("/all").route(web::get().to(working_hours::all_working_hours)),
                ),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limiter_builds_for_extreme_rates() {
        // 0 and >60000/min both collapse to valid builder inputs.
        let _ = build_limiter(0);
        let _ = build_limiter(1);
        let _ = build_limiter(100_000);
    }
}
