use utoipa::OpenApi;

use crate::features;

#[derive(OpenApi)]
#[openapi(
    info(title = "Sistema FEPERJ", version = "1.0.0"),
    paths(
        features::auth::handlers::login,
        features::auth::handlers::setup_admin,
        features::users::handlers::list_users,
        features::users::handlers::create_user,
        features::athletes::handlers::list_athletes,
        features::athletes::handlers::get_athlete,
        features::athletes::handlers::get_athlete_by_cpf,
        features::athletes::handlers::export_athletes,
        features::athletes::handlers::create_athlete,
        features::athletes::handlers::update_athlete,
        features::athletes::handlers::delete_athlete,
        features::teams::handlers::list_teams,
        features::teams::handlers::get_team,
        features::teams::handlers::list_team_athletes,
        features::teams::handlers::create_team,
        features::teams::handlers::update_team,
        features::teams::handlers::delete_team,
        features::competitions::handlers::list_competitions,
        features::competitions::handlers::get_competition,
        features::competitions::handlers::create_competition,
        features::competitions::handlers::update_competition,
        features::competitions::handlers::delete_competition,
        features::enrollments::handlers::list_enrollments,
        features::enrollments::handlers::create_enrollment,
        features::enrollments::handlers::cancel_enrollment,
        features::reports::handlers::dashboard,
        features::health::health_check,
    ),
    components(
        schemas(
            feperj_storage::dto::common::CreatedResponse,
            feperj_storage::dto::common::MessageResponse,
            feperj_storage::dto::user::LoginForm,
            feperj_storage::dto::user::LoginResponse,
            feperj_storage::dto::user::SetupAdminResponse,
            feperj_storage::dto::user::CreateUserRequest,
            feperj_storage::dto::user::UserResponse,
            feperj_storage::dto::athlete::AthleteRequest,
            feperj_storage::dto::athlete::AthleteResponse,
            feperj_storage::dto::team::TeamRequest,
            feperj_storage::dto::team::TeamResponse,
            feperj_storage::dto::team::TeamAthletesResponse,
            feperj_storage::dto::competition::CompetitionRequest,
            feperj_storage::dto::competition::CompetitionResponse,
            feperj_storage::dto::enrollment::EnrollmentRequest,
            feperj_storage::dto::enrollment::EnrollmentResponse,
            feperj_storage::dto::report::DashboardResponse,
            feperj_storage::dto::report::TotalsResponse,
            feperj_storage::dto::report::TeamAthleteCountResponse,
            features::health::HealthResponse,
        )
    ),
    tags(
        (name = "auth", description = "Login and administrator bootstrap"),
        (name = "usuarios", description = "Account management"),
        (name = "atletas", description = "Athlete registry"),
        (name = "equipes", description = "Team registry"),
        (name = "competicoes", description = "Competitions"),
        (name = "inscricoes", description = "Competition enrollments"),
        (name = "relatorios", description = "Reports"),
        (name = "health", description = "Liveness"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_registry_paths() {
        let doc = ApiDoc::openapi();

        for path in [
            "/login",
            "/atletas",
            "/atletas/{id}",
            "/atletas/export",
            "/equipes/{id}",
            "/competicoes/{id}",
            "/inscricoes/{id}",
            "/relatorios/dashboard",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
