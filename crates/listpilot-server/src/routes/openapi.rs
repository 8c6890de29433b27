//! OpenAPI documentation configuration.

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::{campaign, health, lists, oauth, session};

/// OpenAPI documentation for the listpilot API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "listpilot API",
        description = "OAuth broker and campaign-send proxy for an email-marketing provider",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Local server"),
    ),
    paths(
        // Health
        health::service_info,
        health::connect_ack,
        // OAuth
        oauth::oauth_callback_handler,
        oauth::exchange_token_handler,
        // Session
        session::status_handler,
        session::disconnect_handler,
        // Lists
        lists::lists_handler,
        // Campaign
        campaign::send_campaign_handler,
    ),
    components(
        schemas(
            health::ServiceInfo,
            health::ConnectAck,
            oauth::TokenExchangeRequest,
            oauth::ConnectionData,
            session::StatusData,
            lists::ListsData,
            lists::ListInfo,
            lists::ListStats,
            campaign::SendCampaignRequest,
            campaign::CampaignData,
        )
    ),
    tags(
        (name = "health", description = "Service info"),
        (name = "oauth", description = "OAuth connect flow"),
        (name = "session", description = "Session status and disconnect"),
        (name = "lists", description = "Audience lists"),
        (name = "campaign", description = "Campaign send"),
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi())
}
