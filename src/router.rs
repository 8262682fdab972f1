use axum::{
    routing::{get, patch, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{
        auth, bateau, commentaire, demande, document, message, paiement, reservation, utilisateur,
    },
    state::AppState,
};

/// OpenAPI document covering the workflow endpoints.
#[derive(OpenApi)]
#[openapi(
    paths(
        reservation::create_reservation,
        reservation::update_reservation_statut,
        paiement::create_paiement,
        demande::post_demande,
        demande::update_demande_statut,
        message::get_messages,
        message::mark_as_read,
    ),
    components(schemas(
        crate::model::api::ErrorDto,
        crate::model::api::MessageDto,
        crate::model::reservation::CreateReservationDto,
        crate::model::reservation::UpdateStatutReservationDto,
        crate::model::paiement::CreatePaiementDto,
        crate::model::demande::CreateDemandeDto,
        crate::model::demande::UpdateStatutDemandeDto,
    )),
    tags(
        (name = "reservation", description = "Reservation workflow"),
        (name = "paiement", description = "Payment workflow"),
        (name = "demande", description = "Partnership request workflow"),
        (name = "message", description = "Messaging"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        // Auth
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        // Utilisateurs
        .route(
            "/api/utilisateurs",
            post(utilisateur::create_utilisateur).get(utilisateur::get_utilisateurs),
        )
        .route(
            "/api/utilisateurs/{id}",
            get(utilisateur::get_utilisateur)
                .put(utilisateur::update_utilisateur)
                .delete(utilisateur::delete_utilisateur),
        )
        // Bateaux
        .route(
            "/api/bateaux",
            post(bateau::create_bateau).get(bateau::get_bateaux),
        )
        .route("/api/bateaux/{id}", get(bateau::get_bateau).put(bateau::update_bateau))
        .route(
            "/api/bateaux/slug/{slug}",
            get(bateau::get_bateau_by_slug).delete(bateau::delete_bateau_by_slug),
        )
        .route(
            "/api/bateaux/proprietaire/{proprietaire_id}",
            get(bateau::get_bateaux_by_proprietaire),
        )
        // Reservations
        .route(
            "/api/reservations",
            post(reservation::create_reservation).get(reservation::get_reservations),
        )
        .route("/api/reservations/admin", get(reservation::get_all_reservations))
        .route(
            "/api/reservations/proprietaire/{proprietaire_id}",
            get(reservation::get_reservations_by_proprietaire),
        )
        .route(
            "/api/reservations/{id}",
            put(reservation::update_reservation_statut),
        )
        // Paiements
        .route("/api/paiements", post(paiement::create_paiement))
        .route("/api/paiements/admin", get(paiement::get_all_paiements))
        .route(
            "/api/paiements/proprietaire/{proprietaire_id}",
            get(paiement::get_paiements_by_proprietaire),
        )
        // Demandes propriétaire
        .route("/api/demandes", post(demande::post_demande))
        .route("/api/admin/demandes", get(demande::get_all_demandes))
        .route("/api/admin/demandes/{id}", put(demande::update_demande_statut))
        // Messages
        .route(
            "/api/messages",
            get(message::get_messages).post(message::create_message),
        )
        .route("/api/messages/admin", get(message::get_all_messages))
        .route("/api/messages/{id}/lu", patch(message::mark_as_read))
        // Commentaires
        .route(
            "/api/commentaires",
            get(commentaire::get_commentaires).post(commentaire::create_commentaire),
        )
        // Documents
        .route("/api/contrats", post(document::upload_contrat))
        .route("/api/recus", post(document::upload_recu))
        .route("/upload-documents", post(document::upload_documents))
        // API documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
