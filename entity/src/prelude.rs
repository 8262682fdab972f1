pub use super::bateau::Entity as Bateau;
pub use super::commentaire::Entity as Commentaire;
pub use super::contrat::Entity as Contrat;
pub use super::demande_proprietaire::Entity as DemandeProprietaire;
pub use super::details_bateau::Entity as DetailsBateau;
pub use super::media::Entity as Media;
pub use super::message::Entity as Message;
pub use super::paiement::Entity as Paiement;
pub use super::recu::Entity as Recu;
pub use super::reservation::Entity as Reservation;
pub use super::utilisateur::Entity as Utilisateur;

pub use super::enums::{
    EtatPaiement, RoleUtilisateur, StatutDemande, StatutReservation, TypeMedia,
};
