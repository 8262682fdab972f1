mod demande;
mod message;
mod paiement;
mod reservation;
mod utilisateur;
