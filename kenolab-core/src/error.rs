use thiserror::Error;

/// Erreurs du coeur kenolab, remontées telles quelles à la frontière CLI.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KenoError {
    /// Ligne ou combinaison qui ne respecte pas le format attendu.
    #[error("entrée invalide : {0}")]
    MalformedInput(String),

    #[error("aucun tirage valide dans l'entrée")]
    EmptyInput,

    #[error("tranche « {tier} » insuffisante : {available} numéros pour {requested} demandés")]
    InsufficientPool {
        tier: &'static str,
        available: usize,
        requested: usize,
    },

    #[error("contrainte insatisfaite après {attempts} tentatives")]
    UnsatisfiableConstraint { attempts: usize },

    #[error("échec de l'export CSV : {0}")]
    Export(String),
}
