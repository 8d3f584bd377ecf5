use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BicoloreError {
    #[error("Fichier introuvable : {0:?}")]
    FileNotFound(PathBuf),

    #[error("Erreur de lecture : {0}")]
    Io(#[from] std::io::Error),

    #[error("Colonne absente de l'en-tête : {0}")]
    MissingColumn(String),

    #[error("Table malformée : {0}")]
    MalformedTable(String),

    #[error("Tirage invalide (ligne {line}) : {reason}")]
    InvalidDraw { line: usize, reason: String },

    #[error("Table vide : aucun tirage exploitable")]
    EmptyTable,

    #[error("Boule rouge {0} hors limites (1-33)")]
    RedOutOfRange(u8),

    #[error("Boule bleue {0} hors limites (1-16)")]
    BlueOutOfRange(u8),

    #[error("Boule rouge en double : {0}")]
    DuplicateRed(u8),

    #[error("Nombre d'essais invalide : {0} (minimum 1)")]
    InvalidTrialCount(u64),
}
