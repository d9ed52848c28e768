//! Error types for rs-mailscore.
//!
//! Analysis itself never fails; these errors only come from the input
//! boundary, before a document ever reaches the checkers.

/// Error type for input handling.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The selected file is not an `.html`/`.htm` document.
    #[error("Veuillez sélectionner un fichier HTML (reçu : {0})")]
    InvalidFileKind(String),

    /// No file was selected, or the selection carried no name.
    #[error("Aucun fichier sélectionné")]
    NoFileSelected,

    /// Analysis was requested before any file was loaded.
    #[error("Veuillez d'abord charger un fichier HTML")]
    NothingLoaded,

    /// Reading the file from disk failed.
    #[error("Lecture du fichier impossible : {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for input operations.
pub type Result<T> = std::result::Result<T, Error>;
