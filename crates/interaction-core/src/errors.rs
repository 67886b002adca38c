//! Errores del modelo de interacciones.
//!
//! El núcleo es puro y en memoria: los únicos fallos posibles son
//! precondiciones violadas al construir un `Timestamp` (o fechas fuera de
//! rango), una transición inválida del ciclo de vida de `Interaction` o un
//! fallo al codificar JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum CoreModelError {
    #[error("relative offset given without a reference event")] OffsetWithoutReference,
    #[error("reference event label must not be empty")] EmptyReference,
    #[error("interaction already resolved")] AlreadyResolved,
    #[error("invalid time: {0}")] InvalidTime(String),
    #[error("serialization: {0}")] Serialization(String),
}

impl From<serde_json::Error> for CoreModelError {
    fn from(e: serde_json::Error) -> Self {
        CoreModelError::Serialization(e.to_string())
    }
}
