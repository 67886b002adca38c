//! Nombres de claves del formato serializado.
//!
//! Forman parte del contrato observable: cualquier consumidor externo
//! (transporte, almacenamiento) depende de ellos. No renombrar sin versionar
//! el formato.

/// Clave bajo la que un `Timed` anida su `Timestamp`.
pub const TIMESTAMP_KEY: &str = "timestamp";

/// Clave del record envuelto por `TimedState` (estado inicial y resultante).
pub const STATE_KEY: &str = "state";
/// Clave del record envuelto por `TimedAction`.
pub const ACTION_KEY: &str = "action";
/// Clave del record envuelto por `TimedOutcome`.
pub const OUTCOME_KEY: &str = "outcome";

pub const ABSOLUTE_TIME_KEY: &str = "absoluteTime";
pub const RELATIVE_TO_KEY: &str = "relativeTo";
pub const RELATIVE_OFFSET_DAYS_KEY: &str = "relativeOffsetDays";

pub const CONTEXT_KEY: &str = "context";
pub const INITIAL_STATE_KEY: &str = "initialState";
pub const RESULTING_STATE_KEY: &str = "resultingState";

/// Las cinco claves que siempre aparecen en una `Interaction` serializada.
pub const INTERACTION_KEYS: [&str; 5] =
    [CONTEXT_KEY, INITIAL_STATE_KEY, ACTION_KEY, RESULTING_STATE_KEY, OUTCOME_KEY];

/// Segundos en un día; base de la truncación de `relativeOffsetDays`.
pub const SECONDS_PER_DAY: i64 = 86_400;
