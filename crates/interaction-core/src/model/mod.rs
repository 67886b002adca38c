//! Modelo de interacciones: tiempo, records, envoltorios fechados y agregado.

pub mod interaction;
pub mod record;
pub mod timed;
pub mod timestamp;

pub use interaction::{Interaction, InteractionPhase, Resolution};
pub use record::{record_from_value, Action, Context, Outcome, Record, State};
pub use timed::{ActionKind, OutcomeKind, StateKind, Timed, TimedAction, TimedKind, TimedOutcome, TimedState};
pub use timestamp::{AbsoluteTime, Timestamp};
