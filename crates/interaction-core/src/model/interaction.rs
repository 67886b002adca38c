//! Agregado raíz `Interaction`.
//!
//! Compone un contexto, un estado inicial fechado, una acción fechada y, una
//! vez resuelta, el par estado resultante + resultado fechados.
//!
//! Ciclo de vida (una única transición):
//! - `Open` -> `Resolved` vía `record_outcome`.
//!
//! El par resultante vive en `Resolution::Resolved`, de modo que no existe una
//! interacción con sólo una de las dos mitades. Un segundo `record_outcome`
//! se rechaza con `CoreModelError::AlreadyResolved` y no modifica nada.
use log::{debug, warn};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::record::{Action, Context, Outcome, Record, State};
use super::timed::{TimedAction, TimedOutcome, TimedState};
use crate::constants::{ACTION_KEY, CONTEXT_KEY, INITIAL_STATE_KEY, OUTCOME_KEY, RESULTING_STATE_KEY};
use crate::errors::CoreModelError;
use crate::hashing::{hash_str, to_canonical_json};

/// Fase observable del ciclo de vida.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionPhase {
    Open,
    Resolved,
}

/// Mitad opcional de la interacción: ausente o completa, nunca parcial.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<S, O> {
    Open,
    Resolved {
        resulting_state: TimedState<S>,
        outcome: TimedOutcome<O>,
    },
}

impl<S, O> Resolution<S, O> {
    pub fn phase(&self) -> InteractionPhase {
        match self {
            Resolution::Open => InteractionPhase::Open,
            Resolution::Resolved { .. } => InteractionPhase::Resolved,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Interaction<C, S, A, O> {
    context: C,
    initial_state: TimedState<S>,
    action: TimedAction<A>,
    resolution: Resolution<S, O>,
}

impl<C, S, A, O> Interaction<C, S, A, O>
    where C: Context,
          S: State,
          A: Action,
          O: Outcome
{
    /// Crea una interacción abierta.
    pub fn new(context: C, initial_state: TimedState<S>, action: TimedAction<A>) -> Self {
        Self { context,
               initial_state,
               action,
               resolution: Resolution::Open }
    }

    /// Crea una interacción ya resuelta (p.ej. al reconstruir un registro
    /// histórico completo).
    pub fn resolved(context: C,
                    initial_state: TimedState<S>,
                    action: TimedAction<A>,
                    resulting_state: TimedState<S>,
                    outcome: TimedOutcome<O>)
                    -> Self {
        Self { context,
               initial_state,
               action,
               resolution: Resolution::Resolved { resulting_state, outcome } }
    }

    /// Registra estado resultante y resultado juntos: `Open` -> `Resolved`.
    ///
    /// Si la interacción ya estaba resuelta devuelve `AlreadyResolved` y
    /// conserva la resolución existente.
    pub fn record_outcome(&mut self, resulting_state: TimedState<S>, outcome: TimedOutcome<O>) -> Result<(), CoreModelError> {
        if let Resolution::Resolved { .. } = self.resolution {
            warn!("record_outcome rejected: interaction already resolved");
            return Err(CoreModelError::AlreadyResolved);
        }
        debug!("interaction resolved at {}", outcome.timestamp().absolute_time());
        self.resolution = Resolution::Resolved { resulting_state, outcome };
        Ok(())
    }

    pub fn context(&self) -> &C { &self.context }

    pub fn initial_state(&self) -> &TimedState<S> { &self.initial_state }

    pub fn action(&self) -> &TimedAction<A> { &self.action }

    pub fn resolution(&self) -> &Resolution<S, O> { &self.resolution }

    pub fn phase(&self) -> InteractionPhase { self.resolution.phase() }

    pub fn is_resolved(&self) -> bool { self.phase() == InteractionPhase::Resolved }

    pub fn resulting_state(&self) -> Option<&TimedState<S>> {
        match &self.resolution {
            Resolution::Resolved { resulting_state, .. } => Some(resulting_state),
            Resolution::Open => None,
        }
    }

    pub fn outcome(&self) -> Option<&TimedOutcome<O>> {
        match &self.resolution {
            Resolution::Resolved { outcome, .. } => Some(outcome),
            Resolution::Open => None,
        }
    }

    /// Representación plana. Siempre contiene las cinco claves; en fase
    /// `Open`, `resultingState` y `outcome` son `null` explícito.
    pub fn to_map(&self) -> Map<String, Value> {
        let (resulting_state, outcome) = match &self.resolution {
            Resolution::Resolved { resulting_state, outcome } => {
                (Value::Object(resulting_state.to_map()), Value::Object(outcome.to_map()))
            }
            Resolution::Open => (Value::Null, Value::Null),
        };
        let mut map = Map::new();
        map.insert(CONTEXT_KEY.to_string(), Value::Object(self.context.to_map()));
        map.insert(INITIAL_STATE_KEY.to_string(), Value::Object(self.initial_state.to_map()));
        map.insert(ACTION_KEY.to_string(), Value::Object(self.action.to_map()));
        map.insert(RESULTING_STATE_KEY.to_string(), resulting_state);
        map.insert(OUTCOME_KEY.to_string(), outcome);
        map
    }

    pub fn to_value(&self) -> Value { Value::Object(self.to_map()) }

    pub fn to_json_string(&self) -> Result<String, CoreModelError> { Ok(serde_json::to_string(&self.to_map())?) }

    pub fn to_json_pretty(&self) -> Result<String, CoreModelError> { Ok(serde_json::to_string_pretty(&self.to_map())?) }

    /// JSON canónico (claves ordenadas, sin espacios).
    pub fn to_canonical_json(&self) -> String { to_canonical_json(&self.to_value()) }

    /// Identidad de contenido: blake3 hex del JSON canónico. Cambia al
    /// resolver la interacción.
    pub fn fingerprint(&self) -> String {
        let fp = hash_str(&self.to_canonical_json());
        debug!("interaction fingerprint {fp} (phase {:?})", self.phase());
        fp
    }
}

impl<C, S, A, O> Serialize for Interaction<C, S, A, O>
    where C: Context,
          S: State,
          A: Action,
          O: Outcome
{
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.to_map().serialize(serializer)
    }
}
