//! Envoltorio genérico record + `Timestamp`.
//!
//! `Timed<R, K>` posee en exclusiva un record `R` y su `Timestamp`. La clave
//! bajo la que se serializa el record es una constante del tipo marcador `K`
//! (`"state"`, `"action"`, `"outcome"`), resuelta en compilación: no hay un
//! tag de tipo en runtime.
//!
//! Sólo se puede construir un `TimedState` a partir de un `State`, un
//! `TimedAction` a partir de una `Action` y un `TimedOutcome` a partir de un
//! `Outcome`.
use std::fmt;
use std::marker::PhantomData;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::record::{Action, Outcome, Record, State};
use super::timestamp::Timestamp;
use crate::constants::{ACTION_KEY, OUTCOME_KEY, STATE_KEY, TIMESTAMP_KEY};

/// Sabor de envoltorio: fija la clave del record serializado.
pub trait TimedKind {
    const KEY: &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeKind;

impl TimedKind for StateKind {
    const KEY: &'static str = STATE_KEY;
}

impl TimedKind for ActionKind {
    const KEY: &'static str = ACTION_KEY;
}

impl TimedKind for OutcomeKind {
    const KEY: &'static str = OUTCOME_KEY;
}

pub struct Timed<R, K: TimedKind> {
    record: R,
    timestamp: Timestamp,
    _kind: PhantomData<K>,
}

pub type TimedState<S> = Timed<S, StateKind>;
pub type TimedAction<A> = Timed<A, ActionKind>;
pub type TimedOutcome<O> = Timed<O, OutcomeKind>;

impl<S: State> Timed<S, StateKind> {
    pub fn new(state: S, timestamp: Timestamp) -> Self { Self::wrap(state, timestamp) }
}

impl<A: Action> Timed<A, ActionKind> {
    pub fn new(action: A, timestamp: Timestamp) -> Self { Self::wrap(action, timestamp) }
}

impl<O: Outcome> Timed<O, OutcomeKind> {
    pub fn new(outcome: O, timestamp: Timestamp) -> Self { Self::wrap(outcome, timestamp) }
}

impl<R: Record, K: TimedKind> Timed<R, K> {
    fn wrap(record: R, timestamp: Timestamp) -> Self {
        Self { record,
               timestamp,
               _kind: PhantomData }
    }

    pub fn record(&self) -> &R { &self.record }

    pub fn timestamp(&self) -> &Timestamp { &self.timestamp }

    /// Clave bajo la que se anida el record al serializar.
    pub fn kind_key(&self) -> &'static str { K::KEY }

    pub fn into_parts(self) -> (R, Timestamp) { (self.record, self.timestamp) }
}

impl<R: Record, K: TimedKind> Record for Timed<R, K> {
    fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(K::KEY.to_string(), Value::Object(self.record.to_map()));
        map.insert(TIMESTAMP_KEY.to_string(), Value::Object(self.timestamp.to_map()));
        map
    }
}

// Un envoltorio conserva el rol de su sabor, lo que permite anidarlo.
impl<S: State> State for Timed<S, StateKind> {}
impl<A: Action> Action for Timed<A, ActionKind> {}
impl<O: Outcome> Outcome for Timed<O, OutcomeKind> {}

impl<R: Record, K: TimedKind> Serialize for Timed<R, K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_map().serialize(serializer)
    }
}

// Derives manuales: `K` es sólo un marcador y no debe exigir Clone/Debug/PartialEq.
impl<R: Clone, K: TimedKind> Clone for Timed<R, K> {
    fn clone(&self) -> Self {
        Self { record: self.record.clone(),
               timestamp: self.timestamp.clone(),
               _kind: PhantomData }
    }
}

impl<R: PartialEq, K: TimedKind> PartialEq for Timed<R, K> {
    fn eq(&self, other: &Self) -> bool { self.record == other.record && self.timestamp == other.timestamp }
}

impl<R: fmt::Debug, K: TimedKind> fmt::Debug for Timed<R, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timed")
         .field("kind", &K::KEY)
         .field("record", &self.record)
         .field("timestamp", &self.timestamp)
         .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::record_from_value;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn ts() -> Timestamp { Timestamp::at(Utc.with_ymd_and_hms(2025, 2, 2, 0, 0, 0).unwrap()) }

    #[test]
    fn each_flavor_uses_its_own_key() {
        let rec = record_from_value(json!({"x": 1}));
        let state = TimedState::new(rec.clone(), ts());
        let action = TimedAction::new(rec.clone(), ts());
        let outcome = TimedOutcome::new(rec, ts());
        assert!(state.to_map().contains_key("state"));
        assert!(action.to_map().contains_key("action"));
        assert!(outcome.to_map().contains_key("outcome"));
        assert_eq!(outcome.kind_key(), "outcome");
    }

    #[test]
    fn wrapper_has_exactly_record_and_timestamp() {
        let action = TimedAction::new(record_from_value(json!({"control_method": "Neem Oil Spray"})), ts());
        assert_eq!(Value::Object(action.to_map()),
                   json!({
                       "action": {"control_method": "Neem Oil Spray"},
                       "timestamp": {"absoluteTime": "2025-02-02T00:00:00+00:00", "relativeTo": null, "relativeOffsetDays": null}
                   }));
    }

    #[test]
    fn timed_state_nests() {
        let inner = TimedState::new(record_from_value(json!({"severity": 7})), ts());
        let outer = TimedState::new(inner, ts());
        let map = outer.to_map();
        assert_eq!(map["state"]["state"], json!({"severity": 7}));
        assert_eq!(map["state"]["timestamp"], map["timestamp"]);
    }

    #[test]
    fn into_parts_returns_owned_values() {
        let state = TimedState::new(record_from_value(json!({"dap": 10})), ts());
        let (record, timestamp) = state.into_parts();
        assert_eq!(record["dap"], json!(10));
        assert_eq!(timestamp, ts());
    }
}
