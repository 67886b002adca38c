//! interaction-core: modelo genérico de interacciones y su contrato de
//! serialización.
//!
//! Flujo de datos (una sola dirección):
//! records de dominio -> `Timed` (+ `Timestamp`) -> `Interaction` -> mapa JSON.
//!
//! El núcleo es puro y en memoria: sin persistencia, sin I/O, sin locking.
pub mod constants;
pub mod errors;
pub mod hashing;
pub mod macros;
pub mod model;

pub use errors::CoreModelError;
pub use model::{record_from_value, AbsoluteTime, Action, Context, Interaction, InteractionPhase, Outcome, Record,
                Resolution, State, Timed, TimedAction, TimedOutcome, TimedState, Timestamp};

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::{Duration, TimeZone, Utc};
	use serde_json::{json, Value};

	record!(context GrowContext { region: String });
	record!(state GrowState { plant_stage: String, dap: i64 });
	record!(action GrowAction { action_type: String });
	record!(outcome GrowOutcome { yield_score: i64 });

	#[test]
	fn macro_records_plug_into_interaction() {
		let planted = Utc.with_ymd_and_hms(2024, 12, 26, 0, 0, 0).unwrap();
		let ts = |dap: i64| Timestamp::relative(planted + Duration::days(dap), "planting", Duration::days(dap)).unwrap();

		let mut it = Interaction::new(GrowContext::new("Europe".into()),
		                              TimedState::new(GrowState::new("Seedling".into(), 10), ts(10)),
		                              TimedAction::new(GrowAction::new("Watering".into()), ts(11)));
		it.record_outcome(TimedState::new(GrowState::new("Vegetative".into(), 15), ts(15)),
		                  TimedOutcome::new(GrowOutcome::new(80), Timestamp::at(planted + Duration::days(15))))
		  .unwrap();

		let v = it.to_value();
		assert_eq!(v["context"], json!({"region": "Europe"}));
		assert_eq!(v["initialState"]["state"], json!({"plant_stage": "Seedling", "dap": 10}));
		assert_eq!(v["initialState"]["timestamp"]["absoluteTime"], json!("2025-01-05T00:00:00+00:00"));
		assert_eq!(v["resultingState"]["timestamp"]["relativeOffsetDays"], json!(15));
		assert_eq!(v["outcome"]["timestamp"]["relativeTo"], Value::Null);
	}

	#[test]
	fn macro_records_still_derive_serde() {
		let s = GrowState::new("Seedling".into(), 10);
		let back: GrowState = serde_json::from_value(serde_json::to_value(&s).unwrap()).unwrap();
		assert_eq!(back, s);
	}
}
