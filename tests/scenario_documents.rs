use interaction_core::CoreModelError;
use interaction_rust::scenarios::{crop_growth_interaction, open_crop_growth_interaction, open_pest_diagnosis_interaction,
                                  pest_diagnosis_interaction};
use serde_json::json;

#[test]
fn crop_growth_document_is_fully_resolved() {
    let it = crop_growth_interaction().expect("crop scenario");
    assert_eq!(it.to_value(),
               json!({
                   "context": {"region": "Europe", "user_expertise": "Intermediate"},
                   "initialState": {
                       "state": {"plant_stage": "Seedling", "dap": 10},
                       "timestamp": {"absoluteTime": "2025-01-05T00:00:00", "relativeTo": "planting", "relativeOffsetDays": 10}
                   },
                   "action": {
                       "action": {"action_type": "Watering"},
                       "timestamp": {"absoluteTime": "2025-01-06T00:00:00", "relativeTo": "planting", "relativeOffsetDays": 11}
                   },
                   "resultingState": {
                       "state": {"plant_stage": "Vegetative", "dap": 15},
                       "timestamp": {"absoluteTime": "2025-01-10T00:00:00", "relativeTo": "planting", "relativeOffsetDays": 15}
                   },
                   "outcome": {
                       "outcome": {"yield_score": 80},
                       "timestamp": {"absoluteTime": "2025-01-10T00:00:00", "relativeTo": null, "relativeOffsetDays": null}
                   }
               }));
}

#[test]
fn open_scenarios_serialize_null_resolution() {
    let crop = open_crop_growth_interaction().expect("open crop");
    let pest = open_pest_diagnosis_interaction().expect("open pest");
    for v in [crop.to_value(), pest.to_value()] {
        assert!(v["resultingState"].is_null());
        assert!(v["outcome"].is_null());
        assert!(v["context"].is_object());
    }
}

#[test]
fn pest_scenario_is_resolved_and_rejects_second_outcome() {
    let mut it = pest_diagnosis_interaction().expect("pest scenario");
    assert_eq!(it.to_value()["outcome"]["outcome"], json!({"effectiveness_score": 95}));

    let again = open_pest_diagnosis_interaction().expect("open pest");
    let state = again.initial_state().clone();
    let outcome_ts = it.outcome().expect("resolved").timestamp().clone();
    let outcome = interaction_core::TimedOutcome::new(interaction_domain::PestOutcome::new(1), outcome_ts);
    assert_eq!(it.record_outcome(state, outcome), Err(CoreModelError::AlreadyResolved));
    assert_eq!(it.to_value()["outcome"]["outcome"]["effectiveness_score"], json!(95));
}

#[test]
fn fingerprints_are_stable_across_rebuilds() {
    let a = pest_diagnosis_interaction().unwrap().fingerprint();
    let b = pest_diagnosis_interaction().unwrap().fingerprint();
    assert_eq!(a, b);
    assert_ne!(a, open_pest_diagnosis_interaction().unwrap().fingerprint());
}
