use chrono::{NaiveDate, TimeZone, Utc};
use interaction_core::{Interaction, Record, TimedAction, TimedOutcome, TimedState, Timestamp};
use interaction_domain::crop_growth::days_after_planting;
use interaction_domain::{CropAction, CropContext, CropOutcome, CropState, PestAction, PestContext, PestOutcome, PestState};
use serde_json::{json, Value};

#[test]
fn test_pest_records_serialize_their_fields() {
    assert_eq!(Value::Object(PestContext::new("Rainy".into()).to_map()), json!({"recent_weather": "Rainy"}));
    assert_eq!(Value::Object(PestAction::new("Neem Oil Spray".into()).to_map()), json!({"control_method": "Neem Oil Spray"}));
    assert_eq!(Value::Object(PestOutcome::new(95).to_map()), json!({"effectiveness_score": 95}));
    assert_eq!(Value::Object(PestState::clear().to_map()), json!({"pest_detected": "None", "severity": 0}));
}

#[test]
fn test_pest_interaction_resolves() {
    let day = |d: u32| Timestamp::at(Utc.with_ymd_and_hms(2025, 2, d, 0, 0, 0).unwrap());
    let mut it = Interaction::new(PestContext::new("Rainy".into()),
                                  TimedState::new(PestState::new("Aphids".into(), 7), day(1)),
                                  TimedAction::new(PestAction::new("Neem Oil Spray".into()), day(2)));
    assert!(!it.is_resolved());
    it.record_outcome(TimedState::new(PestState::clear(), day(5)), TimedOutcome::new(PestOutcome::new(95), day(5)))
      .unwrap();
    assert_eq!(it.outcome().map(|o| o.record().effectiveness_score), Some(95));
    assert_eq!(it.to_value()["resultingState"]["state"]["severity"], json!(0));
}

#[test]
fn test_crop_interaction_uses_days_after_planting() {
    let planted = NaiveDate::from_ymd_opt(2024, 12, 26).unwrap();
    let it: Interaction<_, _, _, CropOutcome> = Interaction::new(CropContext::new("Europe".into(), "Intermediate".into()),
                                                                 TimedState::new(CropState::new("Seedling".into(), 10), days_after_planting(planted, 10).unwrap()),
                                                                 TimedAction::new(CropAction::new("Watering".into()), days_after_planting(planted, 11).unwrap()));
    let v = it.to_value();
    assert_eq!(v["action"]["timestamp"]["absoluteTime"], json!("2025-01-06T00:00:00"));
    assert_eq!(v["action"]["timestamp"]["relativeOffsetDays"], json!(11));
    assert_eq!(v["outcome"], Value::Null);
}
