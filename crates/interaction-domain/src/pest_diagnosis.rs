//! Diagnóstico de plagas: severidad observada y eficacia del tratamiento.
use interaction_core::record;

record!(context PestContext { recent_weather: String });
record!(state PestState { pest_detected: String, severity: i64 });
record!(action PestAction { control_method: String });
record!(outcome PestOutcome { effectiveness_score: i64 });

impl PestState {
    /// Estado sin plaga detectada.
    pub fn clear() -> Self { Self::new("None".to_string(), 0) }
}
