//! Seguimiento de cultivo: etapas de crecimiento medidas en días desde la
//! siembra ("planting").
use chrono::{Duration, NaiveDate, NaiveTime};
use interaction_core::{record, CoreModelError, Timestamp};

/// Evento de referencia de los timestamps relativos de este dominio.
pub const PLANTING: &str = "planting";

record!(context CropContext { region: String, user_expertise: String });
record!(state CropState { plant_stage: String, dap: i64 });
record!(action CropAction { action_type: String });
record!(outcome CropOutcome { yield_score: i64 });

/// Timestamp `dap` días después de la siembra (medianoche, sin zona).
pub fn days_after_planting(planted_on: NaiveDate, dap: i64) -> Result<Timestamp, CoreModelError> {
    let out_of_range = || CoreModelError::InvalidTime(format!("{planted_on} + {dap} days"));
    let offset = Duration::try_days(dap).ok_or_else(out_of_range)?;
    let absolute = planted_on.and_time(NaiveTime::MIN)
                             .checked_add_signed(offset)
                             .ok_or_else(out_of_range)?;
    Timestamp::relative(absolute, PLANTING, offset)
}
