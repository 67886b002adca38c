//! Interacciones de ejemplo de los dos dominios incluidos.
//!
//! - Cultivo: timestamps relativos a la siembra (2024-12-26).
//! - Plagas: timestamps sólo absolutos.
use chrono::NaiveDate;
use interaction_core::{CoreModelError, Interaction, TimedAction, TimedOutcome, TimedState, Timestamp};
use interaction_domain::crop_growth::days_after_planting;
use interaction_domain::{CropAction, CropContext, CropOutcome, CropState, PestAction, PestContext, PestOutcome, PestState};

pub type CropInteraction = Interaction<CropContext, CropState, CropAction, CropOutcome>;
pub type PestInteraction = Interaction<PestContext, PestState, PestAction, PestOutcome>;

fn date(y: i32, m: u32, d: u32) -> Result<NaiveDate, CoreModelError> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| CoreModelError::InvalidTime(format!("{y}-{m}-{d}")))
}

fn midnight(y: i32, m: u32, d: u32) -> Result<Timestamp, CoreModelError> {
    Ok(Timestamp::at(date(y, m, d)?.and_time(chrono::NaiveTime::MIN)))
}

pub fn planting_date() -> Result<NaiveDate, CoreModelError> { date(2024, 12, 26) }

/// Cultivo en plántula, regado al día 11 tras la siembra; todavía abierta.
pub fn open_crop_growth_interaction() -> Result<CropInteraction, CoreModelError> {
    let planted = planting_date()?;
    Ok(Interaction::new(CropContext::new("Europe".to_string(), "Intermediate".to_string()),
                        TimedState::new(CropState::new("Seedling".to_string(), 10), days_after_planting(planted, 10)?),
                        TimedAction::new(CropAction::new("Watering".to_string()), days_after_planting(planted, 11)?)))
}

/// La misma interacción, resuelta al día 15 con rendimiento 80.
pub fn crop_growth_interaction() -> Result<CropInteraction, CoreModelError> {
    let planted = planting_date()?;
    let mut interaction = open_crop_growth_interaction()?;
    interaction.record_outcome(TimedState::new(CropState::new("Vegetative".to_string(), 15), days_after_planting(planted, 15)?),
                               TimedOutcome::new(CropOutcome::new(80), midnight(2025, 1, 10)?))?;
    Ok(interaction)
}

/// Pulgones con severidad 7 tratados con aceite de neem; todavía abierta.
pub fn open_pest_diagnosis_interaction() -> Result<PestInteraction, CoreModelError> {
    Ok(Interaction::new(PestContext::new("Rainy".to_string()),
                        TimedState::new(PestState::new("Aphids".to_string(), 7), midnight(2025, 2, 1)?),
                        TimedAction::new(PestAction::new("Neem Oil Spray".to_string()), midnight(2025, 2, 2)?)))
}

/// Tratamiento eficaz: sin plaga el 2025-02-05, eficacia 95.
pub fn pest_diagnosis_interaction() -> Result<PestInteraction, CoreModelError> {
    let mut interaction = open_pest_diagnosis_interaction()?;
    interaction.record_outcome(TimedState::new(PestState::clear(), midnight(2025, 2, 5)?),
                               TimedOutcome::new(PestOutcome::new(95), midnight(2025, 2, 5)?))?;
    Ok(interaction)
}
