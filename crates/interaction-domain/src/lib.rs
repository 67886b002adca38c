// interaction-domain library entry point
pub mod crop_growth;
pub mod pest_diagnosis;
pub use crop_growth::{CropAction, CropContext, CropOutcome, CropState};
pub use pest_diagnosis::{PestAction, PestContext, PestOutcome, PestState};
