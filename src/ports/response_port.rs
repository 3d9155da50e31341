//! Survey response source port trait.

use crate::domain::error::PsmError;
use crate::domain::response::SurveyResponse;

pub trait ResponsePort {
    /// Every response in source order.
    fn load_responses(&self) -> Result<Vec<SurveyResponse>, PsmError>;
}
