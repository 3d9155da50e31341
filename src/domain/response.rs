//! One respondent's four price answers.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyResponse {
    pub sample_id: String,
    /// Lowest price the respondent starts to find expensive.
    pub expensive: i64,
    /// Highest price the respondent still finds cheap.
    pub cheap: i64,
    /// Lowest price too expensive to buy.
    pub too_expensive: i64,
    /// Highest price too cheap to trust.
    pub too_cheap: i64,
}

impl SurveyResponse {
    pub fn new(
        sample_id: impl Into<String>,
        expensive: i64,
        cheap: i64,
        too_expensive: i64,
        too_cheap: i64,
    ) -> Self {
        Self {
            sample_id: sample_id.into(),
            expensive,
            cheap,
            too_expensive,
            too_cheap,
        }
    }
}
