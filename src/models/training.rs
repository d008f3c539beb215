//! Training meal request model.

use serde::{Deserialize, Serialize};

use super::{PersonnelGrade, TrainingVenue};

/// Training course classification, which selects the meal budget row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingType {
    /// Courses for senior officials.
    #[serde(rename = "Type A")]
    TypeA,
    /// Courses for junior officials.
    #[serde(rename = "Type B")]
    TypeB,
}

impl From<PersonnelGrade> for TrainingType {
    fn from(grade: PersonnelGrade) -> Self {
        match grade {
            PersonnelGrade::Senior => TrainingType::TypeA,
            PersonnelGrade::Junior => TrainingType::TypeB,
        }
    }
}

/// A request for the meal and snack budget of a training course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingMealRequest {
    /// Grade of the participants.
    pub grade: PersonnelGrade,
    /// Where the course is held.
    pub venue: TrainingVenue,
    /// Number of main meals served.
    #[serde(default)]
    pub meal_count: u32,
    /// Number of snack breaks served.
    #[serde(default)]
    pub snack_count: u32,
}
