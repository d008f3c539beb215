//! Personnel grade model.
//!
//! The grade of the traveler drives every rate lookup in the engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The traveler's personnel level under the civil-service position scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonnelGrade {
    /// Levels C1 to C8.
    #[serde(rename = "C1-C8")]
    Junior,
    /// Levels C9 to C11.
    #[serde(rename = "C9-C11")]
    Senior,
}

impl PersonnelGrade {
    /// Returns the level band code as written on claim forms.
    ///
    /// # Examples
    ///
    /// ```
    /// use travel_claim_engine::models::PersonnelGrade;
    ///
    /// assert_eq!(PersonnelGrade::Junior.code(), "C1-C8");
    /// assert_eq!(PersonnelGrade::Senior.code(), "C9-C11");
    /// ```
    pub fn code(&self) -> &'static str {
        match self {
            PersonnelGrade::Junior => "C1-C8",
            PersonnelGrade::Senior => "C9-C11",
        }
    }
}

impl fmt::Display for PersonnelGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
