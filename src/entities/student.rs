// 🎓 Student Entity - score with a derived letter grade

use crate::repository::{Entity, EntityId};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// GRADE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Letter grade for a score
    ///
    /// 80-100 A, 70-79 B, 60-69 C, 50-59 D. Anything else, including scores
    /// above 100 or below 0, is F.
    pub fn from_score(score: i64) -> Self {
        match score {
            80..=100 => Grade::A,
            70..=79 => Grade::B,
            60..=69 => Grade::C,
            50..=59 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// STUDENT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: EntityId,
    pub full_name: String,
    pub score: i64,
}

impl Student {
    pub fn new(id: EntityId, full_name: &str, score: i64) -> Self {
        Student {
            id,
            full_name: full_name.to_string(),
            score,
        }
    }

    pub fn grade(&self) -> Grade {
        Grade::from_score(self.score)
    }

    /// One report line: `Jane Doe (ID: 1): Score = 85, Grade = A`
    pub fn report_line(&self) -> String {
        format!(
            "{} (ID: {}): Score = {}, Grade = {}",
            self.full_name,
            self.id,
            self.score,
            self.grade()
        )
    }
}

impl Entity for Student {
    fn id(&self) -> EntityId {
        self.id
    }
}
