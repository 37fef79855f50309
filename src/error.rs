use std::fmt;
use thiserror::Error;

/// Construction-time failures. Both are configuration problems in the
/// course list, not recoverable runtime faults.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("the prerequisite {prerequisite} given for {course} was not declared in the course list")]
    UndeclaredPrerequisite { course: String, prerequisite: String },

    #[error("{0}")]
    PrerequisiteCycle(CycleReport),
}

/// The chain of course names reconstructed from a prerequisite cycle.
/// The first two entries are the pair that closed the cycle; the chain
/// ends back at its first course.
#[derive(Debug)]
pub struct CycleReport {
    chain: Vec<String>,
}

impl CycleReport {
    // callers guarantee at least the closing pair
    pub(crate) fn new(chain: Vec<String>) -> CycleReport {
        CycleReport { chain }
    }

    pub fn chain(&self) -> &[String] {
        &self.chain
    }
}

impl fmt::Display for CycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = &self.chain[0];
        let second = &self.chain[1];
        write!(
            f,
            "there is a cycle in the provided course structure: \
             {} requires {} to be taken before it, but {} also requires {} \
             at some point, so no ordering can satisfy both. here is the cycle:",
            second, first, first, second
        )?;
        for pair in self.chain.windows(2) {
            write!(f, "\n{} requires {}", pair[1], pair[0])?;
        }
        Ok(())
    }
}
