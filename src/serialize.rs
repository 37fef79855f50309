use crate::course::Course;
use crate::scheduler::Scheduler;

/// Serializable snapshot of one course, with the reserved marker values
/// mapped to `None`.
#[derive(serde::Serialize, Debug)]
pub struct CourseInfo {
    pub name: String,
    pub prereq_cleared_semester: Option<u32>,
    pub taken_semester: Option<u32>,
}

impl From<&Course> for CourseInfo {
    fn from(course: &Course) -> Self {
        let cleared = course.prereq_cleared_semester();
        let taken = course.taken_semester();
        CourseInfo {
            name: course.name().to_string(),
            prereq_cleared_semester: (cleared != Course::PREREQ_OUTSTANDING).then_some(cleared),
            taken_semester: (taken != Course::NOT_TAKEN).then_some(taken),
        }
    }
}

/// Serializable snapshot of the whole plan. `semesters` holds the names
/// of the taken courses grouped by the semester they were taken in,
/// starting at semester 1.
#[derive(serde::Serialize, Debug)]
pub struct PlanSummary {
    pub current_semester: u32,
    pub courses: Vec<CourseInfo>,
    pub semesters: Vec<Vec<String>>,
}

impl From<&Scheduler> for PlanSummary {
    fn from(scheduler: &Scheduler) -> Self {
        let mut semesters: Vec<Vec<String>> = Vec::new();
        for course in scheduler.courses() {
            if !course.is_taken() {
                continue;
            }
            let slot = course.taken_semester() as usize - 1;
            if semesters.len() <= slot {
                semesters.resize_with(slot + 1, Vec::new);
            }
            semesters[slot].push(course.name().to_string());
        }

        PlanSummary {
            current_semester: scheduler.current_semester(),
            courses: scheduler.courses().iter().map(CourseInfo::from).collect(),
            semesters,
        }
    }
}
