use crate::course::{Catalog, Course};
use crate::error::{CycleReport, PlanError};
use crate::graph::{AdjacencyList, EdgeKind};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mark {
    Unvisited,
    InStack,
    Visited,
}

/// Plans one student's path through a course list, semester by semester.
///
/// Construction builds two graphs over the same vertices: a dependency
/// graph holding both edge directions, and an outstanding-prerequisite
/// graph holding only the "requires" direction. The second one drains as
/// courses are taken; a course becomes takable one semester after its
/// last outstanding edge goes away.
#[derive(Debug)]
pub struct Scheduler {
    courses: Vec<Course>,
    dependencies: AdjacencyList,
    outstanding: AdjacencyList,
    current_semester: u32,
}

impl Scheduler {
    /// Builds the graphs, rejects unresolved prerequisite codes and
    /// cyclic course structures, and opens every prerequisite-free course
    /// for semester 1.
    pub fn new(catalog: Catalog) -> Result<Scheduler, PlanError> {
        let (courses, index, prerequisites) = catalog.into_parts();
        let mut dependencies = AdjacencyList::new(courses.len());
        let mut outstanding = AdjacencyList::new(courses.len());

        for (vertex, codes) in prerequisites.iter().enumerate() {
            for code in codes {
                let prereq =
                    *index
                        .get(code)
                        .ok_or_else(|| PlanError::UndeclaredPrerequisite {
                            course: courses[vertex].name().to_string(),
                            prerequisite: code.clone(),
                        })?;
                dependencies.add_edge(vertex, prereq, EdgeKind::Prerequisite);
                dependencies.add_edge(prereq, vertex, EdgeKind::Dependent);
                outstanding.add_edge(vertex, prereq, EdgeKind::Prerequisite);
            }
        }

        let mut scheduler = Scheduler {
            courses,
            dependencies,
            outstanding,
            current_semester: 1,
        };

        if let Some(chain) = scheduler.find_cycle() {
            let names = chain
                .iter()
                .map(|&vertex| scheduler.courses[vertex].name().to_string())
                .collect();
            return Err(PlanError::PrerequisiteCycle(CycleReport::new(names)));
        }

        scheduler.mark_initial_courses();
        Ok(scheduler)
    }

    /// Numbered listing of everything that can be taken this semester,
    /// in vertex order.
    pub fn available_courses(&self) -> String {
        let mut listing = format!("Available courses for semester {}:\n", self.current_semester);
        let mut display_index = 1;
        for course in &self.courses {
            if course.can_be_taken(self.current_semester) {
                listing.push_str(&format!("{}) {}\n", display_index, course));
                display_index += 1;
            }
        }
        listing
    }

    /// Maps a 1-based position in the displayed listing back to its
    /// vertex. `None` when the position is zero or past the end of the
    /// eligible list.
    pub fn vertex_for_choice(&self, display_index: usize) -> Option<usize> {
        if display_index == 0 {
            return None;
        }
        let mut remaining = display_index;
        for vertex in 0..self.courses.len() {
            if self.courses[vertex].can_be_taken(self.current_semester) {
                remaining -= 1;
                if remaining == 0 {
                    return Some(vertex);
                }
            }
        }
        None
    }

    /// Records `vertex` as taken this semester and releases the matching
    /// outstanding edge of every course that was waiting on it. A course
    /// left with no outstanding edges becomes takable next semester.
    ///
    /// The caller checks eligibility through the listing first; this does
    /// not re-validate.
    pub fn take_course(&mut self, vertex: usize) {
        let semester = self.current_semester;
        self.courses[vertex].mark_taken(semester);

        for edge in self.dependencies.neighbors(vertex) {
            if edge.kind == EdgeKind::Dependent {
                self.outstanding.remove_edge(edge.to, vertex);
                if self.outstanding.out_degree(edge.to) == 0 {
                    self.courses[edge.to].clear_prereqs(semester);
                }
            }
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn current_semester(&self) -> u32 {
        self.current_semester
    }

    /// Rejects the reserved "no semester yet" value; eligibility is
    /// re-evaluated lazily against the new semester by the queries above.
    pub fn set_current_semester(&mut self, semester: u32) -> bool {
        if semester == Course::PREREQ_OUTSTANDING {
            return false;
        }
        self.current_semester = semester;
        true
    }

    pub fn all_taken(&self) -> bool {
        self.courses.iter().all(|course| course.is_taken())
    }

    fn mark_initial_courses(&mut self) {
        for vertex in 0..self.courses.len() {
            if self.outstanding.out_degree(vertex) == 0 {
                self.courses[vertex].clear_prereqs(0);
            }
        }
    }

    /// Three-color depth-first search over the outstanding-prerequisite
    /// graph. Returns the reconstructed chain when a cycle exists; the
    /// first two entries are the edge that closed it.
    fn find_cycle(&self) -> Option<Vec<usize>> {
        let mut marks = vec![Mark::Unvisited; self.courses.len()];
        for root in 0..self.courses.len() {
            if marks[root] == Mark::Unvisited {
                if let Some(chain) = self.cycle_from(root, &mut marks) {
                    return Some(chain);
                }
            }
        }
        None
    }

    fn cycle_from(&self, vertex: usize, marks: &mut [Mark]) -> Option<Vec<usize>> {
        marks[vertex] = Mark::InStack;
        for edge in self.outstanding.neighbors(vertex) {
            match marks[edge.to] {
                Mark::Unvisited => {
                    if let Some(mut chain) = self.cycle_from(edge.to, marks) {
                        // unwinding frames extend the chain until it loops
                        // back onto its first vertex
                        if chain.first() != chain.last() {
                            chain.push(vertex);
                        }
                        return Some(chain);
                    }
                }
                Mark::InStack => return Some(vec![edge.to, vertex]),
                Mark::Visited => {}
            }
        }
        marks[vertex] = Mark::Visited;
        None
    }
}

impl TryFrom<Catalog> for Scheduler {
    type Error = PlanError;

    fn try_from(catalog: Catalog) -> Result<Self, Self::Error> {
        Scheduler::new(catalog)
    }
}
