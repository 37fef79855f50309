use polars::prelude::*;
use std::{collections::HashMap, fmt, ops::Deref, path::PathBuf};

/// One course in the plan. The two semester markers start at the reserved
/// "no semester yet" value and are filled in by the scheduler as the plan
/// advances; a taken marker is never reset.
#[derive(Debug, Clone)]
pub struct Course {
    name: String,
    semester_prereq_cleared: u32,
    semester_taken: u32,
}

impl Course {
    pub const NOT_TAKEN: u32 = u32::MAX;
    pub const PREREQ_OUTSTANDING: u32 = u32::MAX;

    pub fn new(name: String) -> Course {
        Course {
            name,
            semester_prereq_cleared: Course::PREREQ_OUTSTANDING,
            semester_taken: Course::NOT_TAKEN,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prereq_cleared_semester(&self) -> u32 {
        self.semester_prereq_cleared
    }

    pub fn taken_semester(&self) -> u32 {
        self.semester_taken
    }

    pub fn is_taken(&self) -> bool {
        self.semester_taken != Course::NOT_TAKEN
    }

    /// Whether the course could be added to the given semester: all
    /// prerequisites cleared in some earlier semester, and not yet taken.
    pub fn can_be_taken(&self, semester: u32) -> bool {
        semester > self.semester_prereq_cleared && !self.is_taken()
    }

    pub(crate) fn clear_prereqs(&mut self, semester: u32) {
        self.semester_prereq_cleared = semester;
    }

    pub(crate) fn mark_taken(&mut self, semester: u32) {
        self.semester_taken = semester;
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The parsed course list: course records, the code -> vertex index, and
/// the raw prerequisite codes per vertex. This is what scheduler
/// construction consumes.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
    // code -> vertex
    index: HashMap<String, usize>,
    prerequisites: Vec<Vec<String>>,
}

impl Catalog {
    pub fn new() -> Catalog {
        Catalog::default()
    }

    /// Adds a course with its prerequisite codes. Listing the same code
    /// again merges the prerequisite lists onto the existing record.
    pub fn add_course(&mut self, code: String, prereqs: Vec<String>) {
        match self.index.get(&code) {
            Some(&vertex) => self.prerequisites[vertex].extend(prereqs),
            None => {
                self.index.insert(code.clone(), self.courses.len());
                self.courses.push(Course::new(code));
                self.prerequisites.push(prereqs);
            }
        }
    }

    pub fn from_df(df: &DataFrame) -> Result<Catalog, polars::prelude::PolarsError> {
        let mut catalog = Catalog::new();

        let df = df.select(&["COURSE CODE", "PREREQ"])?;

        for i in 0..df.height() {
            let row = df.get(i).unwrap();

            let code = row.get(0).unwrap().to_string().replace('"', "");
            let prereq = row.get(1).unwrap().to_string().replace('"', "");
            // an empty PREREQ cell comes through as a null value
            let prereq = if prereq.is_empty() || prereq == "null" {
                Vec::new()
            } else {
                prereq
                    .split('&')
                    .map(|x| x.trim().to_string())
                    .collect::<Vec<_>>()
            };

            catalog.add_course(code, prereq);
        }

        Ok(catalog)
    }

    pub fn load(file_path: PathBuf) -> Result<Catalog, polars::prelude::PolarsError> {
        let df = LazyCsvReader::new(file_path)
            .has_header(true)
            .finish()?
            .collect()?;

        Catalog::from_df(&df)
    }

    pub fn vertex_of(&self, code: &str) -> Option<usize> {
        self.index.get(code).copied()
    }

    pub(crate) fn into_parts(self) -> (Vec<Course>, HashMap<String, usize>, Vec<Vec<String>>) {
        (self.courses, self.index, self.prerequisites)
    }
}

impl Deref for Catalog {
    type Target = [Course];

    fn deref(&self) -> &Self::Target {
        &self.courses
    }
}

impl From<DataFrame> for Catalog {
    fn from(df: DataFrame) -> Self {
        Catalog::from_df(&df).expect("failed to convert DataFrame to Catalog")
    }
}
