//! Student/course roster inversion.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed roster {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write roster: {0}")]
    Write(#[from] std::io::Error),

    #[error("failed to serialize roster: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One student and the courses they are enrolled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub student: String,
    pub courses: Vec<String>,
}

/// Student to courses mapping that keeps the order students were listed in.
///
/// Serialized as a JSON object keyed by student.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    enrollments: Vec<Enrollment>,
}

/// Course to students mapping, keyed in ascending course order.
pub type CourseRoster = BTreeMap<String, Vec<String>>;

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enroll<S, I, C>(mut self, student: S, courses: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        self.enrollments.push(Enrollment {
            student: student.into(),
            courses: courses.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    /// The roster printed when no file is given.
    pub fn sample() -> Self {
        Self::new()
            .enroll("Stud1", ["CS1101", "CS2402", "CS2001"])
            .enroll("Stud2", ["CS2402", "CS2001", "CS1102"])
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, RosterError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| RosterError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| RosterError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Map each course to the students taking it.
///
/// Students are listed in the order they appear in `roster`; a student
/// enrolled twice in the same course appears twice.
pub fn invert_roster(roster: &Roster) -> CourseRoster {
    let mut courses = CourseRoster::new();
    for enrollment in roster.enrollments() {
        for course in &enrollment.courses {
            courses
                .entry(course.clone())
                .or_default()
                .push(enrollment.student.clone());
        }
    }
    courses
}

/// Print the roster and its inversion as pretty JSON.
pub fn write_report<W: Write>(roster: &Roster, mut writer: W) -> Result<(), RosterError> {
    writeln!(writer, "Original Dictionary:")?;
    serde_json::to_writer_pretty(&mut writer, roster)?;
    writeln!(writer, "\n\nInverted Dictionary:")?;
    serde_json::to_writer_pretty(&mut writer, &invert_roster(roster))?;
    writeln!(writer)?;
    Ok(())
}

impl Serialize for Roster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.enrollments.len()))?;
        for enrollment in &self.enrollments {
            map.serialize_entry(&enrollment.student, &enrollment.courses)?;
        }
        map.end()
    }
}

struct RosterVisitor;

impl<'de> Visitor<'de> for RosterVisitor {
    type Value = Roster;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of student names to lists of courses")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Roster, A::Error> {
        let mut enrollments = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((student, courses)) = access.next_entry::<String, Vec<String>>()? {
            enrollments.push(Enrollment { student, courses });
        }
        Ok(Roster { enrollments })
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RosterVisitor)
    }
}
