//! Route table and path ↔ screen mapping.
//!
//! The table is the single source of truth for which paths exist. It is checked once
//! at startup with [`validate_route_table`]; parsing walks it in declaration order,
//! so literal-prefixed patterns are listed before catch-all parameter patterns.

use std::collections::HashSet;

use thiserror::Error;

use crate::model::{AttemptId, ExamId, ExamLevel, Slug, Specialty};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RouteTableError {
    #[error("route pattern {0:?} must start with '/'")]
    MissingLeadingSlash(&'static str),

    #[error("route pattern {pattern:?} repeats parameter {param:?}")]
    DuplicateParam {
        pattern: &'static str,
        param: &'static str,
    },

    #[error("route pattern {pattern:?} has unknown parameter {param:?} for {kind:?}")]
    UnknownParam {
        pattern: &'static str,
        kind: ScreenKind,
        param: &'static str,
    },

    #[error("route pattern {pattern:?} is missing parameter {param:?} for {kind:?}")]
    MissingParam {
        pattern: &'static str,
        kind: ScreenKind,
        param: &'static str,
    },

    #[error("route patterns {first:?} and {second:?} match the same paths")]
    Ambiguous {
        first: &'static str,
        second: &'static str,
    },
}

/// View selected by a route, independent of its parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    Home,
    Levels,
    Subspecialties,
    Dashboard,
    Exams,
    Courses,
    Chapters,
    Topics,
    TopicStudy,
    TopicQuiz,
    ExamTake,
    ExamResults,
}

impl ScreenKind {
    /// Required and optional parameter names.
    fn params(self) -> (&'static [&'static str], &'static [&'static str]) {
        match self {
            ScreenKind::Home => (&[], &[]),
            ScreenKind::Levels => (&["specialty"], &[]),
            ScreenKind::Subspecialties => (&["specialty", "level"], &[]),
            ScreenKind::Dashboard | ScreenKind::Exams | ScreenKind::Courses => {
                (&["specialty", "level"], &["subspecialty"])
            }
            ScreenKind::Chapters => (&["course"], &[]),
            ScreenKind::Topics => (&["chapter"], &[]),
            ScreenKind::TopicStudy | ScreenKind::TopicQuiz => (&["topic"], &[]),
            ScreenKind::ExamTake => (&["exam_id"], &[]),
            ScreenKind::ExamResults => (&["exam_id", "attempt_id"], &[]),
        }
    }
}

#[rustfmt::skip]
pub const ROUTE_TABLE: &[(&str, ScreenKind)] = &[
    ("/", ScreenKind::Home),
    ("/courses/{course}/chapters", ScreenKind::Chapters),
    ("/chapters/{chapter}/topics", ScreenKind::Topics),
    ("/topics/{topic}/study", ScreenKind::TopicStudy),
    ("/topics/{topic}/quiz", ScreenKind::TopicQuiz),
    ("/exam/{exam_id}/take", ScreenKind::ExamTake),
    ("/exam/{exam_id}/results/{attempt_id}", ScreenKind::ExamResults),
    ("/{specialty}", ScreenKind::Levels),
    ("/{specialty}/{level}/subspecialties", ScreenKind::Subspecialties),
    ("/{specialty}/{level}/dashboard", ScreenKind::Dashboard),
    ("/{specialty}/{level}/dashboard/exams", ScreenKind::Exams),
    ("/{specialty}/{level}/dashboard/courses", ScreenKind::Courses),
    ("/{specialty}/{level}/{subspecialty}/dashboard", ScreenKind::Dashboard),
    ("/{specialty}/{level}/{subspecialty}/dashboard/exams", ScreenKind::Exams),
    ("/{specialty}/{level}/{subspecialty}/dashboard/courses", ScreenKind::Courses),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Param(&'a str),
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

fn pattern_segments(pattern: &'static str) -> Vec<Segment<'static>> {
    segments(pattern)
        .map(|segment| {
            match segment
                .strip_prefix('{')
                .and_then(|rest| rest.strip_suffix('}'))
            {
                Some(name) => Segment::Param(name),
                None => Segment::Literal(segment),
            }
        })
        .collect()
}

/// Checks the route table for malformed or overlapping patterns.
///
/// # Errors
///
/// Returns the first `RouteTableError` found.
pub fn validate_route_table() -> Result<(), RouteTableError> {
    validate_table(ROUTE_TABLE)
}

fn validate_table(table: &[(&'static str, ScreenKind)]) -> Result<(), RouteTableError> {
    for &(pattern, kind) in table {
        if !pattern.starts_with('/') {
            return Err(RouteTableError::MissingLeadingSlash(pattern));
        }
        let mut seen = HashSet::new();
        let (required, optional) = kind.params();
        for segment in pattern_segments(pattern) {
            let Segment::Param(param) = segment else {
                continue;
            };
            if !seen.insert(param) {
                return Err(RouteTableError::DuplicateParam { pattern, param });
            }
            if !required.contains(&param) && !optional.contains(&param) {
                return Err(RouteTableError::UnknownParam {
                    pattern,
                    kind,
                    param,
                });
            }
        }
        if let Some(param) = required.iter().copied().find(|param| !seen.contains(param)) {
            return Err(RouteTableError::MissingParam {
                pattern,
                kind,
                param,
            });
        }
    }

    for (i, &(first, _)) in table.iter().enumerate() {
        for &(second, _) in &table[i + 1..] {
            if same_shape(&pattern_segments(first), &pattern_segments(second)) {
                return Err(RouteTableError::Ambiguous { first, second });
            }
        }
    }

    Ok(())
}

fn same_shape(a: &[Segment<'_>], b: &[Segment<'_>]) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|pair| match pair {
            (Segment::Param(_), Segment::Param(_)) => true,
            (Segment::Literal(x), Segment::Literal(y)) => x == y,
            _ => false,
        })
}

/// Specialty/level/(subspecialty) triple addressed by dashboard routes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DashboardScope {
    pub specialty: Slug,
    pub level: Slug,
    pub subspecialty: Option<Slug>,
}

impl DashboardScope {
    fn base_path(&self) -> String {
        match &self.subspecialty {
            Some(sub) => format!("/{}/{}/{sub}/dashboard", self.specialty, self.level),
            None => format!("/{}/{}/dashboard", self.specialty, self.level),
        }
    }
}

/// A navigable screen with its parameters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Home,
    Levels { specialty: Slug },
    Subspecialties { specialty: Slug, level: Slug },
    Dashboard(DashboardScope),
    Exams(DashboardScope),
    Courses(DashboardScope),
    Chapters { course: Slug },
    Topics { chapter: Slug },
    TopicStudy { topic: Slug },
    TopicQuiz { topic: Slug },
    ExamTake { exam: ExamId },
    ExamResults { exam: ExamId, attempt: AttemptId },
}

struct Params<'a> {
    values: Vec<(&'static str, &'a str)>,
}

impl Params<'_> {
    fn raw(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }

    fn slug(&self, name: &str) -> Option<Slug> {
        self.raw(name).and_then(|value| Slug::parse(value).ok())
    }

    fn parsed<T: std::str::FromStr>(&self, name: &str) -> Option<T> {
        self.raw(name).and_then(|value| value.parse().ok())
    }

    fn scope(&self) -> Option<DashboardScope> {
        let subspecialty = match self.raw("subspecialty") {
            Some(value) => Some(Slug::parse(value).ok()?),
            None => None,
        };
        Some(DashboardScope {
            specialty: self.slug("specialty")?,
            level: self.slug("level")?,
            subspecialty,
        })
    }
}

impl Screen {
    /// Maps a path to a screen. Unknown paths and malformed parameters yield `None`,
    /// which views render as the not-found placeholder.
    #[must_use]
    pub fn parse(path: &str) -> Option<Screen> {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        let parts: Vec<&str> = segments(path).collect();

        ROUTE_TABLE.iter().find_map(|&(pattern, kind)| {
            let params = match_pattern(pattern, &parts)?;
            Self::build(kind, &params)
        })
    }

    fn build(kind: ScreenKind, params: &Params<'_>) -> Option<Screen> {
        let screen = match kind {
            ScreenKind::Home => Screen::Home,
            ScreenKind::Levels => Screen::Levels {
                specialty: params.slug("specialty")?,
            },
            ScreenKind::Subspecialties => Screen::Subspecialties {
                specialty: params.slug("specialty")?,
                level: params.slug("level")?,
            },
            ScreenKind::Dashboard => Screen::Dashboard(params.scope()?),
            ScreenKind::Exams => Screen::Exams(params.scope()?),
            ScreenKind::Courses => Screen::Courses(params.scope()?),
            ScreenKind::Chapters => Screen::Chapters {
                course: params.slug("course")?,
            },
            ScreenKind::Topics => Screen::Topics {
                chapter: params.slug("chapter")?,
            },
            ScreenKind::TopicStudy => Screen::TopicStudy {
                topic: params.slug("topic")?,
            },
            ScreenKind::TopicQuiz => Screen::TopicQuiz {
                topic: params.slug("topic")?,
            },
            ScreenKind::ExamTake => Screen::ExamTake {
                exam: params.parsed("exam_id")?,
            },
            ScreenKind::ExamResults => Screen::ExamResults {
                exam: params.parsed("exam_id")?,
                attempt: params.parsed("attempt_id")?,
            },
        };
        Some(screen)
    }

    #[must_use]
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Home => ScreenKind::Home,
            Screen::Levels { .. } => ScreenKind::Levels,
            Screen::Subspecialties { .. } => ScreenKind::Subspecialties,
            Screen::Dashboard(_) => ScreenKind::Dashboard,
            Screen::Exams(_) => ScreenKind::Exams,
            Screen::Courses(_) => ScreenKind::Courses,
            Screen::Chapters { .. } => ScreenKind::Chapters,
            Screen::Topics { .. } => ScreenKind::Topics,
            Screen::TopicStudy { .. } => ScreenKind::TopicStudy,
            Screen::TopicQuiz { .. } => ScreenKind::TopicQuiz,
            Screen::ExamTake { .. } => ScreenKind::ExamTake,
            Screen::ExamResults { .. } => ScreenKind::ExamResults,
        }
    }

    #[must_use]
    pub fn to_path(&self) -> String {
        match self {
            Screen::Home => "/".to_string(),
            Screen::Levels { specialty } => format!("/{specialty}"),
            Screen::Subspecialties { specialty, level } => {
                format!("/{specialty}/{level}/subspecialties")
            }
            Screen::Dashboard(scope) => scope.base_path(),
            Screen::Exams(scope) => format!("{}/exams", scope.base_path()),
            Screen::Courses(scope) => format!("{}/courses", scope.base_path()),
            Screen::Chapters { course } => format!("/courses/{course}/chapters"),
            Screen::Topics { chapter } => format!("/chapters/{chapter}/topics"),
            Screen::TopicStudy { topic } => format!("/topics/{topic}/study"),
            Screen::TopicQuiz { topic } => format!("/topics/{topic}/quiz"),
            Screen::ExamTake { exam } => format!("/exam/{exam}/take"),
            Screen::ExamResults { exam, attempt } => format!("/exam/{exam}/results/{attempt}"),
        }
    }
}

fn match_pattern<'a>(pattern: &'static str, parts: &[&'a str]) -> Option<Params<'a>> {
    let pattern = pattern_segments(pattern);
    if pattern.len() != parts.len() {
        return None;
    }
    let mut values = Vec::new();
    for (segment, part) in pattern.iter().zip(parts) {
        match segment {
            Segment::Literal(literal) if literal == part => {}
            Segment::Literal(_) => return None,
            Segment::Param(name) => values.push((*name, *part)),
        }
    }
    Some(Params { values })
}

/// Where picking `level` leads: the subspecialty chooser when the level requires
/// one, otherwise straight to the level dashboard.
#[must_use]
pub fn level_entry(specialty: &Specialty, level: &ExamLevel) -> Screen {
    if level.requires_subspecialty {
        Screen::Subspecialties {
            specialty: specialty.slug.clone(),
            level: level.slug.clone(),
        }
    } else {
        Screen::Dashboard(DashboardScope {
            specialty: specialty.slug.clone(),
            level: level.slug.clone(),
            subspecialty: None,
        })
    }
}
