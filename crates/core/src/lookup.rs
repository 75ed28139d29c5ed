//! Linear lookups over catalog collections.
//!
//! Collections are small, ordered slices. Every helper preserves source order and
//! returns borrowed entities; nothing here allocates beyond the result vector.

use std::fmt;

use thiserror::Error;

use crate::model::Slug;

/// Catalog collection an unresolved identifier belonged to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Specialty,
    ExamLevel,
    Subspecialty,
    Course,
    Chapter,
    Topic,
    Exam,
    Question,
    Attempt,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityKind::Specialty => "specialty",
            EntityKind::ExamLevel => "exam level",
            EntityKind::Subspecialty => "subspecialty",
            EntityKind::Course => "course",
            EntityKind::Chapter => "chapter",
            EntityKind::Topic => "topic",
            EntityKind::Exam => "exam",
            EntityKind::Question => "question",
            EntityKind::Attempt => "attempt",
        };
        f.write_str(label)
    }
}

/// Unresolved slug or id. Rendered as a "not found" placeholder, never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LookupError {
    #[error("{kind} not found: {key}")]
    NotFound { kind: EntityKind, key: String },
}

impl LookupError {
    #[must_use]
    pub fn not_found(kind: EntityKind, key: impl fmt::Display) -> Self {
        Self::NotFound {
            kind,
            key: key.to_string(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            LookupError::NotFound { kind, .. } => *kind,
        }
    }
}

/// Entity with a typed primary key.
pub trait Identified {
    type Id: Copy + Eq + fmt::Display;
    const KIND: EntityKind;

    fn id(&self) -> Self::Id;
}

/// Entity addressable by slug in navigation paths.
pub trait Slugged {
    fn slug(&self) -> &Slug;
}

/// Entity that belongs to a parent identified by `P`.
pub trait ChildOf<P> {
    fn parent_id(&self) -> P;
}

/// First entity whose slug equals `slug`.
///
/// Slugs are assumed unique within a collection; `Catalog::validate` reports
/// duplicates but lookups still return the first match.
#[must_use]
pub fn find_by_slug<'a, T: Slugged>(collection: &'a [T], slug: &str) -> Option<&'a T> {
    collection.iter().find(|item| item.slug().as_str() == slug)
}

#[must_use]
pub fn find_by_id<T: Identified>(collection: &[T], id: T::Id) -> Option<&T> {
    collection.iter().find(|item| item.id() == id)
}

/// All entities belonging to `parent`, in source order.
#[must_use]
pub fn filter_by_parent<'a, T, P>(collection: &'a [T], parent: P) -> Vec<&'a T>
where
    T: ChildOf<P>,
    P: PartialEq + Copy,
{
    collection
        .iter()
        .filter(|item| item.parent_id() == parent)
        .collect()
}

/// Like `find_by_slug` but yields a `LookupError` naming the collection.
///
/// # Errors
///
/// Returns `LookupError::NotFound` when no entity carries `slug`.
pub fn require_by_slug<'a, T>(collection: &'a [T], slug: &str) -> Result<&'a T, LookupError>
where
    T: Slugged + Identified,
{
    find_by_slug(collection, slug).ok_or_else(|| LookupError::not_found(T::KIND, slug))
}

/// Like `find_by_id` but yields a `LookupError` naming the collection.
///
/// # Errors
///
/// Returns `LookupError::NotFound` when no entity carries `id`.
pub fn require_by_id<T: Identified>(collection: &[T], id: T::Id) -> Result<&T, LookupError> {
    find_by_id(collection, id).ok_or_else(|| LookupError::not_found(T::KIND, id))
}
