use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

use super::Error;

/// The identifier of a page section. This is also the `id` attribute of the anchor element
/// rendered for the section.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(Box<str>);

impl SectionId {
    #[inline]
    pub fn new<T>(id: T) -> Self
    where
        T: Into<Box<str>>,
    {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SectionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SectionId {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for SectionId {
    #[inline]
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A named, navigable anchor point on the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub label: Box<str>,
}

impl Section {
    pub fn new<I, L>(id: I, label: L) -> Self
    where
        I: Into<Box<str>>,
        L: Into<Box<str>>,
    {
        Self {
            id: SectionId::new(id),
            label: label.into(),
        }
    }
}

/// The ordered list of sections present on the page.
///
/// The registry is built once at startup and never changes afterwards. Construction fails
/// if the list is empty or contains a malformed or duplicate identifier, so a typo in the
/// section table surfaces before the page is mounted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionRegistry {
    sections: Vec<Section>,
    positions: HashMap<Box<str>, usize>,
}

impl SectionRegistry {
    pub fn new(sections: Vec<Section>) -> Result<Self, Error> {
        if sections.is_empty() {
            return Err(Error::EmptyRegistry);
        }

        let mut positions: HashMap<Box<str>, usize> = HashMap::with_capacity(sections.len());

        for (index, section) in sections.iter().enumerate() {
            let id = section.id.as_str();
            if id.is_empty() || id.contains(char::is_whitespace) {
                return Err(Error::InvalidId(section.id.clone()));
            }

            if positions.insert(id.into(), index).is_some() {
                return Err(Error::DuplicateSection(section.id.clone()));
            }
        }

        Ok(Self {
            sections,
            positions,
        })
    }

    /// Builds a registry from a static `(id, label)` table.
    pub fn from_table(table: &[(&str, &str)]) -> Result<Self, Error> {
        let sections = table
            .iter()
            .map(|(id, label)| Section::new(*id, *label))
            .collect();

        Self::new(sections)
    }

    /// Returns the position of the section with the given `id` in document order.
    #[inline]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Returns the section with the given `id` together with its position.
    pub fn lookup(&self, id: &str) -> Option<(usize, &Section)> {
        let index = self.position(id)?;
        self.sections.get(index).map(|section| (index, section))
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Returns the first section. A registry is never empty.
    #[inline]
    pub fn first(&self) -> &Section {
        &self.sections[0]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }
}

impl<'a> IntoIterator for &'a SectionRegistry {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Section, SectionRegistry};
    use crate::scrollspy::Error;

    #[test]
    fn test_registry_new() {
        let registry = SectionRegistry::from_table(&[
            ("home", "Home"),
            ("overview", "Overview"),
            ("format", "Format"),
        ])
        .unwrap();

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.first().id.as_str(), "home");
        assert_eq!(registry.position("overview"), Some(1));
        assert_eq!(registry.position("format"), Some(2));
        assert_eq!(registry.position("prizes"), None);
        assert_eq!(
            registry.lookup("format").map(|(index, s)| (index, &*s.label)),
            Some((2, "Format"))
        );

        let ids: Vec<&str> = registry.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["home", "overview", "format"]);
    }

    #[test]
    fn test_registry_empty() {
        assert_eq!(SectionRegistry::new(vec![]), Err(Error::EmptyRegistry));
    }

    #[test]
    fn test_registry_duplicate() {
        let err = SectionRegistry::from_table(&[
            ("home", "Home"),
            ("rules", "Rules"),
            ("home", "Start"),
        ])
        .unwrap_err();

        assert_eq!(err, Error::DuplicateSection("home".into()));
    }

    #[test]
    fn test_registry_invalid_id() {
        let err = SectionRegistry::new(vec![Section::new("", "Nothing")]).unwrap_err();
        assert_eq!(err, Error::InvalidId("".into()));

        let err = SectionRegistry::new(vec![
            Section::new("home", "Home"),
            Section::new("prize pool", "Prizes"),
        ])
        .unwrap_err();
        assert_eq!(err, Error::InvalidId("prize pool".into()));
    }
}
