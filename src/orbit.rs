use std::{slice, str::FromStr};

use crate::Error;

pub type Object = String;

/// One line of an orbit map, `child` directly orbits `parent`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Orbit {
    parent: Object,
    child: Object,
}

impl Orbit {
    pub fn new(parent: &str, child: &str) -> Self {
        Self {
            parent: parent.to_string(),
            child: child.to_string(),
        }
    }

    pub fn parent(&self) -> &str {
        &self.parent
    }

    pub fn child(&self) -> &str {
        &self.child
    }
}

impl FromStr for Orbit {
    type Err = Error;

    // Split at the first ')', both sides are taken verbatim.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let sep_ind = value
            .find(')')
            .ok_or(Error::MalformedLine(value.to_string()))?;
        Ok(Orbit::new(&value[..sep_ind], &value[(sep_ind + 1)..]))
    }
}

/// All orbits of a map, in the order they were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrbitMap {
    orbits: Vec<Orbit>,
}

impl OrbitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, orbit: Orbit) {
        self.orbits.push(orbit);
    }

    pub fn iter(&self) -> slice::Iter<'_, Orbit> {
        self.orbits.iter()
    }

    pub fn len(&self) -> usize {
        self.orbits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orbits.is_empty()
    }
}

impl FromIterator<Orbit> for OrbitMap {
    fn from_iter<T: IntoIterator<Item = Orbit>>(iter: T) -> Self {
        Self {
            orbits: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a OrbitMap {
    type Item = &'a Orbit;
    type IntoIter = slice::Iter<'a, Orbit>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromStr for OrbitMap {
    type Err = Error;

    // A bare '\r' ends a line too.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        text.split(['\n', '\r'])
            .filter(|line| !line.is_empty())
            .map(Orbit::from_str)
            .collect()
    }
}
