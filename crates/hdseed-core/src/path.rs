//! Derivation path parsing.
//!
//! Grammar: `m?('/' index('\'')?)*`, e.g. `m/44'/0'/0'/0/0`. Leading and
//! trailing separators are trimmed before splitting. A path must contain at
//! least one index; `""` and `"m"` are rejected with
//! [`PathError::InvalidPath`]. Use [`DerivationPath::master`] to refer to the
//! root key itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::{HARDENED_OFFSET, PATH_HARDENED_SUFFIX, PATH_ROOT, PATH_SEPARATOR};
use crate::error::PathError;

/// One step of a derivation path.
///
/// `index` is always below 2^31; the hardened offset is only added by
/// [`ChildIndex::raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildIndex {
    index: u32,
    hardened: bool,
}

impl ChildIndex {
    /// A non-hardened index. Fails if `index >= 2^31`.
    pub fn normal(index: u32) -> Result<Self, PathError> {
        Self::new(index, false)
    }

    /// A hardened index. Fails if `index >= 2^31`.
    pub fn hardened(index: u32) -> Result<Self, PathError> {
        Self::new(index, true)
    }

    fn new(index: u32, hardened: bool) -> Result<Self, PathError> {
        if index >= HARDENED_OFFSET {
            return Err(PathError::IndexOutOfRange {
                component: index.to_string(),
                index: u64::from(index),
            });
        }
        Ok(Self { index, hardened })
    }

    /// Split a raw 32-bit child number into index and hardened flag.
    pub fn from_raw(raw: u32) -> Self {
        Self {
            index: raw & !HARDENED_OFFSET,
            hardened: raw >= HARDENED_OFFSET,
        }
    }

    /// The index without the hardened offset.
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn is_hardened(&self) -> bool {
        self.hardened
    }

    /// The 32-bit child number: `index + 2^31` when hardened.
    pub fn raw(&self) -> u32 {
        if self.hardened {
            self.index | HARDENED_OFFSET
        } else {
            self.index
        }
    }
}

impl fmt::Display for ChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hardened {
            write!(f, "{}{}", self.index, PATH_HARDENED_SUFFIX)
        } else {
            write!(f, "{}", self.index)
        }
    }
}

impl FromStr for ChildIndex {
    type Err = PathError;

    fn from_str(component: &str) -> Result<Self, Self::Err> {
        let (digits, hardened) = match component.strip_suffix(PATH_HARDENED_SUFFIX) {
            Some(rest) => (rest, true),
            None => (component, false),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PathError::IndexParseError {
                component: component.to_string(),
            });
        }

        let out_of_range = |index| PathError::IndexOutOfRange {
            component: component.to_string(),
            index,
        };
        // All-digit strings only fail u64 parsing on overflow.
        let index: u64 = digits.parse().map_err(|_| out_of_range(u64::MAX))?;
        if index >= u64::from(HARDENED_OFFSET) {
            return Err(out_of_range(index));
        }

        Ok(Self {
            index: index as u32,
            hardened,
        })
    }
}

/// An ordered sequence of child indices, applied left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DerivationPath {
    steps: Vec<ChildIndex>,
}

impl DerivationPath {
    /// The empty path, addressing the master key itself.
    pub fn master() -> Self {
        Self::default()
    }

    /// Build a path from already validated steps.
    pub fn from_steps(steps: Vec<ChildIndex>) -> Self {
        Self { steps }
    }

    /// Parse a textual path.
    pub fn parse(path: &str) -> Result<Self, PathError> {
        path.parse()
    }

    pub fn steps(&self) -> &[ChildIndex] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// A new path with `step` appended.
    pub fn child(&self, step: ChildIndex) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }
}

impl FromStr for DerivationPath {
    type Err = PathError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.trim_matches(PATH_SEPARATOR);
        let mut components = trimmed.split(PATH_SEPARATOR).peekable();

        if components.peek() == Some(&PATH_ROOT) {
            components.next();
        }
        if trimmed.is_empty() || components.peek().is_none() {
            return Err(PathError::InvalidPath(path.to_string()));
        }

        let steps = components
            .map(ChildIndex::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { steps })
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PATH_ROOT)?;
        for step in &self.steps {
            write!(f, "{PATH_SEPARATOR}{step}")?;
        }
        Ok(())
    }
}

impl Serialize for DerivationPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DerivationPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
