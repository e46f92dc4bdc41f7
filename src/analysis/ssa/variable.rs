//! Variable names and versioned variable references.
//!
//! A [`Variable`] is a symbol ([`Name`]) plus a version subscript. Before renaming every
//! reference carries version 0. After [`arrange_ssa`](super::arrange_ssa) each definition in a
//! block carries a fresh version and each use carries the version of the definition that
//! reaches it. Two references denote the same value iff both name and version match.

use std::fmt;

/// A variable symbol.
///
/// Names are small integer codes. Source languages with single-letter variables map each
/// letter to its character code. Letters and `_` print as themselves, any other code prints as
/// `_` followed by the code, so a name never ends in a digit that could be read as part of the
/// version subscript.
///
/// # Examples
///
/// ```rust
/// use domssa::analysis::Name;
///
/// let x = Name::from('x');
/// assert_eq!(x.code(), 'x' as u32);
/// assert_eq!(x.to_string(), "x");
/// assert_eq!(Name::new(7).to_string(), "_7");
/// assert_eq!(Name::from('1').to_string(), "_49");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(u32);

impl Name {
    /// Creates a name from its raw code.
    #[must_use]
    pub const fn new(code: u32) -> Self {
        Name(code)
    }

    /// Returns the raw code.
    #[must_use]
    pub const fn code(self) -> u32 {
        self.0
    }
}

impl From<char> for Name {
    fn from(value: char) -> Self {
        Name(value as u32)
    }
}

impl From<u32> for Name {
    fn from(value: u32) -> Self {
        Name(value)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match char::from_u32(self.0) {
            Some(ch) if ch.is_alphabetic() || ch == '_' => write!(f, "{ch}"),
            _ => write!(f, "_{}", self.0),
        }
    }
}

/// A versioned reference to a variable.
///
/// # Examples
///
/// ```rust
/// use domssa::analysis::Variable;
///
/// let x1 = Variable::new('x', 1);
/// assert_eq!(x1.to_string(), "x1");
/// assert_eq!(x1, Variable::new('x', 1));
/// assert_ne!(x1, Variable::new('x', 2));
/// assert!(x1.same_name(&Variable::new('x', 2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variable {
    /// The symbol being referenced.
    pub name: Name,
    /// The version subscript.
    pub version: u32,
}

impl Variable {
    /// Creates a reference to `name` at `version`.
    #[must_use]
    pub fn new(name: impl Into<Name>, version: u32) -> Self {
        Variable {
            name: name.into(),
            version,
        }
    }

    /// Creates a reference to `name` at version 0, the value flowing in from outside.
    #[must_use]
    pub fn unversioned(name: impl Into<Name>) -> Self {
        Variable::new(name, 0)
    }

    /// Returns a copy of this reference at another version.
    #[must_use]
    pub const fn with_version(self, version: u32) -> Self {
        Variable {
            name: self.name,
            version,
        }
    }

    /// Returns `true` if both references name the same symbol, whatever their versions.
    #[must_use]
    pub fn same_name(&self, other: &Variable) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.version)
    }
}
