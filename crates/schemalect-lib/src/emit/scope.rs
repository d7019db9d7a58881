//! Emission position tracking.

use std::fmt;

/// One step from the root to the node being emitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Property(String),
    Item,
}

/// Object-property path of a node, rendered like `request-trigger[].from`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyPath(Vec<Segment>);

impl PropertyPath {
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        if !matches!(self.0[0], Segment::Property(_)) {
            f.write_str("<root>")?;
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                Segment::Property(name) if i == 0 => f.write_str(name)?,
                Segment::Property(name) => write!(f, ".{name}")?,
                Segment::Item => f.write_str("[]")?,
            }
        }
        Ok(())
    }
}

/// Where an emitter currently is: the property path and the nesting depth
/// used for indentation.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    path: PropertyPath,
    depth: usize,
}

impl Scope {
    pub fn root() -> Self {
        Self::default()
    }

    /// Scope of a property value, one indentation level deeper.
    pub fn property(&self, name: &str) -> Self {
        let mut path = self.path.clone();
        path.0.push(Segment::Property(name.to_string()));
        Self {
            path,
            depth: self.depth + 1,
        }
    }

    /// Scope of an array's items. Items render inline, so depth is unchanged.
    pub fn item(&self) -> Self {
        let mut path = self.path.clone();
        path.0.push(Segment::Item);
        Self {
            path,
            depth: self.depth,
        }
    }

    pub fn path(&self) -> &PropertyPath {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn indent(&self) -> String {
        "  ".repeat(self.depth)
    }
}

/// A construct a dialect cannot represent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Construct {
    /// `Optional` directly wrapping another `Optional`.
    NestedOptional,
    /// `Optional` that is not the direct value of an object property.
    OptionalOutsideProperty,
    /// Upper bound on a number.
    NumberMaximum,
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NestedOptional => "an optional wrapping another optional",
            Self::OptionalOutsideProperty => "an optional outside an object property",
            Self::NumberMaximum => "a number maximum",
        })
    }
}
