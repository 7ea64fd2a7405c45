//! JSON-pointer-style locations.
//!
//! Every validation error is located by a path from the document root, written as a
//! URI fragment: the root is `#`, object keys and array indices follow as `/`-separated
//! segments, e.g. `#/reactions/0/species/0/species_id`. Keys are escaped as in
//! RFC 6901 (`~` becomes `~0`, `/` becomes `~1`).

use std::fmt;

/// An immutable location within a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pointer(String);

impl Pointer {
    /// The document root, `#`.
    pub fn root() -> Self {
        Pointer("#".to_string())
    }

    /// Location of an object member below this one.
    pub fn field(&self, name: &str) -> Self {
        let mut path = String::with_capacity(self.0.len() + name.len() + 1);
        path.push_str(&self.0);
        path.push('/');

        for c in name.chars() {
            match c {
                '~' => path.push_str("~0"),
                '/' => path.push_str("~1"),
                c => path.push(c),
            }
        }

        Pointer(path)
    }

    /// Location of an array element below this one.
    pub fn index(&self, idx: usize) -> Self {
        Pointer(format!("{}/{idx}", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "#"
    }
}

impl Default for Pointer {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Pointer> for String {
    fn from(pointer: Pointer) -> Self {
        pointer.0
    }
}
