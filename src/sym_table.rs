/// Zero-based index handed out to a name the first time it is added
pub type Position = usize;

/// A name together with the position it was first added at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    name: Box<str>,
    position: Position,
}

impl Symbol {
    pub fn new(name: &str, position: Position) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

/// Operations shared by every symbol table backend
pub trait SymbolTable {
    /// Add `name` (or return the position it already has).
    ///
    /// Adding a name that is already present leaves the table untouched.
    fn add(&mut self, name: &str) -> Position;

    /// Position of `name`, `None` if it was never added
    fn search(&self, name: &str) -> Option<Position>;

    /// Number of distinct names stored
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, name: &str) -> bool {
        self.search(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_keeps_name_and_position() {
        let sym = Symbol::new("count", 1);

        assert_eq!(sym.name(), "count");
        assert_eq!(sym.position(), 1);
        assert_eq!(sym, Symbol::new("count", 1));
        assert_ne!(sym, Symbol::new("count", 2));
    }
}
