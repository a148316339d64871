use super::sym_table::{Position, Symbol, SymbolTable};
use std::{cmp::Ordering, fmt};

struct Node {
    symbol: Symbol,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(name: &str, position: Position) -> Self {
        Node {
            symbol: Symbol::new(name, position),
            left: None,
            right: None,
        }
    }
}

/// Symbol table backed by an unbalanced binary search tree.
///
/// Names are ordered lexicographically (byte-wise). The shape of the tree
/// depends only on insertion order, so sorted input degenerates into a list.
pub struct TreeSymbolTable {
    root: Option<Box<Node>>,
    size: usize,
}

impl TreeSymbolTable {
    pub fn new() -> Self {
        TreeSymbolTable {
            root: None,
            size: 0,
        }
    }

    /// Symbols in ascending name order
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref())
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty)
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node, usize)> =
            self.root.as_deref().map(|node| (node, 1)).into_iter().collect();

        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);

            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }

        height
    }
}

impl SymbolTable for TreeSymbolTable {
    fn add(&mut self, name: &str) -> Position {
        let position = self.size;
        let mut link = &mut self.root;

        while let Some(node) = link {
            link = match name.cmp(node.symbol.name()) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    let existing = node.symbol.position();
                    log::trace!("'{}' already present at position {}", name, existing);
                    return existing;
                }
            };
        }

        *link = Some(Box::new(Node::new(name, position)));
        self.size += 1;

        log::debug!("added '{}' at position {}", name, position);
        position
    }

    fn search(&self, name: &str) -> Option<Position> {
        let mut current = self.root.as_deref();

        while let Some(node) = current {
            current = match name.cmp(node.symbol.name()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node.symbol.position()),
            };
        }

        log::trace!("'{}' not found", name);
        None
    }

    fn len(&self) -> usize {
        self.size
    }
}

impl Default for TreeSymbolTable {
    fn default() -> Self {
        TreeSymbolTable::new()
    }
}

impl Drop for TreeSymbolTable {
    fn drop(&mut self) {
        // unlink children first so dropping a node never recurses
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// In-order iterator over a [`TreeSymbolTable`]
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn new(root: Option<&'a Node>) -> Self {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());

        Some(&node.symbol)
    }
}

impl<'a> IntoIterator for &'a TreeSymbolTable {
    type Item = &'a Symbol;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for TreeSymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== SYMBOL TABLE (BST) ===")?;
        writeln!(f, "Size: {}", self.size)?;
        writeln!(f, "{:<20} | {:<10}", "Name", "Position")?;
        writeln!(f, "{}", "-".repeat(36))?;

        for symbol in self.iter() {
            writeln!(f, "{:<20} | {:<10}", symbol.name(), symbol.position())?;
        }

        Ok(())
    }
}

impl fmt::Debug for TreeSymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dbg = f.debug_map();

        for symbol in self.iter() {
            dbg.entry(&symbol.name(), &symbol.position());
        }

        dbg.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(names: &[&str]) -> TreeSymbolTable {
        let mut table = TreeSymbolTable::new();

        for name in names {
            table.add(name);
        }

        table
    }

    #[test]
    fn positions_follow_insertion_order() {
        let mut table = TreeSymbolTable::new();

        assert_eq!(table.add("variable1"), 0);
        assert_eq!(table.add("count"), 1);
        assert_eq!(table.add("sum"), 2);
        assert_eq!(table.add("array"), 3);
        assert_eq!(table.add("index"), 4);
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn duplicate_add_keeps_position_and_size() {
        let mut table = table_with(&["variable1", "count", "sum", "array", "index"]);

        assert_eq!(table.add("count"), 1);
        assert_eq!(table.len(), 5);
        assert_eq!(table.add("max"), 5);
    }

    #[test]
    fn search_hits_and_misses() {
        let table = table_with(&["variable1", "count", "sum", "array", "index"]);

        assert_eq!(table.search("sum"), Some(2));
        assert_eq!(table.search("variable1"), Some(0));
        assert_eq!(table.search("nonexistent"), None);
        assert_eq!(table.search(""), None);
        assert!(table.contains("array"));
        assert!(!table.contains("Array"));
    }

    #[test]
    fn empty_table() {
        let table = TreeSymbolTable::default();

        assert!(table.is_empty());
        assert_eq!(table.height(), 0);
        assert_eq!(table.search("anything"), None);
        assert_eq!(table.iter().count(), 0);
    }

    #[test]
    fn iter_is_sorted_by_name() {
        let table = table_with(&["variable1", "count", "sum", "array", "index", "count"]);
        let names: Vec<&str> = table.iter().map(Symbol::name).collect();

        assert_eq!(names, ["array", "count", "index", "sum", "variable1"]);
    }

    #[test]
    fn sorted_input_degenerates() {
        let names: Vec<String> = (0..1000).map(|i| format!("name{:05}", i)).collect();
        let mut table = TreeSymbolTable::new();

        for name in &names {
            table.add(name);
        }

        assert_eq!(table.height(), 1000);
        assert_eq!(table.search("name00999"), Some(999));
    }

    #[test]
    fn dropping_a_deep_tree() {
        let mut table = TreeSymbolTable::new();

        for i in 0..10_000 {
            table.add(&format!("{:08}", i));
        }

        assert_eq!(table.len(), 10_000);
        assert_eq!(table.height(), 10_000);
        drop(table);
    }

    #[test]
    fn display_lists_rows_in_order() {
        let table = table_with(&["sum", "count"]);
        let expected = "=== SYMBOL TABLE (BST) ===\n\
                        Size: 2\n\
                        Name                 | Position  \n\
                        ------------------------------------\n\
                        count                | 1         \n\
                        sum                  | 0         \n";

        assert_eq!(table.to_string(), expected);
    }

    #[test]
    fn debug_is_a_map() {
        let table = table_with(&["b", "a"]);

        assert_eq!(format!("{:?}", table), r#"{"a": 1, "b": 0}"#);
    }
}
