//! Demonstration runs that exercise both backends and print their state.

use super::{
    hash::HashSymbolTable,
    sym_table::{Position, SymbolTable},
    tree::TreeSymbolTable,
};
use std::io::{self, Write};

const INITIAL_NAMES: [&str; 5] = ["variable1", "count", "sum", "array", "index"];
const MORE_NAMES: [&str; 4] = ["result", "temp", "max", "min"];
// enough extra names to push the hash table past its first resize
const RESIZE_NAMES: [&str; 4] = ["value", "data", "flag", "status"];
const SEARCH_NAMES: [&str; 2] = ["sum", "nonexistent"];

/// Runs the tree demo, then the hash demo
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    run_tree_demo(out)?;
    writeln!(out)?;
    run_hash_demo(out)
}

pub fn run_tree_demo<W: Write>(out: &mut W) -> io::Result<()> {
    let mut table = TreeSymbolTable::new();

    banner(out, "BST Implementation")?;

    writeln!(out, "Adding symbols...")?;
    for name in INITIAL_NAMES {
        add_symbol(&mut table, name, out)?;
    }

    add_duplicate(&mut table, "count", out)?;
    writeln!(out, "\n{}", table)?;

    search_symbols(&table, out)?;

    writeln!(out, "\nAdding more symbols...")?;
    for name in MORE_NAMES {
        add_symbol(&mut table, name, out)?;
    }

    writeln!(out, "\n{}", table)?;

    drop(table);
    writeln!(out, "Symbol Table destroyed. Program terminated.")
}

pub fn run_hash_demo<W: Write>(out: &mut W) -> io::Result<()> {
    let mut table = HashSymbolTable::new();

    banner(out, "Hash Table Implementation")?;

    writeln!(out, "Adding symbols...")?;
    for name in INITIAL_NAMES {
        add_hashed(&mut table, name, out)?;
    }

    add_duplicate(&mut table, "count", out)?;
    writeln!(out, "\n{}", table)?;
    writeln!(out, "{}", table.structure())?;

    search_symbols(&table, out)?;

    writeln!(out, "\nAdding more symbols (to trigger resize)...")?;
    for name in MORE_NAMES.into_iter().chain(RESIZE_NAMES) {
        add_hashed(&mut table, name, out)?;
    }

    writeln!(out, "\n{}", table)?;
    writeln!(out, "{}", table.structure())?;

    drop(table);
    writeln!(out, "Symbol Table destroyed. Program terminated.")
}

fn banner<W: Write>(out: &mut W, implementation: &str) -> io::Result<()> {
    let title = format!("Symbol Table Management - {}", implementation);

    writeln!(out, "{}", title)?;
    writeln!(out, "{}\n", "=".repeat(title.len()))
}

fn add_symbol<T: SymbolTable, W: Write>(
    table: &mut T,
    name: &str,
    out: &mut W,
) -> io::Result<Position> {
    let position = table.add(name);
    writeln!(out, "Added '{}' at position: {}", name, position)?;

    Ok(position)
}

fn add_hashed<W: Write>(
    table: &mut HashSymbolTable,
    name: &str,
    out: &mut W,
) -> io::Result<Position> {
    let capacity = table.capacity();
    let position = table.add(name);

    if table.capacity() != capacity {
        writeln!(out, "Hash table resized to capacity: {}", table.capacity())?;
    }

    writeln!(out, "Added '{}' at position: {}", name, position)?;

    Ok(position)
}

fn add_duplicate<T: SymbolTable, W: Write>(
    table: &mut T,
    name: &str,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "\nAttempting to add duplicate '{}'...", name)?;

    let position = table.add(name);
    writeln!(out, "'{}' position: {} (already exists)", name, position)
}

fn search_symbols<T: SymbolTable, W: Write>(table: &T, out: &mut W) -> io::Result<()> {
    writeln!(out, "Searching for symbols...")?;

    for name in SEARCH_NAMES {
        match table.search(name) {
            Some(position) => writeln!(out, "Found '{}' at position: {}", name, position)?,
            None => writeln!(out, "'{}' not found", name)?,
        }
    }

    Ok(())
}
