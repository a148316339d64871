use super::sym_table::{Position, Symbol, SymbolTable};
use std::{fmt, iter, mem};

/// Number of buckets a table created with [`HashSymbolTable::new`] starts with
pub const INITIAL_CAPACITY: usize = 10;

/// The bucket array doubles before an insertion would push `size / capacity` above this
pub const LOAD_FACTOR_THRESHOLD: f64 = 0.75;

/// djb2 over the bytes of `name`, reduced to a bucket index in `[0, capacity)`.
///
/// Arithmetic is unsigned 64-bit and wraps, so long names give the same
/// index on every platform.
pub fn hash(name: &str, capacity: usize) -> usize {
    let hash = name
        .bytes()
        .fold(5381u64, |h, byte| h.wrapping_mul(33).wrapping_add(u64::from(byte)));

    (hash % capacity as u64) as usize
}

struct Entry {
    symbol: Symbol,
    next: Chain,
}

// newest entry first
type Chain = Option<Box<Entry>>;

fn empty_buckets(capacity: usize) -> Vec<Chain> {
    iter::repeat_with(|| None).take(capacity).collect()
}

fn chain_symbols<'a>(chain: &'a Chain) -> impl Iterator<Item = &'a Symbol> {
    iter::successors(chain.as_deref(), |entry| entry.next.as_deref()).map(|entry| &entry.symbol)
}

fn load(size: usize, capacity: usize) -> f64 {
    size as f64 / capacity as f64
}

/// Symbol table backed by a separately chained hash table.
///
/// Starts with [`INITIAL_CAPACITY`] buckets and doubles whenever an
/// insertion would cross [`LOAD_FACTOR_THRESHOLD`]. Positions come from a
/// counter that is never reset, so resizing never changes them.
pub struct HashSymbolTable {
    buckets: Vec<Chain>,
    size: usize,
    next_position: Position,
}

impl HashSymbolTable {
    pub fn new() -> Self {
        HashSymbolTable::with_capacity(INITIAL_CAPACITY)
    }

    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "a hash symbol table needs at least one bucket");

        HashSymbolTable {
            buckets: empty_buckets(capacity),
            size: 0,
            next_position: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        load(self.size, self.capacity())
    }

    /// Every stored symbol with its bucket index, in bucket order
    pub fn entries(&self) -> impl Iterator<Item = (usize, &Symbol)> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .flat_map(|(index, chain)| chain_symbols(chain).map(move |symbol| (index, symbol)))
    }

    /// Symbols chained in bucket `index`, newest first
    pub fn bucket(&self, index: usize) -> impl Iterator<Item = &Symbol> + '_ {
        chain_symbols(&self.buckets[index])
    }

    /// Per-bucket view of the table, see [`Structure`]
    pub fn structure(&self) -> Structure<'_> {
        Structure { table: self }
    }

    fn resize(&mut self) {
        let old_size = self.size;
        let capacity = self.capacity() * 2;
        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(capacity));

        self.size = 0;

        // entries are relinked into the new buckets, not reallocated
        for mut chain in old_buckets {
            while let Some(mut entry) = chain {
                chain = entry.next.take();

                let index = hash(entry.symbol.name(), capacity);
                entry.next = self.buckets[index].take();
                self.buckets[index] = Some(entry);
                self.size += 1;
            }
        }

        debug_assert_eq!(self.size, old_size, "resize lost or duplicated entries");
        log::info!(
            "resized from {} to {} buckets ({} symbols)",
            capacity / 2,
            capacity,
            self.size
        );
    }
}

impl SymbolTable for HashSymbolTable {
    fn add(&mut self, name: &str) -> Position {
        if let Some(position) = self.search(name) {
            log::trace!("'{}' already present at position {}", name, position);
            return position;
        }

        if load(self.size + 1, self.capacity()) > LOAD_FACTOR_THRESHOLD {
            self.resize();
        }

        let index = hash(name, self.capacity());
        let position = self.next_position;
        self.next_position += 1;

        let next = self.buckets[index].take();
        self.buckets[index] = Some(Box::new(Entry {
            symbol: Symbol::new(name, position),
            next,
        }));
        self.size += 1;

        log::debug!("added '{}' at position {} (bucket {})", name, position, index);
        position
    }

    fn search(&self, name: &str) -> Option<Position> {
        let index = hash(name, self.capacity());

        chain_symbols(&self.buckets[index])
            .find(|symbol| symbol.name() == name)
            .map(Symbol::position)
    }

    fn len(&self) -> usize {
        self.size
    }
}

impl Default for HashSymbolTable {
    fn default() -> Self {
        HashSymbolTable::new()
    }
}

impl Drop for HashSymbolTable {
    fn drop(&mut self) {
        for bucket in &mut self.buckets {
            let mut chain = bucket.take();

            while let Some(mut entry) = chain {
                chain = entry.next.take();
            }
        }
    }
}

impl fmt::Display for HashSymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== SYMBOL TABLE (HASH TABLE) ===")?;
        writeln!(
            f,
            "Size: {}, Capacity: {}, Load Factor: {:.2}",
            self.size,
            self.capacity(),
            self.load_factor()
        )?;
        writeln!(f, "{:<20} | {:<10} | {:<10}", "Name", "Position", "Bucket")?;
        writeln!(f, "{}", "-".repeat(47))?;

        for (index, symbol) in self.entries() {
            writeln!(f, "{:<20} | {:<10} | {:<10}", symbol.name(), symbol.position(), index)?;
        }

        Ok(())
    }
}

impl fmt::Debug for HashSymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dbg = f.debug_map();

        for (_, symbol) in self.entries() {
            dbg.entry(&symbol.name(), &symbol.position());
        }

        dbg.finish()
    }
}

/// Bucket-by-bucket dump of a [`HashSymbolTable`], showing every chain
pub struct Structure<'a> {
    table: &'a HashSymbolTable,
}

impl fmt::Display for Structure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== HASH TABLE STRUCTURE ===")?;
        writeln!(f, "Capacity: {}, Size: {}", self.table.capacity(), self.table.len())?;
        writeln!(f)?;

        for index in 0..self.table.capacity() {
            write!(f, "Bucket[{:>2}]: ", index)?;

            let mut symbols = self.table.bucket(index).peekable();

            if symbols.peek().is_none() {
                writeln!(f, "(empty)")?;
                continue;
            }

            while let Some(symbol) = symbols.next() {
                write!(f, "[{}:{}]", symbol.name(), symbol.position())?;

                if symbols.peek().is_some() {
                    write!(f, " -> ")?;
                }
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
