//! Text dump of the adjacency relation.
//!
//! Each neighbor is written as `" {n};"`, and rows are joined by newlines with
//! none after the last row, so the dump has no trailing whitespace and
//! `print` adds the final newline. Older dumps that wrote `"{n}; "` and ended
//! every row with a newline differ only in that whitespace.
//!
//! ```text
//! Graph:
//! 	1 connections: 2; 5;
//! 	2 connections: 1; 3;
//! ```

use core::fmt;
use core::hash::Hash;

use super::UndirectedGraph;

/// Writes the `"Graph:"` header and one tab-indented line per row.
pub(crate) fn write_rows<'a, V, W, I>(out: &mut W, rows: I) -> fmt::Result
where
    V: fmt::Display + 'a,
    W: fmt::Write + ?Sized,
    I: IntoIterator<Item = (&'a V, &'a [V])>,
{
    out.write_str("Graph:")?;
    for (vertex, neighbors) in rows {
        write!(out, "\n\t{vertex} connections:")?;
        for neighbor in neighbors {
            write!(out, " {neighbor};")?;
        }
    }
    Ok(())
}

impl<V> fmt::Display for UndirectedGraph<V>
where
    V: fmt::Display + Clone + Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.iter())
    }
}

impl<V> UndirectedGraph<V>
where
    V: fmt::Display + Clone + Eq + Hash,
{
    /// Renders the graph as text; see the module docs for the layout.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Prints [`render`](Self::render) to stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}
