//! Textual adjacency listing.

use std::fmt;

use super::Graph;

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (label, neighbors)) in self.adjacency().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{label}: ")?;
            for (j, neighbor) in neighbors.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                f.write_str(neighbor)?;
            }
        }
        Ok(())
    }
}
