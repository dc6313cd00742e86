use std::fmt::{self, Display, Formatter};

use crate::tree::{Branch, Tree};

/// A read-only text drawing of a tree, one node per line.
///
/// ```text
/// 1 (rank 1)
/// └─L 3 (rank 1)
///    ├─L 5 (rank 0)
///    └─R 8 (rank 0)
/// ```
pub struct Diagram<'a, K> {
    tree: &'a Tree<K>,
}

impl<K> Tree<K> {
    pub fn diagram(&self) -> Diagram<'_, K> {
        Diagram { tree: self }
    }
}

impl<K: Display> Display for Diagram<'_, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.tree.is_empty() {
            return writeln!(f, "(empty)");
        }

        // One entry per ancestor below the root: whether it still has a sibling to draw.
        let mut rails: Vec<bool> = Vec::new();

        for step in self.tree.walk() {
            let node = step.node;

            let side = match step.branch {
                Branch::Root => {
                    writeln!(f, "{} (rank {})", node.value(), node.rank())?;
                    continue;
                }
                Branch::Left => 'L',
                Branch::Right => 'R',
            };

            rails.truncate(step.depth - 1);

            for &open in &rails {
                f.write_str(if open { "│  " } else { "   " })?;
            }

            let connector = if step.last { "└─" } else { "├─" };
            writeln!(f, "{connector}{side} {} (rank {})", node.value(), node.rank())?;

            rails.push(!step.last);
        }

        Ok(())
    }
}

impl<K: Display> Display for Tree<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.diagram().fmt(f)
    }
}
