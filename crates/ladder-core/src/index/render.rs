use std::fmt::Write;

use super::{NodeId, PrefixIndex};

impl PrefixIndex {
    /// Render the tree as indented text, one node per line:
    ///
    /// ```text
    /// [c]
    ///  +-[a]
    ///     +-[t] ;
    /// ```
    ///
    /// Terminal nodes end with ` ;`. Meant for debugging small dictionaries;
    /// the output grows with the node count.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for &(_, child) in self.node(Self::ROOT).children() {
            self.render_node(child, 0, &mut out);
        }
        out
    }

    fn render_node(&self, id: NodeId, depth: usize, out: &mut String) {
        let node = self.node(id);
        if depth > 0 {
            out.push_str(&"   ".repeat(depth - 1));
            out.push_str(" +-");
        }
        let _ = write!(out, "[{}]", node.character());
        if node.is_terminal() {
            out.push_str(" ;");
        }
        out.push('\n');

        for &(_, child) in node.children() {
            self.render_node(child, depth + 1, out);
        }
    }
}
