//! Indented tree rendering for AST nodes
//!
//! Each node prints one line `Name [l:c..l:c] details`; children are
//! connected with `|-` and `` `- `` markers and `| ` continuation bars.

use std::fmt::{self, Write};

use tokens::SourceLocation;

use crate::Print;

/// Accumulates the rendered tree
#[derive(Debug, Default)]
pub struct TreePrinter {
    output: String,
    /// One entry per nesting level, `true` if the node at that level is the last child
    indents: Vec<bool>,
}

impl TreePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print the line for a node
    pub fn node(&mut self, name: &str, location: Option<SourceLocation<'_>>, details: &[&dyn fmt::Display]) {
        self.print_indentation();
        self.output.push_str(name);
        if let Some(location) = location {
            let position = location.position();
            // Writing into a String cannot fail
            let _ = write!(
                self.output,
                " [{}:{}..{}:{}]",
                position.start_line, position.start_column, position.end_line, position.end_column
            );
        }
        for detail in details {
            let _ = write!(self.output, " {}", detail);
        }
        self.output.push('\n');
    }

    /// Print the children of the node printed last
    pub fn children(&mut self, children: &[&dyn Print]) {
        let count = children.len();
        for (index, child) in children.iter().enumerate() {
            self.indents.push(index + 1 == count);
            child.print(self);
            self.indents.pop();
        }
    }

    pub fn finish(self) -> String {
        self.output
    }

    fn print_indentation(&mut self) {
        let Some((&last, outer)) = self.indents.split_last() else {
            return;
        };
        for &is_last in outer {
            self.output.push_str(if is_last { "  " } else { "| " });
        }
        self.output.push_str(if last { "`-" } else { "|-" });
    }
}
