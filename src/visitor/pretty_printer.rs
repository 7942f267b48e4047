use std::io::{self, Write};

use crate::chars::KeyChar;
use crate::nodes::Node;
use crate::TreeSet;

/// Settings which customize the output of the [`DotPrinter`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DotPrinterSettings {
    /// Include each inner node's full path string in its label, in
    /// addition to the compare index.
    pub display_path_strings: bool,
}

/// Prints the tree structure in "dot" notation.
///
/// See ['DOT Language | Graphviz'](https://graphviz.org/doc/info/lang.html)
/// for information about syntax and examples of the language.
pub struct DotPrinter<O: Write> {
    output: O,
    next_id: usize,
    settings: DotPrinterSettings,
}

impl<O: Write> DotPrinter<O> {
    /// Write the dot-format of the given tree to the given output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use patset::{
    ///     visitor::{DotPrinter, DotPrinterSettings},
    ///     TreeSet,
    /// };
    ///
    /// let mut set = TreeSet::<u8>::new();
    /// set.insert("cat").unwrap();
    /// set.insert("car").unwrap();
    ///
    /// let mut out = Vec::new();
    /// DotPrinter::print_tree(&mut out, &set, DotPrinterSettings::default()).unwrap();
    /// assert!(out.starts_with(b"strict digraph"));
    /// ```
    pub fn print_tree<C: KeyChar>(
        output: O,
        set: &TreeSet<C>,
        settings: DotPrinterSettings,
    ) -> io::Result<()> {
        let mut printer = DotPrinter {
            output,
            next_id: 0,
            settings,
        };

        printer.output_prelude()?;
        if let Some(root) = set.root.as_ref() {
            printer.print_subtree(root)?;
        }
        printer.output_epilogue()
    }

    fn output_prelude(&mut self) -> io::Result<()> {
        writeln!(self.output, "strict digraph G {{")?;
        writeln!(self.output, "node [shape=record]")
    }

    fn output_epilogue(&mut self) -> io::Result<()> {
        writeln!(self.output, "}}")
    }

    fn get_id(&mut self) -> usize {
        let new_id = self.next_id;
        self.next_id += 1;
        new_id
    }

    // The trie can be as deep as its longest key, so the traversal keeps
    // an explicit stack instead of recursing.
    fn print_subtree<C: KeyChar>(&mut self, root: &Node<C>) -> io::Result<()> {
        let mut stack: Vec<(&Node<C>, Option<(usize, C)>)> = vec![(root, None)];
        while let Some((node, parent)) = stack.pop() {
            let id = self.write_node(node)?;
            if let Some((parent_id, edge)) = parent {
                writeln!(self.output, "n{parent_id} -> n{id} [label=\"{edge:?}\"]")?;
            }
            if let Node::Inner(inner) = node {
                for (edge, child) in inner.children.iter().rev() {
                    stack.push((child, Some((id, *edge))));
                }
            }
        }
        Ok(())
    }

    fn write_node<C: KeyChar>(&mut self, node: &Node<C>) -> io::Result<usize> {
        let id = self.get_id();
        match node {
            Node::Leaf(leaf) => {
                writeln!(self.output, "n{id} [label=\"{{leaf | {:?}}}\"]", leaf.key)?;
            }
            Node::Inner(inner) => {
                if self.settings.display_path_strings {
                    writeln!(
                        self.output,
                        "n{id} [label=\"{{inner | {} | {:?}}}\"]",
                        inner.compare_index, inner.path
                    )?;
                } else {
                    writeln!(
                        self.output,
                        "n{id} [label=\"{{inner | {}}}\"]",
                        inner.compare_index
                    )?;
                }
            }
        }
        Ok(id)
    }
}
