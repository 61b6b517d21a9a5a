//! Box-drawing folder tree of planned files.

use std::path::{Component, Path, PathBuf};

use crate::existence::FileExistenceMap;

/// Marker appended to files that already exist on disk.
pub const UPDATE_MARKER: &str = " [UPDATE]";

#[derive(Debug, Default)]
struct Node {
    label: String,
    children: Vec<Node>,
}

impl Node {
    fn child(&mut self, label: &str) -> &mut Node {
        let pos = match self.children.iter().position(|c| c.label == label) {
            Some(pos) => pos,
            None => {
                self.children.push(Node {
                    label: label.to_string(),
                    children: Vec::new(),
                });
                self.children.len() - 1
            }
        };
        &mut self.children[pos]
    }
}

/// Renders `paths` as a tree rooted at `.`, in first-seen order.
///
/// When `existence` is given, files it marks as present get ` [UPDATE]`.
pub fn folder_tree(paths: &[PathBuf], existence: Option<&FileExistenceMap>) -> String {
    let mut root = Node {
        label: ".".to_string(),
        children: Vec::new(),
    };
    for path in paths {
        let parts = path_parts(path);
        let Some((file, dirs)) = parts.split_last() else {
            continue;
        };
        let mut node = &mut root;
        for dir in dirs {
            node = node.child(dir);
        }
        let exists = existence.map(|m| m.exists(path)).unwrap_or(false);
        let label = if exists {
            format!("{file}{UPDATE_MARKER}")
        } else {
            file.clone()
        };
        node.child(&label);
    }

    let mut out = format!("{}\n", root.label);
    render_children(&root.children, "", &mut out);
    out
}

fn path_parts(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => None,
        })
        .collect()
}

fn render_children(nodes: &[Node], prefix: &str, out: &mut String) {
    for (ix, node) in nodes.iter().enumerate() {
        let last = ix + 1 == nodes.len();
        out.push_str(prefix);
        out.push_str(if last { "└─" } else { "├─" });
        out.push_str(if node.children.is_empty() { "─ " } else { "┬ " });
        out.push_str(&node.label);
        out.push('\n');
        let child_prefix = format!("{prefix}{} ", if last { ' ' } else { '│' });
        render_children(&node.children, &child_prefix, out);
    }
}
