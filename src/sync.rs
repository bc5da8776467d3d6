//! Directory synchronization between package subtrees and an install root.
//!
//! Two replacement policies cover every managed category: a clean sync that
//! rebuilds the destination subtree from scratch, and a filtered sync for
//! the one directory shared with entries the tool does not own. Content is
//! copied byte for byte except for documentation files, which get the path
//! token rewritten on the way through.
use anyhow::{anyhow, Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const DOC_EXTENSION: &str = ".md";

/// Literal search/replace pairs applied to documentation content.
pub type Replacements = BTreeMap<String, String>;

/// A directory entry, read up front so copy and count logic can match on
/// the shape instead of re-inspecting metadata at each use site.
#[derive(Debug)]
pub enum TreeNode {
    Dir { name: String, children: Vec<TreeNode> },
    File { name: String },
}

/// Read a directory into a sorted tree. A missing root reads as empty.
pub fn read_tree(root: &Path) -> Result<Vec<TreeNode>> {
    if !root.exists() {
        return Ok(Vec::new());
    }
    let mut entries = fs::read_dir(root)
        .with_context(|| format!("read {}", root.display()))?
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("read {}", root.display()))?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut nodes = Vec::new();
    for entry in entries {
        let name = entry_name(&entry)?;
        let path = entry.path();
        if path.is_dir() {
            let children = read_tree(&path)?;
            nodes.push(TreeNode::Dir { name, children });
        } else {
            nodes.push(TreeNode::File { name });
        }
    }
    Ok(nodes)
}

fn entry_name(entry: &fs::DirEntry) -> Result<String> {
    entry
        .file_name()
        .into_string()
        .map_err(|name| anyhow!("entry name is not valid UTF-8: {name:?}"))
}

/// Count files (not directories) under a path; 0 when the path is missing.
pub fn count_files(root: &Path) -> Result<usize> {
    Ok(count_nodes(&read_tree(root)?))
}

fn count_nodes(nodes: &[TreeNode]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            TreeNode::Dir { children, .. } => count_nodes(children),
            TreeNode::File { .. } => 1,
        })
        .sum()
}

/// Count top-level files in `source` whose name satisfies the predicate.
pub fn filtered_count(source: &Path, predicate: impl Fn(&str) -> bool) -> Result<usize> {
    let count = read_tree(source)?
        .iter()
        .filter(|node| matches!(node, TreeNode::File { name } if predicate(name)))
        .count();
    Ok(count)
}

/// Rebuild `dest` from `source`, returning the number of files written.
///
/// The destination subtree is removed first. A missing source is "nothing
/// to do": the count is zero and the destination is left alone.
pub fn clean_sync(source: &Path, dest: &Path, replacements: &Replacements) -> Result<usize> {
    if !source.exists() {
        return Ok(0);
    }
    let tree = read_tree(source)?;
    if dest.exists() {
        tracing::debug!(path = %dest.display(), "replacing destination subtree");
        fs::remove_dir_all(dest).with_context(|| format!("remove {}", dest.display()))?;
    }
    fs::create_dir_all(dest).with_context(|| format!("create {}", dest.display()))?;
    copy_nodes(&tree, source, dest, replacements)
}

/// Replace only the entries this tool owns inside a shared directory.
///
/// Top-level destination files matching the predicate are removed, matching
/// top-level source files are copied in, and everything else is preserved
/// untouched across any number of runs.
pub fn filtered_sync(
    source: &Path,
    dest: &Path,
    predicate: impl Fn(&str) -> bool,
    replacements: &Replacements,
) -> Result<usize> {
    if !source.exists() {
        return Ok(0);
    }
    fs::create_dir_all(dest).with_context(|| format!("create {}", dest.display()))?;

    for node in read_tree(dest)? {
        if let TreeNode::File { name } = node {
            if predicate(&name) {
                let stale = dest.join(&name);
                tracing::debug!(path = %stale.display(), "removing managed entry");
                fs::remove_file(&stale).with_context(|| format!("remove {}", stale.display()))?;
            }
        }
    }

    let mut copied = 0;
    for node in read_tree(source)? {
        if let TreeNode::File { name } = node {
            if predicate(&name) {
                copy_file(&source.join(&name), &dest.join(&name), &name, replacements)?;
                copied += 1;
            }
        }
    }
    Ok(copied)
}

fn copy_nodes(
    nodes: &[TreeNode],
    source: &Path,
    dest: &Path,
    replacements: &Replacements,
) -> Result<usize> {
    let mut copied = 0;
    for node in nodes {
        match node {
            TreeNode::Dir { name, children } => {
                let sub_dest = dest.join(name);
                fs::create_dir_all(&sub_dest)
                    .with_context(|| format!("create {}", sub_dest.display()))?;
                copied += copy_nodes(children, &source.join(name), &sub_dest, replacements)?;
            }
            TreeNode::File { name } => {
                copy_file(&source.join(name), &dest.join(name), name, replacements)?;
                copied += 1;
            }
        }
    }
    Ok(copied)
}

fn copy_file(source: &Path, dest: &Path, name: &str, replacements: &Replacements) -> Result<()> {
    if is_doc_file(name) {
        let content =
            fs::read_to_string(source).with_context(|| format!("read {}", source.display()))?;
        let rewritten = apply_replacements(&content, replacements);
        fs::write(dest, rewritten).with_context(|| format!("write {}", dest.display()))?;
    } else {
        fs::copy(source, dest)
            .with_context(|| format!("copy {} to {}", source.display(), dest.display()))?;
    }
    Ok(())
}

fn is_doc_file(name: &str) -> bool {
    name.ends_with(DOC_EXTENSION)
}

fn apply_replacements(content: &str, replacements: &Replacements) -> String {
    let mut rewritten = content.to_string();
    for (search, replace) in replacements {
        rewritten = rewritten.replace(search.as_str(), replace.as_str());
    }
    rewritten
}
