//! Filesystem commands
//!
//! Thin wrappers over the session's path-resolving operations. Each turns a
//! failure into `<command>: <path>: <reason>` on stderr.

use glob::Pattern;

use crate::fs::path::basename;
use crate::fs::{FsError, LsOptions, Node};
use crate::session::Session;

use super::registry::{FindQuery, NodeKind};
use super::types::{CommandResult, Effect};

/// Convert a unit result into an empty success or a formatted failure.
fn done(command: &str, result: Result<(), FsError>) -> CommandResult {
    match result {
        Ok(()) => CommandResult::empty(),
        Err(e) => CommandResult::fs_error(command, &e),
    }
}

fn output(command: &str, result: Result<String, FsError>) -> CommandResult {
    match result {
        Ok(text) => CommandResult::success(text),
        Err(e) => CommandResult::fs_error(command, &e),
    }
}

pub fn pwd(session: &Session) -> CommandResult {
    CommandResult::success(session.pwd())
}

/// `cd` with no argument goes to `$HOME`.
pub fn cd(session: &mut Session, path: Option<&str>) -> CommandResult {
    done("cd", session.cd(path.unwrap_or("~")))
}

pub fn ls(session: &Session, path: &str, options: LsOptions) -> CommandResult {
    output("ls", session.ls(path, options))
}

pub fn cat(session: &Session, path: &str) -> CommandResult {
    output("cat", session.cat(path))
}

pub fn mkdir(session: &mut Session, path: &str) -> CommandResult {
    done("mkdir", session.mkdir(path))
}

pub fn touch(session: &mut Session, path: &str) -> CommandResult {
    done("touch", session.touch(path))
}

pub fn rm(session: &mut Session, path: &str) -> CommandResult {
    done("rm", session.rm(path))
}

pub fn rmdir(session: &mut Session, path: &str) -> CommandResult {
    done("rmdir", session.rmdir(path))
}

pub fn cp(session: &mut Session, src: &str, dest: &str) -> CommandResult {
    done("cp", session.cp(src, dest))
}

pub fn mv(session: &mut Session, src: &str, dest: &str) -> CommandResult {
    done("mv", session.mv(src, dest))
}

pub fn head(session: &Session, path: &str, lines: usize) -> CommandResult {
    output(
        "head",
        session
            .cat(path)
            .map(|content| content.split('\n').take(lines).collect::<Vec<_>>().join("\n")),
    )
}

pub fn tail(session: &Session, path: &str, lines: usize) -> CommandResult {
    output(
        "tail",
        session.cat(path).map(|content| {
            let all: Vec<&str> = content.split('\n').collect();
            all[all.len().saturating_sub(lines)..].join("\n")
        }),
    )
}

/// `  <lines>   <words>  <chars> <file>`
pub fn wc(session: &Session, path: &str) -> CommandResult {
    output(
        "wc",
        session.cat(path).map(|content| {
            let lines = content.split('\n').count();
            let words = content.split_whitespace().count();
            let chars = content.chars().count();
            format!("  {}   {}  {} {}", lines, words, chars, path)
        }),
    )
}

/// Case-insensitive substring match; exit code 1 when nothing matched.
pub fn grep(session: &Session, pattern: &str, path: &str) -> CommandResult {
    let content = match session.cat(path) {
        Ok(c) => c,
        Err(e) => return CommandResult::fs_error("grep", &e),
    };
    let needle = pattern.to_lowercase();
    let matches: Vec<&str> = content
        .split('\n')
        .filter(|line| line.to_lowercase().contains(&needle))
        .collect();
    if matches.is_empty() {
        return CommandResult::with_exit_code(String::new(), String::new(), 1);
    }
    CommandResult::success(matches.join("\n"))
}

pub fn find(session: &Session, query: &FindQuery) -> CommandResult {
    let pattern = match query.name.as_deref().map(Pattern::new).transpose() {
        Ok(p) => p,
        Err(e) => return CommandResult::error(format!("find: invalid pattern: {}", e.msg)),
    };

    let resolved = session.resolve_path(&query.start);
    let Some(node) = session.get_node(&query.start) else {
        return CommandResult::fs_error("find", &FsError::NotFound { path: query.start.clone() });
    };

    let matches = |name: &str, node: &Node| {
        let kind_ok = match query.kind {
            Some(NodeKind::File) => node.is_file(),
            Some(NodeKind::Directory) => node.is_directory(),
            None => true,
        };
        kind_ok && pattern.as_ref().map_or(true, |p| p.matches(name))
    };

    let mut found = Vec::new();
    let start_name = match basename(&resolved) {
        "" => "/",
        name => name,
    };
    if matches(start_name, node) {
        found.push(query.start.clone());
    }
    walk(node, query.start.trim_end_matches('/'), &matches, &mut found);
    CommandResult::success(found.join("\n"))
}

/// Pre-order walk, children in name order.
fn walk(node: &Node, prefix: &str, matches: &dyn Fn(&str, &Node) -> bool, found: &mut Vec<String>) {
    let Some(children) = node.children() else {
        return;
    };
    for (name, child) in children {
        let path = format!("{}/{}", prefix, name);
        if matches(name, child) {
            found.push(path.clone());
        }
        walk(child, &path, matches, found);
    }
}

/// Current directory followed by its subtree with box-drawing connectors.
pub fn tree(session: &Session) -> CommandResult {
    let cwd = session.pwd();
    let mut lines = vec![cwd.to_string()];
    if let Some(node) = session.get_node(cwd) {
        draw_tree(node, "", &mut lines);
    }
    CommandResult::success(lines.join("\n"))
}

fn draw_tree(node: &Node, prefix: &str, lines: &mut Vec<String>) {
    let Some(children) = node.children() else {
        return;
    };
    let count = children.len();
    for (i, (name, child)) in children.iter().enumerate() {
        let last = i + 1 == count;
        lines.push(format!("{}{}{}", prefix, if last { "└── " } else { "├── " }, name));
        if child.is_directory() {
            let nested = format!("{}{}", prefix, if last { "    " } else { "│   " });
            draw_tree(child, &nested, lines);
        }
    }
}

/// Open the editor on a file. A missing file opens empty.
pub fn nano(session: &Session, path: &str) -> CommandResult {
    let content = match session.get_node(path) {
        None => String::new(),
        Some(Node::File { content }) => content.clone(),
        Some(Node::Directory { .. }) => {
            return CommandResult::fs_error("nano", &FsError::IsADirectory { path: path.to_string() })
        }
    };
    CommandResult::empty().with_effect(Effect::OpenEditor {
        path: session.resolve_path(path),
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        let mut s = Session::default();
        s.write_file("/tmp/poem.txt", "one\nTwo\nthree\nfour").unwrap();
        s
    }

    #[test]
    fn test_cd_defaults_home() {
        let mut s = session();
        s.cd("/tmp").unwrap();
        assert!(cd(&mut s, None).is_success());
        assert_eq!(s.pwd(), "/home/shibam");
    }

    #[test]
    fn test_cd_follows_home_variable() {
        let mut s = session();
        s.set_env("HOME", "/tmp");
        assert!(cd(&mut s, None).is_success());
        assert_eq!(s.pwd(), "/tmp");
        s.cd("/etc").unwrap();
        assert!(cd(&mut s, Some("~")).is_success());
        assert_eq!(s.pwd(), "/tmp");

        s.set_env("HOME", "");
        assert!(cd(&mut s, None).is_success());
        assert_eq!(s.pwd(), "/home/shibam");
    }

    #[test]
    fn test_error_prefix() {
        let mut s = session();
        let result = cd(&mut s, Some("nowhere"));
        assert_eq!(result.stderr, "cd: nowhere: No such file or directory");
        assert_eq!(result.exit_code, 1);

        let result = cat(&s, "/tmp");
        assert_eq!(result.stderr, "cat: /tmp: Is a directory");

        let result = rmdir(&mut s, "/tmp");
        assert_eq!(result.stderr, "rmdir: /tmp: Directory not empty");

        let result = mkdir(&mut s, "/tmp");
        assert_eq!(result.stderr, "mkdir: /tmp: File exists");
    }

    #[test]
    fn test_head_tail() {
        let s = session();
        assert_eq!(head(&s, "/tmp/poem.txt", 2).stdout, "one\nTwo");
        assert_eq!(tail(&s, "/tmp/poem.txt", 2).stdout, "three\nfour");
        assert_eq!(tail(&s, "/tmp/poem.txt", 50).stdout, "one\nTwo\nthree\nfour");
        assert_eq!(head(&s, "/nope", 2).stderr, "head: /nope: No such file or directory");
    }

    #[test]
    fn test_wc_format() {
        let s = session();
        assert_eq!(wc(&s, "/tmp/poem.txt").stdout, "  4   4  18 /tmp/poem.txt");
    }

    #[test]
    fn test_grep_case_insensitive() {
        let s = session();
        assert_eq!(grep(&s, "t", "/tmp/poem.txt").stdout, "Two\nthree");
        let result = grep(&s, "zzz", "/tmp/poem.txt");
        assert!(result.stdout.is_empty());
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn test_find_by_name_and_type() {
        let mut s = session();
        s.mkdir("/tmp/sub").unwrap();
        s.touch("/tmp/sub/notes.txt").unwrap();

        let query = FindQuery { start: "/tmp".to_string(), name: Some("*.txt".to_string()), kind: None };
        assert_eq!(find(&s, &query).stdout, "/tmp/poem.txt\n/tmp/sub/notes.txt");

        let query = FindQuery { start: "/tmp".to_string(), name: None, kind: Some(NodeKind::Directory) };
        assert_eq!(find(&s, &query).stdout, "/tmp\n/tmp/sub");

        let query = FindQuery { start: "/tmp/".to_string(), name: None, kind: None };
        assert_eq!(find(&s, &query).stdout, "/tmp/\n/tmp/poem.txt\n/tmp/sub\n/tmp/sub/notes.txt");
    }

    #[test]
    fn test_find_relative_start() {
        let s = session();
        let query = FindQuery { start: ".".to_string(), name: Some("*.md".to_string()), kind: None };
        assert_eq!(find(&s, &query).stdout, "./README.md");

        let query = FindQuery { start: "ghost".to_string(), name: None, kind: None };
        assert_eq!(find(&s, &query).stderr, "find: ghost: No such file or directory");
    }

    #[test]
    fn test_tree_connectors() {
        let mut s = session();
        s.mkdir("/tmp/sub").unwrap();
        s.touch("/tmp/sub/inner").unwrap();
        s.touch("/tmp/zeta").unwrap();
        s.cd("/tmp").unwrap();
        assert_eq!(
            tree(&s).stdout,
            "/tmp\n├── poem.txt\n├── sub\n│   └── inner\n└── zeta"
        );
    }

    #[test]
    fn test_nano_effect() {
        let s = session();
        let result = nano(&s, "/tmp/poem.txt");
        assert_eq!(
            result.effect,
            Some(Effect::OpenEditor {
                path: "/tmp/poem.txt".to_string(),
                content: "one\nTwo\nthree\nfour".to_string()
            })
        );

        let result = nano(&s, "fresh.txt");
        assert_eq!(
            result.effect,
            Some(Effect::OpenEditor { path: "/home/shibam/fresh.txt".to_string(), content: String::new() })
        );

        assert_eq!(nano(&s, "/tmp").stderr, "nano: /tmp: Is a directory");
    }
}
