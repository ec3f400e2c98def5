//! Command registry
//!
//! Maps a command name and its raw arguments onto a [`Command`] variant that
//! carries validated arguments. Anything that can be rejected without
//! touching the session (missing operands, bad flags) is rejected here.

use crate::content::{self, Section};
use crate::fs::LsOptions;

use super::types::CommandError;

/// Names offered by tab completion.
pub const KNOWN_COMMANDS: &[&str] = &[
    // Navigation & Files
    "cd", "ls", "pwd", "cat", "tree", "head", "tail",
    // File Management
    "mkdir", "touch", "rm", "rmdir", "cp", "mv", "nano",
    // System Info
    "neofetch", "top", "htop", "ps", "df", "free", "uname", "uptime", "cal", "date",
    // Portfolio
    "about", "skills", "projects", "education", "experience", "contact", "resume",
    // Utilities
    "help", "history", "clear", "echo", "env", "export", "man", "grep", "find", "wc", "which",
    // Fun
    "matrix", "cowsay", "fortune", "coffee",
    // Social
    "github", "linkedin", "email",
    // Other
    "whoami", "id", "hostname", "ping", "version", "banner", "reboot",
];

const DEFAULT_LINES: usize = 10;

/// Output redirection for `echo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Redirect {
    /// `> file`
    Write(String),
    /// `>> file`
    Append(String),
}

/// Node type filter for `find -type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindQuery {
    pub start: String,
    pub name: Option<String>,
    pub kind: Option<NodeKind>,
}

/// Where an `OpenLink` command points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    Resume,
    Github,
    Linkedin,
}

/// A parsed command.
#[derive(Debug, Clone)]
pub enum Command {
    // Filesystem
    Pwd,
    Cd { path: Option<String> },
    Ls { options: LsOptions, path: String },
    Cat { path: String },
    Mkdir { path: String },
    Touch { path: String },
    Rm { path: String },
    Rmdir { path: String },
    Cp { src: String, dest: String },
    Mv { src: String, dest: String },
    Head { path: String, lines: usize },
    Tail { path: String, lines: usize },
    Wc { path: String },
    Grep { pattern: String, path: String },
    Find(FindQuery),
    Tree,
    Nano { path: String },

    // Environment and history
    Echo { words: Vec<String>, redirect: Option<Redirect> },
    Env,
    Export { assignment: Option<String> },
    History,

    // Static and computed text
    Help,
    Banner,
    Section(&'static Section),
    Neofetch,
    Date,
    Cal,
    Uptime,
    Top,
    Uname { flags: String },
    Which { name: String },
    Man { page: Option<String> },
    Ping { host: String },
    Cowsay { message: Option<String> },
    Fortune,
    Sudo { args: Vec<String> },
    Whoami,
    Hostname,
    Id,
    Canned(&'static str),

    // Presentation effects
    Clear,
    Open(LinkTarget),
    Reboot,
    Exit,
}

impl Command {
    /// Build a command from its lowercased name and raw arguments.
    ///
    /// An empty argument (`""`) counts as absent wherever an operand is
    /// required.
    pub fn parse(name: &str, args: &[String]) -> Result<Command, CommandError> {
        let first = args.first().filter(|a| !a.is_empty()).cloned();
        let operand = || first.clone().ok_or_else(|| CommandError::missing_operand(name));

        let command = match name {
            "pwd" => Command::Pwd,
            "cd" => Command::Cd { path: first.clone() },
            "ls" => parse_ls(args),
            "cat" => Command::Cat { path: operand()? },
            "mkdir" => Command::Mkdir { path: operand()? },
            "touch" => Command::Touch { path: operand()? },
            "rm" => Command::Rm { path: operand()? },
            "rmdir" => Command::Rmdir { path: operand()? },
            "cp" | "mv" => {
                let (src, dest) = match args {
                    [src, dest, ..] if !src.is_empty() && !dest.is_empty() => {
                        (src.clone(), dest.clone())
                    }
                    _ => return Err(CommandError::missing_operand(name)),
                };
                if name == "cp" {
                    Command::Cp { src, dest }
                } else {
                    Command::Mv { src, dest }
                }
            }
            "head" | "tail" => {
                let (path, lines) = parse_line_count(name, args)?;
                if name == "head" {
                    Command::Head { path, lines }
                } else {
                    Command::Tail { path, lines }
                }
            }
            "wc" => Command::Wc { path: operand()? },
            "grep" => match args {
                [pattern, path, ..] if !pattern.is_empty() && !path.is_empty() => {
                    Command::Grep { pattern: pattern.clone(), path: path.clone() }
                }
                _ => return Err(CommandError::usage("grep PATTERN FILE")),
            },
            "find" => Command::Find(parse_find(args)?),
            "tree" => Command::Tree,
            "nano" => Command::Nano {
                path: first.clone().ok_or_else(|| CommandError::usage("nano [filename]"))?,
            },

            "echo" => parse_echo(args)?,
            "env" => Command::Env,
            "export" => Command::Export { assignment: args.first().cloned() },
            "history" => Command::History,

            "help" => Command::Help,
            "banner" => Command::Banner,
            "about" => Command::Section(&content::ABOUT),
            "skills" => Command::Section(&content::SKILLS),
            "projects" => Command::Section(&content::PROJECTS),
            "education" => Command::Section(&content::EDUCATION),
            "experience" => Command::Section(&content::EXPERIENCE),
            "contact" => Command::Section(&content::CONTACT),
            "neofetch" | "screenfetch" | "fastfetch" => Command::Neofetch,
            "date" | "time" => Command::Date,
            "cal" => Command::Cal,
            "uptime" => Command::Uptime,
            "top" | "htop" => Command::Top,
            "uname" => Command::Uname { flags: args.concat() },
            "which" | "type" => Command::Which { name: operand()? },
            "man" => Command::Man { page: first.clone() },
            "ping" => Command::Ping {
                host: first.clone().ok_or_else(|| CommandError::usage("ping [hostname]"))?,
            },
            "cowsay" => Command::Cowsay {
                message: Some(args.join(" ")).filter(|m| !m.is_empty()),
            },
            "fortune" => Command::Fortune,
            "sudo" => Command::Sudo { args: args.to_vec() },
            "whoami" => Command::Whoami,
            "hostname" => Command::Hostname,
            "id" => Command::Id,

            "clear" => Command::Clear,
            "resume" | "cv" => Command::Open(LinkTarget::Resume),
            "github" => Command::Open(LinkTarget::Github),
            "linkedin" => Command::Open(LinkTarget::Linkedin),
            "reboot" => Command::Reboot,
            "exit" | "logout" => Command::Exit,

            other => match content::canned(other) {
                Some(text) => Command::Canned(text),
                None => return Err(CommandError::UnknownCommand { name: other.to_string() }),
            },
        };
        Ok(command)
    }
}

/// `ls [-a] [-l] [path]`: flag characters accumulate, the last non-flag
/// argument wins.
fn parse_ls(args: &[String]) -> Command {
    let mut flags = String::new();
    let mut path = None;
    for arg in args {
        match arg.strip_prefix('-') {
            Some(chars) => flags.push_str(chars),
            None => path = Some(arg.clone()),
        }
    }
    Command::Ls {
        options: LsOptions::from_flags(&flags),
        path: path.unwrap_or_else(|| ".".to_string()),
    }
}

/// `head|tail [-n N | -nN] FILE`
fn parse_line_count(name: &str, args: &[String]) -> Result<(String, usize), CommandError> {
    let usage = || CommandError::usage(&format!("{} [-n N] FILE", name));
    let mut lines = DEFAULT_LINES;
    let mut path = None;

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if arg == "-n" {
            i += 1;
            let count = args.get(i).ok_or_else(usage)?;
            lines = count.parse().map_err(|_| usage())?;
        } else if let Some(count) = arg.strip_prefix("-n") {
            lines = count.parse().map_err(|_| usage())?;
        } else if !arg.is_empty() {
            path = Some(arg.clone());
        }
        i += 1;
    }

    let path = path.ok_or_else(|| CommandError::missing_operand(name))?;
    Ok((path, lines))
}

/// `find [PATH] [-name GLOB] [-type f|d]`
fn parse_find(args: &[String]) -> Result<FindQuery, CommandError> {
    let usage = || CommandError::usage("find [path] [-name pattern] [-type f|d]");
    let mut query = FindQuery { start: ".".to_string(), name: None, kind: None };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-name" => query.name = Some(iter.next().ok_or_else(usage)?.clone()),
            "-type" => {
                query.kind = Some(match iter.next().map(String::as_str) {
                    Some("f") => NodeKind::File,
                    Some("d") => NodeKind::Directory,
                    _ => return Err(usage()),
                })
            }
            flag if flag.starts_with('-') => return Err(usage()),
            path => query.start = path.to_string(),
        }
    }
    Ok(query)
}

/// `echo WORDS... [> FILE | >> FILE]`
fn parse_echo(args: &[String]) -> Result<Command, CommandError> {
    let Some(pos) = args.iter().position(|a| a == ">" || a == ">>") else {
        return Ok(Command::Echo { words: args.to_vec(), redirect: None });
    };
    let target = args
        .get(pos + 1)
        .filter(|t| !t.is_empty())
        .cloned()
        .ok_or_else(|| CommandError::usage("echo [text] [> file]"))?;
    let redirect = if args[pos] == ">>" {
        Redirect::Append(target)
    } else {
        Redirect::Write(target)
    };
    Ok(Command::Echo { words: args[..pos].to_vec(), redirect: Some(redirect) })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn parse(name: &str, list: &[&str]) -> Result<Command, CommandError> {
        Command::parse(name, &args(list))
    }

    #[test]
    fn test_unknown_command() {
        let err = parse("frobnicate", &[]).unwrap_err();
        assert_eq!(err.to_string(), "frobnicate: command not found");
    }

    #[test]
    fn test_missing_operands() {
        for name in ["cat", "mkdir", "touch", "rm", "rmdir", "cp", "mv", "head", "tail", "wc", "which"] {
            let err = parse(name, &[]).unwrap_err();
            assert_eq!(err, CommandError::missing_operand(name), "{}", name);
        }
        assert_eq!(parse("cp", &["only"]).unwrap_err(), CommandError::missing_operand("cp"));
    }

    #[test]
    fn test_empty_operands_count_as_missing() {
        for name in ["cat", "mkdir", "touch", "rm", "rmdir", "wc", "which"] {
            let err = parse(name, &[""]).unwrap_err();
            assert_eq!(err, CommandError::missing_operand(name), "{}", name);
        }
        assert_eq!(parse("cp", &["", "/tmp"]).unwrap_err(), CommandError::missing_operand("cp"));
        assert_eq!(parse("mv", &["a", ""]).unwrap_err(), CommandError::missing_operand("mv"));
        assert_eq!(parse("head", &["-n", "2", ""]).unwrap_err(), CommandError::missing_operand("head"));
        assert_eq!(parse("nano", &[""]).unwrap_err(), CommandError::usage("nano [filename]"));
        assert_eq!(parse("ping", &[""]).unwrap_err(), CommandError::usage("ping [hostname]"));
        assert_eq!(parse("grep", &["x", ""]).unwrap_err(), CommandError::usage("grep PATTERN FILE"));
        assert!(parse("echo", &["hi", ">", ""]).is_err());
        assert!(matches!(parse("cd", &[""]).unwrap(), Command::Cd { path: None }));
    }

    #[test]
    fn test_ls_flags_accumulate() {
        match parse("ls", &["-l", "docs", "-a"]).unwrap() {
            Command::Ls { options, path } => {
                assert!(options.all && options.long);
                assert_eq!(path, "docs");
            }
            other => panic!("unexpected {:?}", other),
        }
        match parse("ls", &["a", "b"]).unwrap() {
            Command::Ls { path, .. } => assert_eq!(path, "b"),
            other => panic!("unexpected {:?}", other),
        }
        match parse("ls", &[]).unwrap() {
            Command::Ls { options, path } => {
                assert!(!options.all && !options.long);
                assert_eq!(path, ".");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_head_line_counts() {
        match parse("head", &["-n", "3", "f"]).unwrap() {
            Command::Head { path, lines } => assert_eq!((path.as_str(), lines), ("f", 3)),
            other => panic!("unexpected {:?}", other),
        }
        match parse("tail", &["-n5", "f"]).unwrap() {
            Command::Tail { lines, .. } => assert_eq!(lines, 5),
            other => panic!("unexpected {:?}", other),
        }
        match parse("tail", &["f"]).unwrap() {
            Command::Tail { lines, .. } => assert_eq!(lines, 10),
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(parse("head", &["-n", "x", "f"]), Err(CommandError::Usage { .. })));
    }

    #[test]
    fn test_find_query() {
        match parse("find", &["/home", "-name", "*.txt", "-type", "f"]).unwrap() {
            Command::Find(q) => {
                assert_eq!(q.start, "/home");
                assert_eq!(q.name.as_deref(), Some("*.txt"));
                assert_eq!(q.kind, Some(NodeKind::File));
            }
            other => panic!("unexpected {:?}", other),
        }
        match parse("find", &[]).unwrap() {
            Command::Find(q) => assert_eq!(q, FindQuery { start: ".".to_string(), name: None, kind: None }),
            other => panic!("unexpected {:?}", other),
        }
        assert!(parse("find", &["-type", "x"]).is_err());
        assert!(parse("find", &["-name"]).is_err());
    }

    #[test]
    fn test_echo_redirect() {
        match parse("echo", &["hi", "there", ">>", "log"]).unwrap() {
            Command::Echo { words, redirect } => {
                assert_eq!(words, vec!["hi", "there"]);
                assert_eq!(redirect, Some(Redirect::Append("log".to_string())));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(parse("echo", &["hi", ">"]).is_err());
    }

    #[test]
    fn test_aliases_and_canned() {
        assert!(matches!(parse("htop", &[]).unwrap(), Command::Top));
        assert!(matches!(parse("cv", &[]).unwrap(), Command::Open(LinkTarget::Resume)));
        assert!(matches!(parse("fastfetch", &[]).unwrap(), Command::Neofetch));
        assert!(matches!(parse("su", &[]).unwrap(), Command::Canned("su: Authentication failure")));
        assert!(matches!(parse("cowsay", &[]).unwrap(), Command::Cowsay { message: None }));
    }

    #[test]
    fn test_known_commands_all_parse() {
        for name in KNOWN_COMMANDS {
            let result = parse(name, &["x", "y"]);
            assert!(
                !matches!(result, Err(CommandError::UnknownCommand { .. })),
                "{} should be known",
                name
            );
        }
    }
}
