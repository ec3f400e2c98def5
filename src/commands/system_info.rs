//! Static and computed text commands
//!
//! Portfolio blocks, system mockups and the small jokes. Anything that
//! depends on the clock has a pure `render_*` form taking the time as input.

use std::time::Duration;

use chrono::{Datelike, Local, NaiveDate, NaiveTime, Timelike};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::content::{self, Section};
use crate::session::Session;

use super::registry::LinkTarget;
use super::types::{CommandResult, Effect};

const SHELL_BUILTINS: &[&str] = &["cd", "echo", "export", "help", "history"];
const RELEASE: &str = "2026.01";

pub fn help() -> CommandResult {
    CommandResult::success(content::HELP)
}

pub fn banner() -> CommandResult {
    CommandResult::success(content::BANNER)
}

pub fn section(section: &Section) -> CommandResult {
    CommandResult::success(section.render())
}

/// `user@host`, a rule, then the profile fields.
pub fn neofetch(session: &Session) -> CommandResult {
    let header = format!("{}@{}", session.user(), session.prompt_host());
    let mut lines = vec![header.clone(), "-".repeat(header.chars().count())];
    lines.extend(
        content::NEOFETCH_FIELDS
            .iter()
            .map(|(label, value)| format!("{}: {}", label, value)),
    );
    CommandResult::success(lines.join("\n"))
}

pub fn date() -> CommandResult {
    CommandResult::success(Local::now().format("%A, %B %-d, %Y at %I:%M:%S %p %Z").to_string())
}

pub fn cal() -> CommandResult {
    CommandResult::success(render_calendar(Local::now().date_naive()))
}

/// Month grid for `today`'s month, Sunday first, with today bracketed.
pub fn render_calendar(today: NaiveDate) -> String {
    let first = today.with_day(1).unwrap_or(today);
    let first_weekday = first.weekday().num_days_from_sunday();
    let days = days_in_month(first);

    let mut cal = format!("     {} {}\nSu Mo Tu We Th Fr Sa\n", first.format("%B"), first.year());
    let mut line = "   ".repeat(first_weekday as usize);
    for day in 1..=days {
        if day == today.day() {
            line.push_str(&format!("[{:>2}]", day));
        } else {
            line.push_str(&format!("{:>2} ", day));
        }
        if (first_weekday + day) % 7 == 0 {
            cal.push_str(line.trim_end());
            cal.push('\n');
            line.clear();
        }
    }
    cal.push_str(&line);
    cal.trim_end_matches('\n').to_string()
}

fn days_in_month(first: NaiveDate) -> u32 {
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    next.map(|n| n.signed_duration_since(first).num_days() as u32)
        .unwrap_or(31)
}

pub fn uptime(session: &Session) -> CommandResult {
    CommandResult::success(render_uptime(Local::now().time(), session.uptime()))
}

/// ` HH:MM:SS up H:MM, 1 user, load average: ...`
pub fn render_uptime(now: NaiveTime, elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!(
        " {} up {}:{:02}, 1 user, load average: 0.00, 0.01, 0.05",
        clock(now),
        secs / 3600,
        (secs % 3600) / 60
    )
}

fn clock(time: NaiveTime) -> String {
    format!("{:02}:{:02}:{:02}", time.hour(), time.minute(), time.second())
}

pub fn top(session: &Session) -> CommandResult {
    CommandResult::success(render_top(Local::now().time(), session.uptime(), session.user()))
}

pub fn render_top(now: NaiveTime, elapsed: Duration, user: &str) -> String {
    let processes = [
        (1, 64000, 32000, "termfolio"),
        (2, 32000, 16000, "vfs"),
        (3, 16000, 8000, "content"),
        (4, 8000, 4000, "history"),
        (5, 4000, 2000, "cmatrix"),
    ];
    let mut lines = vec![
        format!("top - {} up 0:{}:00, 1 user", clock(now), elapsed.as_secs() / 60),
        "Tasks:   5 total,   1 running,   4 sleeping".to_string(),
        "%Cpu(s):  2.3 us,  1.0 sy,  0.0 ni, 96.7 id".to_string(),
        "MiB Mem :  16384.0 total,  8192.0 free,  4096.0 used".to_string(),
        "MiB Swap:   2048.0 total,  2048.0 free,     0.0 used".to_string(),
        String::new(),
        "  PID USER      PR  NI    VIRT    RES  COMMAND".to_string(),
    ];
    lines.extend(
        processes
            .iter()
            .map(|(pid, virt, res, cmd)| format!("{:>5} {:<9} 20   0 {:>7} {:>6}  {}", pid, user, virt, res, cmd)),
    );
    lines.join("\n")
}

/// `-a` (or nothing) prints everything; `-r` the release; `-s` the name.
pub fn uname(session: &Session, flags: &str) -> CommandResult {
    let text = if flags.is_empty() || flags.contains('a') {
        format!(
            "PortfolioOS {} {} #1 SMP Rust x86_64 Terminal",
            session.hostname(),
            RELEASE
        )
    } else if flags.contains('r') {
        RELEASE.to_string()
    } else if flags.contains('s') {
        "PortfolioOS".to_string()
    } else {
        String::new()
    };
    CommandResult::success(text)
}

pub fn which(name: &str) -> CommandResult {
    if SHELL_BUILTINS.contains(&name) {
        CommandResult::success(format!("{}: shell built-in command", name))
    } else {
        CommandResult::success(format!("/usr/bin/{}", name))
    }
}

pub fn man(page: Option<&str>) -> CommandResult {
    match page {
        None => CommandResult::success("What manual page do you want?\nFor example, try 'man ls'"),
        Some(name) => match content::man_page(name) {
            Some(text) => CommandResult::success(text),
            None => CommandResult::error(format!("No manual entry for {}", name)),
        },
    }
}

pub fn ping(host: &str) -> CommandResult {
    CommandResult::success(format!(
        "PING {host} (127.0.0.1): 56 data bytes
64 bytes from 127.0.0.1: icmp_seq=0 ttl=64 time=0.042 ms
64 bytes from 127.0.0.1: icmp_seq=1 ttl=64 time=0.038 ms
64 bytes from 127.0.0.1: icmp_seq=2 ttl=64 time=0.041 ms
--- {host} ping statistics ---
3 packets transmitted, 3 received, 0% packet loss"
    ))
}

pub fn cowsay(message: &str) -> CommandResult {
    let width = message.chars().count() + 2;
    CommandResult::success(format!(
        " {}\n< {} >\n {}\n{}",
        "_".repeat(width),
        message,
        "-".repeat(width),
        r"        \   ^__^
         \  (oo)\_______
            (__)\       )\/\
                ||----w |
                ||     ||"
    ))
}

pub fn fortune() -> CommandResult {
    fortune_with(&mut rand::thread_rng())
}

pub fn fortune_with<R: Rng + ?Sized>(rng: &mut R) -> CommandResult {
    let text = content::FORTUNES.choose(rng).copied().unwrap_or_default();
    CommandResult::success(format!("\"{}\"", text))
}

pub fn sudo(args: &[String]) -> CommandResult {
    if args.join(" ").contains("hire") {
        CommandResult::success(content::SUDO_HIRE)
    } else {
        CommandResult::success(content::SUDO)
    }
}

pub fn whoami(session: &Session) -> CommandResult {
    CommandResult::success(session.user())
}

pub fn hostname(session: &Session) -> CommandResult {
    CommandResult::success(session.hostname())
}

pub fn id(session: &Session) -> CommandResult {
    let user = session.user();
    CommandResult::success(format!(
        "uid=1000({user}) gid=1000({user}) groups=1000({user}),27(sudo)"
    ))
}

pub fn open(session: &Session, target: LinkTarget) -> CommandResult {
    let links = &session.config().links;
    let (message, url) = match target {
        LinkTarget::Resume => ("Opening resume...".to_string(), links.resume.clone()),
        LinkTarget::Github => (format!("Opening {}...", links.github), links.github.clone()),
        LinkTarget::Linkedin => (format!("Opening {}...", links.linkedin), links.linkedin.clone()),
    };
    CommandResult::success(message).with_effect(Effect::OpenLink { url })
}

pub fn clear() -> CommandResult {
    CommandResult::empty().with_effect(Effect::ClearScreen)
}

pub fn reboot() -> CommandResult {
    CommandResult::success("Rebooting...").with_effect(Effect::Reboot)
}

pub fn exit() -> CommandResult {
    CommandResult::success("logout").with_effect(Effect::Exit)
}
