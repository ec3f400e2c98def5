//! Static content
//!
//! Pre-written text blocks for the portfolio commands and the seed dataset
//! the filesystem starts from. Blocks carry no leading or trailing newline.

pub const BANNER: &str = r"   _____ _     _ _
  / ____| |   (_) |
 | (___ | |__  _| |__   __ _ _ __ ___
  \___ \| '_ \| | '_ \ / _` | '_ ` _ \
  ____) | | | | | |_) | (_| | | | | | |
 |_____/|_| |_|_|_.__/ \__,_|_| |_| |_|";

pub const WELCOME: &str = "Welcome to my interactive terminal portfolio!
Type 'help' to see available commands.";

pub const HELP: &str = "Available Commands
══════════════════

Navigation & Files
  cd [path]     - Change directory
  ls [-la]      - List directory contents
  pwd           - Print working directory
  cat [file]    - View file contents
  tree          - Show directory tree
  find [path]   - Search for files

File Management
  mkdir [dir]   - Create directory
  touch [file]  - Create empty file
  rm [file]     - Remove file
  rmdir [dir]   - Remove directory
  cp [src] [dst]- Copy file
  mv [src] [dst]- Move/rename file
  nano [file]   - Text editor

System Info
  neofetch      - System information
  top           - Process viewer
  ps            - Process list
  df            - Disk usage
  free          - Memory usage
  uname [-a]    - System name
  uptime        - System uptime
  cal           - Calendar
  date          - Current date/time

Portfolio
  about         - About me
  skills        - Technical skills
  projects      - Featured projects
  education     - Education
  experience    - Experience
  contact       - Contact info
  resume        - Download CV

Utilities
  history       - Command history
  clear         - Clear screen
  echo [text]   - Print text (supports > and >>)
  env           - Environment vars
  export K=V    - Set environment var
  man [cmd]     - Manual pages
  grep [pat] [f]- Search in file
  wc [file]     - Count lines, words, chars

Shortcuts: Tab (autocomplete), ↑↓ (history), Ctrl+L (clear)";

/// A portfolio section: the file body plus the hint printed after it when
/// shown through its own command.
#[derive(Debug)]
pub struct Section {
    pub body: &'static str,
    pub hint: &'static str,
}

impl Section {
    pub fn render(&self) -> String {
        format!("{}\n\n{}", self.body, self.hint)
    }
}

pub const ABOUT: Section = Section {
    body: "About Me
────────
Hi! I'm Shibam Mandal, a developer and AI/ML enthusiast.

I love building things that live on the internet and exploring
artificial intelligence and machine learning.

Current Focus:
  - Deep Learning & Computer Vision
  - Full-Stack Web Development
  - Robotics & Automation
  - Open Source Contributions",
    hint: "Run 'skills' to see my technical expertise.",
};

pub const SKILLS: Section = Section {
    body: "Technical Skills
────────────────
Programming Languages:
  Python         ████████████████████░░ 90%
  JavaScript     ██████████████████░░░░ 85%
  C/C++          ████████████████░░░░░░ 75%
  TypeScript     ██████████████░░░░░░░░ 70%

AI/ML & Data Science:
  PyTorch        ████████████████████░░ 90%
  TensorFlow     ██████████████████░░░░ 85%
  Computer Vision ███████████████████░░░ 88%
  NLP            ████████████████░░░░░░ 75%

Web Technologies:
  React/Next.js  ██████████████████░░░░ 85%
  Node.js        ████████████████░░░░░░ 75%
  HTML/CSS       ████████████████████░░ 90%

Tools:
  Git/GitHub     ████████████████████░░ 90%
  Docker         ██████████████░░░░░░░░ 70%
  Linux          ██████████████████░░░░ 85%",
    hint: "Run 'projects' to see these skills in action.",
};

pub const PROJECTS: Section = Section {
    body: "Featured Projects
─────────────────

[1] LLM Neuro-Symbolic Planner
    Python | PyTorch | PDDL | Gazebo
    AI system that translates natural language to robot actions.

[2] Snake Detection System
    YOLOv9 | Computer Vision | Python
    Real-time camouflaged snake detection for edge deployment.

[3] Gesture Control Gaming
    OpenCV | MediaPipe | JavaScript
    Control games using hand gestures via webcam.

[4] WhatsApp Calendar Agent
    Chrome Extension | Google Calendar API
    Auto-extract meetings from WhatsApp to Google Calendar.

[5] ABU Robocon 2026
    ROS | Arduino | Computer Vision
    Autonomous robots for international competition.",
    hint: "More projects on GitHub.",
};

pub const EDUCATION: Section = Section {
    body: "Education
─────────
Bachelor of Technology (B.Tech)
Computer Science & Engineering
Currently Pursuing | Expected Graduation: 2026

Relevant Coursework:
  - Data Structures & Algorithms
  - Machine Learning & Deep Learning
  - Computer Vision & Image Processing
  - Natural Language Processing
  - Database Management Systems

Certifications:
  - Deep Learning Specialization - DeepLearning.AI
  - Machine Learning - Stanford Online
  - Full Stack Web Development",
    hint: "Run 'experience' to see my work experience.",
};

pub const EXPERIENCE: Section = Section {
    body: "Experience & Achievements
─────────────────────────
Competitions:
  - ABU Robocon 2026 - Team Member
  - Various Hackathons - Winner/Top Finisher

Projects:
  - 10+ ML/AI Projects
  - 5+ Full-Stack Web Applications
  - Open Source Contributions

Community:
  - Technical Blog Writer
  - Open Source Contributor
  - Peer Mentor",
    hint: "Run 'contact' to get in touch.",
};

pub const CONTACT: Section = Section {
    body: "Contact Me
──────────
Email     : shibammandal603@gmail.com
GitHub    : github.com/shibammandal
LinkedIn  : linkedin.com/in/shibammandalfy
Location  : India",
    hint: "Feel free to reach out for collaborations or opportunities.",
};

pub const SUDO: &str = "[sudo] password for visitor:
Sorry, visitor is not in the sudoers file.
This incident will be reported.

(Just kidding. Try 'sudo hire shibam')";

pub const SUDO_HIRE: &str = "Request accepted!
Shibam Mandal has been hired!

(Just kidding... but you can make it happen.)
Contact: shibammandal603@gmail.com";

/// Neofetch body; the `user@host` header and divider are prepended at render time.
pub const NEOFETCH_FIELDS: &[(&str, &str)] = &[
    ("OS", "Portfolio OS 2026.02"),
    ("Host", "B.Tech CSE Student"),
    ("Kernel", "AI/ML Enthusiast v3.0"),
    ("Uptime", "4+ years coding"),
    ("Packages", "Python, JavaScript, C++, PyTorch"),
    ("Shell", "web-terminal 2.0"),
    ("Resolution", "Responsive × Adaptive"),
    ("Terminal", "portfolio-terminal"),
    ("CPU", "Rust"),
    ("Memory", "Creative × Infinite"),
];

pub const FORTUNES: &[&str] = &[
    "A journey of a thousand miles begins with a single commit.",
    "Good code is its own best documentation.",
    "The best time to plant a tree was 20 years ago. The second best time is now.",
    "First, solve the problem. Then, write the code.",
    "Make it work, make it right, make it fast.",
    "Debugging is twice as hard as writing code.",
    "The only way to go fast is to go well.",
    "Code is like humor. When you have to explain it, it's bad.",
    "Simplicity is the soul of efficiency.",
    "Talk is cheap. Show me the code.",
];

pub const MAN_PAGES: &[(&str, &str)] = &[
    ("ls", "ls - list directory contents\n\nUsage: ls [-la] [path]\n  -l  long format\n  -a  show hidden files"),
    ("cd", "cd - change directory\n\nUsage: cd [path]\n  cd ..  - parent directory\n  cd ~   - home directory"),
    ("cat", "cat - concatenate and display files\n\nUsage: cat [file]"),
    ("mkdir", "mkdir - make directories\n\nUsage: mkdir [directory]"),
    ("touch", "touch - create empty file\n\nUsage: touch [file]"),
    ("rm", "rm - remove files\n\nUsage: rm [file]"),
    ("rmdir", "rmdir - remove empty directories\n\nUsage: rmdir [directory]"),
    ("cp", "cp - copy files\n\nUsage: cp [source] [dest]\n  copying onto an existing file replaces it"),
    ("mv", "mv - move (rename) files\n\nUsage: mv [source] [dest]"),
    ("find", "find - search for files\n\nUsage: find [path] [-name pattern] [-type f|d]"),
    ("nano", "nano - simple text editor\n\nUsage: nano [file]\n  Ctrl+X - exit\n  Ctrl+O - save"),
];

/// Commands answered with a fixed line, no state involved.
pub const CANNED: &[(&str, &str)] = &[
    ("ps", "  PID TTY          TIME CMD\n    1 pts/0    00:00:00 bash\n    2 pts/0    00:00:00 termfolio\n    3 pts/0    00:00:00 ps"),
    ("df", "Filesystem     1K-blocks    Used Available Use% Mounted on\n/dev/browser      102400   25600     76800  25% /\ndevtmpfs           65536       0     65536   0% /dev\ntmpfs              65536    1024     64512   2% /tmp"),
    ("free", "              total        used        free      shared  buff/cache   available\nMem:       16777216     4194304    10485760      524288     2097152    12582912\nSwap:       2097152           0     2097152"),
    ("vim", "vim: command not found (try nano instead)"),
    ("vi", "vi: command not found (try nano instead)"),
    ("emacs", "emacs: let's not start that debate here..."),
    ("curl", "curl: Try visiting my GitHub instead -> github.com/shibammandal"),
    ("wget", "wget: Try visiting my GitHub instead -> github.com/shibammandal"),
    ("git", "git: Check out my repos at github.com/shibammandal"),
    ("python", "Python 3.11.0 (default, Jan 2026)\n>>> print(\"Hello from Shibam's portfolio!\")\nHello from Shibam's portfolio!\n>>> exit()"),
    ("python3", "Python 3.11.0 (default, Jan 2026)\n>>> print(\"Hello from Shibam's portfolio!\")\nHello from Shibam's portfolio!\n>>> exit()"),
    ("node", "Welcome to Node.js v20.0.0.\n> console.log(\"Hello!\")\nHello!"),
    ("matrix", "Wake up, Neo... The Matrix has you."),
    ("coffee", "Brewing coffee... Done! Productivity +100%"),
    ("42", "The Answer to the Ultimate Question of Life, The Universe, and Everything."),
    ("hello", "Hello there! Type \"help\" to explore!"),
    ("hi", "Hey! Welcome to my portfolio!"),
    ("thanks", "You're welcome! Feel free to explore more!"),
    ("bye", "Goodbye! Thanks for visiting!"),
    ("theme", "Theme: Blue & White (Minimalistic)"),
    ("version", "Portfolio OS v2026.01 - Built with Rust"),
    ("email", "Email: shibammandal603@gmail.com"),
    ("ssh", "ssh: Connection refused (try visiting my portfolio instead!)"),
    ("su", "su: Authentication failure"),
    ("apt", "apt: Permission denied. This is a read-only system."),
    ("apt-get", "apt-get: Permission denied. This is a read-only system."),
    ("shutdown", "shutdown: Need to be root"),
    ("poweroff", "poweroff: Need to be root"),
];

pub fn canned(name: &str) -> Option<&'static str> {
    CANNED.iter().find(|(n, _)| *n == name).map(|(_, text)| *text)
}

pub fn man_page(name: &str) -> Option<&'static str> {
    MAN_PAGES.iter().find(|(n, _)| *n == name).map(|(_, text)| *text)
}

// ============================================================================
// Seed dataset
// ============================================================================

/// Empty directories present at session start.
pub const SEED_DIRS: &[&str] = &["/tmp", "/usr/bin", "/usr/share/man"];

/// Files present at session start, as (absolute path, content).
pub fn seed_files(user: &str, hostname: &str, home: &str) -> Vec<(String, String)> {
    let in_home = |name: &str| format!("{}/{}", home.trim_end_matches('/'), name);
    vec![
        (in_home("about.txt"), ABOUT.body.to_string()),
        (in_home("skills.txt"), SKILLS.body.to_string()),
        (in_home("projects.txt"), PROJECTS.body.to_string()),
        (in_home("education.txt"), EDUCATION.body.to_string()),
        (in_home("experience.txt"), EXPERIENCE.body.to_string()),
        (in_home("contact.txt"), CONTACT.body.to_string()),
        (in_home("CV.pdf"), "[Binary file - use \"resume\" command to download]".to_string()),
        (
            in_home("README.md"),
            "# Shibam Mandal Portfolio\n\nWelcome! Type `help` for commands.".to_string(),
        ),
        (in_home(".bashrc"), "# ~/.bashrc\nexport PS1=\"\\u@\\h:\\w$ \"".to_string()),
        (in_home(".profile"), format!("# ~/.profile\necho \"Welcome back, {}!\"", user)),
        (
            "/etc/motd".to_string(),
            "Welcome to Shibam Portfolio OS v2026\nType \"help\" for available commands.".to_string(),
        ),
        ("/etc/hostname".to_string(), hostname.to_string()),
        (
            "/etc/passwd".to_string(),
            format!("{user}:x:1000:1000:Shibam Mandal:{home}:/bin/bash"),
        ),
        (
            "/etc/os-release".to_string(),
            "NAME=\"Portfolio OS\"\nVERSION=\"2026.01\"\nID=portfolio\nPRETTY_NAME=\"Shibam Portfolio OS\""
                .to_string(),
        ),
        (
            "/var/log/syslog".to_string(),
            "Jan 19 21:00:00 portfolio kernel: System initialized\nJan 19 21:00:01 portfolio init: Starting services..."
                .to_string(),
        ),
        ("/bin/bash".to_string(), "[executable]".to_string()),
        ("/bin/ls".to_string(), "[executable]".to_string()),
        ("/bin/cat".to_string(), "[executable]".to_string()),
    ]
}
