//! Portfolio Content
//!
//! Static profile data shown on the gate's info panel and on the main view
//! the gate hands over to.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::theme::{BACKGROUND, LABEL_YELLOW, MUTED_GRAY, STAT_CYAN, TERMINAL_GREEN};

/// Shell-style handle in the status bar
pub const HANDLE: &str = "azcharia@portfolio";
/// Role line
pub const ROLE: &str = "Android Developer";
/// Home town
pub const LOCATION: &str = "Surakarta, Indonesia";
/// Availability line
pub const STATUS: &str = "● Available for projects";
/// Where the code lives
pub const GITHUB: &str = "github.com/azcharia";

/// Headline numbers: (value, label)
pub const STATS: [(&str, &str); 3] = [("10+", "Projects"), ("1+", "Years"), ("12+", "Tech Stack")];

/// Tags in the tech stack row
pub const TECH_STACK: [&str; 10] = [
    "Flutter",
    "Dart",
    "Laravel",
    "PHP",
    "Python",
    "R",
    "Azure",
    "Gemini API",
    "Supabase",
    "MySQL",
];

/// A project card on the main view
#[derive(Clone, Copy, Debug)]
pub struct Project {
    /// Project name
    pub title: &'static str,
    /// One-line pitch
    pub subtitle: &'static str,
    /// Main technologies
    pub tags: &'static [&'static str],
}

/// Featured projects
pub const PROJECTS: [Project; 4] = [
    Project {
        title: "Chatty",
        subtitle: "AI Companion App",
        tags: &["Flutter", "Groq API", "Riverpod"],
    },
    Project {
        title: "Plant Watering Reminder",
        subtitle: "AI-Powered Plant Care",
        tags: &["Flutter", "Gemini AI", "Offline-First"],
    },
    Project {
        title: "SIPENGO",
        subtitle: "Village Data Management",
        tags: &["Flutter", "Supabase", "Clean Architecture"],
    },
    Project {
        title: "Shoes Retail",
        subtitle: "Nike E-Commerce App",
        tags: &["Flutter", "E-Commerce", "Offline Support"],
    },
];

/// Draw the post-gate main view
pub fn render_main_content(buf: &mut Buffer, area: Rect) {
    buf.set_style(area, Style::default().bg(BACKGROUND));
    if area.width < 20 || area.height < 8 {
        return;
    }

    let width = usize::from(area.width.saturating_sub(4));
    let x = area.x + 2;
    let mut y = area.y + 1;
    let bottom = area.y + area.height.saturating_sub(1);

    let heading = Style::default()
        .fg(TERMINAL_GREEN)
        .add_modifier(Modifier::BOLD);
    buf.set_stringn(x, y, "~/portfolio $ whoami", width, Style::default().fg(MUTED_GRAY));
    y += 2;
    buf.set_stringn(x, y, ROLE, width, heading);
    y += 1;
    buf.set_stringn(x, y, LOCATION, width, Style::default().fg(MUTED_GRAY));
    y += 2;

    buf.set_stringn(x, y, "Projects", width, Style::default().fg(LABEL_YELLOW));
    y += 1;

    for project in &PROJECTS {
        if y + 1 >= bottom {
            break;
        }
        let line = format!("▸ {} - {}", project.title, project.subtitle);
        buf.set_stringn(x, y, &line, width, Style::default().fg(STAT_CYAN));
        y += 1;

        let tags = format!("  [{}]", project.tags.join("] ["));
        for wrapped in textwrap::wrap(&tags, width.max(1)) {
            if y >= bottom {
                break;
            }
            buf.set_stringn(x, y, &wrapped, width, Style::default().fg(MUTED_GRAY));
            y += 1;
        }
    }

    let footer = format!("{GITHUB}  ·  Esc to quit");
    buf.set_stringn(x, bottom, &footer, width, Style::default().fg(MUTED_GRAY));
}
