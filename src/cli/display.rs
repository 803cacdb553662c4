// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering for the symcheck CLI.
//!
//! OneDark colors on dark terminals, One Light on light ones. `SYMCHECK_THEME`
//! wins if set, then the `COLORFGBG` hint some terminals export, then dark.
//! Output piped somewhere else, or run with `NO_COLOR`, comes out plain.
//!
//! Everything that prints goes through a box: `section_top` opens one,
//! `section_mid` splits it, `row` fills it, `section_bot` closes it.

use std::sync::OnceLock;
use symcheck::TriageLevel;

/// Inner width of a box, between the two border characters.
pub const BOX_WIDTH: usize = 72;

/// Width of the percentage bar in characters.
pub const BAR_WIDTH: usize = 20;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

// ═══════════════════════════════════════════════════════════════════════════
// THEMES
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

type Rgb = (u8, u8, u8);

struct Palette {
    red: Rgb,
    green: Rgb,
    yellow: Rgb,
    blue: Rgb,
    cyan: Rgb,
    gray: Rgb,
    accent: Rgb,
}

const ONE_DARK: Palette = Palette {
    red: (224, 108, 117),
    green: (152, 195, 121),
    yellow: (229, 192, 123),
    blue: (97, 175, 239),
    cyan: (86, 182, 194),
    gray: (92, 99, 112),
    accent: (102, 217, 239),
};

const ONE_LIGHT: Palette = Palette {
    red: (228, 86, 73),
    green: (80, 161, 79),
    yellow: (193, 132, 1),
    blue: (64, 120, 242),
    cyan: (1, 132, 188),
    gray: (160, 161, 167),
    accent: (1, 112, 158),
};

impl Theme {
    fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &ONE_DARK,
            Theme::Light => &ONE_LIGHT,
        }
    }
}

/// Pick a theme from the explicit setting and the terminal's `fg;bg` hint.
fn choose_theme(explicit: Option<&str>, colorfgbg: Option<&str>) -> Theme {
    match explicit.map(str::to_lowercase).as_deref() {
        Some("light" | "l") => return Theme::Light,
        Some("dark" | "d") => return Theme::Dark,
        _ => {}
    }
    // Background codes 7 and 9-15 are the light ones; 8 is dark gray.
    let background = colorfgbg
        .and_then(|hint| hint.rsplit(';').next())
        .and_then(|bg| bg.parse::<u8>().ok());
    match background {
        Some(bg) if bg >= 7 && bg != 8 => Theme::Light,
        _ => Theme::Dark,
    }
}

pub fn theme() -> Theme {
    static THEME: OnceLock<Theme> = OnceLock::new();
    *THEME.get_or_init(|| {
        choose_theme(
            std::env::var("SYMCHECK_THEME").ok().as_deref(),
            std::env::var("COLORFGBG").ok().as_deref(),
        )
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// PAINTING
// ═══════════════════════════════════════════════════════════════════════════

/// A palette slot, resolved against the current theme when painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
    Gray,
    Accent,
}

impl Tone {
    fn rgb(self, theme: Theme) -> Rgb {
        let p = theme.palette();
        match self {
            Tone::Red => p.red,
            Tone::Green => p.green,
            Tone::Yellow => p.yellow,
            Tone::Blue => p.blue,
            Tone::Cyan => p.cyan,
            Tone::Gray => p.gray,
            Tone::Accent => p.accent,
        }
    }

    fn escape(self) -> String {
        let (r, g, b) = self.rgb(theme());
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

/// Colors are off for `NO_COLOR` and for anything that isn't a terminal.
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// Color `text` with `tone`, after any extra SGR `modifiers`.
pub fn paint(tone: Tone, modifiers: &[&str], text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    format!("{}{}{}{}", modifiers.concat(), tone.escape(), text, RESET)
}

/// Bold or dim without a color.
pub fn styled(styles: &[&str], text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    format!("{}{}{}", styles.concat(), text, RESET)
}

/// Printable width, skipping SGR escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut chars = s.chars();
    let mut len = 0;
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            chars.by_ref().find(|&c| c == 'm');
        } else {
            len += 1;
        }
    }
    len
}

/// Pad with spaces to `width` printable columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(fill))
}

/// Cut to `max` characters, ending in "..." when something was dropped.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOXES
// ═══════════════════════════════════════════════════════════════════════════

fn border(text: &str) -> String {
    paint(Tone::Gray, &[], text)
}

/// `left─ LABEL ─────right`
fn labeled_rule(left: char, label: &str, right: char) -> String {
    let head = format!("─ {} ", paint(Tone::Cyan, &[BOLD], label));
    let tail = "─".repeat(BOX_WIDTH.saturating_sub(visible_len(&head)));
    format!(
        "{}{}{}",
        border(&left.to_string()),
        head,
        border(&format!("{}{}", tail, right))
    )
}

/// `│ content          │`
pub fn row(content: &str) {
    println!(
        "{}{}{}",
        border("│"),
        pad_right(content, BOX_WIDTH),
        border("│")
    );
}

pub fn section_top(label: &str) {
    println!("{}", labeled_rule('┌', label, '┐'));
}

pub fn section_mid(label: &str) {
    println!("{}", labeled_rule('├', label, '┤'));
}

pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

/// A centered heading in a double-line frame.
pub fn title(text: &str) {
    let heading = paint(Tone::Accent, &[BOLD], text);
    let slack = BOX_WIDTH.saturating_sub(visible_len(&heading));
    let line = "═".repeat(BOX_WIDTH);
    let edge = |s: &str| paint(Tone::Blue, &[], s);
    println!("{}", edge(&format!("╔{}╗", line)));
    println!(
        "{}{}{}{}{}",
        edge("║"),
        " ".repeat(slack / 2),
        heading,
        " ".repeat(slack - slack / 2),
        edge("║")
    );
    println!("{}", edge(&format!("╚{}╝", line)));
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULTS
// ═══════════════════════════════════════════════════════════════════════════

/// Filled and empty cells of a bar for `percentage`, rounded half-up.
pub fn bar_cells(percentage: u8) -> (usize, usize) {
    let filled = (usize::from(percentage.min(100)) * BAR_WIDTH + 50) / 100;
    (filled, BAR_WIDTH - filled)
}

fn bar_tone(percentage: u8) -> Tone {
    match percentage {
        50..=u8::MAX => Tone::Green,
        20..=49 => Tone::Yellow,
        _ => Tone::Gray,
    }
}

/// `██████░░░░  30%`, green for strong matches, gray for weak ones.
pub fn percentage_bar(percentage: u8) -> String {
    let (filled, empty) = bar_cells(percentage);
    let tone = bar_tone(percentage);
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(empty));
    format!(
        "{} {}",
        paint(tone, &[], &bar),
        paint(tone, &[BOLD], &format!("{:>3}%", percentage))
    )
}

fn triage_tone(level: TriageLevel) -> Tone {
    match level {
        TriageLevel::Urgent => Tone::Red,
        TriageLevel::Consult => Tone::Yellow,
        TriageLevel::SelfCare => Tone::Green,
    }
}

/// `[URGENT]`, `[CONSULT]`, or `[SELF CARE]`.
pub fn triage_badge(level: TriageLevel) -> String {
    let modifiers: &[&str] = if level == TriageLevel::SelfCare { &[] } else { &[BOLD] };
    let text = format!("[{}]", level.to_string().to_uppercase());
    paint(triage_tone(level), modifiers, &text)
}
