//! Shareable status card, rendered as a standalone SVG document.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

use mathterm_core::Profile;

use crate::console::group_thousands;

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 630;
const BACKGROUND: &str = "#0f172a";
const TEXT: &str = "#e2e8f0";
const ACCENT_TITLE: &str = "#38bdf8";
const ACCENT_VALUE: &str = "#a3e635";
const DIVIDER: &str = "#334155";

/// Label/value rows shown on the card, top to bottom.
pub fn card_rows(profile: &Profile) -> Vec<(&'static str, String)> {
    vec![
        ("Player", profile.username.clone()),
        ("Rank", profile.rank.to_string()),
        ("Total Score", group_thousands(profile.total_score)),
        (
            "Survival Best",
            profile
                .best_survival()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".into()),
        ),
        (
            "Correct / Incorrect",
            format!(
                "{} / {}",
                profile.stats.total_correct, profile.stats.total_incorrect
            ),
        ),
        (
            "Highest Session Score",
            if profile.history.is_empty() {
                "-".into()
            } else {
                group_thousands(profile.max_session_score)
            },
        ),
    ]
}

pub fn render_svg(profile: &Profile) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">"#
    );
    let _ = writeln!(
        svg,
        r#"  <rect width="100%" height="100%" fill="{BACKGROUND}"/>"#
    );
    let _ = writeln!(
        svg,
        r#"  <text x="60" y="120" font-family="DejaVu Sans, Arial, sans-serif" font-weight="bold" font-size="80" fill="{ACCENT_TITLE}">mathterm</text>"#
    );
    let _ = writeln!(
        svg,
        r#"  <text x="65" y="165" font-family="DejaVu Sans, Arial, sans-serif" font-size="32" fill="{TEXT}">Player Status Card</text>"#
    );
    let _ = writeln!(
        svg,
        r#"  <line x1="60" y1="190" x2="{}" y2="190" stroke="{DIVIDER}" stroke-width="3"/>"#,
        WIDTH - 60
    );

    let mut y = 250;
    for (label, value) in card_rows(profile) {
        let _ = writeln!(
            svg,
            r#"  <text x="60" y="{y}" font-family="DejaVu Sans, Arial, sans-serif" font-size="28" fill="{TEXT}">{}:</text>"#,
            escape(label)
        );
        let _ = writeln!(
            svg,
            r#"  <text x="600" y="{y}" font-family="DejaVu Sans, Arial, sans-serif" font-weight="bold" font-size="28" fill="{ACCENT_VALUE}">{}</text>"#,
            escape(&value)
        );
        y += 55;
    }
    svg.push_str("</svg>\n");
    svg
}

pub fn write_card(profile: &Profile, path: &Path) -> Result<()> {
    std::fs::write(path, render_svg(profile))
        .with_context(|| format!("cannot write {}", path.display()))
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
