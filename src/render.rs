//! SVG rendering of a classified commit list.
//!
//! Layout is fixed: 800 units wide, one 100-unit row per commit on a
//! 120-unit pitch, 20-unit margins. Rows keep their height regardless of
//! content length. Output is byte-identical for identical input and theme.

use crate::models::{CommitRecord, CommitType};
use crate::svg::{self, Element};

const CANVAS_WIDTH: u32 = 800;
const ROW_PITCH: u32 = 120;
const ROW_WIDTH: u32 = 760;
const ROW_HEIGHT: u32 = 100;

const STYLE_SHEET: &str = "\n        .commit-title { font: bold 14px system-ui; }\n        .commit-body { font: 12px system-ui; }\n        .commit-meta { font: italic 10px system-ui; }\n        .commit-info { font: 10px monospace; }\n        .commit-emoji { font: 14px system-ui; }\n    ";

pub struct Palette {
    background: &'static str,
    text: &'static str,
    border: &'static str,
    feat: &'static str,
    fix: &'static str,
    docs: &'static str,
    refactor: &'static str,
    perf: &'static str,
    test: &'static str,
    chore: &'static str,
    other: &'static str,
}

const DARK: Palette = Palette {
    background: "#1a1a1a",
    text: "#ffffff",
    border: "#333333",
    feat: "#4CAF50",
    fix: "#F44336",
    docs: "#2196F3",
    refactor: "#FF9800",
    perf: "#9C27B0",
    test: "#FFEB3B",
    chore: "#795548",
    other: "#9E9E9E",
};

const LIGHT: Palette = Palette {
    background: "#ffffff",
    text: "#000000",
    border: "#e0e0e0",
    feat: "#81C784",
    fix: "#E57373",
    docs: "#64B5F6",
    refactor: "#FFB74D",
    perf: "#BA68C8",
    test: "#FFF176",
    chore: "#A1887F",
    other: "#BDBDBD",
};

impl Palette {
    pub fn for_theme(dark_mode: bool) -> &'static Palette {
        if dark_mode {
            &DARK
        } else {
            &LIGHT
        }
    }

    /// Types without a dedicated entry (style, build, ci, revert) share the
    /// `other` color.
    fn type_color(&self, commit_type: CommitType) -> &'static str {
        match commit_type {
            CommitType::Feat => self.feat,
            CommitType::Fix => self.fix,
            CommitType::Docs => self.docs,
            CommitType::Refactor => self.refactor,
            CommitType::Perf => self.perf,
            CommitType::Test => self.test,
            CommitType::Chore => self.chore,
            _ => self.other,
        }
    }
}

pub fn render(commits: &[CommitRecord], dark_mode: bool) -> String {
    let palette = Palette::for_theme(dark_mode);
    let height = commits.len() as u32 * ROW_PITCH + 40;

    let mut root = Element::new("svg")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("viewBox", format!("0 0 {} {}", CANVAS_WIDTH, height))
        .attr("width", CANVAS_WIDTH.to_string())
        .child(
            Element::new("rect")
                .attr("width", "100%")
                .attr("height", "100%")
                .attr("fill", palette.background),
        )
        .child(Element::new("style").text(STYLE_SHEET));

    for (index, commit) in commits.iter().enumerate() {
        root = root.child(commit_row(commit, index, palette));
    }

    svg::document(&root)
}

fn commit_row(commit: &CommitRecord, index: usize, palette: &Palette) -> Element {
    let y = 20 + ROW_PITCH as usize * index;
    let meta = if commit.scope.is_empty() {
        format!("{} {}", commit.emoji(), commit.commit_type.as_str())
    } else {
        format!(
            "{} {}({})",
            commit.emoji(),
            commit.commit_type.as_str(),
            commit.scope
        )
    };
    let short_hash: String = commit.hash.chars().take(7).collect();

    Element::new("g")
        .attr("transform", format!("translate(20,{})", y))
        .child(
            Element::new("rect")
                .attr("width", ROW_WIDTH.to_string())
                .attr("height", ROW_HEIGHT.to_string())
                .attr("rx", "5")
                .attr("fill", palette.type_color(commit.commit_type))
                .attr("opacity", "0.2")
                .attr("stroke", palette.border)
                .attr("stroke-width", "1"),
        )
        .child(text_line(10, 20, palette.text, "commit-meta").text(meta))
        .child(text_line(10, 40, palette.text, "commit-title").text(commit.title.clone()))
        .child(text_line(10, 60, palette.text, "commit-body").text(commit.body.clone()))
        .child(
            text_line(10, 85, palette.text, "commit-info")
                .child(Element::new("tspan").text(commit.author.clone()))
                .child(
                    Element::new("tspan")
                        .attr("x", "300")
                        .text(commit.authored_at.clone()),
                )
                .child(Element::new("tspan").attr("x", "500").text(short_hash)),
        )
}

fn text_line(x: u32, y: u32, fill: &'static str, class: &'static str) -> Element {
    Element::new("text")
        .attr("x", x.to_string())
        .attr("y", y.to_string())
        .attr("fill", fill)
        .attr("class", class)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(commit_type: CommitType, scope: &str, title: &str, body: &str) -> CommitRecord {
        CommitRecord {
            hash: "0123456789abcdef0123456789abcdef01234567".to_string(),
            author: "Ada Lovelace".to_string(),
            authored_at: "2024-05-01 12:30:00".to_string(),
            commit_type,
            scope: scope.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let commits = vec![
            commit(CommitType::Feat, "ui", "add button", "Longer body text"),
            commit(CommitType::Other, "", "random update", ""),
        ];
        assert_eq!(render(&commits, true), render(&commits, true));
        assert_eq!(render(&commits, false), render(&commits, false));
    }

    #[test]
    fn viewbox_height_scales_with_commit_count() {
        for n in [0usize, 1, 3, 50] {
            let commits: Vec<_> = (0..n)
                .map(|i| commit(CommitType::Fix, "", &format!("commit {i}"), ""))
                .collect();
            let doc = render(&commits, false);
            let expected = format!("viewBox=\"0 0 800 {}\"", 120 * n + 40);
            assert!(doc.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn rows_are_positioned_on_the_pitch() {
        let commits = vec![
            commit(CommitType::Feat, "", "first", ""),
            commit(CommitType::Fix, "", "second", ""),
            commit(CommitType::Docs, "", "third", ""),
        ];
        let doc = render(&commits, false);
        assert!(doc.contains("translate(20,20)"));
        assert!(doc.contains("translate(20,140)"));
        assert!(doc.contains("translate(20,260)"));
    }

    #[test]
    fn titles_are_escaped() {
        let commits = vec![commit(
            CommitType::Other,
            "",
            "<script>alert(1)</script>",
            "a & b \"quoted\"",
        )];
        let doc = render(&commits, false);
        assert!(!doc.contains("<script>"));
        assert!(doc.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(doc.contains("a &amp; b &quot;quoted&quot;"));
    }

    #[test]
    fn meta_line_includes_scope_only_when_present() {
        let doc = render(&[commit(CommitType::Feat, "ui", "x", "")], false);
        assert!(doc.contains("✨ feat(ui)"));

        let doc = render(&[commit(CommitType::Feat, "", "x", "")], false);
        assert!(doc.contains("✨ feat</text>"));
    }

    #[test]
    fn theme_selects_background_and_type_colors() {
        let commits = vec![commit(CommitType::Feat, "", "x", "")];
        let dark = render(&commits, true);
        assert!(dark.contains("fill=\"#1a1a1a\""));
        assert!(dark.contains("fill=\"#4CAF50\""));

        let light = render(&commits, false);
        assert!(light.contains("fill=\"#ffffff\""));
        assert!(light.contains("fill=\"#81C784\""));
    }

    #[test]
    fn unmapped_types_use_the_other_color() {
        let doc = render(&[commit(CommitType::Style, "", "reformat", "")], false);
        assert!(doc.contains("fill=\"#BDBDBD\""));
    }

    #[test]
    fn info_line_shows_author_date_and_short_hash() {
        let doc = render(&[commit(CommitType::Chore, "", "x", "")], false);
        assert!(doc.contains("<tspan>Ada Lovelace</tspan>"));
        assert!(doc.contains("<tspan x=\"300\">2024-05-01 12:30:00</tspan>"));
        assert!(doc.contains("<tspan x=\"500\">0123456</tspan>"));
    }
}
