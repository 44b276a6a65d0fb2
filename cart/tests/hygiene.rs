//! Hygiene — enforces coding standards at test time.
//!
//! Scans the cart crate's production sources for antipatterns. Each pattern
//! has a budget (zero). The store is the one piece of this app whose
//! invariants real money rides on, so panicking shortcuts and silently
//! discarded errors are kept out of it mechanically rather than by review.

use std::fs;
use std::path::Path;

/// `(label, needle, budget)` — lines containing `needle` count against
/// `budget` across all production source files.
const BUDGETS: &[(&str, &str, usize)] = &[
    // Panics — these crash the storefront tab.
    ("unwrap", ".unwrap()", 0),
    ("expect", ".expect(", 0),
    ("panic", "panic!(", 0),
    ("unreachable", "unreachable!(", 0),
    ("todo", "todo!(", 0),
    ("unimplemented", "unimplemented!(", 0),
    // Silent loss — discards errors without inspecting.
    ("silent discard", "let _ =", 0),
    ("dot-ok", ".ok()", 0),
    // Structure.
    ("allow dead_code", "#[allow(dead_code)]", 0),
];

struct Violation {
    file: String,
    line: usize,
    text: String,
}

fn production_sources() -> Vec<(String, String)> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        // Test modules live beside the code they test; skip them.
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

fn scan(needle: &str) -> Vec<Violation> {
    production_sources()
        .iter()
        .flat_map(|(file, content)| {
            content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(needle))
                .map(|(index, line)| Violation {
                    file: file.clone(),
                    line: index + 1,
                    text: line.trim().to_owned(),
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

#[test]
fn sources_are_present() {
    assert!(
        !production_sources().is_empty(),
        "hygiene scan found no production sources under src/"
    );
}

#[test]
fn budgets_hold() {
    let mut report = String::new();
    for (label, needle, budget) in BUDGETS {
        let hits = scan(needle);
        if hits.len() > *budget {
            report.push_str(&format!(
                "{label}: found {}, budget {budget}\n",
                hits.len()
            ));
            for hit in &hits {
                report.push_str(&format!("  {}:{} {}\n", hit.file, hit.line, hit.text));
            }
        }
    }
    assert!(report.is_empty(), "hygiene budgets exceeded:\n{report}");
}
