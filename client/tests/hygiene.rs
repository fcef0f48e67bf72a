//! Hygiene — enforces error-handling standards at test time.
//!
//! Storage failures in this crate must be logged and degraded, never
//! panicked on or silently dropped. These tests scan the production sources
//! under `client/src/` (sibling `*_test.rs` files excluded) for patterns that
//! break that rule. Every budget is zero.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "panics on storage or decode errors" },
    Budget { pattern: ".expect(", max: 0, why: "panics on storage or decode errors" },
    Budget { pattern: "panic!(", max: 0, why: "crashes the page" },
    Budget { pattern: "unreachable!(", max: 0, why: "crashes the page" },
    Budget { pattern: "todo!(", max: 0, why: "unfinished stub" },
    Budget { pattern: "unimplemented!(", max: 0, why: "unfinished stub" },
    Budget { pattern: "let _ =", max: 0, why: "discards an error without logging it" },
    Budget { pattern: ".ok()", max: 0, why: "discards an error without logging it" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "hides unused code" },
];

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits_for(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("storage.rs")), "run from the crate root");
}

#[test]
fn antipattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let hits = hits_for(&files, budget.pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let detail = hits
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!(
                "`{}` budget exceeded ({}): found {count}, max {}\n{detail}",
                budget.pattern, budget.why, budget.max
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
