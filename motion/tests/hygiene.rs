//! Hygiene: enforces coding standards at test time
//!
//! Scans the motion crate's production sources for patterns the engine must
//! not contain. Budgets only ever go down.
//!
//! Besides the usual panic and silent-discard checks, the engine may not read
//! wall-clock time or keep process-wide state: time flows only through a
//! `Scheduler`, and every trigger/animator pair belongs to its widget.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, test modules excluded.
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
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

/// Fail if `pattern` appears on more than `max` lines across the sources.
fn assert_budget(label: &str, pattern: &str, max: usize) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the motion crate root");

    let hits = files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then_some((file.path.as_str(), count))
        })
        .collect::<Vec<_>>();
    let count: usize = hits.iter().map(|(_, c)| c).sum();
    let listing = hits
        .iter()
        .map(|(path, c)| format!("  {path}: {c}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= max, "{label} budget exceeded: found {count}, max {max}.\n{listing}");
}

// =============================================================
// Panics
// =============================================================

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", ".unwrap()", 0);
}

#[test]
fn expect_budget() {
    assert_budget(".expect()", ".expect(", 0);
}

#[test]
fn panic_budget() {
    assert_budget("panic!()", "panic!(", 0);
    assert_budget("unreachable!()", "unreachable!(", 0);
    assert_budget("todo!()", "todo!(", 0);
    assert_budget("unimplemented!()", "unimplemented!(", 0);
}

// =============================================================
// Silent loss
// =============================================================

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", "let _ =", 0);
    assert_budget(".ok()", ".ok()", 0);
}

// =============================================================
// Engine rules
// =============================================================

#[test]
fn no_wall_clock_reads() {
    assert_budget("Instant::now", "Instant::now", 0);
    assert_budget("SystemTime::now", "SystemTime::now", 0);
    assert_budget("thread::sleep", "thread::sleep", 0);
}

#[test]
fn no_process_wide_state() {
    assert_budget("static mut", "static mut", 0);
    assert_budget("thread_local!", "thread_local!", 0);
    assert_budget("OnceLock", "OnceLock", 0);
}

#[test]
fn no_allow_dead_code() {
    assert_budget("#[allow(dead_code)]", "#[allow(dead_code)]", 0);
}
