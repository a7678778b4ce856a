//! Basic usage example of the linediff library

use linediff_core::export::{to_json, UnifiedDiff};
use linediff_core::{compute_diff, DiffConfig, DiffSession, InlineChange, SegmentKind};

const LINE: &str = "----------------------------------------";

fn main() {
    println!("=== Line Diff Examples ===\n");

    example_simple_diff();
    example_inline_changes();
    example_unified_output();
    example_session();
}

fn example_simple_diff() {
    println!("Example 1: Simple Diff");
    println!("{}", LINE);

    let original = "line1\nline2\nline3";
    let modified = "line1\nlineX\nline3";

    let result = compute_diff(original, modified, None);

    print!("{}", result);
    println!("\n{}\n", result.summary());
}

fn example_inline_changes() {
    println!("Example 2: Inline Changes");
    println!("{}", LINE);

    let result = compute_diff("hello world", "hallo world", None);

    for segment in &result.segments {
        let Some(changes) = &segment.inline_changes else {
            continue;
        };
        let rendered: Vec<String> = InlineChange::coalesce(changes)
            .into_iter()
            .map(|change| match change.kind {
                SegmentKind::Added => format!("{{+{}+}}", change.text),
                SegmentKind::Removed => format!("[-{}-]", change.text),
                SegmentKind::Unchanged => change.text,
            })
            .collect();
        println!("{}", rendered.concat());
    }
    println!();
}

fn example_unified_output() {
    println!("Example 3: Unified Output");
    println!("{}", LINE);

    let config = DiffConfig::new().with_context_lines(1);
    let result = compute_diff("a\nb\nc\nd\ne\nf", "a\nB\nc\nd\ne\nF", Some(config.clone()));
    let unified = UnifiedDiff::from_segments("before", "after", &result.segments, config.context_lines);
    print!("{}", unified.format());

    match to_json(&result.segments) {
        Ok(json) => println!("\nJSON: {}\n", json),
        Err(err) => eprintln!("export failed: {}", err),
    }
}

fn example_session() {
    println!("Example 4: Session");
    println!("{}", LINE);

    let mut session = DiffSession::default();
    session.calculate("x\ny", "x\nz");
    println!("Held segments: {}", session.segments().len());
    session.reset();
    println!("After reset: {}", session.segments().len());
}
