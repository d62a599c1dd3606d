//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::registry::{AlgorithmRegistry, AlgorithmRunner, BenchmarkResult};
use crate::suite::SuiteReport;
use crate::utils::bench::format_measurement;
use crate::utils::runner::GroupedResults;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

fn is_c_variant(name: &str) -> bool {
    name.starts_with("c-")
}

/// Sort key: original (0), Rust (1), C (2)
fn variant_sort_key(result: &BenchmarkResult) -> (u8, String) {
    let name = result.name.to_lowercase();
    if name == "original" {
        (0, String::new())
    } else if is_c_variant(&name) {
        (2, name)
    } else {
        (1, name)
    }
}

/// Sort variants: original first, then Rust, then C
pub fn sort_variants(results: &mut [BenchmarkResult]) {
    results.sort_by_key(variant_sort_key);
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print algorithm info box
pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let max_content_width = get_term_width().saturating_sub(4).max(40);

    let lines = [
        format!("Algorithm: {}", algo.name()),
        format!("Category:  {}", algo.category()),
        algo.description().to_string(),
        format!("Variants:  {}", algo.available_variants().join(", ")),
    ];

    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(60)
        .min(max_content_width);
    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for (i, line) in lines.iter().enumerate() {
        if i == 3 {
            println!("├{}┤", border);
        }
        println!("│ {:<width$} │", truncate(line, content_width), width = content_width);
    }
    println!("└{}┘", border);
    println!();
}

/// Print results table for a single size
pub fn print_results_table(results: &[BenchmarkResult], size: usize) {
    let Some(baseline) = results.first() else {
        return;
    };

    let term_width = get_term_width();
    // 12+12+12+9+9+12 = 66 columns + 6 separators + 2 indent
    let fixed_width = 74;
    let variant_col_width = term_width.saturating_sub(fixed_width).max(15);
    let table_width = variant_col_width + 66 + 6;

    let baseline_time = baseline.avg_nanos_f64.max(1.0);

    println!("  Size: {} ({} runs)", size, baseline.iterations);
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>9} {:>9} {:>12}",
        "Variant",
        "Average",
        "Min",
        "Max",
        "Speedup",
        "CV",
        "Result",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let avg = result.avg_nanos_f64;
        let speedup = if avg > 0.0 { baseline_time / avg } else { 0.0 };
        let cv = if avg > 0.0 {
            result.std_dev.as_nanos() as f64 / avg
        } else {
            0.0
        };

        // Correct variants all report the baseline's result.
        let result_str = match (result.result_sample, baseline.result_sample) {
            (Some(r), Some(b)) if r == b => "same".to_string(),
            (Some(r), _) => format!("{r}"),
            (None, _) => "-".to_string(),
        };

        let display_name = match crate::utils::C_COMPILER_NAME {
            Some(c) if is_c_variant(&result.name) => format!("{} ({})", result.name, c),
            _ => result.name.clone(),
        };

        println!(
            "  {:<v_width$} {:>12} {:>12} {:>12} {:>8.2}x {:>8.2}% {:>12}",
            truncate(&display_name, variant_col_width),
            format_measurement(result.avg_time),
            format_measurement(result.min_time),
            format_measurement(result.max_time),
            speedup,
            cv * 100.0,
            truncate(&result_str, 12),
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print every algorithm's info box followed by one table per size.
pub fn print_grouped_results(algorithms: &[&dyn AlgorithmRunner], sample_sizes: &[usize], grouped: &GroupedResults) {
    for (algo, per_size) in algorithms.iter().zip(&grouped.results) {
        print_algo_info_box(*algo);

        for (&size, results) in sample_sizes.iter().zip(per_size) {
            let mut sorted = results.clone();
            sort_variants(&mut sorted);
            print_results_table(&sorted, size);
        }
    }
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Linear Search Lab ";
    let padding = term_width.saturating_sub(title.len()) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!("║{}{}{}║", " ".repeat(padding), title, " ".repeat(right_padding));
    println!("╚{}╝", border);
    println!();
}

/// Print the list of available algorithms, grouped by category
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    for category in registry.categories() {
        println!();
        println!("  [{}]", category);
        for algo in registry.by_category(category) {
            println!("    {:<16} - {}", algo.name(), algo.description());
            println!("    {:<16}   variants: {}", "", algo.available_variants().join(", "));
        }
    }
}

/// Print the self-test summary
pub fn print_suite_report(report: &SuiteReport) {
    for name in &report.passed {
        println!("  ✅ {}", name);
    }
    for (name, err) in &report.failed {
        println!("  ❌ {}: {}", name, err);
    }
    println!("  {}/{} routines passed", report.passed.len(), report.total());
    println!();
}
