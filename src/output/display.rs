//! Display functions for command results

use super::formatters::{format_score, proportion_bar};
use crate::commands::{CompareResult, LetterReport, ShiftReport};
use crate::letters::LETTER_FREQS;
use colored::Colorize;

/// Print the result of letter analysis
pub fn print_letter_report(report: &LetterReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "LETTER ANALYSIS:".bright_cyan().bold(),
        report.slug.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Alphagram:   {}", report.alphagram.as_str().bright_yellow());
    println!("   Alphabytes:  {}", report.alphabytes);
    println!("   Consonants:  {}", report.consonants);
    println!(
        "   Anahash:     {}",
        if report.anahash.is_empty() {
            "(none)".bright_black()
        } else {
            report.anahash.as_str().green()
        }
    );
    println!(
        "   Cost:        {}",
        format!("{:.2}", report.cost).bright_yellow()
    );

    println!("\n📊 {}", "Letters vs English:".bright_cyan().bold());
    for ((letter, &count), (&observed, &baseline)) in ('a'..='z')
        .zip(report.counts.iter())
        .zip(report.proportions.iter().zip(LETTER_FREQS.iter()))
    {
        if count == 0 {
            continue;
        }
        let bar = proportion_bar(observed, baseline, 30);
        let bar = if observed > baseline {
            bar.green()
        } else {
            bar.bright_black()
        };
        println!(
            "   {letter}: {bar} {count:3} ({:5.1}% vs {:4.1}%)",
            observed * 100.0,
            baseline * 100.0
        );
    }
}

/// Print the result of comparing two sets of letters
pub fn print_compare_result(result: &CompareResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Comparing: {} vs {}",
        result.first.as_str().bright_yellow().bold(),
        result.second.as_str().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n   Only in first:   {}", result.only_first);
    println!("   Only in second:  {}", result.only_second);
    println!(
        "   Anagram diff:    {} ({} wildcards)",
        result.anagram.remainder, result.anagram.wildcards_used
    );

    match &result.exact {
        Some(Ok(rest)) => println!(
            "\n{}",
            format!("✅ Second fits inside first, leaving {rest}")
                .green()
                .bold()
        ),
        Some(Err(err)) => println!("\n{}", format!("❌ {err}").red().bold()),
        None => {}
    }
}

/// Print every Caesar shift, starring the most plausible one
pub fn print_shift_report(report: &ShiftReport) {
    for row in &report.rows {
        let line = format!(
            "{} {:>4}  {}",
            format_score(row.score),
            format!("+{}", row.offset),
            row.text
        );
        if report.best == Some(row.offset) {
            println!("{} {}", line.green().bold(), "*".bright_yellow());
        } else {
            println!("{line}");
        }
    }
}
