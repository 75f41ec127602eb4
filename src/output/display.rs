//! Display functions for command results

use super::formatters::{circled_count, create_progress_bar, spaced_letters};
use crate::commands::{CheckResult, SolutionsResult, SurveyStatistics};
use crate::validator::Verdict;
use colored::Colorize;

/// Print the verdict for a single word
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root: {}   Word: {}",
        spaced_letters(&result.root).bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match &result.verdict {
        Verdict::Accepted(_) => {
            println!("{}", "✅ Accepted".green().bold());
            if let Some(score) = result.potential_score {
                println!("   Worth {score} points as the next word");
            }
        }
        Verdict::Rejected(reason) => {
            println!("{}", format!("❌ {}", reason.title()).red().bold());
            println!("   {}", reason.message(&result.root));
        }
    }
}

/// Print every acceptable word for a root, grouped by length
pub fn print_solutions_result(result: &SolutionsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SOLUTIONS:".bright_cyan().bold(),
        spaced_letters(&result.root).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\nNo words can be made from '{}'.", result.root);
        return;
    }

    for (length, words) in result.by_length() {
        println!(
            "\n{} {}",
            circled_count(length).bright_cyan(),
            format!("{} words", words.len()).bright_black()
        );
        for line in words.chunks(8) {
            println!("   {}", line.join("  "));
        }
    }

    println!("\n📊 {} words found", result.words.len());
    println!(
        "   Max round score: {}",
        result.max_score.to_string().bright_yellow().bold()
    );
}

/// Print survey statistics
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Root Word Survey ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overview".bright_cyan().bold());
    println!("  Roots surveyed:      {}", stats.roots.len());
    println!(
        "  Average solutions:   {}",
        format!("{:.1}", stats.average_solutions)
            .bright_yellow()
            .bold()
    );
    println!("  Average max score:   {:.1}", stats.average_max_score);
    if stats.barren > 0 {
        println!(
            "  Barren roots:        {}",
            stats.barren.to_string().red()
        );
    }
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    let (Some(richest), Some(poorest)) = (stats.richest(), stats.poorest()) else {
        return;
    };
    let most = richest.solutions as f64;

    println!("\n🏆 {}", "Richest roots".bright_cyan().bold());
    for summary in stats.roots.iter().take(10) {
        println!(
            "  {:<10} {} {:4} words  max {}",
            summary.root,
            create_progress_bar(summary.solutions as f64, most, 30).green(),
            summary.solutions,
            summary.max_score
        );
    }

    println!(
        "\n🥀 Poorest root: {} ({} words, max {})",
        poorest.root.yellow().bold(),
        poorest.solutions,
        poorest.max_score
    );
}
