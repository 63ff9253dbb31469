//! Console rendering of an orchestration result

use colored::Colorize;
use medley_domain::OrchestrationResult;

pub fn print_result(result: &OrchestrationResult) {
    println!();
    match &result.selected_provider {
        Some(provider) => {
            println!("{} {}", "Answer from".bold(), provider.to_string().green().bold());
        }
        None => {
            println!("{}", "No provider available".red().bold());
        }
    }
    println!("{}", format!("({})", result.rationale).dimmed());
    println!();
    println!("{}", result.selected_text);

    // Comparison block: the losing candidates, for audit
    let others: Vec<_> = result
        .responses
        .iter()
        .filter(|(id, _)| result.selected_provider.as_ref() != Some(*id))
        .collect();

    if !others.is_empty() {
        println!();
        println!("{}", "Other responses".bold());
        for (id, text) in others {
            println!();
            println!("--- {} ---", id.to_string().cyan());
            println!("{text}");
        }
    }
    println!();
}
