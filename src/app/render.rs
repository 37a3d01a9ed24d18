//! Human-readable report rendering for the terminal.

use console::style;

use namegauge::engine::{ComparisonResult, EvaluationResult};
use namegauge::links::NextStepLinks;

pub fn single(report: &EvaluationResult, links: Option<&NextStepLinks>) {
    heading(&report.normalized_name);
    judgments(report);

    if let Some(links) = links {
        println!();
        link_block(links);
    }
}

pub fn compare(result: &ComparisonResult, links: Option<&NextStepLinks>) {
    heading(&result.a.normalized_name);
    judgments(&result.a);
    println!();

    heading(&result.b.normalized_name);
    judgments(&result.b);
    println!();

    println!("{}", style("Comparison").bold());
    println!("  {}", result.comparison_summary);
    println!(
        "  Preferred: {}",
        style(&result.preferred_name).bold().green()
    );

    if let Some(links) = links {
        println!();
        link_block(links);
    }
}

fn heading(name: &str) {
    println!("{}", style(name).bold().underlined());
}

fn judgments(report: &EvaluationResult) {
    field("Memorability", &report.memorability);
    field("Clarity", &report.clarity);
    field("Practical", &report.practical);
    println!("  {}", style(&report.gutcheck).italic());
}

fn field(label: &str, text: &str) {
    println!("  {} {}", style(format!("{label}:")).cyan(), text);
}

fn link_block(links: &NextStepLinks) {
    println!("{}", style("Next steps").bold());
    println!("  Domain search:    {}", links.domain);
    println!("  Landing page:     {}", links.landing_page);
    println!("  Logo tool:        {}", links.logo);
    println!("  Trademark search: {}", links.trademark);
}
