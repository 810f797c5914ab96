//! PDA Lab walkthrough
//!
//! Steps the balanced-parentheses automaton one transition at a time, then
//! runs every shipped sample to completion.
//!
//! Run with: cargo run --example pda_lab

use pdalab::rules::RuleSet;
use pdalab::session::Lab;
use pdalab::StepResult;

fn main() {
    println!("=== PDA Lab ===\n");

    let mut lab = Lab::builder()
        .rule_set(RuleSet::BalancedParens)
        .input("(()")
        .build()
        .unwrap();

    println!("{}: {}", lab.rule_set().title(), lab.rule_set().description());
    println!("Input: {}\n", lab.input());

    loop {
        let result = lab.step();
        if let Some(record) = lab.config().trace().last() {
            println!("{record}");
        }
        if !matches!(result, StepResult::Advanced) {
            break;
        }
    }
    println!("Status: {}\n", lab.config().status());

    for rule_set in RuleSet::ALL {
        lab.switch_rule_set(rule_set);
        let accepted = lab.run();
        println!(
            "{:>8} {:<10} -> {} in {} steps",
            rule_set.name(),
            lab.input(),
            accepted.status,
            accepted.steps
        );

        lab.load_rejected_sample();
        let rejected = lab.run();
        println!(
            "{:>8} {:<10} -> {} ({})",
            rule_set.name(),
            lab.input(),
            rejected.status,
            lab.config().trace().last_note().unwrap_or("")
        );
    }

    let snapshot = lab.snapshot();
    println!("\nFinal snapshot: {}", snapshot.to_json().unwrap());

    println!("\n=== Example Complete ===");
}
