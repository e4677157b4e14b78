/*
    Top-level module and entrypoint for the rule classifier project.
*/

use rule_classifier::interface::Classify;
use rule_classifier::weekday;

fn main() {
    println!("=== Rule Classifier ===");
    let days = weekday::day_classifier();
    for n in 0..=8 {
        let (kind, label) = days.classify_labeled(n);
        println!("day {}: {:?} ({})", n, kind, label);
    }
}
