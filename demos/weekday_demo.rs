/*
    A basic demo of the weekday classifier.
*/

use rule_classifier::interface::Classify;
use rule_classifier::weekday::{self, DayKind};

fn main() {
    let days = weekday::day_classifier();

    assert_eq!(days.classify(3), DayKind::WorkDay);
    assert_eq!(days.classify(7), DayKind::WeekendDay);
    assert_eq!(days.classify(42), DayKind::Invalid);

    for n in &[3, 7, 42] {
        let (_, label) = days.classify_labeled(*n);
        println!("{}", label);
    }
}
