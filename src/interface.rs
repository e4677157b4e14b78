/*
    Interface for classifier implementations.
*/

use std::fmt::Display;
use std::iter;

/*
    A classifier is a pure, total function from integer inputs to a
    fixed set of categories. Unmatched input is not an error: it maps
    to the implementation's default category, so classification has no
    failure mode at call time and no side effects. Implementations are
    read-only after construction, so one classifier may be shared by
    any number of callers.
*/
pub trait Classify {
    /* TYPES */

    // Classification outcome
    type Category: Copy;

    /* FUNCTIONALITY TO IMPLEMENT */

    fn classify(&self, input: i64) -> Self::Category;

    // Static information about the rule table
    fn default_category(&self) -> Self::Category;
    fn n_rules(&self) -> usize;

    /* DERIVED FUNCTIONALITY */

    // Classification together with the category's human-readable label.
    // Printing the label (or not) is the caller's concern.
    fn classify_labeled(&self, input: i64) -> (Self::Category, String)
    where
        Self::Category: Display,
    {
        let category = self.classify(input);
        let label = category.to_string();
        (category, label)
    }

    // Classify a stream of inputs item by item
    fn classify_stream<'a, I>(
        &'a self,
        mut strm: I,
    ) -> Box<dyn Iterator<Item = Self::Category> + 'a>
    // Sad output type because 'impl Iterator' is not allowed here :(
    where
        I: 'a + Iterator<Item = i64>,
        Self::Category: 'a,
        Self: Sized,
    {
        Box::new(iter::from_fn(move || {
            strm.next().map(|input| self.classify(input))
        }))
    }
}
