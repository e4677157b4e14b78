/*
    Module implementing category rules: the ordered association between
    one category and the set of integer input values which select it.

    A rule owns its value set. Value sets across the rules of one table
    are disjoint by construction in the intended configurations; the
    overlap test below lets a caller check that once at startup rather
    than at classification time.
*/

pub struct CategoryRule<C> {
    category: C,
    values: Vec<i64>,
}

pub fn rule<C>(category: C, values: &[i64]) -> CategoryRule<C> {
    CategoryRule { category, values: values.to_vec() }
}

impl<C: Copy> CategoryRule<C> {
    pub fn category(&self) -> C {
        self.category
    }
    pub fn n_values(&self) -> usize {
        self.values.len()
    }
    pub fn matches(&self, input: i64) -> bool {
        self.values.contains(&input)
    }
    pub fn overlaps(&self, other: &Self) -> bool {
        self.values.iter().any(|v| other.matches(*v))
    }
}

/*
    Unit Tests
*/
