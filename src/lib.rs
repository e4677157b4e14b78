/*
    Rule classifier library: modules
*/

#[macro_use]
extern crate custom_derive;
#[macro_use]
extern crate enum_derive;

pub mod classifier;
pub mod interface;
pub mod rule;
pub mod weekday;
