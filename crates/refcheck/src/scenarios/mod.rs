//! The fixed scenario catalogue
//!
//! Each scenario is a small, literal micro-protocol over [`ReferenceCell`]:
//! declare, assign, alias, mutate, then assert what every handle observes.
//! Scenarios build their own cells and share nothing with each other.
//!
//! [`ReferenceCell`]: crate::ReferenceCell

mod access;
mod calls;
mod declarations;

use indexmap::IndexMap;

use crate::runner::ScenarioDef;

/// Prelude smoke scenario, run before the catalogue.
pub const INIT: ScenarioDef = ScenarioDef::new(
    "init",
    "bind pointers to fresh variables before the suite starts",
    declarations::init,
);

/// The catalogue, in execution order.
pub const SCENARIOS: [ScenarioDef; 10] = [
    ScenarioDef::new(
        "valueNil",
        "a declared pointer is nil until assigned",
        declarations::value_nil,
    ),
    ScenarioDef::new(
        "declaration",
        "assigning a pointer binds it to the same cell",
        declarations::declaration,
    ),
    ScenarioDef::new(
        "showAddress",
        "cells of several types can be built and their addresses shown",
        declarations::show_address,
    ),
    ScenarioDef::new(
        "access_1",
        "reads through a pointer match the pointee; plain copies stay put",
        access::access_1,
    ),
    ScenarioDef::new(
        "access_2",
        "increments through an alias advance x 3 -> 4 -> 5",
        access::access_2,
    ),
    ScenarioDef::new(
        "allocation",
        "sum 0..10 into a plain variable, store its double in a fresh cell",
        access::allocation,
    ),
    ScenarioDef::new(
        "parameterByValue",
        "a callee mutating its copy leaves the caller untouched",
        calls::parameter_by_value,
    ),
    ScenarioDef::new(
        "byReference_1",
        "a callee mutating through a pointer updates the caller",
        calls::by_reference_1,
    ),
    ScenarioDef::new(
        "byReference_2",
        "a callee adds an increment through a pointer on each call",
        calls::by_reference_2,
    ),
    ScenarioDef::new(
        "byReference_3",
        "a closure writes a captured cell; another alias sees it",
        calls::by_reference_3,
    ),
];

/// The catalogue keyed by name, in execution order.
pub fn catalogue() -> IndexMap<&'static str, ScenarioDef> {
    SCENARIOS.iter().map(|def| (def.name, *def)).collect()
}

/// Find a scenario (catalogue or prelude) by name.
pub fn find(name: &str) -> Option<ScenarioDef> {
    if name == INIT.name {
        return Some(INIT);
    }
    SCENARIOS.iter().find(|def| def.name == name).copied()
}
