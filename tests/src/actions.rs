//! Step actions.
//!
//! Each constructor captures its arguments and returns the closure a
//! [`Scenario`](crate::Scenario) step runs against its tree.

use nattr::{AsPath, Fallback, Map, Mutator, Value};

use crate::assertion::StepResult;

pub fn set<P>(
    path: P,
    value: impl Into<Value>,
    make_missing: bool,
) -> impl FnOnce(&mut Value) -> StepResult
where
    P: AsPath + 'static,
{
    let value = value.into();
    move |tree| nattr::set(tree, &path, value, make_missing)
}

pub fn mutate<P>(
    path: P,
    mutator: Mutator<'static, Value>,
    getter_default: impl Into<Fallback<Value>>,
    make_missing: bool,
) -> impl FnOnce(&mut Value) -> StepResult
where
    P: AsPath + 'static,
{
    let getter_default = getter_default.into();
    move |tree| nattr::mutate(tree, &path, mutator, getter_default, make_missing)
}

pub fn update<P>(path: P, update: Map) -> impl FnOnce(&mut Value) -> StepResult
where
    P: AsPath + 'static,
{
    move |tree| nattr::update(tree, &path, update)
}

pub fn delete<P>(path: P, allow_missing: bool) -> impl FnOnce(&mut Value) -> StepResult
where
    P: AsPath + 'static,
{
    move |tree| nattr::delete(tree, &path, allow_missing)
}
