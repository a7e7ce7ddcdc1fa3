//! End-to-end scenarios against the public API of `clinic-core`.

#[cfg(test)]
mod fixtures;
mod history;
mod scheduling;
