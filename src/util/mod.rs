//! Shared helpers. Currently only test fixtures.

#[cfg(test)]
pub(crate) mod test;
