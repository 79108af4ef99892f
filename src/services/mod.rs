pub mod enrichment;
pub mod fetch;
pub mod finder;
pub mod merge;
pub mod session;

#[cfg(test)]
pub mod fixtures;
