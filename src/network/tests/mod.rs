#[cfg(test)]
mod client;
#[cfg(test)]
pub(crate) mod mocks;
