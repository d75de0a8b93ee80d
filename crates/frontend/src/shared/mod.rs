pub mod aria;
pub mod dom;
pub mod error;
pub mod events;

#[cfg(test)]
pub mod testing;
