pub mod dashboard;
pub mod db;
pub mod errors;
pub mod producer;

#[cfg(test)]
mod tests;
