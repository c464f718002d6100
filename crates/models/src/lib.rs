pub mod db;
pub mod errors;
pub mod inventory;

#[cfg(test)]
mod tests;
