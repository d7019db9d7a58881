pub mod dialects;
pub mod generate;
pub mod ir;

#[cfg(test)]
mod ir_tests;
