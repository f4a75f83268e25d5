pub mod planet;
pub mod welcome;
