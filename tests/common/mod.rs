pub mod fake_generator;
pub mod synthetic;
