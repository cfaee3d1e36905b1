pub mod thai;
