pub mod compare;
pub mod complement;
pub mod demo;
pub mod mutate;
pub mod populate;
pub mod survive;
