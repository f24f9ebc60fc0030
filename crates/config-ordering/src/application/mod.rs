pub mod orderer;

pub use orderer::DependencyOrderer;
