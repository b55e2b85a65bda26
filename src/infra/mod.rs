//! Инфраструктурный слой вокруг движка крэпса:
//! - источники костей для движка (rand / детерминированные / заскриптованные);
//! - маппинги между API и domain.

pub mod mapping;
pub mod rng;

pub use mapping::*;
pub use rng::*;
