pub mod summary;

pub use summary::CountCardsSection;
