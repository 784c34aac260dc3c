pub mod analysis;
pub mod charts;
pub mod health;
pub mod overview;
pub mod recommendations;
pub mod stocks;
pub mod training;
