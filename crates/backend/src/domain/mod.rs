pub mod a001_product;
pub mod a002_production;
pub mod a003_production_loss;
