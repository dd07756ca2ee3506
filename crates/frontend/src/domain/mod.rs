pub mod a003_production_loss;
