//! Общие типы и трейты для всех агрегатов

pub mod aggregate_root;

pub use aggregate_root::AggregateRoot;
