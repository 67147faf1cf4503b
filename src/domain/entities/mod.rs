pub mod backtest;
pub mod document;
pub mod exit_signal;
pub mod holding;
pub mod navigation;
pub mod selection;
pub mod strategy;
pub mod timing;
pub mod view;
