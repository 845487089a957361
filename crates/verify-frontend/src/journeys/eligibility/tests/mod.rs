mod classifier;
mod common;
mod form;
