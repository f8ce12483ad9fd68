mod aggregation;
mod common;
