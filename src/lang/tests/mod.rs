use super::*;

mod token_test;
