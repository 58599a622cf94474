mod common;
mod flow;
mod validation;
