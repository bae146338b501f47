// Utils module - Utility functions

pub mod pagination;
