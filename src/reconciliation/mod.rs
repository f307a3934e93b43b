pub(crate) mod config;
pub(crate) mod driver;
pub(crate) mod matcher;
pub(crate) mod report;
pub(crate) mod sorter;
