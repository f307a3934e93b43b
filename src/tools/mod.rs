use std::fmt::Debug;

pub mod date;
pub mod error;
pub mod web;

/// Case-fold and trim a value before comparing it with roster data.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

pub fn log_message_and_return<E: Debug, T>(
    message: &str,
    value_to_return: T,
) -> impl FnOnce(E) -> T {
    move |e| {
        error!("{message}\n{e:#?}");
        value_to_return
    }
}
