//! Error macros for rota

/// Macro for rejecting a malformed edge record
#[macro_export]
macro_rules! bail_malformed {
    ($record:expr, $($arg:tt)+) => {
        return Err($crate::error::RotaError::malformed($record, format!($($arg)+)))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::RotaError::UsageError($msg.to_string()))
    };
}
