// Error handling macros
// Shorthand for returning and building reasons

/// Bail early with an error built from a message
#[macro_export]
macro_rules! bail {
    ($message:expr) => {
        return Err($crate::Error::new($message).into())
    };
}

/// Return early with an error if a condition is not satisfied
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $message:expr) => {
        if !($cond) {
            $crate::bail!($message);
        }
    };
}

/// Create an exceptional error from anything convertible into a native error
#[macro_export]
macro_rules! exceptional {
    ($exception:expr) => {
        $crate::ExceptionalError::from_exception($crate::IntoNativeError::into_native_error($exception))
    };
    ($message:expr, $exception:expr) => {
        $crate::ExceptionalError::new($message, $crate::IntoNativeError::into_native_error($exception))
    };
}
