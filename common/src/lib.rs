/// Prints a diagnostic line to stderr, but only in debug builds.
///
/// stdout belongs to the robot's output, so diagnostics never go there.
#[macro_export]
macro_rules! debug {
    ($str: expr) => {
        #[cfg(debug_assertions)]
        {
            eprintln!(concat!("[debug] ", $str))
        }
    };
    ($str: expr, $($rest: expr),+) => {
        #[cfg(debug_assertions)]
        {
            eprintln!(concat!("[debug] ", $str), $($rest),+)
        }
    };
}

/// Prints a warning to stderr in every build profile.
#[macro_export]
macro_rules! warn {
    ($str: expr) => {
        eprintln!(concat!("warning: ", $str))
    };
    ($str: expr, $($rest: expr),+) => {
        eprintln!(concat!("warning: ", $str), $($rest),+)
    };
}
