/// A wrapper for println that is enabled
/// only when debug is enabled.
#[macro_export]
macro_rules! rakping_debug {
    ($heavy: ident, $($t: tt)*) => {
        if cfg!(feature="debug") && cfg!(feature="debug_all") {
            println!("[rak-ping] DBG! {}", format!($($t)*));
        }
    };
    ($($t: tt)*) => {
        if cfg!(feature="debug") {
            println!("[rak-ping] DBG! {}", format!($($t)*));
        }
    };
}

/// Dumps raw datagrams, only compiled in with `debug_buffers`.
#[macro_export]
macro_rules! rakping_debug_buffers {
    ($direction: literal, $($t: tt)*) => {
        if cfg!(feature="debug_buffers") {
            println!("[rak-ping] BUF! {} {}", $direction, format!($($t)*));
        }
    };
}
