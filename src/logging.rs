//! Logging abstraction
//!
//! Crate-internal logging macros that work across targets:
//! - `defmt` feature: forwards to `defmt`
//! - Host unit tests: prints with `println!`
//! - Otherwise: compiles to nothing

macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "defmt", not(test)))]
        ::defmt::info!($($arg)*);

        #[cfg(test)]
        println!("[INFO] {}", format!($($arg)*));
    }};
}

macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "defmt", not(test)))]
        ::defmt::warn!($($arg)*);

        #[cfg(test)]
        println!("[WARN] {}", format!($($arg)*));
    }};
}

macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "defmt", not(test)))]
        ::defmt::debug!($($arg)*);

        #[cfg(test)]
        println!("[DEBUG] {}", format!($($arg)*));
    }};
}

macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "defmt", not(test)))]
        ::defmt::trace!($($arg)*);

        #[cfg(test)]
        println!("[TRACE] {}", format!($($arg)*));
    }};
}
