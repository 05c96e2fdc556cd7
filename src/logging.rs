// Some of these macros are unused depending on how much instrumentation the
// current code carries. Which is fine. Just squash the warnings.
#![allow(unused_macros)]

macro_rules! error {
    ($($tt:tt)*) => { log::error!($($tt)*) }
}

macro_rules! warn {
    ($($tt:tt)*) => { log::warn!($($tt)*) }
}

macro_rules! info {
    ($($tt:tt)*) => { log::info!($($tt)*) }
}

macro_rules! debug {
    ($($tt:tt)*) => { log::debug!($($tt)*) }
}

macro_rules! trace {
    ($($tt:tt)*) => { log::trace!($($tt)*) }
}
