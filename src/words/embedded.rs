//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/general.rs"));
include!(concat!(env!("OUT_DIR"), "/animals.rs"));
include!(concat!(env!("OUT_DIR"), "/countries.rs"));
include!(concat!(env!("OUT_DIR"), "/programming.rs"));
include!(concat!(env!("OUT_DIR"), "/science.rs"));
