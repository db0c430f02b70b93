//! Build metadata baked in at compile time, shown in the menu footer.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));
