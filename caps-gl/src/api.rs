#![allow(non_upper_case_globals, non_camel_case_types, non_snake_case, dead_code, unused_imports)]
#![allow(clippy::all)]
include!(concat!(env!("OUT_DIR"), "/gl_bindings.rs"));
