use gl_generator::{Api, Fallbacks, Profile, Registry, StructGenerator};
use std::env;
use std::fs::File;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let mut file = File::create(&Path::new(&out_dir).join("gl_bindings.rs")).unwrap();

    // core 4.6 holds every token of the limits registry
    Registry::new(
        Api::Gl,
        (4, 6),
        Profile::Core,
        Fallbacks::All,
        ["GL_EXT_texture_filter_anisotropic"],
    )
    .write_bindings(StructGenerator, &mut file)
    .unwrap();
}
