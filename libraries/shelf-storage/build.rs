//! Build script for shelf-storage.
//!
//! Rebuilds the crate when database migrations change, since they are embedded.

fn main() {
    println!("cargo:rerun-if-changed=migrations");
}
