//! Build script - embeds the git commit hash into dev builds.
//!
//! Without the `release` feature (default dev builds) the `VERGEN_GIT_SHA`
//! environment variable carries the commit hash; official builds set
//! `--features release` and get a clean version string.

fn main() {
    #[cfg(not(feature = "release"))]
    {
        use vergen_gitcl::{Emitter, GitclBuilder};

        let git = GitclBuilder::default()
            .sha(true)
            .build()
            .expect("Failed to configure git info");

        if let Err(e) = Emitter::default()
            .add_instructions(&git)
            .expect("Failed to add git instructions")
            .emit()
        {
            // Outside a git checkout (e.g. a crates.io build) fall back to a marker
            eprintln!("cargo:warning=Failed to get git info: {}", e);
            println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
        }
    }

    #[cfg(feature = "release")]
    {
        // Official release builds carry no git suffix
    }
}
