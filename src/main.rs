use clap::Parser;
use thumbgen::imaging::RustBackend;
use thumbgen::pipeline;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "thumbgen")]
#[command(about = "Create resized JPEG thumbnails for a directory of images")]
#[command(long_about = "\
Create resized JPEG thumbnails for a directory of images

Everything is asked interactively:

  1. Path to the image directory
  2. Thumbnail size of the longest edge, in pixels
  3. Whether to reuse the output directory, if it already exists

Files ending in .jpg .jpeg .png .bmp .tif .tiff .gif or .eps (any case) are
converted. Results go next to the originals:

  photos/
  ├── beach.PNG
  └── thumbnails_150px/
      └── beach_150px.jpg          # longer edge ≤ 150px, JPEG quality 95")]
#[command(version = version_string())]
struct Cli {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    Cli::parse();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    // Every outcome, including an early stop, exits 0
    pipeline::run(&RustBackend::new(), &mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
