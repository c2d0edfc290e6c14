pub mod commands;
pub mod context;
pub mod output;

use clap::{Parser, Subcommand};

/// Upload images for server-side encryption and fetch the results back.
#[derive(Parser, Debug)]
#[command(name = "pixlock", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the pixlock service
    #[arg(long, global = true, env = "PIXLOCK_SERVER")]
    pub server: Option<String>,

    /// Upload timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show results and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to alternative config file
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload an image and save the encrypted package
    Encrypt {
        /// Image to encrypt (JPEG, PNG, GIF, BMP or TIFF)
        file: String,

        /// Where to save the package (default: encrypted_package.zip)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Upload an encrypted package and save the decrypted image
    Decrypt {
        /// Package to decrypt (ZIP produced by 'pixlock encrypt')
        file: String,

        /// Where to save the image (default: derived from the server reply)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show file details and whether each flow would accept the file
    Inspect {
        /// File to inspect
        file: String,
    },

    /// Probe the service and report its health
    Status {
        /// Keep probing on a fixed interval until interrupted
        #[arg(long)]
        watch: bool,

        /// Seconds between probes (default: from config, 30)
        #[arg(long)]
        interval: Option<u64>,
    },
}
