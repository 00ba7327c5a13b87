mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{randomize, scene_load, scene_save, LoadArgs, RandomizeArgs, SaveArgs};
use ghcs_io::Endian;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Endianness a scene can be written in; maps onto the header's
/// endian tag (1 = little, 2 = big).
#[derive(ValueEnum, Clone, Copy, Debug)]
enum EndianArg {
    Little,
    Big,
    Native,
}

impl From<EndianArg> for Endian {
    fn from(value: EndianArg) -> Self {
        match value {
            EndianArg::Little => Endian::Little,
            EndianArg::Big => Endian::Big,
            EndianArg::Native => Endian::Native,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a GHCS scene and re-save it, optionally under a different
    /// endian mode.
    Save {
        /// The GHCS scene to load
        #[arg(short, long)]
        scene_path: PathBuf,

        /// Where to write the re-saved scene
        #[arg(short, long)]
        out_path: PathBuf,

        /// Endian mode for the saved file
        #[arg(short, long, value_enum, default_value_t = EndianArg::Native)]
        endian: EndianArg,
    },
    /// Load a GHCS scene and print a summary of its contents
    Load {
        /// The GHCS scene to load
        #[arg(short, long)]
        path: PathBuf,
    },
    /// Generate a scene of random convex polygons and write it as GHCS
    Randomize {
        /// Number of polygons to generate
        #[arg(short, long, default_value_t = 64)]
        count: usize,

        /// World width
        #[arg(long, default_value_t = 300.0)]
        width: f32,

        /// World height
        #[arg(long, default_value_t = 150.0)]
        height: f32,

        /// Where to write the generated scene
        #[arg(short, long)]
        out_path: PathBuf,

        /// Endian mode for the saved file
        #[arg(short, long, value_enum, default_value_t = EndianArg::Native)]
        endian: EndianArg,
    },
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let result = match args.command {
        Commands::Save {
            scene_path,
            out_path,
            endian,
        } => scene_save(SaveArgs {
            scene_path: &scene_path,
            out_path: &out_path,
            endian: endian.into(),
        }),
        Commands::Load { path } => scene_load(LoadArgs { path: &path }),
        Commands::Randomize {
            count,
            width,
            height,
            out_path,
            endian,
        } => randomize(RandomizeArgs {
            count,
            width,
            height,
            out_path: &out_path,
            endian: endian.into(),
        }),
    };

    if let Err(err) = result {
        log::error!("{err}");
        std::process::exit(err.exit_code() as i32);
    }
}
