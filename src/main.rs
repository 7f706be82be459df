use btpack::cli::{pack_file, show_info, unpack_file, PackOptions, UnpackOptions};
use btpack::config::{parse_salt_hex, Config};
use btpack::error::Result;
use btpack::pipeline::kdf::SALT_LEN;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("BTPACK_VERSION");
const BUILD: &str = env!("BTPACK_BUILD");
const PROFILE: &str = env!("BTPACK_PROFILE");
const GIT_HASH: &str = env!("BTPACK_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH)
    })
}

#[derive(Parser)]
#[command(name = "btpack")]
#[command(author, about = "BT1 encrypted container format", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a file into a BT1 container
    #[command(alias = "p")]
    Pack {
        /// Password for key derivation
        #[arg(long)]
        password: Option<String>,

        /// Hex-encoded 16-byte salt override (random salt when omitted)
        #[arg(long)]
        salt: Option<String>,

        /// Configuration file supplying password/salt defaults
        #[arg(long)]
        config: Option<PathBuf>,

        /// Input file to pack
        input: PathBuf,

        /// Output container (defaults to <input>.bt1)
        output: Option<PathBuf>,
    },

    /// Unpack a BT1 container
    #[command(alias = "u")]
    Unpack {
        /// Password for key derivation
        #[arg(long)]
        password: Option<String>,

        /// Configuration file supplying the password default
        #[arg(long)]
        config: Option<PathBuf>,

        /// Input container
        input: PathBuf,

        /// Output directory for the recovered file
        #[arg(default_value = ".")]
        output_dir: PathBuf,
    },

    /// Show metadata of a BT1 container
    #[command(alias = "i")]
    Info {
        /// Container to inspect
        file: PathBuf,
    },
}

/// Resolve password and salt from explicit flags and the optional config
/// file. Explicit flags win; the config file fills the gaps.
fn resolve_credentials(
    password: Option<String>,
    salt: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<(String, Option<[u8; SALT_LEN]>)> {
    let config = match config_path {
        Some(path) => Some(Config::load(&path)?),
        None => None,
    };

    let password = password
        .or_else(|| config.as_ref().map(|c| c.password.clone()))
        .unwrap_or_else(|| Config::default().password);

    let salt = match salt {
        Some(hex) => Some(parse_salt_hex(&hex)?),
        None => match &config {
            Some(config) => config.salt_bytes()?,
            None => None,
        },
    };

    Ok((password, salt))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("btpack {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Pack {
            password,
            salt,
            config,
            input,
            output,
        } => resolve_credentials(password, salt, config).and_then(|(password, salt)| {
            let output = output.unwrap_or_else(|| {
                let mut os = input.as_os_str().to_os_string();
                os.push(".bt1");
                PathBuf::from(os)
            });
            let options = PackOptions { password, salt };
            let written = pack_file(&input, &output, &options)?;
            println!("Packed {} ({} bytes)", output.display(), written);
            Ok(())
        }),

        Commands::Unpack {
            password,
            config,
            input,
            output_dir,
        } => resolve_credentials(password, None, config).and_then(|(password, _)| {
            let options = UnpackOptions { password };
            let written = unpack_file(&input, &output_dir, &options)?;
            println!("Unpacked to {}", written.display());
            Ok(())
        }),

        Commands::Info { file } => show_info(&file).map(|info| {
            print!("{}", info);
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
