mod commands;
mod terminal;

use commands::{CommandLine, Commands, info, menu};
use clinic_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg: Config = commands.config();
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command.unwrap_or(Commands::Menu) {
        Commands::Info => {
            print::header("about the tool", cfg.quiet);
            info::info(&cfg)
        }
        Commands::Menu => {
            print::header("clinic records", cfg.quiet);
            menu::menu(&cfg)
        }
    }
}
