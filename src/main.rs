use autoshop::cli::{Cli, Commands};
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    autoshop::core::logging::init(global.verbose);

    match cli.command {
        Commands::Init(args) => autoshop::cli::commands::init::run(args, &global),
        Commands::Product(cmd) => autoshop::cli::commands::product::run(cmd, &global),
        Commands::Search(args) => autoshop::cli::commands::search::run(args, &global),
        Commands::Import(args) => autoshop::cli::commands::import::run(args, &global),
        Commands::Export(args) => autoshop::cli::commands::export::run(args, &global),
        Commands::Status(args) => autoshop::cli::commands::status::run(args, &global),
        Commands::Config(cmd) => autoshop::cli::commands::config::run(cmd, &global),
        Commands::Completions(args) => autoshop::cli::commands::completions::run(args),
    }
}
