use clap::Parser;
use daylog::application::{
    ConfigService, CreateEntryService, ReviseEntryService, ValidateEntryService,
};
use daylog::cli::{format_entry, format_field_list, Cli, Commands};
use daylog::domain::{Entry, EntryCreate};
use daylog::error::DaylogError;
use daylog::infrastructure::{read_json, Config};
use daylog::logging::init_logging;

fn main() {
    init_logging();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), DaylogError> {
    let config_path = Config::locate(cli.config.as_deref());

    match cli.command {
        Commands::New {
            work,
            struggle,
            intention,
            id,
            created_at,
            updated_at,
        } => {
            let config = Config::load(&config_path)?;

            let mut builder =
                Entry::builder(work, struggle, intention).timestamps(config.timestamps);
            if let Some(id) = id {
                builder = builder.id(id);
            }
            if let Some(created_at) = created_at {
                builder = builder.created_at(created_at);
            }
            if let Some(updated_at) = updated_at {
                builder = builder.updated_at(updated_at);
            }

            let entry = builder.build()?;
            println!("{}", format_entry(&entry, config.output)?);
            Ok(())
        }
        Commands::Create { file } => {
            let config = Config::load(&config_path)?;
            let value = read_json(file.as_deref())?;

            let entry = CreateEntryService::new(&config).execute_value(&value)?;
            println!("{}", format_entry(&entry, config.output)?);
            Ok(())
        }
        Commands::Validate { file } => {
            let config = Config::load(&config_path)?;
            let value = read_json(file.as_deref())?;

            let entry = ValidateEntryService::new(&config).execute(&value)?;
            println!("{}", format_entry(&entry, config.output)?);
            Ok(())
        }
        Commands::Revise { entry, changes } => {
            let config = Config::load(&config_path)?;
            let entry = Entry::from_value(&read_json(Some(entry.as_path()))?)?;
            let changes = EntryCreate::from_value(&read_json(changes.as_deref())?)?;

            let revised = ReviseEntryService::execute(&entry, &changes)?;
            println!("{}", format_entry(&revised, config.output)?);
            Ok(())
        }
        Commands::Fields => {
            print!("{}", format_field_list());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(config_path);

            if list {
                let config = service.list()?;
                println!("output = {}", format!("{:?}", config.output).to_lowercase());
                println!(
                    "timestamps = {}",
                    format!("{:?}", config.timestamps).to_lowercase()
                );
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: daylog config [--list | <key> [<value>]]");
                println!("Valid keys: output, timestamps");
                Ok(())
            }
        }
    }
}
