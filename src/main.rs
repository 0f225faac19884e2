use clap::Parser;
use sigtag::application::{BatchService, FieldRequest, FieldTagService};
use sigtag::cli::{format_tag_list, format_validator_list, Cli, Commands};
use sigtag::domain::tag::EmailTag;
use sigtag::domain::DataValidator;
use sigtag::error::SigtagError;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), SigtagError> {
    match cli.command {
        Commands::Field {
            field_type,
            role,
            width,
            height,
            required,
            label,
            options,
            file,
            validator,
        } => {
            let request = FieldRequest {
                field_type,
                required,
                role,
                label,
                options,
                file,
                width,
                height,
                validator,
            };
            let tag = FieldTagService::execute(&request)?;
            println!("{}", tag);
            Ok(())
        }
        Commands::Email { role, email, order } => {
            let tag = EmailTag::new(role, email).with_order(order).encode()?;
            println!("{}", tag);
            Ok(())
        }
        Commands::Batch { path } => {
            let tags = BatchService::execute(&path)?;
            print!("{}", format_tag_list(&tags));
            Ok(())
        }
        Commands::Validators => {
            print!("{}", format_validator_list(&DataValidator::ALL));
            Ok(())
        }
    }
}
